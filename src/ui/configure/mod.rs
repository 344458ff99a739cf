mod intent;
mod reducer;
mod state;

pub use intent::ConfigureIntent;
pub use reducer::ConfigureReducer;
pub use state::{ConfigureDialogState, MAX_INPUT_LEN};
