pub mod app;
pub mod button;
pub mod configure;
pub mod counter;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod output;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
