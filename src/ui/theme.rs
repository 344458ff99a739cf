use ratatui::style::Color;

/// App title, button glyphs, and the live counter value.
pub const ACCENT: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
/// Panel border chrome.
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
/// Base foreground for text.
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
/// Separator glyphs in the header line.
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
/// Configure-popup border, brighter than the panel chrome behind it.
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
/// The "is a prime number" verdict.
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
/// The "is not a prime number" verdict and dialog input errors.
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
