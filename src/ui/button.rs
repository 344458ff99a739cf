//! Icon buttons for the counter row.
//!
//! A button is a `const` value binding a glyph, a label, and the intent
//! it dispatches. Handler identity is the intent itself, so activation
//! paths (keyboard, mouse) share one stable object per button and no
//! closures are rebuilt per frame.

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::counter::CounterIntent;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconButton {
    pub glyph: char,
    pub label: &'static str,
    pub intent: CounterIntent,
}

pub const DECREMENT_BUTTON: IconButton = IconButton {
    glyph: '-',
    label: "Decrement",
    intent: CounterIntent::Decrement,
};

pub const INCREMENT_BUTTON: IconButton = IconButton {
    glyph: '+',
    label: "Increment",
    intent: CounterIntent::Increment,
};

impl IconButton {
    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled(format!("[{}] ", self.glyph), Style::default().fg(ACCENT)),
            Span::styled(self.label, Style::default().fg(HEADER_TEXT)),
        ]);
        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_bind_their_intents() {
        assert_eq!(DECREMENT_BUTTON.intent, CounterIntent::Decrement);
        assert_eq!(INCREMENT_BUTTON.intent, CounterIntent::Increment);
        assert_eq!(DECREMENT_BUTTON.label, "Decrement");
        assert_eq!(INCREMENT_BUTTON.label, "Increment");
    }
}
