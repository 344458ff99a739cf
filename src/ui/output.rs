//! The value readout between the two buttons.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::ACCENT;

/// Pure display of the live counter value; no state, no side effects.
pub struct CounterOutput {
    value: i64,
}

impl CounterOutput {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let value = Span::styled(
            self.value.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        );
        // Leading blank line drops the value onto the middle row of the
        // three-row button band.
        Paragraph::new(vec![Line::from(""), Line::from(value)]).alignment(Alignment::Center)
    }
}
