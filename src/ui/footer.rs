use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key bindings surfaced to the user, in display order.
const KEY_HINTS: &[(&str, &str)] = &[
    ("+/-", "Count"),
    ("Click", "Count"),
    ("c", "Configure"),
    ("q", "Quit"),
];

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(ACCENT);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(" ", text_style)];
        for (i, (keys, action)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", text_style));
            }
            spans.push(Span::styled(*keys, key_style));
            spans.push(Span::styled(format!(": {}", action), text_style));
        }

        // Right-align the version by padding with the leftover width,
        // counted in chars rather than bytes for the │ separators.
        let version = format!("v{} ", VERSION);
        let hints_width: usize = spans
            .iter()
            .map(|span| span.content.chars().count())
            .sum();
        let inner_width = area.width.saturating_sub(2) as usize;
        let gap = inner_width
            .saturating_sub(hints_width)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(gap), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
