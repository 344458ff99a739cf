use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one button cell, borders included.
pub const BUTTON_WIDTH: u16 = 17;
/// Width of the value cell between the buttons; fits any `i64`.
pub const OUTPUT_WIDTH: u16 = 22;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Rects for the counter panel inside the body region.
///
/// Doubles as the mouse hit-test map: click handling tests positions
/// against `decrement` and `increment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    pub info: Rect,
    pub decrement: Rect,
    pub output: Rect,
    pub increment: Rect,
}

pub fn counter_layout(body: Rect) -> CounterLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(OUTPUT_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Fill(1),
        ])
        .split(rows[3]);

    CounterLayout {
        info: rows[1],
        decrement: columns[1],
        output: columns[2],
        increment: columns[3],
    }
}

pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
