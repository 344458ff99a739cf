//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use primetally::config::DiagConfig;
use primetally::diag::DiagLogger;
use primetally::ui::app::App;
use primetally::ui::render::draw;

/// A logger that discards everything; tests never want sink IO.
pub fn silent_diag() -> Arc<DiagLogger> {
    Arc::new(DiagLogger::new(DiagConfig {
        level: 0,
        ..DiagConfig::default()
    }))
}

pub fn test_app(initial: i64) -> App {
    App::new(initial, silent_diag())
}

/// Renders the app into a fresh in-memory terminal and returns the
/// frame as plain text, one row per line.
pub fn render_text(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
