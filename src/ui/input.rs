use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::ui::app::App;
use crate::ui::button::{DECREMENT_BUTTON, INCREMENT_BUTTON};
use crate::ui::configure::ConfigureIntent;
use crate::ui::counter::CounterIntent;
use crate::ui::layout::{counter_layout, layout_regions};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // The dialog is modal: while visible it captures every key, so the
    // quit and counter bindings go inert until it closes.
    if app.configure_open() {
        match key.code {
            KeyCode::Esc => app.dispatch_configure(ConfigureIntent::Cancel),
            KeyCode::Enter => app.dispatch_configure(ConfigureIntent::Submit),
            KeyCode::Backspace => app.dispatch_configure(ConfigureIntent::Backspace),
            KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                app.dispatch_configure(ConfigureIntent::Input(ch));
            }
            _ => {}
        }
        return;
    }

    if is_quit(key) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('c') => app.dispatch_configure(ConfigureIntent::Open),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
            app.dispatch_counter(CounterIntent::Increment);
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left | KeyCode::Down => {
            app.dispatch_counter(CounterIntent::Decrement);
        }
        _ => {}
    }
}

/// Left clicks activate whichever button rect contains the position.
///
/// The hit-test map is the same pure layout the renderer draws from, so
/// clicks and pixels can never disagree.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    if app.configure_open() {
        return;
    }

    let (_, body, _) = layout_regions(area);
    let layout = counter_layout(body);
    let position = Position::new(mouse.column, mouse.row);

    if layout.decrement.contains(position) {
        app.dispatch_counter(DECREMENT_BUTTON.intent);
    } else if layout.increment.contains(position) {
        app.dispatch_counter(INCREMENT_BUTTON.intent);
    }
}

fn is_quit(key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Char('q')) && key.modifiers.is_empty() {
        return true;
    }
    is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c')
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
