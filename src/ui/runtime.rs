use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;
use tracing::info;

use crate::config::Config;
use crate::diag::DiagLogger;
use crate::shutdown::ShutdownFlag;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: &Config, shutdown: ShutdownFlag, diag: Arc<DiagLogger>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let mut app = App::new(config.counter.initial, diag);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    info!(initial = config.counter.initial, "ui started");

    loop {
        // Redraw only when some dispatch or resize changed the frame;
        // ticks and no-op inputs leave the terminal untouched.
        if app.take_dirty() {
            terminal.draw(|frame| draw(frame, &app))?;
            app.diag().log("counter panel rendered", 1, None);
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                handle_mouse(&mut app, mouse, area);
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => app.on_resize(),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the event thread on the way out.
    shutdown.signal();
    info!("ui stopped");
    drop(guard);
    Ok(())
}
