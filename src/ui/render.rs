use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::button::{DECREMENT_BUTTON, INCREMENT_BUTTON};
use crate::ui::configure::ConfigureDialogState;
use crate::ui::counter::CounterState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, counter_layout, layout_regions};
use crate::ui::output::CounterOutput;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    draw_counter(frame, app, body);
    frame.render_widget(Footer::new().widget(footer), footer);

    if let ConfigureDialogState::Visible { buffer, error } = app.configure() {
        draw_configure_dialog(frame, buffer, error.as_deref(), area);
    }
}

fn draw_counter(frame: &mut Frame<'_>, app: &App, body: ratatui::layout::Rect) {
    let layout = counter_layout(body);

    frame.render_widget(info_line(app.counter()), layout.info);
    frame.render_widget(DECREMENT_BUTTON.widget(), layout.decrement);
    frame.render_widget(
        CounterOutput::new(app.counter().value).widget(),
        layout.output,
    );
    frame.render_widget(INCREMENT_BUTTON.widget(), layout.increment);
}

/// "The initial counter value was N. It is (not) a prime number."
///
/// Always phrased against the mount-time value; the live counter never
/// feeds this line.
fn info_line(counter: &CounterState) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let (verdict, verdict_color) = if counter.initial_is_prime {
        ("is a", STATUS_OK)
    } else {
        ("is not a", STATUS_ERROR)
    };

    let line = Line::from(vec![
        Span::styled("The initial counter value was ", text_style),
        Span::styled(
            counter.initial.to_string(),
            text_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(". It ", text_style),
        Span::styled(
            verdict,
            Style::default().fg(verdict_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" prime number.", text_style),
    ]);

    Paragraph::new(line).alignment(Alignment::Center)
}

fn draw_configure_dialog(
    frame: &mut Frame<'_>,
    buffer: &str,
    error: Option<&str>,
    area: ratatui::layout::Rect,
) {
    let dialog = centered_rect_by_size(44, 7, area);
    frame.render_widget(Clear, dialog);

    let text_style = Style::default().fg(HEADER_TEXT);
    let status_line = match error {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(STATUS_ERROR))),
        None => Line::from(Span::styled(
            "Enter: set │ Esc: cancel",
            text_style.add_modifier(Modifier::DIM),
        )),
    };

    let lines = vec![
        Line::from(Span::styled("New initial value:", text_style)),
        Line::from(vec![
            Span::styled("> ", text_style),
            Span::styled(buffer.to_string(), text_style.add_modifier(Modifier::BOLD)),
            Span::styled("_", text_style.add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(""),
        status_line,
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Configure counter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(widget, dialog);
}
