use crate::app::{App, NotificationKind, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
    Frame,
};

mod add_task_view;
mod delete_dialog;
mod tasks_view;
mod timer_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header: throbber, title, notification
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Tasks => tasks_view::render_tasks_view(frame, app, body),
        View::Timer => timer_view::render_timer_view(frame, app, body),
        View::AddTask => {
            // The form opens as a dialog over the task list.
            tasks_view::render_tasks_view(frame, app, body);
            add_task_view::render_add_task_dialog(frame, app);
        }
        View::ConfirmDelete => {
            tasks_view::render_tasks_view(frame, app, body);
            delete_dialog::render_delete_confirm_dialog(frame, app);
        }
    }

    render_key_hints(frame, root[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    const LABEL: &str = " LocalMate";
    let title_width = 1 + LABEL.len() as u16 + 1;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(title_width), Constraint::Min(10)])
        .split(area);

    // Throbber spins while a request is in flight, shows a full symbol when idle.
    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        label_area,
    );

    if let Some(notification) = &app.notification {
        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        let message = Paragraph::new(Span::styled(
            notification.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(message, cols[1]);
    }
}

fn render_key_hints(frame: &mut Frame, area: Rect, app: &App) {
    let yellow = Style::default().fg(Color::Yellow);
    let hints: Vec<Span> = match app.current_view {
        View::Tasks => vec![
            Span::styled(" Space", yellow),
            Span::raw(" ✓  "),
            Span::styled("a", yellow),
            Span::raw(format!(" {}  ", app.text("add_task"))),
            Span::styled("d", yellow),
            Span::raw(format!(" {}  ", app.text("delete"))),
            Span::styled("m", yellow),
            Span::raw(format!(" {}  ", app.text("move_to_today"))),
            Span::styled("t", yellow),
            Span::raw(format!(" {}  ", app.text("timer"))),
            Span::styled("Ctrl+L", yellow),
            Span::raw(format!(" {}  ", app.text("language"))),
            Span::styled("q", yellow),
            Span::raw(" ⏻"),
        ],
        View::Timer => {
            let enter_label = if app.timer.is_running() {
                app.text("stop_timer")
            } else {
                app.text("start_timer")
            };
            vec![
                Span::styled(" Enter", yellow),
                Span::raw(format!(" {}  ", enter_label)),
                Span::styled("Tab", yellow),
                Span::raw(" ⇄  "),
                Span::styled("Ctrl+L", yellow),
                Span::raw(format!(" {}  ", app.text("language"))),
                Span::styled("Esc", yellow),
                Span::raw(format!(" {}", app.text("tasks"))),
            ]
        }
        View::AddTask => vec![
            Span::styled(" Enter", yellow),
            Span::raw(format!(" {}  ", app.text("add_task"))),
            Span::styled("Tab", yellow),
            Span::raw(" ⇄  "),
            Span::styled("Esc", yellow),
            Span::raw(format!(" {}", app.text("tasks"))),
        ],
        View::ConfirmDelete => vec![
            Span::styled(" y", yellow),
            Span::raw(format!(" {}  ", app.text("yes"))),
            Span::styled("n", yellow),
            Span::raw(format!(" {}", app.text("no"))),
        ],
    };

    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
