use super::*;
use crate::app::{tasks, Pane};
use crate::time_utils;
use localmate_api::domain::Task;

pub fn render_tasks_view(frame: &mut Frame, app: &App, body: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    render_pane(frame, panes[0], app, Pane::Today);
    render_pane(frame, panes[1], app, Pane::Pending);
}

fn render_pane(frame: &mut Frame, area: Rect, app: &App, pane: Pane) {
    let tasks = app.visible_tasks(pane);
    let is_focused = app.focused_pane == pane;
    let selected = match pane {
        Pane::Today => app.today_index,
        Pane::Pending => app.pending_index,
    };

    let (title_key, empty_key) = match pane {
        Pane::Today => ("today_tasks", "empty_today"),
        Pane::Pending => ("pending_tasks", "empty_pending"),
    };
    let title = format!(" {} ({}) ", app.text(title_key), tasks.len());

    let border_style = if is_focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(utils::text_alignment(app.lang))
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    if tasks.is_empty() {
        let empty = Paragraph::new(app.text(empty_key))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(utils::text_alignment(app.lang))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let today = tasks::local_today();
    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| task_item(app, task, today, is_focused && i == selected))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn task_item(app: &App, task: &Task, today: time::Date, is_selected: bool) -> ListItem<'static> {
    let checkbox = if task.is_completed { "[x] " } else { "[ ] " };
    let due = time_utils::format_due(task.due_date, app.lang);

    let title_style = if task.is_completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let due_style = if !task.is_completed && tasks::is_overdue(task.due_date, today) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let marker = if is_selected { "› " } else { "  " };
    let mut spans = vec![
        Span::raw(marker.to_string()),
        Span::raw(checkbox.to_string()),
        Span::styled(task.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(due, due_style),
    ];
    if app.lang.is_rtl() {
        spans.reverse();
    }

    let line = Line::from(spans).alignment(utils::text_alignment(app.lang));
    let mut lines = vec![line];
    if let Some(description) = &task.description {
        if !description.is_empty() {
            lines.push(
                Line::from(Span::styled(
                    format!("      {}", description),
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(utils::text_alignment(app.lang)),
            );
        }
    }

    ListItem::new(lines)
}
