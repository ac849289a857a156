use super::*;
use crate::app::format_remaining;
use std::time::Instant;
use time::OffsetDateTime;

pub fn render_timer_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5), // Countdown display
            Constraint::Length(3), // Duration input
            Constraint::Length(3), // Task search
            Constraint::Min(4),    // Task selector
            Constraint::Length(3), // Total recorded time
        ])
        .split(body);

    render_countdown(frame, chunks[0], app);
    render_duration_input(frame, chunks[1], app);
    render_search(frame, chunks[2], app);
    render_selector(frame, chunks[3], app);
    render_total_time(frame, chunks[4], app);
}

fn render_countdown(frame: &mut Frame, area: Rect, app: &App) {
    let is_running = app.timer.is_running();
    let is_flashing = app.is_flashing(Instant::now());

    let (remaining, subtitle) = match app.timer.current() {
        Some(run) => {
            let seconds = app.timer.remaining_seconds(OffsetDateTime::now_utc());
            (format_remaining(seconds), run.task_title.clone())
        }
        None => {
            // Idle: preview the configured duration.
            let seconds = app.parsed_duration().map(|m| u64::from(m) * 60).unwrap_or(0);
            (format_remaining(seconds), String::new())
        }
    };

    let border_style = if is_flashing {
        Style::default().fg(Color::Yellow)
    } else if is_running {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let time_style = if is_flashing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if is_running {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut lines = vec![Line::from(Span::styled(remaining, time_style))];
    if is_flashing {
        lines.push(Line::from(Span::styled(
            app.text("timer_completed"),
            Style::default().fg(Color::Yellow),
        )));
    } else if !subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let countdown = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.text("timer")))
            .title_alignment(utils::text_alignment(app.lang))
            .border_style(border_style)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(countdown, area);
}

fn render_duration_input(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.duration_focused && !app.timer.is_running();
    let text = if is_active {
        let (before, after) = app.duration_input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        app.duration_input.value.clone()
    };

    let border_style = if is_active {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(utils::text_alignment(app.lang))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.text("duration_minutes")))
                .title_alignment(utils::text_alignment(app.lang))
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(input, area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = !app.duration_focused && !app.timer.is_running();
    let text = if is_active {
        let (before, after) = app.selector_search.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        app.selector_search.value.clone()
    };

    let border_style = if is_active {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search_box = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(utils::text_alignment(app.lang))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.text("select_task")))
                .title_alignment(utils::text_alignment(app.lang))
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, area);
}

fn render_selector(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .filtered_selector
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let style = if i == app.selector_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if i == app.selector_index { "› " } else { "  " };
            ListItem::new(
                Line::from(Span::styled(format!("{}{}", marker, task.title), style))
                    .alignment(utils::text_alignment(app.lang)),
            )
        })
        .collect();

    // Filtered / total count, matching the search state.
    let title = if app.selector_search.value.is_empty() {
        format!(" {} ({}) ", app.text("tasks"), app.selector_tasks.len())
    } else {
        format!(
            " {} ({}/{}) ",
            app.text("tasks"),
            app.filtered_selector.len(),
            app.selector_tasks.len()
        )
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(utils::text_alignment(app.lang))
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);
}

fn render_total_time(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.selected_total {
        Some(total) => {
            let hours = total / 60;
            let minutes = total % 60;
            format!(
                "{} {} {} {}",
                hours,
                app.text("hours"),
                minutes,
                app.text("minutes")
            )
        }
        None => String::new(),
    };

    let total = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .alignment(utils::text_alignment(app.lang))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.text("total_time")))
                .title_alignment(utils::text_alignment(app.lang))
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(total, area);
}
