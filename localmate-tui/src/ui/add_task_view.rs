use super::utils::centered_rect;
use super::*;
use crate::app::{AddTaskField, TextInput};

pub fn render_add_task_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(56, 13, frame.area());
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.text("add_task")))
        .title_alignment(utils::text_alignment(app.lang))
        .border_style(Style::default().fg(Color::Magenta));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(inner);

    render_field(
        frame,
        fields[0],
        app,
        &app.add_task_form.title,
        "task_title",
        app.add_task_form.focused == AddTaskField::Title,
    );
    render_field(
        frame,
        fields[1],
        app,
        &app.add_task_form.description,
        "task_description",
        app.add_task_form.focused == AddTaskField::Description,
    );
    render_field(
        frame,
        fields[2],
        app,
        &app.add_task_form.due_date,
        "due_date",
        app.add_task_form.focused == AddTaskField::DueDate,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    input: &TextInput,
    label_key: &str,
    is_focused: bool,
) {
    let text = if is_focused {
        let (before, after) = input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        input.value.clone()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let field = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(utils::text_alignment(app.lang))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.text(label_key)))
                .title_alignment(utils::text_alignment(app.lang))
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(field, area);
}
