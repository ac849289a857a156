use super::utils::centered_rect;
use super::*;

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App) {
    let title = app
        .delete_context
        .as_ref()
        .map(|ctx| ctx.title.clone())
        .unwrap_or_default();

    let area = centered_rect(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(title, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("[y] {}", app.text("yes")),
                Style::default().fg(Color::Red),
            ),
            Span::raw("    "),
            Span::styled(
                format!("[n] {}", app.text("no")),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.text("confirm_delete")))
                .title_alignment(utils::text_alignment(app.lang))
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
