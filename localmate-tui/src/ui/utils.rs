use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};

use crate::i18n::Lang;

/// Text alignment for the active language. Farsi is right-to-left, so its
/// text hugs the right edge.
pub fn text_alignment(lang: Lang) -> Alignment {
    if lang.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}
