use super::colors::*;
use projectboard_domain::ProjectStatus;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

/// Border of a bucket currently accepting a hovering payload.
pub fn droppable_border() -> Style {
    Style::default()
        .fg(DROPPABLE_BORDER)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn dragging_item() -> Style {
    Style::default()
        .fg(DRAGGING_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn status_style(status: ProjectStatus) -> Style {
    let color = match status {
        ProjectStatus::Active => STATUS_ACTIVE,
        ProjectStatus::Finished => STATUS_FINISHED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
