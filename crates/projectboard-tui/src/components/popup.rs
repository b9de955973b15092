use projectboard_core::InputState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// One labeled, bordered form field. Sets the terminal cursor when the
/// field has focus.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &InputState,
    focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    let label_style = if focused {
        crate::theme::focused_border()
    } else {
        crate::theme::label_text()
    };
    frame.render_widget(Paragraph::new(label).style(label_style), chunks[0]);

    let field = Paragraph::new(input.as_str())
        .style(crate::theme::normal_text())
        .block(Block::default().borders(Borders::ALL).border_style(label_style));
    frame.render_widget(field, chunks[1]);

    if focused {
        let cursor_x = chunks[1].x + input.cursor_pos() as u16 + 1;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
