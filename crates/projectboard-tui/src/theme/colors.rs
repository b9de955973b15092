use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const DROPPABLE_BORDER: Color = Color::Green;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const DRAGGING_TEXT: Color = Color::Yellow;

pub const STATUS_ACTIVE: Color = Color::Green;
pub const STATUS_FINISHED: Color = Color::Gray;

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
