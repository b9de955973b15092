pub mod panel;
pub mod popup;

pub use panel::{render_panel, PanelConfig};
pub use popup::{centered_rect, render_input_field};
