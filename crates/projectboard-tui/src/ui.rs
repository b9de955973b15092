use crate::app::{App, AppMode};
use crate::components::{centered_rect, render_input_field, render_panel, PanelConfig};
use crate::form::FormField;
use crate::theme;
use projectboard_domain::ProjectStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_main(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    if app.mode == AppMode::NewProject {
        render_project_form(app, frame);
    }
}

fn render_main(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_bucket_panel(app, frame, chunks[0], ProjectStatus::Active);
    render_bucket_panel(app, frame, chunks[1], ProjectStatus::Finished);
}

fn render_bucket_panel(app: &App, frame: &mut Frame, area: Rect, bucket: ProjectStatus) {
    let view = app.view(bucket);
    let focused = app.focus == bucket;
    let selection = app.selection(bucket).get();

    let mut lines: Vec<Line> = Vec::new();
    {
        let items = view.items();
        if items.is_empty() {
            let hint = match bucket {
                ProjectStatus::Active => "No projects yet. Press 'n' to create one!",
                ProjectStatus::Finished => "Nothing finished yet. Drop a project here!",
            };
            lines.push(Line::from(Span::styled(hint, theme::label_text())));
        } else {
            for (idx, item) in items.iter().enumerate() {
                let is_selected =
                    focused && selection == Some(idx) && !app.gesture.is_dragging();
                let is_dragged = app.dragging == Some(item.id());

                let title_style = if is_dragged {
                    theme::dragging_item()
                } else {
                    theme::status_style(bucket)
                };
                let marker = if is_selected { "▸ " } else { "  " };
                let mut title_line = Line::from(vec![
                    Span::styled(marker.to_string(), theme::normal_text()),
                    Span::styled(item.title().to_string(), title_style),
                ]);
                if is_selected {
                    title_line = title_line.style(theme::selected_item(true));
                }
                lines.push(title_line);
                lines.push(Line::from(Span::styled(
                    format!("  {}", item.people_line()),
                    theme::label_text(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", item.description()),
                    theme::label_text(),
                )));
                lines.push(Line::from(""));
            }
        }
    }

    let key_hint = match bucket {
        ProjectStatus::Active => "1",
        ProjectStatus::Finished => "2",
    };
    let title = format!("{} PROJECTS", bucket.label().to_uppercase());
    let focused_title = format!("{} [{}]", title, key_hint);

    let config = PanelConfig::new(&title)
        .with_focus_indicator(&focused_title)
        .focused(focused)
        .droppable(view.droppable());
    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    render_panel(frame, area, &config, content);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        AppMode::NewProject => "Tab: next field | Enter: create | Esc: cancel",
        AppMode::Normal if app.gesture.is_dragging() => {
            "1/2/Tab: hover bucket | Space/Enter: drop | Esc: cancel drag"
        }
        AppMode::Normal => "n: new project | 1/2/Tab: focus | j/k: select | Space: pick up | q: quit",
    };

    let footer = Paragraph::new(hints)
        .style(theme::label_text())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_project_form(app: &App, frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("New Project")
        .borders(Borders::ALL)
        .border_style(theme::focused_border())
        .style(theme::popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_input_field(
        frame,
        chunks[0],
        "Title",
        &app.form.title,
        app.form.field() == FormField::Title,
    );
    render_input_field(
        frame,
        chunks[1],
        "Description",
        &app.form.description,
        app.form.field() == FormField::Description,
    );
    let people_label = format!(
        "People ({}-{})",
        app.form.rules().people_min,
        app.form.rules().people_max
    );
    render_input_field(
        frame,
        chunks[2],
        &people_label,
        &app.form.people,
        app.form.field() == FormField::People,
    );

    if let Some(error) = app.form.error() {
        frame.render_widget(
            Paragraph::new(error.to_string()).style(theme::error_text()),
            chunks[3],
        );
    }
}
