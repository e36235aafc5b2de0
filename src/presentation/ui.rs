use super::view::LayerView;
use crate::application::App;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(LayerView::new(&app.manager, BaseScreen { app }), area);
}

/// Host content drawn beneath every layer.
struct BaseScreen<'a> {
    app: &'a App,
}

impl Widget for BaseScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        render_header(self.app, chunks[0], buf);
        render_body(chunks[1], buf);
        render_status_bar(self.app, chunks[2], buf);
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let toast = match app.manager.current_toast() {
        Some(toast) => format!("toast {}", toast.id),
        None => "no toast".to_string(),
    };
    Paragraph::new(format!(
        "tlayers - Terminal Layers | Layers: {} | {}",
        app.manager.len(),
        toast
    ))
    .style(Style::default().fg(Color::Cyan))
    .render(area, buf);
}

fn render_body(area: Rect, buf: &mut Buffer) {
    Paragraph::new(get_help_text())
        .block(Block::default().borders(Borders::ALL).title("Base"))
        .render(area, buf);
}

fn render_status_bar(app: &App, area: Rect, buf: &mut Buffer) {
    let text = app
        .status_message
        .clone()
        .unwrap_or_else(|| "b/r/t/l: sheet | f: fade | i: instant | m: modal | n: toast | p: pop | x: pop all | q: quit".to_string());
    Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .render(area, buf);
}

fn get_help_text() -> &'static str {
    r#"Push layers over this screen and watch them stack.

b  sheet sliding up from the bottom
r  sheet sliding in from the right
t  sheet sliding down from the top
l  sheet sliding in from the left
f  centered layer that fades in
i  layer that appears with no transition
m  modal; click the dimmed area around it to dismiss
n  toast that expires after two seconds
p  pop the top layer
x  pop every layer and clear the toast
q  quit"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryDirection;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_ui_draws_base_and_layers() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut app = App::default();
        app.open_instant();

        let frame = terminal.draw(|f| render_ui(f, &app)).unwrap();
        let header: String = (0..frame.area.width)
            .map(|x| frame.buffer[(x, 0)].symbol().to_string())
            .collect();

        assert!(header.starts_with("tlayers - Terminal Layers | Layers: 1"));
        assert_eq!(frame.buffer[(12, 5)].symbol(), "┌");
    }

    #[test]
    fn test_header_reports_toast() {
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        let mut app = App::default();
        app.manager.toast(EntryDirection::Top, std::time::Duration::from_secs(5), |_| {
            crate::presentation::Card::new("t", "x")
        });

        let frame = terminal.draw(|f| render_ui(f, &app)).unwrap();
        let header: String = (0..frame.area.width)
            .map(|x| frame.buffer[(x, 0)].symbol().to_string())
            .collect();

        assert!(header.contains("| toast #"));
    }
}
