use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, title_style};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header: completion counter on the left, reset countdown on the right
pub fn render_header_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%a %b %d");
    let title = format!(" Today's todo ({}) ", date);

    let paragraph = Paragraph::new(create_header_line(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Build the counter + countdown line
fn create_header_line(app: &AppState) -> Line<'static> {
    let (done, total) = app.counts();

    // All done gets the counter shown in green
    let counter_style = if total > 0 && done == total {
        done_style()
    } else {
        default_style()
    };

    Line::from(vec![
        Span::styled(format!("{}/{} completed", done, total), counter_style),
        Span::raw("   ·   "),
        Span::styled(format!("resets in {}", app.countdown), hint_style()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Todo;
    use crate::persistence::MemoryStore;

    fn app_with(todos: Vec<Todo>) -> AppState {
        AppState::new(Box::new(MemoryStore::new()), todos)
    }

    #[test]
    fn test_create_header_line_counts() {
        let app = app_with(vec![
            Todo {
                id: 2,
                text: "Water plants".to_string(),
                completed: true,
            },
            Todo {
                id: 1,
                text: "Buy milk".to_string(),
                completed: false,
            },
        ]);

        let line_str = format!("{:?}", create_header_line(&app));
        assert!(line_str.contains("1/2 completed"));
        assert!(line_str.contains("resets in"));
    }

    #[test]
    fn test_create_header_line_empty_list() {
        let app = app_with(Vec::new());

        let line_str = format!("{:?}", create_header_line(&app));
        assert!(line_str.contains("0/0 completed"));
    }
}
