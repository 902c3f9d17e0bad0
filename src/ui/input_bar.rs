use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, error_style, hint_style, input_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input bar for new entries
pub fn render_input_bar(f: &mut Frame, app: &AppState, area: Rect) {
    // Red border while the pending input duplicates an entry
    let border = if app.is_duplicate_input() {
        error_style()
    } else {
        border_style()
    };

    let paragraph = Paragraph::new(create_input_line(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" Add todo ", title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Build the input line: the buffer with a cursor while adding, a hint otherwise
fn create_input_line(app: &AppState) -> Line<'static> {
    let mut spans = vec![Span::raw("> ")];

    match app.ui_mode {
        UiMode::AddingTodo => {
            spans.push(Span::styled(app.input.clone(), input_style()));
            spans.push(Span::styled("█".to_string(), input_style())); // Cursor
            if app.is_duplicate_input() {
                spans.push(Span::styled("  already exists".to_string(), error_style()));
            }
        }
        UiMode::Normal => {
            spans.push(Span::styled(
                "press a to add a todo".to_string(),
                hint_style(),
            ));
        }
    }

    Line::from(spans)
}
