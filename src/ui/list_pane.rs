use crate::app::AppState;
use crate::domain::Todo;
use crate::ui::styles::{
    border_style, default_style, done_style, done_text_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the to-do list, newest entries on top
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .todos
        .iter()
        .enumerate()
        .map(|(idx, todo)| {
            let line = create_todo_line(todo);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" Todos ({}) ", app.todos.len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for an entry
/// Format: "○ Buy milk" or "✓ B̶u̶y̶ ̶m̶i̶l̶k̶"
fn create_todo_line(todo: &Todo) -> Line<'static> {
    if todo.completed {
        Line::from(vec![
            Span::styled("✓ ".to_string(), done_style()),
            Span::styled(todo.text.clone(), done_text_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw("○ ".to_string()),
            Span::raw(todo.text.clone()),
        ])
    }
}
