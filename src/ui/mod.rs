pub mod header_pane;
pub mod input_bar;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use header_pane::render_header_pane;
use input_bar::render_input_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, app, layout.keybindings_area);

    // Render panes
    render_header_pane(f, app, layout.header_area);
    render_input_bar(f, app, layout.input_area);
    render_list_pane(f, app, layout.list_area);
}
