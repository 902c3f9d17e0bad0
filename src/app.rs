use crate::countdown;
use crate::domain::{Todo, UiMode};
use crate::persistence::{snapshot, Store};
use anyhow::Result;
use chrono::Local;

/// Main application state
pub struct AppState {
    store: Box<dyn Store>,
    pub todos: Vec<Todo>,
    /// Pending input for a new entry, kept exactly as typed
    pub input: String,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    /// Time left until the next midnight reset, refreshed on tick
    pub countdown: String,
}

impl AppState {
    pub fn new(store: Box<dyn Store>, todos: Vec<Todo>) -> Self {
        Self {
            store,
            todos,
            input: String::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            countdown: countdown::remaining_now(),
        }
    }

    /// Store handle (for testing and programmatic inspection)
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// (completed, total) for the header counter
    pub fn counts(&self) -> (usize, usize) {
        let done = self.todos.iter().filter(|t| t.completed).count();
        (done, self.todos.len())
    }

    /// Whether the pending input can be submitted: its trimmed form must be
    /// non-empty and must not match an existing entry's text
    pub fn can_add(&self) -> bool {
        let trimmed = self.input.trim();
        !trimmed.is_empty() && !self.todos.iter().any(|t| t.text == trimmed)
    }

    /// True when the trimmed input exactly matches an existing entry's text
    pub fn is_duplicate_input(&self) -> bool {
        let trimmed = self.input.trim();
        !trimmed.is_empty() && self.todos.iter().any(|t| t.text == trimmed)
    }

    /// Add an entry from the pending input, newest on top. Blank and
    /// duplicate inputs are ignored and leave the buffer as typed.
    /// Returns whether an entry was added.
    pub fn add_todo(&mut self) -> Result<bool> {
        if !self.can_add() {
            return Ok(false);
        }
        let todo = Todo::new(self.input.clone());
        self.todos.insert(0, todo);
        self.input.clear();
        self.selected_index = 0;
        self.persist()?;
        Ok(true)
    }

    /// Flip the completed flag on the entry with this id. Unknown ids are ignored.
    pub fn toggle_todo(&mut self, id: i64) -> Result<()> {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };
        todo.completed = !todo.completed;
        self.persist()
    }

    /// Drop the entry with this id. Unknown ids are ignored.
    pub fn remove_todo(&mut self, id: i64) -> Result<()> {
        let Some(pos) = self.todos.iter().position(|t| t.id == id) else {
            return Ok(());
        };
        self.todos.remove(pos);
        if self.todos.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.todos.len() {
            self.selected_index = self.todos.len() - 1;
        }
        self.persist()
    }

    /// Toggle the entry under the cursor
    pub fn toggle_selected(&mut self) -> Result<()> {
        let Some(id) = self.todos.get(self.selected_index).map(|t| t.id) else {
            return Ok(());
        };
        self.toggle_todo(id)
    }

    /// Remove the entry under the cursor
    pub fn remove_selected(&mut self) -> Result<()> {
        let Some(id) = self.todos.get(self.selected_index).map(|t| t.id) else {
            return Ok(());
        };
        self.remove_todo(id)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.todos.len() {
            self.selected_index += 1;
        }
    }

    /// Open the input bar
    pub fn start_add(&mut self) {
        self.ui_mode = UiMode::AddingTodo;
    }

    /// Close the input bar and discard the pending input
    pub fn cancel_add(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the input bar; on a successful add return to normal mode,
    /// otherwise stay open with the buffer untouched
    pub fn submit_input(&mut self) -> Result<()> {
        if self.add_todo()? {
            self.ui_mode = UiMode::Normal;
        }
        Ok(())
    }

    /// Refresh the countdown string (called once per tick)
    pub fn tick(&mut self) {
        self.countdown = countdown::remaining_now();
    }

    /// Write the full list through the store, stamped with the local date
    /// at write time
    fn persist(&mut self) -> Result<()> {
        snapshot::save(self.store.as_mut(), &self.todos, Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, StoredShape, STORAGE_KEY};

    fn todo(id: i64, text: &str, completed: bool) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed,
        }
    }

    fn create_test_app(todos: Vec<Todo>) -> AppState {
        AppState::new(Box::new(MemoryStore::new()), todos)
    }

    fn stored_snapshot(app: &AppState) -> snapshot::Snapshot {
        match snapshot::load(app.store()) {
            StoredShape::Wrapped(snap) => snap,
            other => panic!("expected a wrapped snapshot, got {:?}", other),
        }
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app(vec![todo(1, "Buy milk", false)]);
        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.input, "");
    }

    #[test]
    fn test_add_todo_prepends_and_clears_input() {
        let mut app = create_test_app(vec![todo(1, "Buy milk", false)]);
        app.input = "Water plants".to_string();

        assert!(app.add_todo().unwrap());

        assert_eq!(app.todos.len(), 2);
        assert_eq!(app.todos[0].text, "Water plants");
        assert!(!app.todos[0].completed);
        assert_eq!(app.todos[1].text, "Buy milk");
        assert_eq!(app.input, "");
    }

    #[test]
    fn test_add_todo_persists_with_today_stamp() {
        let mut app = create_test_app(Vec::new());
        app.input = "Buy milk".to_string();

        app.add_todo().unwrap();

        let snap = stored_snapshot(&app);
        assert_eq!(snap.todos.len(), 1);
        assert_eq!(snap.todos[0].text, "Buy milk");
        assert_eq!(
            snap.date,
            snapshot::date_stamp(Local::now().date_naive())
        );
    }

    #[test]
    fn test_add_blank_input_is_noop() {
        let mut app = create_test_app(Vec::new());
        app.input = "   ".to_string();

        assert!(!app.add_todo().unwrap());

        assert!(app.todos.is_empty());
        assert_eq!(app.input, "   ");
        assert_eq!(app.store().read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut app = create_test_app(vec![todo(1, "Buy milk", false)]);
        app.input = "  Buy milk  ".to_string();

        assert!(!app.add_todo().unwrap());

        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.input, "  Buy milk  ");
        assert_eq!(app.store().read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut app = create_test_app(vec![todo(1, "Buy milk", false)]);
        app.input = "buy milk".to_string();

        assert!(app.add_todo().unwrap());
        assert_eq!(app.todos.len(), 2);
    }

    #[test]
    fn test_add_keeps_text_as_typed() {
        let mut app = create_test_app(Vec::new());
        app.input = "  Buy milk  ".to_string();

        assert!(app.add_todo().unwrap());

        assert_eq!(app.todos[0].text, "  Buy milk  ");
    }

    #[test]
    fn test_two_adds_land_newest_first() {
        let mut app = create_test_app(Vec::new());

        app.input = "Buy milk".to_string();
        app.add_todo().unwrap();
        app.input = "Water plants".to_string();
        app.add_todo().unwrap();

        assert_eq!(app.todos[0].text, "Water plants");
        assert_eq!(app.todos[1].text, "Buy milk");

        let snap = stored_snapshot(&app);
        assert_eq!(snap.todos[0].text, "Water plants");
        assert_eq!(snap.todos[1].text, "Buy milk");
    }

    #[test]
    fn test_toggle_flips_only_the_matching_entry() {
        let mut app = create_test_app(vec![
            todo(3, "Call dentist", false),
            todo(2, "Water plants", false),
            todo(1, "Buy milk", false),
        ]);

        app.toggle_todo(2).unwrap();

        assert!(!app.todos[0].completed);
        assert!(app.todos[1].completed);
        assert!(!app.todos[2].completed);

        app.toggle_todo(2).unwrap();
        assert!(!app.todos[1].completed);
    }

    #[test]
    fn test_toggle_unknown_id_changes_nothing() {
        let mut app = create_test_app(vec![todo(1, "Buy milk", false)]);
        let before = app.todos.clone();

        app.toggle_todo(999).unwrap();

        assert_eq!(app.todos, before);
        assert_eq!(app.store().read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_toggle_persists() {
        let mut app = create_test_app(vec![todo(1, "Buy milk", false)]);

        app.toggle_todo(1).unwrap();

        let snap = stored_snapshot(&app);
        assert!(snap.todos[0].completed);
    }

    #[test]
    fn test_remove_drops_the_matching_entry() {
        let mut app = create_test_app(vec![
            todo(2, "Water plants", false),
            todo(1, "Buy milk", true),
        ]);

        app.remove_todo(1).unwrap();

        assert_eq!(app.todos, vec![todo(2, "Water plants", false)]);
        let snap = stored_snapshot(&app);
        assert_eq!(snap.todos, vec![todo(2, "Water plants", false)]);
    }

    #[test]
    fn test_remove_unknown_id_changes_nothing() {
        let mut app = create_test_app(vec![todo(1, "Buy milk", false)]);
        let before = app.todos.clone();

        app.remove_todo(999).unwrap();

        assert_eq!(app.todos, before);
        assert_eq!(app.store().read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_remove_clamps_selection() {
        let mut app = create_test_app(vec![
            todo(2, "Water plants", false),
            todo(1, "Buy milk", false),
        ]);
        app.selected_index = 1;

        app.remove_selected().unwrap();
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.todos.len(), 1);

        app.remove_selected().unwrap();
        assert_eq!(app.selected_index, 0);
        assert!(app.todos.is_empty());

        // Nothing left to act on
        app.remove_selected().unwrap();
        app.toggle_selected().unwrap();
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app(vec![
            todo(2, "Water plants", false),
            todo(1, "Buy milk", false),
        ]);

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // Can't go past the end
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);

        // Can't go below 0
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_counts() {
        let app = create_test_app(vec![
            todo(3, "Call dentist", true),
            todo(2, "Water plants", false),
            todo(1, "Buy milk", true),
        ]);
        assert_eq!(app.counts(), (2, 3));
    }

    #[test]
    fn test_can_add_and_duplicate_predicates() {
        let mut app = create_test_app(vec![todo(1, "Buy milk", false)]);

        app.input = String::new();
        assert!(!app.can_add());
        assert!(!app.is_duplicate_input());

        app.input = "   ".to_string();
        assert!(!app.can_add());
        assert!(!app.is_duplicate_input());

        app.input = " Buy milk ".to_string();
        assert!(!app.can_add());
        assert!(app.is_duplicate_input());

        app.input = "Water plants".to_string();
        assert!(app.can_add());
        assert!(!app.is_duplicate_input());
    }

    #[test]
    fn test_input_editing() {
        let mut app = create_test_app(Vec::new());

        app.start_add();
        assert_eq!(app.ui_mode, UiMode::AddingTodo);

        app.input_add_char('h');
        app.input_add_char('i');
        app.input_add_char('!');
        app.input_backspace();
        assert_eq!(app.input, "hi");

        app.cancel_add();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.input, "");
    }

    #[test]
    fn test_submit_returns_to_normal_mode_on_success() {
        let mut app = create_test_app(Vec::new());
        app.start_add();
        app.input = "Buy milk".to_string();

        app.submit_input().unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.todos.len(), 1);
    }

    #[test]
    fn test_submit_duplicate_stays_open_with_buffer() {
        let mut app = create_test_app(vec![todo(1, "Buy milk", false)]);
        app.start_add();
        app.input = "Buy milk".to_string();

        app.submit_input().unwrap();

        assert_eq!(app.ui_mode, UiMode::AddingTodo);
        assert_eq!(app.input, "Buy milk");
        assert_eq!(app.todos.len(), 1);
    }
}
