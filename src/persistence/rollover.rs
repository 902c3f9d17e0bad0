use super::snapshot::{self, StoredShape, DATE_FORMAT};
use super::store::Store;
use crate::domain::Todo;
use anyhow::Result;
use chrono::NaiveDate;

/// Build the working list for `today` from whatever the slot holds.
///
/// Rollover rules, applied once at startup:
/// 1. Empty or unreadable slot: start with an empty list, write nothing
/// 2. Snapshot stamped with today's date: use the stored list exactly as-is
/// 3. Any other date (including an unparsable stamp or the legacy bare-array
///    shape, which carries no date): keep only unfinished entries and write
///    the trimmed list back stamped with today, before the first render
pub fn load_for_today(store: &mut dyn Store, today: NaiveDate) -> Result<Vec<Todo>> {
    let (todos, stored_date) = match snapshot::load(store) {
        StoredShape::Wrapped(snap) => {
            let date = NaiveDate::parse_from_str(&snap.date, DATE_FORMAT).ok();
            (snap.todos, date)
        }
        StoredShape::Legacy(todos) => (todos, None),
        StoredShape::Empty => return Ok(Vec::new()),
    };

    if stored_date == Some(today) {
        return Ok(todos);
    }

    let carried: Vec<Todo> = todos.into_iter().filter(|t| !t.completed).collect();
    snapshot::save(store, &carried, today)?;
    Ok(carried)
}
