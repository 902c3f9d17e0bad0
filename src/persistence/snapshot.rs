use crate::domain::Todo;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::store::Store;

/// Storage key for the to-do slot
pub const STORAGE_KEY: &str = "todos";

/// Date stamp format used in snapshots
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The persisted shape: the full list plus the calendar day it was written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub todos: Vec<Todo>,
    pub date: String,
}

/// What the storage slot decoded to.
///
/// Early versions stored the bare list with no date wrapper; both shapes
/// stay readable. Anything else counts as an empty slot.
#[derive(Debug, PartialEq)]
pub enum StoredShape {
    Wrapped(Snapshot),
    Legacy(Vec<Todo>),
    Empty,
}

/// Decode raw slot content, falling back through the accepted shapes
pub fn decode(raw: Option<&str>) -> StoredShape {
    let Some(raw) = raw else {
        return StoredShape::Empty;
    };

    if let Ok(snapshot) = serde_json::from_str::<Snapshot>(raw) {
        return StoredShape::Wrapped(snapshot);
    }

    if let Ok(todos) = serde_json::from_str::<Vec<Todo>>(raw) {
        return StoredShape::Legacy(todos);
    }

    StoredShape::Empty
}

/// Read and decode the to-do slot. Read errors count as an empty slot.
pub fn load(store: &dyn Store) -> StoredShape {
    match store.read(STORAGE_KEY) {
        Ok(raw) => decode(raw.as_deref()),
        Err(_) => StoredShape::Empty,
    }
}

/// Write the full list back under the fixed key, stamped with the given day
pub fn save(store: &mut dyn Store, todos: &[Todo], date: NaiveDate) -> Result<()> {
    let snapshot = Snapshot {
        todos: todos.to_vec(),
        date: date_stamp(date),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    store.write(STORAGE_KEY, &json)
}

/// Format a date the way snapshots stamp it (e.g. "2024-07-02")
pub fn date_stamp(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
