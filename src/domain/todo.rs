use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single to-do entry for the current day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Creation time in milliseconds since the Unix epoch, doubles as the
    /// entry's identity (uniqueness assumed, not enforced)
    pub id: i64,
    /// User-entered text, kept exactly as typed
    pub text: String,
    /// Whether the entry has been checked off
    pub completed: bool,
}

impl Todo {
    /// Create a fresh entry stamped with the current time
    pub fn new(text: String) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            text,
            completed: false,
        }
    }
}
