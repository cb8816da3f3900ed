use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted bookmark. Only `name` matters to the catch list; the row id
/// and timestamp are bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
