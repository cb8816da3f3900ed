pub mod bookmark;
pub mod creature;

pub use bookmark::BookmarkEntry;
pub use creature::{CreatureRecord, Image};
