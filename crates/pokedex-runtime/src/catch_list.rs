//! The in-memory list of caught creatures and its reconciliation with the
//! bookmark store.
//!
//! The list is kept sorted by ascending id and holds at most one record per
//! id. Every mutation takes `&mut self`, so writers are serialized by the
//! owner. Store failures are logged and never undo an in-memory change: the
//! list is the source of truth for the session.

use futures::stream::{FuturesUnordered, StreamExt};

use pokedex_api::{CreatureLookup, LookupError};
use pokedex_core::models::CreatureRecord;
use pokedex_core::title::title_case;

use crate::store::BookmarkStore;

/// Called with the full list after every change.
pub type Observer = Box<dyn FnMut(&[CreatureRecord]) + Send>;

pub struct CatchList<L, S> {
    lookup: L,
    store: S,
    records: Vec<CreatureRecord>,
    observer: Option<Observer>,
}

impl<L: CreatureLookup, S: BookmarkStore> CatchList<L, S> {
    pub fn new(lookup: L, store: S) -> Self {
        Self {
            lookup,
            store,
            records: Vec::new(),
            observer: None,
        }
    }

    /// Register the change observer, replacing any previous one.
    pub fn on_change(&mut self, observer: impl FnMut(&[CreatureRecord]) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.records
            .binary_search_by_key(&id, CreatureRecord::id)
            .is_ok()
    }

    /// Whether `record` would be a new catch.
    pub fn is_new(&self, record: &CreatureRecord) -> bool {
        !self.contains(record.id())
    }

    /// Find a caught record by display name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&CreatureRecord> {
        let wanted = title_case(name);
        self.records.iter().find(|r| r.name() == wanted)
    }

    /// Whether `record` is caught, falling back to the stored names when
    /// the list has not been initialized. An unreadable store counts as
    /// not caught.
    pub async fn is_bookmarked(&self, record: &CreatureRecord) -> bool {
        if self.contains(record.id()) {
            return true;
        }
        match self.store.list().await {
            Ok(names) => names.iter().any(|n| title_case(n) == record.name()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read bookmarks");
                false
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look a creature up without touching the list.
    pub async fn lookup(&self, name: &str) -> Result<CreatureRecord, LookupError> {
        self.lookup.lookup(name).await
    }

    /// Rebuild from the bookmark store.
    ///
    /// Every stored name is looked up concurrently and inserted as soon as
    /// it resolves. Names that fail to resolve are dropped with a warning;
    /// a store that cannot be read leaves the list as it was. Returns the
    /// number of records added.
    pub async fn initialize(&mut self) -> usize {
        let names = match self.store.list().await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read bookmarks, catch list left as is");
                return 0;
            }
        };

        let lookup = &self.lookup;
        let mut pending: FuturesUnordered<_> = names
            .iter()
            .map(|name| async move { (name, lookup.lookup(name).await) })
            .collect();

        let mut loaded = 0;
        while let Some((name, result)) = pending.next().await {
            match result {
                Ok(record) => {
                    if record.name() != name.as_str() {
                        tracing::warn!(
                            stored = %name,
                            resolved = record.name(),
                            "Stored name differs from resolved name, release will not delete it"
                        );
                    }
                    if insert_sorted(&mut self.records, record) {
                        loaded += 1;
                        notify(&mut self.observer, &self.records);
                    }
                }
                Err(e) => {
                    tracing::warn!(name = %name, error = %e, "Dropping bookmark that failed to resolve");
                }
            }
        }

        tracing::info!(loaded, stored = names.len(), "Catch list initialized");
        loaded
    }

    /// Catch `record`. Returns `false` if a record with the same id is
    /// already in the list.
    pub async fn add(&mut self, record: CreatureRecord) -> bool {
        if self.contains(record.id()) {
            return false;
        }

        let name = record.name().to_owned();
        insert_sorted(&mut self.records, record);

        match self.store.add(&name).await {
            Ok(()) => tracing::info!(name = %name, "Bookmarked"),
            Err(e) => tracing::warn!(name = %name, error = %e, "Failed to persist bookmark"),
        }

        notify(&mut self.observer, &self.records);
        true
    }

    /// Release `record`. Returns `false` if no record with its id is in the
    /// list.
    pub async fn remove(&mut self, record: &CreatureRecord) -> bool {
        let Ok(index) = self
            .records
            .binary_search_by_key(&record.id(), CreatureRecord::id)
        else {
            return false;
        };

        match self.store.remove(record.name()).await {
            Ok(()) => tracing::info!(name = %record.name(), "Bookmark removed"),
            Err(e) => {
                tracing::warn!(name = %record.name(), error = %e, "Failed to delete bookmark")
            }
        }

        self.records.remove(index);
        notify(&mut self.observer, &self.records);
        true
    }

    /// Entry point for a detail view toggling its bookmark.
    pub async fn on_bookmark_changed(&mut self, record: CreatureRecord, is_bookmarked: bool) -> bool {
        if is_bookmarked {
            self.add(record).await
        } else {
            self.remove(&record).await
        }
    }
}

/// Insert keeping ascending id order. Returns `false` on a duplicate id.
fn insert_sorted(records: &mut Vec<CreatureRecord>, record: CreatureRecord) -> bool {
    match records.binary_search_by_key(&record.id(), CreatureRecord::id) {
        Ok(_) => false,
        Err(pos) => {
            records.insert(pos, record);
            true
        }
    }
}

fn notify(observer: &mut Option<Observer>, records: &[CreatureRecord]) {
    if let Some(observer) = observer {
        observer(records);
    }
}
