use std::sync::Arc;

use crate::{
    content::{
        cache::{EntryCache, EntryList},
        model::DiaryEntry,
    },
    foundation::error::DiaryResult,
    shell::neighbors::NeighborWindow,
};

/// Index of `id` in a newest-first list.
pub fn position_of(entries: &[DiaryEntry], id: &str) -> Option<usize> {
    entries.iter().position(|e| e.id == id)
}

/// The next (more recent) entry: one index earlier in a newest-first list.
pub fn next_of<'a>(entries: &'a [DiaryEntry], id: &str) -> Option<&'a DiaryEntry> {
    let idx = position_of(entries, id)?;
    idx.checked_sub(1).and_then(|i| entries.get(i))
}

/// The previous (older) entry: one index later in a newest-first list.
pub fn previous_of<'a>(entries: &'a [DiaryEntry], id: &str) -> Option<&'a DiaryEntry> {
    let idx = position_of(entries, id)?;
    entries.get(idx + 1)
}

/// Read-only lookups over the cached, newest-first entry list.
#[derive(Clone, Debug)]
pub struct EntryStore {
    cache: Arc<EntryCache>,
}

impl EntryStore {
    /// Store reading through `cache`.
    pub fn new(cache: Arc<EntryCache>) -> Self {
        Self { cache }
    }

    /// Every entry, newest first.
    pub async fn all(&self) -> DiaryResult<EntryList> {
        self.cache.get().await
    }

    /// Entry with `id`.
    pub async fn get_by_id(&self, id: &str) -> DiaryResult<Option<DiaryEntry>> {
        let entries = self.cache.get().await?;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    /// The older neighbour of `id`.
    pub async fn previous(&self, id: &str) -> DiaryResult<Option<DiaryEntry>> {
        let entries = self.cache.get().await?;
        Ok(previous_of(&entries, id).cloned())
    }

    /// The more recent neighbour of `id`.
    pub async fn next(&self, id: &str) -> DiaryResult<Option<DiaryEntry>> {
        let entries = self.cache.get().await?;
        Ok(next_of(&entries, id).cloned())
    }

    /// Five-slot window around `id` for the detail page.
    pub async fn neighbor_window(&self, id: &str) -> DiaryResult<Option<NeighborWindow>> {
        let entries = self.cache.get().await?;
        Ok(NeighborWindow::around(&entries, id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/store.rs"]
mod tests;
