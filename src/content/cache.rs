use std::sync::{Arc, Mutex, PoisonError};

use futures::{
    FutureExt as _,
    future::{BoxFuture, Shared},
};

use crate::{
    content::{model::DiaryEntry, source::ContentSource},
    foundation::error::{DiaryError, DiaryResult},
};

/// Immutable, shareable entry list.
pub type EntryList = Arc<[DiaryEntry]>;

type SharedFetch = Shared<BoxFuture<'static, Result<EntryList, Arc<DiaryError>>>>;

enum CacheState {
    Empty,
    Populating(SharedFetch),
    Populated(EntryList),
}

/// Observable phase of an [`EntryCache`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePhase {
    /// Nothing requested yet.
    Empty,
    /// A fetch is in flight, or has failed and is being replayed.
    Populating,
    /// The list is resident.
    Populated,
}

/// Memoized entry list with request deduplication.
///
/// The first caller starts the fetch; callers arriving while it is in flight
/// await the same shared future. Once resolved the list is kept for the life
/// of the cache. A failed fetch is not retried: every later call replays the
/// same error as [`DiaryError::Shared`].
pub struct EntryCache {
    source: Arc<dyn ContentSource>,
    state: Mutex<CacheState>,
}

impl EntryCache {
    /// Empty cache over `source`.
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            state: Mutex::new(CacheState::Empty),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> CachePhase {
        match &*self.state.lock().unwrap_or_else(PoisonError::into_inner) {
            CacheState::Empty => CachePhase::Empty,
            CacheState::Populating(_) => CachePhase::Populating,
            CacheState::Populated(_) => CachePhase::Populated,
        }
    }

    /// Resolve the entry list, fetching at most once.
    pub async fn get(&self) -> DiaryResult<EntryList> {
        let fetch = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            match &*state {
                CacheState::Populated(list) => return Ok(list.clone()),
                CacheState::Populating(fetch) => fetch.clone(),
                CacheState::Empty => {
                    tracing::debug!("entry cache miss, starting fetch");
                    let source = self.source.clone();
                    let fetch = async move {
                        source
                            .fetch_all()
                            .await
                            .map(EntryList::from)
                            .map_err(Arc::new)
                    }
                    .boxed()
                    .shared();
                    *state = CacheState::Populating(fetch.clone());
                    fetch
                }
            }
        };

        match fetch.await {
            Ok(list) => {
                let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
                if matches!(&*state, CacheState::Populating(_)) {
                    *state = CacheState::Populated(list.clone());
                }
                Ok(list)
            }
            Err(err) => Err(DiaryError::Shared(err)),
        }
    }
}

impl std::fmt::Debug for EntryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryCache")
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/cache.rs"]
mod tests;
