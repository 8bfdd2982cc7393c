//! List query controller: filter/pagination state and the debounced
//! list fetch.
//!
//! One controller instance owns its debounce timer, so two mounted
//! screens never share one. Rapid filter edits coalesce into a single
//! round-trip; a [`ListQueryController::refresh`] after a mutation
//! bypasses the debounce and fires immediately. In-flight responses
//! are never aborted: the later-resolving response wins, since each
//! response replaces the collection wholesale.

use crate::notify::Notifier;
use argus_common::types::{ListReply, Pagination};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Debounce window for search-triggered fetches.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Data source behind a list screen. Adapters over the transport
/// traits live in [`crate::backends`].
#[async_trait]
pub trait ListBackend: Send + Sync + 'static {
    type Item: Send + 'static;
    type Filter: Clone + Default + Send + Sync + 'static;

    async fn fetch(
        &self,
        filter: &Self::Filter,
        pagination: &Pagination,
    ) -> argus_api::error::Result<ListReply<Self::Item>>;
}

/// Anything that can re-issue its current fetch. Mutating controllers
/// hold this to trigger the post-mutation refetch.
#[async_trait]
pub trait RefreshTarget: Send + Sync {
    async fn refresh(&self);
}

/// Displayed state of one list screen.
#[derive(Debug)]
pub struct ListState<T, F> {
    pub filter: F,
    pub pagination: Pagination,
    pub collection: Vec<T>,
    pub total: u64,
    pub loading: bool,
    /// Batch row selection. Tracked only; batch mutation has no
    /// endpoint in this console.
    pub selection: Vec<i64>,
}

impl<T, F: Default> Default for ListState<T, F> {
    fn default() -> Self {
        Self {
            filter: F::default(),
            pagination: Pagination::default(),
            collection: Vec::new(),
            total: 0,
            loading: false,
            selection: Vec::new(),
        }
    }
}

pub struct ListQueryController<B: ListBackend> {
    backend: Arc<B>,
    state: Arc<Mutex<ListState<B::Item, B::Filter>>>,
    pending: Mutex<Option<JoinHandle<()>>>,
    notifier: Arc<dyn Notifier>,
}

impl<B: ListBackend> ListQueryController<B> {
    pub fn new(backend: Arc<B>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(ListState::default())),
            pending: Mutex::new(None),
            notifier,
        }
    }

    /// Runs `f` against the current state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&ListState<B::Item, B::Filter>) -> R) -> R {
        f(&self.state.lock().unwrap())
    }

    /// Merges a partial filter edit into the current filter, resets to
    /// page 1 (page size preserved) and schedules a debounced fetch.
    pub fn apply_filter(&self, patch: impl FnOnce(&mut B::Filter)) {
        {
            let mut state = self.state.lock().unwrap();
            patch(&mut state.filter);
            state.pagination.page_num = 1;
        }
        self.schedule_fetch();
    }

    /// Restores the default filter set and pagination, then fetches.
    pub fn reset_filter(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.filter = B::Filter::default();
            state.pagination = Pagination::default();
        }
        self.schedule_fetch();
    }

    /// Replaces pagination only; filters are untouched.
    pub fn change_page(&self, page_num: u32, page_size: u32) {
        {
            let mut state = self.state.lock().unwrap();
            state.pagination = Pagination {
                page_num,
                page_size,
            };
        }
        self.schedule_fetch();
    }

    /// Replaces the tracked batch selection.
    pub fn set_selection(&self, keys: Vec<i64>) {
        self.state.lock().unwrap().selection = keys;
    }

    /// Re-issues the fetch with unchanged filters/pagination,
    /// immediately (not debounced). Used after every mutation.
    pub async fn refresh(&self) {
        run_fetch(
            Arc::clone(&self.backend),
            Arc::clone(&self.state),
            Arc::clone(&self.notifier),
        )
        .await;
    }

    /// Starts (or restarts) the debounce timer; when it fires, one
    /// fetch runs with whatever filter/pagination is current then.
    pub fn schedule_fetch(&self) {
        let backend = Arc::clone(&self.backend);
        let state = Arc::clone(&self.state);
        let notifier = Arc::clone(&self.notifier);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            run_fetch(backend, state, notifier).await;
        });
        if let Some(prev) = self.pending.lock().unwrap().replace(handle) {
            prev.abort();
        }
    }

    /// Cancels a pending debounce timer, if any. In-flight network
    /// calls are not affected.
    pub fn cancel_pending(&self) {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl<B: ListBackend> Drop for ListQueryController<B> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[async_trait]
impl<B: ListBackend> RefreshTarget for ListQueryController<B> {
    async fn refresh(&self) {
        ListQueryController::refresh(self).await;
    }
}

async fn run_fetch<B: ListBackend>(
    backend: Arc<B>,
    state: Arc<Mutex<ListState<B::Item, B::Filter>>>,
    notifier: Arc<dyn Notifier>,
) {
    let (filter, pagination) = {
        let mut s = state.lock().unwrap();
        s.loading = true;
        (s.filter.clone(), s.pagination.clone())
    };

    let result = backend.fetch(&filter, &pagination).await;

    // The lock is re-taken after the await: a later-started fetch may
    // already have written; whichever resolves last wins. Loading is
    // cleared on both paths so the UI can never wedge on a stuck
    // in-flight state.
    let failure = {
        let mut s = state.lock().unwrap();
        let failure = match result {
            Ok(reply) => {
                s.collection = reply.list;
                s.total = reply.pagination.total;
                None
            }
            Err(err) => Some(err),
        };
        s.loading = false;
        failure
    };
    // Notify outside the lock: a notifier is free to read the list
    // state from its callback.
    if let Some(err) = failure {
        tracing::warn!(error = %err, "list fetch failed");
        notifier.error(&err.to_string());
    }
}
