//! Incremental page fetching with a guarded cursor.

use std::sync::{Arc, Mutex};

use crate::domain::User;
use crate::error::FetchError;
use crate::traits::UserRepository;

/// Pagination bookkeeping. Owned exclusively by the fetcher and never
/// shared or persisted.
#[derive(Debug)]
struct Cursor {
    current_page: u32,
    is_loading: bool,
    end_reached: bool,
}

#[derive(Debug)]
struct FetchState {
    cursor: Cursor,
    items: Vec<User>,
}

/// Fetches the user list one page at a time, accumulating results.
///
/// `fetch_next` is idempotent while a fetch is outstanding and after the
/// directory is exhausted: the guard returns the current list without
/// touching the repository. Re-entrancy is prevented by the loading flag,
/// not the lock — the lock is only held across synchronous cursor
/// reads/writes, never across an await.
///
/// Exhaustion is detected by the empty-page sentinel: the first empty
/// page marks the end, and no further repository calls are made. The
/// page counter only advances after a non-empty page lands, and a failed
/// fetch leaves both the counter and the accumulated list untouched.
pub struct PageFetcher {
    repository: Arc<dyn UserRepository>,
    state: Mutex<FetchState>,
}

impl PageFetcher {
    /// Create a fetcher positioned at page 1 with an empty list.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            state: Mutex::new(FetchState {
                cursor: Cursor {
                    current_page: 1,
                    is_loading: false,
                    end_reached: false,
                },
                items: Vec::new(),
            }),
        }
    }

    /// Fetch the next page and return a snapshot of the accumulated list.
    ///
    /// Returns the current list unchanged, without a repository call, if
    /// a fetch is already in flight or the directory is exhausted.
    /// Duplicates across pages are kept as-is.
    pub async fn fetch_next(&self) -> Result<Vec<User>, FetchError> {
        let page = {
            let mut state = self.state.lock().unwrap();
            if state.cursor.is_loading || state.cursor.end_reached {
                return Ok(state.items.clone());
            }
            state.cursor.is_loading = true;
            state.cursor.current_page
        };

        tracing::debug!(page, "fetching user page");
        let result = self.repository.users_page(page).await;

        let mut state = self.state.lock().unwrap();
        state.cursor.is_loading = false;
        match result {
            Ok(users) if users.is_empty() => {
                tracing::debug!(page, "empty page, directory exhausted");
                state.cursor.end_reached = true;
            }
            Ok(users) => {
                tracing::debug!(page, count = users.len(), "page loaded");
                state.items.extend(users);
                state.cursor.current_page += 1;
            }
            Err(err) => {
                tracing::warn!(page, error = %err, "page fetch failed");
                return Err(err);
            }
        }
        Ok(state.items.clone())
    }

    /// Snapshot of the accumulated list.
    pub fn items(&self) -> Vec<User> {
        self.state.lock().unwrap().items.clone()
    }

    /// The page the next fetch will request.
    pub fn current_page(&self) -> u32 {
        self.state.lock().unwrap().cursor.current_page
    }

    /// Whether the empty-page sentinel has been seen.
    pub fn end_reached(&self) -> bool {
        self.state.lock().unwrap().cursor.end_reached
    }
}
