//! Observable state machine for a user's detail screen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use super::StatePublisher;
use crate::domain::User;
use crate::fetch::DetailFetcher;

/// Detail model for the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailView {
    pub id: u64,
    /// Full display name
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
    /// Contact email
    pub email: String,
}

impl From<&User> for UserDetailView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.full_name(),
            avatar: user.avatar.clone(),
            email: user.email.clone(),
        }
    }
}

/// Discriminated UI state for the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserDetailUiState {
    Loading,
    Error,
    Success { user: UserDetailView },
}

/// State holder for a single user's detail screen.
///
/// Same observation contract as the list: the first subscription
/// triggers the fetch, late subscribers see the latest state, and
/// [`close`](Self::close) (also run on drop) cancels in-flight work.
/// Unlike the list there is no partial content to preserve, so any
/// failure lands in `Error`.
pub struct UserDetailViewState {
    fetcher: Arc<DetailFetcher>,
    publisher: Arc<StatePublisher<UserDetailUiState>>,
    mounted: AtomicBool,
}

impl UserDetailViewState {
    /// Create the state holder around a detail fetcher.
    pub fn new(fetcher: DetailFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            publisher: Arc::new(StatePublisher::new(UserDetailUiState::Loading)),
            mounted: AtomicBool::new(false),
        }
    }

    /// Subscribe to state transitions. The first subscription triggers
    /// the fetch.
    pub fn subscribe(&self) -> watch::Receiver<UserDetailUiState> {
        let rx = self.publisher.subscribe();
        if !self.mounted.swap(true, Ordering::SeqCst) {
            self.spawn_fetch();
        }
        rx
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UserDetailUiState {
        self.publisher.current()
    }

    /// Re-enter `Loading` and fetch again (manual retry).
    pub fn reload(&self) {
        if self.publisher.is_closed() {
            return;
        }
        self.publisher.publish(UserDetailUiState::Loading);
        self.spawn_fetch();
    }

    /// Tear down: cancel in-flight fetches and stop publishing. Idempotent.
    pub fn close(&self) {
        self.publisher.close();
    }

    fn spawn_fetch(&self) {
        if self.publisher.is_closed() {
            return;
        }

        let fetcher = Arc::clone(&self.fetcher);
        let publisher = Arc::clone(&self.publisher);
        let mut shutdown = publisher.shutdown();

        tokio::spawn(async move {
            let result = tokio::select! {
                _ = shutdown.changed() => return,
                result = fetcher.fetch() => result,
            };

            match result {
                Ok(user) => {
                    publisher.publish(UserDetailUiState::Success {
                        user: UserDetailView::from(&user),
                    });
                }
                Err(err) => {
                    tracing::warn!(id = fetcher.id(), error = %err, "detail fetch failed");
                    publisher.publish(UserDetailUiState::Error);
                }
            }
        });
    }
}

impl Drop for UserDetailViewState {
    fn drop(&mut self) {
        self.close();
    }
}
