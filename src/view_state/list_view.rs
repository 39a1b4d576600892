//! Observable state machine for the paginated user list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use super::StatePublisher;
use crate::domain::User;
use crate::fetch::PageFetcher;

/// Row model for the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListEntry {
    pub id: u64,
    /// Full display name
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
}

impl From<&User> for UserListEntry {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.full_name(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Discriminated UI state for the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListUiState {
    /// The first page is being fetched; nothing to render yet.
    Loading,
    /// The first load failed; render an error affordance with retry.
    Error,
    /// At least one fetch cycle completed.
    Success {
        users: Vec<UserListEntry>,
        /// True while a follow-up page fetch is outstanding, so the UI
        /// can render a trailing progress indicator.
        loading_page: bool,
    },
}

/// User-triggered events the list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserListAction {
    /// The rendered list reached its end; load the next page.
    LoadMore,
    /// Manual retry from the error state.
    Retry,
}

/// State holder for the user list screen.
///
/// Observers subscribe with [`subscribe`](Self::subscribe); the first
/// subscription triggers the initial fetch. Fetches run on spawned tasks
/// and publish transitions in computation order. A pagination failure
/// after any successful page keeps the rendered items and only resets
/// the trailing indicator; it never regresses to `Error`.
///
/// [`close`](Self::close) (also run on drop) cancels in-flight fetches
/// and guarantees no further transitions are published.
pub struct UserListViewState {
    fetcher: Arc<PageFetcher>,
    publisher: Arc<StatePublisher<UserListUiState>>,
    mounted: AtomicBool,
}

impl UserListViewState {
    /// Create the state holder around a page fetcher.
    pub fn new(fetcher: PageFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            publisher: Arc::new(StatePublisher::new(UserListUiState::Loading)),
            mounted: AtomicBool::new(false),
        }
    }

    /// Subscribe to state transitions.
    ///
    /// The receiver's current value is the latest state, so late
    /// subscribers catch up immediately. Dropping the receiver
    /// unsubscribes. The first subscription triggers the initial fetch.
    pub fn subscribe(&self) -> watch::Receiver<UserListUiState> {
        let rx = self.publisher.subscribe();
        if !self.mounted.swap(true, Ordering::SeqCst) {
            self.spawn_fetch();
        }
        rx
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UserListUiState {
        self.publisher.current()
    }

    /// Handle a user-triggered event.
    pub fn on_action(&self, action: UserListAction) {
        match action {
            UserListAction::LoadMore => {
                if let UserListUiState::Success { users, .. } = self.publisher.current() {
                    self.publisher.publish(UserListUiState::Success {
                        users,
                        loading_page: true,
                    });
                }
                self.spawn_fetch();
            }
            UserListAction::Retry => {
                if matches!(self.publisher.current(), UserListUiState::Error) {
                    self.publisher.publish(UserListUiState::Loading);
                    self.spawn_fetch();
                }
            }
        }
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
                result = fetcher.fetch_next() => result,
            };

            match result {
                Ok(users) => {
                    let users = users.iter().map(UserListEntry::from).collect();
                    publisher.publish(UserListUiState::Success {
                        users,
                        loading_page: false,
                    });
                }
                Err(err) => match publisher.current() {
                    // Failed pagination keeps what the user already has.
                    UserListUiState::Success { users, .. } => {
                        tracing::warn!(error = %err, "page load failed, keeping loaded users");
                        publisher.publish(UserListUiState::Success {
                            users,
                            loading_page: false,
                        });
                    }
                    _ => {
                        tracing::warn!(error = %err, "initial load failed");
                        publisher.publish(UserListUiState::Error);
                    }
                },
            }
        });
    }
}

impl Drop for UserListViewState {
    fn drop(&mut self) {
        self.close();
    }
}
