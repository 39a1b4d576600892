//! View-state holders decoupling observers from the fetch layer.
//!
//! Each screen-facing state holder owns its fetcher, publishes a
//! discriminated UI state through a watch channel (late subscribers see
//! the latest value immediately), and tears down its in-flight work when
//! closed or dropped.
//!
//! - [`UserListViewState`]: the paginated user list
//! - [`UserDetailViewState`]: a single user's detail screen

mod detail_view;
mod list_view;
mod publisher;

pub use detail_view::{UserDetailUiState, UserDetailView, UserDetailViewState};
pub use list_view::{UserListAction, UserListEntry, UserListUiState, UserListViewState};

pub(crate) use publisher::StatePublisher;
