//! User repository trait abstraction.
//!
//! The data-source seam the pagination engine and view states are
//! injected with.

use async_trait::async_trait;

use crate::domain::User;
use crate::error::FetchError;

/// Trait for fetching users from the directory.
///
/// Production code uses [`crate::repository::ApiUserRepository`]; tests
/// use [`crate::adapters::mock::MockUserRepository`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch one page of users.
    ///
    /// Pages are numbered from 1. An empty page means the directory is
    /// exhausted.
    async fn users_page(&self, page: u32) -> Result<Vec<User>, FetchError>;

    /// Fetch a single user by id.
    async fn user_details(&self, id: u64) -> Result<User, FetchError>;
}
