//! Single-user detail lookup.

use std::sync::Arc;

use crate::domain::User;
use crate::error::FetchError;
use crate::traits::UserRepository;

/// Fetches one user by id. Stateless; every call goes to the repository.
pub struct DetailFetcher {
    repository: Arc<dyn UserRepository>,
    id: u64,
}

impl DetailFetcher {
    /// Create a fetcher for the given user id.
    pub fn new(repository: Arc<dyn UserRepository>, id: u64) -> Self {
        Self { repository, id }
    }

    /// The id this fetcher is keyed to.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Fetch the user.
    pub async fn fetch(&self) -> Result<User, FetchError> {
        self.repository.user_details(self.id).await
    }
}
