//! Repository implementation backed by the directory API.

use async_trait::async_trait;

use crate::api::UsersApiClient;
use crate::domain::User;
use crate::error::FetchError;
use crate::traits::UserRepository;

/// [`UserRepository`] implementation that talks to the directory API and
/// maps wire records into domain users.
pub struct ApiUserRepository {
    api: UsersApiClient,
}

impl ApiUserRepository {
    /// Create a repository over the given API client.
    pub fn new(api: UsersApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserRepository for ApiUserRepository {
    async fn users_page(&self, page: u32) -> Result<Vec<User>, FetchError> {
        let response = self.api.list_users(page).await?;
        Ok(response.data.into_iter().map(User::from).collect())
    }

    async fn user_details(&self, id: u64) -> Result<User, FetchError> {
        let response = self.api.get_user(id).await?;
        Ok(response.data.into())
    }
}
