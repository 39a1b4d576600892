//! User payloads as serialized by the directory API.

use serde::{Deserialize, Serialize};

/// A user record on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    /// Unique identifier
    pub id: u64,
    /// Contact email
    pub email: String,
    /// First name part
    pub first_name: String,
    /// Last name part
    pub last_name: String,
    /// Avatar image URL
    pub avatar: String,
}

/// Response from the paginated user-list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPageResponse {
    /// Page number this response covers
    pub page: u32,
    /// Page size the server used
    pub per_page: u32,
    /// Total number of users in the directory
    pub total: u32,
    /// Total number of pages at this page size
    pub total_pages: u32,
    /// The users on this page (may be empty past the last page)
    #[serde(default)]
    pub data: Vec<UserDto>,
}

/// Response from the user-detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDetailResponse {
    /// The requested user
    pub data: UserDto,
}
