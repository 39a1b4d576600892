//! Wire models for the directory API.

mod user;

pub use user::{UserDetailResponse, UserDto, UserPageResponse};
