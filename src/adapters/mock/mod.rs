//! Mock implementations for testing.

pub mod http;
pub mod repository;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use repository::MockUserRepository;
