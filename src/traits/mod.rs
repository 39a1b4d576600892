//! Trait abstractions for external collaborators.
//!
//! These are the seams the library is assembled around: the HTTP client
//! the API layer talks through, and the user repository the pagination
//! engine is injected with. Production adapters live in
//! [`crate::adapters`]; test doubles in [`crate::adapters::mock`].

pub mod http;
pub mod repository;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use repository::UserRepository;
