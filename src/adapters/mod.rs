//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters that implement the
//! traits defined in `crate::traits`, enabling dependency injection and
//! testability.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockUserRepository`] - Scripted user pages with call recording

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockUserRepository};
pub use reqwest_http::ReqwestHttpClient;
