//! roster - client library for a paginated users directory API
//!
//! Fetches users page by page from a reqres-style REST API and exposes
//! observable list/detail view states for a UI layer to render.

pub mod adapters;
pub mod api;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod models;
pub mod repository;
pub mod traits;
pub mod view_state;
