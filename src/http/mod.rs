//! HTTP Module
//!
//! axum boundary in front of the query service.
//!
//! ## Routes
//! - `GET /`               - service descriptor
//! - `GET /data/teziutlan` - regional records (`año`, `causa`)
//! - `GET /data/nacional`  - national records (`entidad`, `año`)
//! - `GET /docs/*`         - static documentation
//!
//! A non-integer `año` is rejected here with 400, so the query service
//! only ever sees well-typed filters.

mod error;
mod handlers;
mod router;
mod server;

pub use error::ApiError;
pub use handlers::{Endpoints, ServiceDescriptor};
pub use router::build as build_router;
pub use server::Server;

use crate::query::QueryService;

/// Shared per-request state
#[derive(Debug, Clone)]
pub struct AppState {
    pub query: QueryService,
}

impl AppState {
    pub fn new(query: QueryService) -> Self {
        Self { query }
    }
}
