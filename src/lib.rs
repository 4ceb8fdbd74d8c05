//! # Incendios
//!
//! Read-only HTTP API over historical wildfire-incident records:
//! - Two datasets (Teziutlán regional subset, national) loaded once at startup
//! - Optional query-parameter filters (exact year, case-insensitive text)
//! - Hard cap of 100 records per response
//! - Static documentation pages under `/docs`
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HTTP Boundary (axum)                      │
//! │        /   /data/teziutlan   /data/nacional   /docs          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Query Service                             │
//! │            (stateless, one pass per request)                 │
//! └──────────┬──────────────────┬──────────────────┬────────────┘
//!            │                  │                  │
//!            ▼                  ▼                  ▼
//!   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!   │ Dataset Store│──▶│ Filter Engine│──▶│   Limiter    │
//!   │  (immutable) │   │    (AND)     │   │    (100)     │
//!   └──────────────┘   └──────────────┘   └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod filter;
pub mod limit;
pub mod query;
pub mod http;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{IncendiosError, Result};
pub use config::Config;
pub use record::Record;
pub use store::{Dataset, DatasetStore};
pub use query::{NationalQuery, QueryService, RegionalQuery};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the service
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
