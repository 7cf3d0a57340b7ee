//! Video game catalogue HTTP API.
//!
//! The crate is organised hexagonally: `domain` holds entities and ports,
//! `inbound::http` the REST adapter, `outbound::persistence` the PostgreSQL
//! adapter, and `server` the bootstrap that wires them into a fixed
//! middleware pipeline.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
