//! Catalog Server - HTTP REST API for the product catalog
//!
//! This crate is the plumbing around the `catalog` core: routing,
//! configuration, API-key authentication, and JSON error rendering.
//!
//! # Features
//!
//! - **CRUD surface**: create, read, update, patch, and delete products
//! - **Listing**: pagination, category/price filters, sorting, and search
//! - **Authentication**: shared-secret API key check on all `/api/v1` routes
//! - **Middleware**: compression, CORS, request ID tracking, structured logging
//! - **Configuration**: environment variable and file-based configuration
//! - **Graceful Shutdown**: proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! Public (no authentication): `GET /`, `GET /health`, `GET /ready`.
//!
//! Protected (API key in `X-API-Key` or `Authorization: Bearer <key>`):
//!
//! - `GET    /api/v1/products` - list with pagination/filter/sort/search
//! - `POST   /api/v1/products` - create (201 + Location header)
//! - `GET    /api/v1/products/{id}` - fetch one record
//! - `PUT    /api/v1/products/{id}` - full update
//! - `PATCH  /api/v1/products/{id}` - partial update
//! - `DELETE /api/v1/products/{id}` - delete (204)
//! - `HEAD   /api/v1/products/{id}` - existence probe
//! - `OPTIONS /api/v1/products` - supported methods

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
