//! In-memory product catalog core.
//!
//! Three cooperating pieces:
//!
//! - [`store::ProductStore`] owns the collection, assigns identity, and
//!   implements create/read/update/patch/delete/exists.
//! - [`query`] turns the full collection plus filter/sort/page parameters
//!   into one deterministic [`query::Page`] of results.
//! - [`validate`] checks candidate payloads against the field rules and
//!   returns human-readable error strings; it runs before any mutation.
//!
//! The HTTP surface lives in the `catalog-server` crate; this crate has no
//! I/O and no async.

pub mod model;
pub mod query;
pub mod store;
pub mod validate;

pub use model::{demo_catalog, Category, Product, ProductDraft, ProductPatch};
pub use query::{execute, ListParams, Page, SortKey, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use store::ProductStore;
pub use validate::{validate_draft, validate_patch};
