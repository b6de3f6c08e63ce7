//! catalog-core: access resolution and citation derivation.
//!
//! Given already-fetched bibliographic records and the viewer's
//! authentication state, this crate decides which access affordances an item
//! exposes and derives role-partitioned citation metadata for an edition.
//!
//! Everything here is a pure function over immutable input. Navigation,
//! analytics and fetching belong to the caller.
//!
//! # Modules
//!
//! - [`access`]: link classification and the per-item access decision
//! - [`citation`]: citation record derivation
//! - [`display`]: truncation, placeholders and URL normalization
//! - [`config`]: tunables loaded from TOML or JSON

pub mod access;
pub mod citation;
pub mod config;
pub mod display;
pub mod error;

pub use access::*;
pub use citation::*;
pub use config::*;
pub use display::*;
pub use error::*;

pub use catalog_domain as domain;
