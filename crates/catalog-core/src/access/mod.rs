//! Access resolution.
//!
//! Links are classified one at a time ([`classify`]) and the classified set
//! for an item is folded into a single [`AccessDecision`] ([`resolve_access`]).

pub mod classify;
pub mod resolve;

pub use classify::*;
pub use resolve::*;
