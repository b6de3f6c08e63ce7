//! Bibliographic domain types consumed by the catalog front end
//!
//! These are read-only projections of records fetched from the remote
//! catalog service:
//! - Work: The bibliographic umbrella (title, series, agents, measurements)
//! - Edition: One edition of a work, with its items and edition-level agents
//! - Item: A physical/digital manifestation carrying access links and rights
//! - AccessLink: A reachable resource variant tagged with intent flags
//! - Agent: A named party credited with one or more roles
//! - AuthState: Whether the current viewer holds a valid credential

pub mod agent;
pub mod auth;
pub mod edition;
pub mod item;
pub mod link;
pub mod work;

mod de;

pub use agent::*;
pub use auth::*;
pub use edition::*;
pub use item::*;
pub use link::*;
pub use work::*;
