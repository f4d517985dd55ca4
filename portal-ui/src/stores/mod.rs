//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. The
//! web services are the only writers.

pub mod auth;
pub mod player;

pub use auth::*;
pub use player::*;
