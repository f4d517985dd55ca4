//! portal-ui - View components and UI stores for the portal page
//!
//! Components here are pure and props-based. Browser wiring lives in
//! portal-web.

pub mod components;
pub mod stores;

pub use components::*;
