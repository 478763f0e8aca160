//! Domain layer - Core authorization entities
//!
//! Roles and session records, independent of transport and storage.

pub mod role;
pub mod session;

pub use role::Role;
pub use session::Session;
