//! opsdesk/crates/od-core/src/lib.rs
//!
//! The central domain models and interface definitions for OpsDesk.

pub mod error;
pub mod models;
pub mod seed;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
