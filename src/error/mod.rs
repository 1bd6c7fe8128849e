//! Error handling
//!
//! Defines application error types and how they are reported.

pub mod handlers;
pub mod types;

pub use types::*;
