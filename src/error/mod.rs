//! Error handling
//!
//! Defines rejection reasons, host errors, and their handling.

pub mod handlers;
pub mod types;

pub use types::*;
