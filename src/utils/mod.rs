//! Utility functions
//!
//! Provides logging utilities.

pub mod logging;
