//! Utility modules for common functionality.
//!
//! Currently only logging configuration.

pub mod logger;
