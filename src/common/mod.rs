//! Common types and utilities shared across the crate.
//!
//! This module contains:
//! - Configuration constants (node arity, listing width)
//! - Error types

pub mod config;
pub mod error;

pub use error::{Error, Result};
