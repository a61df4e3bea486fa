//! Common utilities for the Wombat crates.
//!
//! This crate provides shared infrastructure used by the selector builder and
//! the object utilities:
//! - **Warning System** - colored terminal output for suspicious input

pub mod warning;
