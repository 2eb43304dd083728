//! Common utilities for the Lemur renderer.
//!
//! This crate provides shared infrastructure used by all engine components:
//! - **Scanner** - generic cursor primitives the concrete parsers build on
//! - **Warning System** - colored terminal output for unsupported features

pub mod scan;
pub mod warning;

pub use scan::{ScanError, Scanner, rtrim};
