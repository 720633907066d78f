//! calcdemo: calculator and comparator demonstration (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod arith;
pub mod config;
pub mod constants;
pub mod demo;
pub mod env;
pub mod logging;
