//! Expose seomark's CLI internals for use in xtask and integration tests.
//! Library users should depend on `seomark-core` instead.
pub mod cli;
pub mod commands;
pub mod error;
pub mod page;
