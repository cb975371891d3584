//! Shared test support for the rules workspace.
//!
//! Unit tests, integration tests and the CLI tests all pull logging and
//! proptest configuration from here so every suite behaves the same.

pub mod logging;
pub mod proptest_prelude;
