//! Test Bundle Inspector
//!
//! `testprobe` loads a compiled test bundle, enumerates the test classes
//! and test methods registered in it, and writes the result as a JSON
//! document. The bundle supplies an explicit manifest of its suites; the
//! inspector walks that hierarchy, normalizes registered method names,
//! and serializes the nested name list.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Unsafe Policy
//!
//! `unsafe` is confined to the FFI boundary in [`bundle`], where the
//! loaded library's manifest export is called. Everything past the JSON
//! manifest string is safe code.

pub mod bundle;
pub mod cli;
pub mod discover;
pub mod error;
pub mod manifest;
pub mod report;

pub use discover::discover;
pub use error::InspectError;
pub use report::{DiscoveryReport, TestCase, TestClass};
