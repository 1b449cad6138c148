//! Inspector error types
//!
//! All errors are fatal for a single invocation: the CLI boundary maps
//! them to an `error: ...` message and exit code 1. Errors that concern
//! a path carry the normalized path so the message names the exact
//! location that was tried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while inspecting a test bundle.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("unable to load test bundle at '{path}': {reason}", path = .path.display())]
    BundleLoad { path: PathBuf, reason: String },

    #[error("could not open output file '{path}' for writing: {source}", path = .path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("test description '{0}' does not match the '-[Class method]' pattern")]
    MalformedDescription(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
