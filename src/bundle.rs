//! Bundle loading and path normalization
//!
//! A test bundle is a compiled dynamic library (or a directory holding
//! one) that exports a well-known manifest symbol. Loading the library
//! runs whatever initializers the bundle has; the bundle may write to
//! stdout while it is being loaded, and this tool does not try to capture
//! that. The manifest export hands back a JSON document describing the
//! registered suite hierarchy, which replaces runtime reflection: the
//! bundle's binding layer supplies qualified type names explicitly.
//!
//! All `unsafe` in this crate lives here, at the FFI call into the
//! manifest export.

use std::ffi::CStr;
use std::fs;
use std::os::raw::c_char;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use path_absolutize::Absolutize;
use tracing::{debug, info};

use crate::error::InspectError;
use crate::manifest::TestSuite;

/// Export every loadable bundle provides: returns a NUL-terminated UTF-8
/// JSON manifest describing the registered suites. The returned pointer
/// must stay valid for the lifetime of the loaded library.
pub const MANIFEST_SYMBOL: &[u8] = b"testprobe_manifest";

type ManifestFn = unsafe extern "C" fn() -> *const c_char;

/// Resolve a path to an absolute, normalized form: relative paths are
/// resolved against the current working directory, and `.`/`..`/doubled
/// separators are collapsed lexically. The path does not have to exist.
pub fn normalized_path(path: &Path) -> Result<PathBuf, InspectError> {
    Ok(path.absolutize()?.into_owned())
}

/// Source of a bundle manifest.
///
/// The dynamic-library loader is the production implementation; tests
/// substitute in-memory manifests to exercise the pipeline without
/// compiling a bundle.
pub trait ManifestSource {
    /// Load the bundle at `bundle_path` and return its root suite.
    fn load_manifest(&self, bundle_path: &Path) -> Result<TestSuite, InspectError>;
}

/// Loads the bundle as a dynamic library and reads its manifest export.
pub struct DylibBundle;

impl ManifestSource for DylibBundle {
    fn load_manifest(&self, bundle_path: &Path) -> Result<TestSuite, InspectError> {
        let library_path = locate_library(bundle_path)?;
        debug!(library = %library_path.display(), "loading test bundle");

        let json = read_manifest_json(&library_path).map_err(|reason| {
            InspectError::BundleLoad {
                path: bundle_path.to_path_buf(),
                reason,
            }
        })?;

        let root = TestSuite::from_json(&json).map_err(|e| InspectError::BundleLoad {
            path: bundle_path.to_path_buf(),
            reason: format!("invalid manifest JSON: {e}"),
        })?;

        info!(bundle = %bundle_path.display(), "loaded test bundle");
        Ok(root)
    }
}

/// Platform extension for dynamic libraries.
fn library_extension() -> &'static str {
    if cfg!(target_os = "windows") {
        "dll"
    } else if cfg!(target_os = "macos") {
        "dylib"
    } else {
        "so"
    }
}

/// A bundle path is either the library file itself or a directory
/// containing exactly one library with the platform extension.
fn locate_library(bundle_path: &Path) -> Result<PathBuf, InspectError> {
    if !bundle_path.is_dir() {
        return Ok(bundle_path.to_path_buf());
    }

    let ext = library_extension();
    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(bundle_path)? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == ext) {
            candidates.push(path);
        }
    }
    candidates.sort();

    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        0 => Err(InspectError::BundleLoad {
            path: bundle_path.to_path_buf(),
            reason: format!("no .{ext} library found in bundle directory"),
        }),
        n => Err(InspectError::BundleLoad {
            path: bundle_path.to_path_buf(),
            reason: format!("bundle directory contains {n} .{ext} libraries, expected one"),
        }),
    }
}

/// Load the library and copy its manifest JSON out.
///
/// Errors are returned as plain reasons; the caller attaches the bundle
/// path.
fn read_manifest_json(library_path: &Path) -> Result<String, String> {
    // SAFETY: loading runs the bundle's constructors, exactly as the host
    // test framework would. The manifest export's contract is a borrowed,
    // NUL-terminated string valid while the library stays loaded; it is
    // copied into an owned String before the library is dropped.
    unsafe {
        let library = Library::new(library_path).map_err(|e| e.to_string())?;
        let manifest: Symbol<ManifestFn> = library.get(MANIFEST_SYMBOL).map_err(|_| {
            format!(
                "bundle does not export `{}`",
                String::from_utf8_lossy(MANIFEST_SYMBOL)
            )
        })?;

        let ptr = manifest();
        if ptr.is_null() {
            return Err("bundle manifest export returned null".to_string());
        }
        CStr::from_ptr(ptr)
            .to_str()
            .map(str::to_owned)
            .map_err(|e| format!("bundle manifest is not valid UTF-8: {e}"))
    }
}
