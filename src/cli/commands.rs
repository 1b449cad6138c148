//! CLI command implementations
//!
//! The command function returns `CliResult` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level
//! `run()`.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{CliError, CliResult};
use crate::bundle::{self, DylibBundle, ManifestSource};
use crate::discover;
use crate::error::InspectError;
use crate::report::DiscoveryReport;

/// Inspect the bundle and write the JSON report.
pub fn inspect(bundle_path: &Path, output_path: &Path) -> CliResult<()> {
    inspect_with(&DylibBundle, bundle_path, output_path)
        .map_err(|e| CliError::failure(format!("error: {e}")))
}

/// Body of `inspect`, parameterized over the manifest source so tests
/// can run the full pipeline without compiling a bundle.
///
/// Both paths are normalized up front; every later step (and every error
/// message) sees the absolute form.
pub fn inspect_with(
    source: &dyn ManifestSource,
    bundle_path: &Path,
    output_path: &Path,
) -> Result<(), InspectError> {
    let bundle_path = bundle::normalized_path(bundle_path)?;
    let output_path = bundle::normalized_path(output_path)?;

    let root = source.load_manifest(&bundle_path)?;
    let report = discover::discover(&root)?;
    debug!(classes = report.tests.len(), output = %output_path.display(), "writing report");

    write_report(&report, &output_path)
}

/// Serialize the report and create-or-truncate the output file.
///
/// The JSON document is rendered before the file is touched, so a
/// failed run never leaves partial output behind.
pub fn write_report(report: &DiscoveryReport, output_path: &Path) -> Result<(), InspectError> {
    let json = report.to_pretty_json()?;
    fs::write(output_path, json).map_err(|source| InspectError::OutputFile {
        path: output_path.to_path_buf(),
        source,
    })
}
