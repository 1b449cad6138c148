//! Suite traversal and method-name extraction
//!
//! Walks the two-level hierarchy of the bundle manifest (root entries are
//! outer groupings, their entries are per-class suites) and builds the
//! output report. Entries that are not suites at the grouping levels, or
//! not cases at the leaf level, are skipped.

use tracing::debug;

use crate::error::InspectError;
use crate::manifest::{SuiteEntry, TestSuite};
use crate::report::{DiscoveryReport, TestCase, TestClass};

/// Suffix the framework appends when registering throwing test methods.
const THROWING_SUFFIX: &str = "AndReturnError";

/// Class name used when neither a type name nor a suite name is known.
const FALLBACK_CLASS_NAME: &str = "nil";

/// Delimiters separating the tokens of a registered description.
const DESCRIPTION_DELIMITERS: [char; 4] = ['[', ' ', ']', ':'];

/// Walk the root suite and produce the discovery report.
pub fn discover(root: &TestSuite) -> Result<DiscoveryReport, InspectError> {
    let mut classes = Vec::new();
    for group in suites(&root.entries) {
        for class_suite in suites(&group.entries) {
            classes.push(collect_class(class_suite)?);
        }
    }
    debug!(classes = classes.len(), "discovery complete");
    Ok(DiscoveryReport::new(classes))
}

/// The suite entries of a level, in order, with leaf cases skipped.
fn suites(entries: &[SuiteEntry]) -> impl Iterator<Item = &TestSuite> {
    entries.iter().filter_map(|entry| match entry {
        SuiteEntry::Suite(suite) => Some(suite),
        SuiteEntry::Case(_) => None,
    })
}

/// Build one report entry from a per-class suite.
///
/// The display name is the qualified type name of the first leaf case
/// that carries one; failing that the suite's own name, failing that a
/// literal placeholder.
fn collect_class(suite: &TestSuite) -> Result<TestClass, InspectError> {
    let name = suite
        .entries
        .iter()
        .find_map(|entry| match entry {
            SuiteEntry::Case(case) => case.type_name.clone(),
            SuiteEntry::Suite(_) => None,
        })
        .or_else(|| suite.name.clone())
        .unwrap_or_else(|| FALLBACK_CLASS_NAME.to_string());

    let mut tests = Vec::new();
    for entry in &suite.entries {
        if let SuiteEntry::Case(case) = entry {
            tests.push(TestCase {
                name: method_name_from_description(&case.description)?,
            });
        }
    }

    debug!(class = %name, tests = tests.len(), "collected test class");
    Ok(TestClass { name, tests })
}

/// Extract the canonical method name from a registered description.
///
/// Descriptions have the form `-[ClassName MethodName]`, or
/// `-[ClassName MethodNameAndReturnError:]` for throwing methods the
/// framework renamed during registration. Splitting on the delimiter set
/// and discarding empty tokens yields `-`, the class name, and the raw
/// method name; anything shorter is a malformed description. The
/// registration suffix is stripped to recover the canonical name.
pub fn method_name_from_description(description: &str) -> Result<String, InspectError> {
    let raw = description
        .split(DESCRIPTION_DELIMITERS)
        .filter(|token| !token.is_empty())
        .nth(2)
        .ok_or_else(|| InspectError::MalformedDescription(description.to_string()))?;

    Ok(raw.strip_suffix(THROWING_SUFFIX).unwrap_or(raw).to_string())
}
