//! Bundle manifest format
//!
//! The registry a test bundle's binding layer supplies instead of runtime
//! reflection: a nested suite hierarchy in which every entry is tagged as
//! either a sub-suite or a concrete registered test case. The expected
//! layout mirrors the host framework's default suite: the root's entries
//! are outer groupings, their entries are per-class suites, and those
//! hold the leaf cases.
//!
//! Per-case fields:
//!
//! - `description` — the framework's registered description, of the form
//!   `-[ClassName MethodName]` or `-[ClassName MethodNameAndReturnError:]`
//!   for throwing variants.
//! - `type_name` — the fully qualified type name of the concrete test
//!   class, when the binding layer can provide one.

use serde::{Deserialize, Serialize};

/// One entry in a suite: either a nested suite or a registered case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuiteEntry {
    Suite(TestSuite),
    Case(RegisteredCase),
}

/// A grouping node in the bundle's test hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub entries: Vec<SuiteEntry>,
}

/// A single invocable test method as registered by the framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredCase {
    pub description: String,
    #[serde(default)]
    pub type_name: Option<String>,
}

impl TestSuite {
    /// Parse a manifest JSON document into the root suite.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_suites_and_cases() {
        let root = TestSuite::from_json(
            r#"{
                "name": "All tests",
                "entries": [
                    {
                        "kind": "suite",
                        "name": "Example.xctest",
                        "entries": [
                            {
                                "kind": "suite",
                                "name": "FooTests",
                                "entries": [
                                    {
                                        "kind": "case",
                                        "description": "-[Example.FooTests testA]",
                                        "type_name": "Example.FooTests"
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(root.name.as_deref(), Some("All tests"));
        let SuiteEntry::Suite(group) = &root.entries[0] else {
            panic!("expected outer suite");
        };
        let SuiteEntry::Suite(class) = &group.entries[0] else {
            panic!("expected class suite");
        };
        let SuiteEntry::Case(case) = &class.entries[0] else {
            panic!("expected leaf case");
        };
        assert_eq!(case.description, "-[Example.FooTests testA]");
        assert_eq!(case.type_name.as_deref(), Some("Example.FooTests"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let root = TestSuite::from_json(r#"{"entries": []}"#).unwrap();
        assert_eq!(root.name, None);
        assert!(root.entries.is_empty());

        let case: SuiteEntry =
            serde_json::from_str(r#"{"kind": "case", "description": "-[Foo testA]"}"#).unwrap();
        let SuiteEntry::Case(case) = case else {
            panic!("expected case");
        };
        assert_eq!(case.type_name, None);
    }

    #[test]
    fn unknown_entry_kind_is_rejected() {
        let result: Result<SuiteEntry, _> =
            serde_json::from_str(r#"{"kind": "widget", "description": "-[Foo testA]"}"#);
        assert!(result.is_err());
    }
}
