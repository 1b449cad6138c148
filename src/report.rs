//! Discovery report model
//!
//! The JSON document the inspector writes: a constant-named root carrying
//! one entry per discovered test class, each carrying its method names.
//! Field order in the serialized output is declaration order (`name`
//! before `tests`). The model is built once per invocation and never
//! mutated after construction.

use serde::{Deserialize, Serialize};

/// Root report name, fixed for every invocation.
pub const REPORT_NAME: &str = "All Tests";

/// A single discovered test method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
}

/// A group of test methods sharing an originating type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestClass {
    /// Qualified type name of the class, or a fallback suite name.
    pub name: String,
    pub tests: Vec<TestCase>,
}

/// The root output object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryReport {
    pub name: String,
    pub tests: Vec<TestClass>,
}

impl DiscoveryReport {
    /// Build a report over the given classes under the fixed root name.
    pub fn new(tests: Vec<TestClass>) -> Self {
        Self {
            name: REPORT_NAME.to_string(),
            tests,
        }
    }

    /// Render the report as human-readable, pretty-printed JSON.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_renders_fixed_root() {
        let json = DiscoveryReport::new(vec![]).to_pretty_json().unwrap();
        assert_eq!(json, "{\n  \"name\": \"All Tests\",\n  \"tests\": []\n}");
    }

    #[test]
    fn keys_serialize_in_declaration_order() {
        let report = DiscoveryReport::new(vec![TestClass {
            name: "Module.Foo".to_string(),
            tests: vec![TestCase {
                name: "testA".to_string(),
            }],
        }]);
        let json = report.to_pretty_json().unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let tests_pos = json.find("\"tests\"").unwrap();
        assert!(name_pos < tests_pos);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = DiscoveryReport::new(vec![
            TestClass {
                name: "Module.Foo".to_string(),
                tests: vec![
                    TestCase {
                        name: "testA".to_string(),
                    },
                    TestCase {
                        name: "testB".to_string(),
                    },
                ],
            },
            TestClass {
                name: "Module.Empty".to_string(),
                tests: vec![],
            },
        ]);
        let json = report.to_pretty_json().unwrap();
        let reparsed: DiscoveryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, report);
    }
}
