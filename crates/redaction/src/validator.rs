//! Post-redaction leak check. Scans a tree that is claimed to be sanitized
//! and reports any internal or coach-only key that survived.

use serde::Serialize;
use serde_json::Value;

use crate::policy::ExclusionPolicy;

/// Outcome of a leak check. Offenses are reported as data; callers decide
/// whether a leak is fatal.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    /// Dotted/bracketed paths of surviving forbidden keys, e.g.
    /// `blocks[3].meta.qa_results`. Audience-restricted keys carry a
    /// `(coach-only)` tag.
    pub found_fields: Vec<String>,
}

/// Read-only scanner re-applying the exclusion vocabulary to sanitized
/// output. Checks the union of audience-restricted keys across every
/// deliverable type, which is wider than any single deliverable's policy.
pub struct OutputValidator {
    policy: ExclusionPolicy,
    audience_restricted: Vec<&'static str>,
}

impl OutputValidator {
    pub fn new() -> Self {
        let policy = ExclusionPolicy::new();
        let audience_restricted = policy.all_audience_restricted();
        Self {
            policy,
            audience_restricted,
        }
    }

    /// Check a sanitized tree for surviving forbidden keys.
    pub fn validate(&self, sanitized: &Value) -> ValidationReport {
        let mut found = Vec::new();
        self.walk(sanitized, "", &mut found);
        ValidationReport {
            valid: found.is_empty(),
            found_fields: found,
        }
    }

    fn walk(&self, value: &Value, path: &str, found: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let child_path = join(path, key);
                    if self.policy.universal().contains(&key.as_str()) {
                        found.push(child_path.clone());
                    } else if self.audience_restricted.contains(&key.as_str()) {
                        found.push(format!("{} (coach-only)", child_path));
                    }
                    self.walk(child, &child_path, found);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.walk(child, &format!("{}[{}]", path, index), found);
                }
            }
            _ => {}
        }
    }
}

impl Default for OutputValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}
