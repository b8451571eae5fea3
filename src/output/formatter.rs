//! JSON output for extracted skills

use crate::error::Result;
use std::collections::BTreeSet;

/// Serializes found skills as a JSON array of strings
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Skills come out in the set's lexicographic order
    pub fn format_skills(&self, skills: &BTreeSet<String>) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(skills)?)
        } else {
            Ok(serde_json::to_string(skills)?)
        }
    }
}
