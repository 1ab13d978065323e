//! Plan files and requisite specs consumed by the driver.

use crate::error::{PlanError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A single precedence constraint: `before` must be taken before `after`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requisite {
    pub before: String,
    pub after: String,
}

impl Requisite {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Parses `BEFORE:AFTER`, e.g. `Ohpe:Ohja`
impl FromStr for Requisite {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let (before, after) = s
            .split_once(':')
            .ok_or_else(|| PlanError::InvalidRequisite(s.to_string()))?;
        let (before, after) = (before.trim(), after.trim());
        if before.is_empty() || after.is_empty() {
            return Err(PlanError::InvalidRequisite(s.to_string()));
        }
        Ok(Self::new(before, after))
    }
}

/// Courses and requisites as read from a JSON plan file.
///
/// ```json
/// { "courses": ["Ohpe", "Ohja"], "requisites": [{ "before": "Ohpe", "after": "Ohja" }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSpec {
    pub courses: Vec<String>,
    #[serde(default)]
    pub requisites: Vec<Requisite>,
}

impl PlanSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Append courses and requisites given on the command line
    pub fn extend(&mut self, courses: &[String], requisites: &[Requisite]) {
        self.courses.extend(courses.iter().cloned());
        self.requisites.extend(requisites.iter().cloned());
    }
}
