//! Project validator implementation
//! Evaluates the fixed rule table against a generated project directory

use std::path::Path;

use crate::errors::{Result, ToolsmithError};
use crate::validation::rules::{rule_set, CheckRule, ProjectSnapshot};
use crate::validation::types::ValidationReport;

/// Quality validator for generated projects
///
/// Holds the immutable rule table and nothing else. Each call to
/// [`validate`](Self::validate) is independent; the validator performs
/// no writes and keeps no cross-call state.
pub struct ProjectValidator {
    rules: Vec<CheckRule>,
}

impl ProjectValidator {
    /// Create a validator with the full rule table
    pub fn new() -> Self {
        Self { rules: rule_set() }
    }

    /// Number of rules; every report carries exactly this many findings
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Validate one project directory
    ///
    /// Reads every inspected artifact once, then evaluates each rule in
    /// table order. Returns an error only when `project_path` does not
    /// exist or is not a directory; every other condition (missing file,
    /// unparsable manifest, pattern miss) becomes a finding so the
    /// report always enumerates the whole table.
    pub fn validate(&self, project_path: &Path) -> Result<ValidationReport> {
        if !project_path.exists() {
            return Err(ToolsmithError::ProjectNotFound(project_path.to_path_buf()));
        }
        if !project_path.is_dir() {
            return Err(ToolsmithError::NotADirectory(project_path.to_path_buf()));
        }

        let snapshot = ProjectSnapshot::load(project_path);
        let findings = self
            .rules
            .iter()
            .map(|rule| rule.evaluate(&snapshot))
            .collect();

        Ok(ValidationReport::new(
            project_display_name(project_path),
            findings,
        ))
    }
}

impl Default for ProjectValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory name shown in the report header
fn project_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
