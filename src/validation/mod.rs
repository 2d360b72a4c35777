//! Project quality validation
//! Fixed rule table, snapshot loading, and report rendering

pub mod rules;
pub mod types;
pub mod validator;

pub use rules::{CheckRule, ProjectSnapshot, RuleOutcome, REQUIRED_FILES};
pub use types::{Finding, ProjectManifest, RuleCategory, Severity, ValidationReport, Verdict};
pub use validator::ProjectValidator;
