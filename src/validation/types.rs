//! Validation report type definitions

use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Rule categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    /// Required files and directories exist
    Structure,

    /// The manifest parses and declares the expected fields
    Manifest,

    /// Heuristic source patterns (API call, error handling, hooks)
    CodeQuality,

    /// README and env-template content
    Documentation,

    /// Hosting descriptors (rewrites/redirects)
    Deployment,
}

impl RuleCategory {
    /// All categories in the order reports render them
    pub const ALL: [RuleCategory; 5] = [
        RuleCategory::Structure,
        RuleCategory::Manifest,
        RuleCategory::CodeQuality,
        RuleCategory::Documentation,
        RuleCategory::Deployment,
    ];

    /// Header label used in rendered reports
    pub fn label(&self) -> &'static str {
        match self {
            RuleCategory::Structure => "structure",
            RuleCategory::Manifest => "manifest",
            RuleCategory::CodeQuality => "code-quality",
            RuleCategory::Documentation => "documentation",
            RuleCategory::Deployment => "deployment",
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Finding severity
///
/// Only `Required` failures flip the overall verdict; the rest are
/// reported as warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Failure makes the verdict FAIL
    Required,

    /// Failure is reported as a warning
    Recommended,

    /// Failure is informational only
    Optional,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Required => "required",
            Severity::Recommended => "recommended",
            Severity::Optional => "optional",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Overall report verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// One rule's outcome for one project
///
/// Findings are created once per run and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Rule identifier
    pub rule: String,

    /// Short statement of what the rule checks
    pub description: String,

    /// Rule category
    pub category: RuleCategory,

    /// Rule severity
    pub severity: Severity,

    /// Whether the rule passed
    pub passed: bool,

    /// Remediation hint, present on failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Finding {
    /// Create a passing finding
    pub fn pass(
        rule: impl Into<String>,
        description: impl Into<String>,
        category: RuleCategory,
        severity: Severity,
    ) -> Self {
        Self {
            rule: rule.into(),
            description: description.into(),
            category,
            severity,
            passed: true,
            message: None,
        }
    }

    /// Create a failing finding with a remediation message
    pub fn fail(
        rule: impl Into<String>,
        description: impl Into<String>,
        category: RuleCategory,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            description: description.into(),
            category,
            severity,
            passed: false,
            message: Some(message.into()),
        }
    }

    /// A failure that does not affect the verdict
    pub fn is_warning(&self) -> bool {
        !self.passed && self.severity != Severity::Required
    }
}

/// Complete result of validating one project directory
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Display name of the validated project
    pub project: String,

    /// One finding per rule, in rule-table order
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Create a report from evaluated findings
    pub fn new(project: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            project: project.into(),
            findings,
        }
    }

    /// Overall verdict: PASS iff no required-severity finding failed
    ///
    /// Pure function of the findings; evaluation order never matters.
    pub fn verdict(&self) -> Verdict {
        let required_failure = self
            .findings
            .iter()
            .any(|f| !f.passed && f.severity == Severity::Required);
        if required_failure {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    /// True when the verdict is PASS
    pub fn passed(&self) -> bool {
        self.verdict() == Verdict::Pass
    }

    /// All failing findings
    pub fn failures(&self) -> Vec<&Finding> {
        self.findings.iter().filter(|f| !f.passed).collect()
    }

    /// Failing findings that are only warnings
    pub fn warnings(&self) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.is_warning()).collect()
    }

    /// Number of failing findings at the given severity
    pub fn failed_count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| !f.passed && f.severity == severity)
            .count()
    }

    /// Findings in one category, preserving report order
    pub fn in_category(&self, category: RuleCategory) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    fn summary_line(&self) -> String {
        format!(
            "{} ({} required failed, {} recommended failed)",
            self.verdict(),
            self.failed_count(Severity::Required),
            self.failed_count(Severity::Recommended),
        )
    }

    /// Render the report as plain text
    ///
    /// The canonical form: two runs over an unchanged directory render
    /// byte-identical output. No timestamps, no counters.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let title = format!("Quality Report: {}", self.project);
        out.push_str(&title);
        out.push('\n');
        out.push_str(&"=".repeat(title.chars().count()));
        out.push_str("\n\n");

        for category in RuleCategory::ALL {
            out.push_str(category.label());
            out.push('\n');
            for finding in self.in_category(category) {
                out.push_str(&Self::finding_line(finding));
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str(&self.summary_line());
        out.push('\n');
        out
    }

    fn finding_line(finding: &Finding) -> String {
        if finding.passed {
            return format!("  ✓ {}", finding.description);
        }
        let message = finding
            .message
            .as_deref()
            .unwrap_or(finding.description.as_str());
        if finding.severity == Severity::Required {
            format!("  ✗ {}", message)
        } else {
            format!("  ✗ {} (warning)", message)
        }
    }

    /// Print the report to stdout with colors
    ///
    /// Same structure as [`render`](Self::render), colorized.
    pub fn print(&self) {
        println!("{}", format!("Quality Report: {}", self.project).bold());
        println!();

        for category in RuleCategory::ALL {
            println!("{}", category.label().bold());
            for finding in self.in_category(category) {
                if finding.passed {
                    println!("  {} {}", "✓".green(), finding.description);
                } else {
                    let message = finding
                        .message
                        .as_deref()
                        .unwrap_or(finding.description.as_str());
                    if finding.severity == Severity::Required {
                        println!("  {} {}", "✗".red(), message.red());
                    } else {
                        println!("  {} {} {}", "✗".yellow(), message.yellow(), "(warning)".dimmed());
                    }
                }
            }
            println!();
        }

        let summary = self.summary_line();
        match self.verdict() {
            Verdict::Pass => println!("{}", summary.green().bold()),
            Verdict::Fail => println!("{}", summary.red().bold()),
        }
    }

    /// Machine-readable form of the report
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "project": self.project,
            "verdict": self.verdict(),
            "required_failed": self.failed_count(Severity::Required),
            "recommended_failed": self.failed_count(Severity::Recommended),
            "findings": self.findings,
        })
    }
}

/// Read-only view of a parsed project manifest
///
/// Backed by the raw JSON document. Field, script and dependency
/// accessors are presence checks that never inspect the declared
/// values; only the project name is read out as a value.
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    root: serde_json::Value,
}

impl ProjectManifest {
    /// Parse manifest text; `None` if it is not a JSON object
    pub fn parse(text: &str) -> Option<Self> {
        let root: serde_json::Value = serde_json::from_str(text).ok()?;
        if !root.is_object() {
            return None;
        }
        Some(Self { root })
    }

    fn section(&self, key: &str) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.root.get(key)?.as_object()
    }

    /// Top-level field is declared
    pub fn has_field(&self, name: &str) -> bool {
        self.root.get(name).is_some()
    }

    /// Declared project name, when it is a string
    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(serde_json::Value::as_str)
    }

    /// Entry exists inside the `scripts` field
    pub fn has_script(&self, name: &str) -> bool {
        self.section("scripts").is_some_and(|s| s.contains_key(name))
    }

    /// Package is declared under `dependencies`
    pub fn has_dependency(&self, name: &str) -> bool {
        self.section("dependencies")
            .is_some_and(|d| d.contains_key(name))
    }

    /// Package is declared under `devDependencies`
    pub fn has_dev_dependency(&self, name: &str) -> bool {
        self.section("devDependencies")
            .is_some_and(|d| d.contains_key(name))
    }
}
