//! Declarative quality-rule table and the project snapshot it inspects
//!
//! Rules are data: one table of (id, description, category, severity,
//! predicate) records built once and iterated uniformly. Adding or
//! removing a rule is a data change, never a control-flow change.
//!
//! Code and documentation checks are deliberately heuristic substring
//! matches over file text, not parses. A miss is a cheap completeness
//! signal, not a correctness verdict.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::validation::types::{Finding, ProjectManifest, RuleCategory, Severity};

/// The 13 relative paths every generated project must contain
pub const REQUIRED_FILES: [&str; 13] = [
    "package.json",
    "vite.config.js",
    "tailwind.config.js",
    "postcss.config.js",
    "index.html",
    ".env.example",
    ".gitignore",
    "README.md",
    "vercel.json",
    "netlify.toml",
    "src/main.jsx",
    "src/App.jsx",
    "src/App.css",
];

const REQUIRED_FIELDS: [&str; 5] = ["name", "version", "scripts", "dependencies", "devDependencies"];

const REQUIRED_SCRIPTS: [&str; 3] = ["dev", "build", "preview"];

const REQUIRED_DEPENDENCIES: [&str; 4] = ["react", "react-dom", "@anthropic-ai/sdk", "lucide-react"];

const REQUIRED_DEV_DEPENDENCIES: [&str; 5] = [
    "@vitejs/plugin-react",
    "vite",
    "tailwindcss",
    "autoprefixer",
    "postcss",
];

const GITIGNORE_ENTRIES: [&str; 2] = ["node_modules", ".env"];

/// Contents of one project file, read once up front
#[derive(Debug, Clone)]
pub enum FileText {
    /// File does not exist
    Missing,

    /// File exists but could not be read
    Unreadable,

    /// File text
    Text(String),
}

impl FileText {
    fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => FileText::Text(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => FileText::Missing,
            Err(_) => FileText::Unreadable,
        }
    }

    /// Apply a content check to the text.
    ///
    /// A missing file passes vacuously: absence is the structure
    /// category's finding, and content rules must not double-report it.
    fn check(&self, label: &str, check: impl FnOnce(&str) -> RuleOutcome) -> RuleOutcome {
        match self {
            FileText::Missing => RuleOutcome::Pass,
            FileText::Unreadable => RuleOutcome::Fail(format!("{label} could not be read")),
            FileText::Text(text) => check(text),
        }
    }
}

/// Parse state of the project manifest
#[derive(Debug, Clone)]
pub enum ManifestState {
    /// No manifest file
    Missing,

    /// Manifest exists but could not be read
    Unreadable,

    /// Manifest text is not a JSON object
    Invalid,

    /// Parsed manifest
    Parsed(ProjectManifest),
}

impl ManifestState {
    fn load(path: &Path) -> Self {
        match FileText::load(path) {
            FileText::Missing => ManifestState::Missing,
            FileText::Unreadable => ManifestState::Unreadable,
            FileText::Text(text) => match ProjectManifest::parse(&text) {
                Some(manifest) => ManifestState::Parsed(manifest),
                None => ManifestState::Invalid,
            },
        }
    }
}

/// Immutable view of everything the rules inspect, read in one pass
///
/// Loading up front keeps rule evaluation free of I/O and makes two
/// evaluations of the same snapshot trivially identical.
#[derive(Debug, Clone)]
pub struct ProjectSnapshot {
    present: HashSet<&'static str>,
    manifest: ManifestState,
    app_source: FileText,
    readme: FileText,
    env_template: FileText,
    gitignore: FileText,
    vercel: FileText,
    netlify: FileText,
}

impl ProjectSnapshot {
    /// Read every artifact the rule table inspects from `root`
    pub fn load(root: &Path) -> Self {
        let present = REQUIRED_FILES
            .iter()
            .copied()
            .filter(|path| root.join(path).is_file())
            .collect();

        Self {
            present,
            manifest: ManifestState::load(&root.join("package.json")),
            app_source: FileText::load(&root.join("src/App.jsx")),
            readme: FileText::load(&root.join("README.md")),
            env_template: FileText::load(&root.join(".env.example")),
            gitignore: FileText::load(&root.join(".gitignore")),
            vercel: FileText::load(&root.join("vercel.json")),
            netlify: FileText::load(&root.join("netlify.toml")),
        }
    }

    /// One of the required relative paths exists as a file
    pub fn has_file(&self, relative: &str) -> bool {
        self.present.contains(relative)
    }

    pub fn manifest(&self) -> &ManifestState {
        &self.manifest
    }
}

/// Outcome of one rule predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Pass,
    Fail(String),
}

impl RuleOutcome {
    fn when(passed: bool, message: impl Into<String>) -> Self {
        if passed {
            RuleOutcome::Pass
        } else {
            RuleOutcome::Fail(message.into())
        }
    }
}

type Predicate = Box<dyn Fn(&ProjectSnapshot) -> RuleOutcome + Send + Sync>;

/// One immutable quality rule
pub struct CheckRule {
    /// Stable rule identifier
    pub id: String,

    /// Short statement of what the rule checks
    pub description: String,

    /// Report category
    pub category: RuleCategory,

    /// Failure severity
    pub severity: Severity,

    predicate: Predicate,
}

impl CheckRule {
    fn new(
        id: String,
        description: String,
        category: RuleCategory,
        severity: Severity,
        predicate: impl Fn(&ProjectSnapshot) -> RuleOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            description,
            category,
            severity,
            predicate: Box::new(predicate),
        }
    }

    /// Run the predicate and record its outcome as a finding
    pub fn evaluate(&self, snapshot: &ProjectSnapshot) -> Finding {
        match (self.predicate)(snapshot) {
            RuleOutcome::Pass => Finding::pass(
                self.id.clone(),
                self.description.clone(),
                self.category,
                self.severity,
            ),
            RuleOutcome::Fail(message) => Finding::fail(
                self.id.clone(),
                self.description.clone(),
                self.category,
                self.severity,
                message,
            ),
        }
    }
}

impl std::fmt::Debug for CheckRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("severity", &self.severity)
            .finish()
    }
}

/// Build the full rule table, in report order
pub fn rule_set() -> Vec<CheckRule> {
    let mut rules = Vec::new();
    structure_rules(&mut rules);
    manifest_rules(&mut rules);
    code_quality_rules(&mut rules);
    documentation_rules(&mut rules);
    deployment_rules(&mut rules);
    rules
}

fn structure_rules(rules: &mut Vec<CheckRule>) {
    for path in REQUIRED_FILES {
        rules.push(CheckRule::new(
            format!("structure:{path}"),
            path.to_string(),
            RuleCategory::Structure,
            Severity::Required,
            move |snapshot| {
                RuleOutcome::when(snapshot.has_file(path), format!("missing required file: {path}"))
            },
        ));
    }

    // Substring checks, same looseness as the code-quality rules
    for entry in GITIGNORE_ENTRIES {
        rules.push(CheckRule::new(
            format!("structure:ignore:{entry}"),
            format!(".gitignore covers {entry}"),
            RuleCategory::Structure,
            Severity::Recommended,
            move |snapshot| {
                snapshot.gitignore.check(".gitignore", |text| {
                    RuleOutcome::when(
                        text.contains(entry),
                        format!(".gitignore missing {entry} entry"),
                    )
                })
            },
        ));
    }
}

fn manifest_rules(rules: &mut Vec<CheckRule>) {
    rules.push(CheckRule::new(
        "manifest:parse".to_string(),
        "package.json is a JSON object".to_string(),
        RuleCategory::Manifest,
        Severity::Required,
        |snapshot| match snapshot.manifest() {
            ManifestState::Unreadable => {
                RuleOutcome::Fail("package.json could not be read".to_string())
            }
            ManifestState::Invalid => {
                RuleOutcome::Fail("package.json is not a JSON object".to_string())
            }
            ManifestState::Missing | ManifestState::Parsed(_) => RuleOutcome::Pass,
        },
    ));

    for field in REQUIRED_FIELDS {
        rules.push(CheckRule::new(
            format!("manifest:field:{field}"),
            format!("field \"{field}\""),
            RuleCategory::Manifest,
            Severity::Required,
            move |snapshot| match snapshot.manifest() {
                ManifestState::Parsed(manifest) => RuleOutcome::when(
                    manifest.has_field(field),
                    format!("missing field \"{field}\""),
                ),
                _ => RuleOutcome::Pass,
            },
        ));
    }

    for script in REQUIRED_SCRIPTS {
        rules.push(CheckRule::new(
            format!("manifest:script:{script}"),
            format!("script \"{script}\""),
            RuleCategory::Manifest,
            Severity::Required,
            move |snapshot| match snapshot.manifest() {
                ManifestState::Parsed(manifest) => RuleOutcome::when(
                    manifest.has_script(script),
                    format!("missing script \"{script}\""),
                ),
                _ => RuleOutcome::Pass,
            },
        ));
    }

    for dependency in REQUIRED_DEPENDENCIES {
        rules.push(CheckRule::new(
            format!("manifest:dependency:{dependency}"),
            format!("dependency \"{dependency}\""),
            RuleCategory::Manifest,
            Severity::Recommended,
            move |snapshot| match snapshot.manifest() {
                ManifestState::Parsed(manifest) => RuleOutcome::when(
                    manifest.has_dependency(dependency),
                    format!("missing dependency \"{dependency}\""),
                ),
                _ => RuleOutcome::Pass,
            },
        ));
    }

    for dependency in REQUIRED_DEV_DEPENDENCIES {
        rules.push(CheckRule::new(
            format!("manifest:dev-dependency:{dependency}"),
            format!("devDependency \"{dependency}\""),
            RuleCategory::Manifest,
            Severity::Recommended,
            move |snapshot| match snapshot.manifest() {
                ManifestState::Parsed(manifest) => RuleOutcome::when(
                    manifest.has_dev_dependency(dependency),
                    format!("missing devDependency \"{dependency}\""),
                ),
                _ => RuleOutcome::Pass,
            },
        ));
    }

    rules.push(CheckRule::new(
        "manifest:name-placeholder".to_string(),
        "project name".to_string(),
        RuleCategory::Manifest,
        Severity::Recommended,
        |snapshot| match snapshot.manifest() {
            ManifestState::Parsed(manifest) => {
                let name = manifest.name().unwrap_or("");
                RuleOutcome::when(
                    !name.is_empty() && name != "your-project-name",
                    "package.json has placeholder name",
                )
            }
            _ => RuleOutcome::Pass,
        },
    ));
}

fn code_quality_rules(rules: &mut Vec<CheckRule>) {
    rules.push(CheckRule::new(
        "code-quality:api-integration".to_string(),
        "Anthropic API integration".to_string(),
        RuleCategory::CodeQuality,
        Severity::Recommended,
        |snapshot| {
            snapshot.app_source.check("src/App.jsx", |text| {
                let lower = text.to_lowercase();
                RuleOutcome::when(
                    lower.contains("anthropic") || lower.contains("claude"),
                    "no API integration detected",
                )
            })
        },
    ));

    rules.push(CheckRule::new(
        "code-quality:error-handling".to_string(),
        "error handling".to_string(),
        RuleCategory::CodeQuality,
        Severity::Recommended,
        |snapshot| {
            snapshot.app_source.check("src/App.jsx", |text| {
                RuleOutcome::when(
                    text.contains("catch") && text.to_lowercase().contains("error"),
                    "no error handling detected",
                )
            })
        },
    ));

    rules.push(CheckRule::new(
        "code-quality:loading-state".to_string(),
        "loading state".to_string(),
        RuleCategory::CodeQuality,
        Severity::Recommended,
        |snapshot| {
            snapshot.app_source.check("src/App.jsx", |text| {
                RuleOutcome::when(
                    text.to_lowercase().contains("loading"),
                    "no loading state detected",
                )
            })
        },
    ));

    rules.push(CheckRule::new(
        "code-quality:react-hooks".to_string(),
        "React hooks".to_string(),
        RuleCategory::CodeQuality,
        Severity::Recommended,
        |snapshot| {
            snapshot.app_source.check("src/App.jsx", |text| {
                RuleOutcome::when(text.contains("useState"), "no React hooks usage detected")
            })
        },
    ));
}

fn documentation_rules(rules: &mut Vec<CheckRule>) {
    rules.push(CheckRule::new(
        "documentation:readme-length".to_string(),
        "README content".to_string(),
        RuleCategory::Documentation,
        Severity::Recommended,
        |snapshot| {
            snapshot.readme.check("README.md", |text| {
                RuleOutcome::when(
                    text.trim().chars().count() >= 100,
                    "README.md seems too short",
                )
            })
        },
    ));

    rules.push(CheckRule::new(
        "documentation:readme-title".to_string(),
        "README title".to_string(),
        RuleCategory::Documentation,
        Severity::Recommended,
        |snapshot| {
            snapshot.readme.check("README.md", |text| {
                RuleOutcome::when(has_markdown_title(text), "README.md missing main title")
            })
        },
    ));

    rules.push(CheckRule::new(
        "documentation:readme-setup".to_string(),
        "README setup instructions".to_string(),
        RuleCategory::Documentation,
        Severity::Recommended,
        |snapshot| {
            snapshot.readme.check("README.md", |text| {
                let lower = text.to_lowercase();
                RuleOutcome::when(
                    lower.contains("setup") || lower.contains("install"),
                    "README.md missing setup instructions",
                )
            })
        },
    ));

    rules.push(CheckRule::new(
        "documentation:env-api-key".to_string(),
        ".env.example API key".to_string(),
        RuleCategory::Documentation,
        Severity::Recommended,
        |snapshot| {
            snapshot.env_template.check(".env.example", |text| {
                RuleOutcome::when(
                    text.contains("VITE_ANTHROPIC_API_KEY"),
                    ".env.example missing VITE_ANTHROPIC_API_KEY",
                )
            })
        },
    ));

    // A template without the placeholder may be carrying a real key
    rules.push(CheckRule::new(
        "documentation:env-placeholder".to_string(),
        ".env.example placeholder value".to_string(),
        RuleCategory::Documentation,
        Severity::Recommended,
        |snapshot| {
            snapshot.env_template.check(".env.example", |text| {
                RuleOutcome::when(
                    text.to_lowercase().contains("your-api-key-here"),
                    ".env.example missing placeholder value",
                )
            })
        },
    ));
}

fn deployment_rules(rules: &mut Vec<CheckRule>) {
    rules.push(CheckRule::new(
        "deployment:vercel-rewrites".to_string(),
        "vercel.json rewrites".to_string(),
        RuleCategory::Deployment,
        Severity::Recommended,
        |snapshot| {
            snapshot.vercel.check("vercel.json", |text| {
                match serde_json::from_str::<serde_json::Value>(text) {
                    Ok(config) => RuleOutcome::when(
                        config.get("rewrites").is_some(),
                        "vercel.json missing rewrites configuration",
                    ),
                    Err(_) => RuleOutcome::Fail("vercel.json is not valid JSON".to_string()),
                }
            })
        },
    ));

    rules.push(CheckRule::new(
        "deployment:netlify-redirects".to_string(),
        "netlify.toml redirects".to_string(),
        RuleCategory::Deployment,
        Severity::Recommended,
        |snapshot| {
            snapshot.netlify.check("netlify.toml", |text| {
                match text.parse::<toml::Value>() {
                    Ok(config) => RuleOutcome::when(
                        config.get("redirects").is_some(),
                        "netlify.toml missing redirects configuration",
                    ),
                    Err(_) => RuleOutcome::Fail("netlify.toml is not valid TOML".to_string()),
                }
            })
        },
    ));
}

/// Markdown top-level title: a line of `#`, whitespace, then content
fn has_markdown_title(text: &str) -> bool {
    text.lines().any(|line| {
        line.strip_prefix('#')
            .is_some_and(|rest| rest.starts_with(char::is_whitespace) && !rest.trim().is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn snapshot_with(files: &[(&str, &str)]) -> ProjectSnapshot {
        let dir = TempDir::new().expect("temp dir");
        for (path, content) in files {
            let full = dir.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).expect("parent dirs");
            }
            fs::write(full, content).expect("write fixture file");
        }
        ProjectSnapshot::load(dir.path())
    }

    fn rule<'a>(rules: &'a [CheckRule], id: &str) -> &'a CheckRule {
        rules
            .iter()
            .find(|r| r.id == id)
            .unwrap_or_else(|| panic!("rule {id} not in table"))
    }

    #[test]
    fn test_rule_table_size() {
        let rules = rule_set();
        assert_eq!(rules.len(), 45, "15 structure + 19 manifest + 4 code + 5 docs + 2 deploy");
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let rules = rule_set();
        let mut seen = HashSet::new();
        for r in &rules {
            assert!(seen.insert(r.id.clone()), "duplicate rule id {}", r.id);
        }
    }

    #[test]
    fn test_rules_grouped_by_report_order() {
        let rules = rule_set();
        let order: Vec<RuleCategory> = rules.iter().map(|r| r.category).collect();
        let mut sorted = order.clone();
        sorted.sort_by_key(|c| RuleCategory::ALL.iter().position(|a| a == c));
        assert_eq!(order, sorted, "table must already be in report order");
    }

    #[test]
    fn test_structure_rule_missing_file() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[]);
        let finding = rule(&rules, "structure:package.json").evaluate(&snapshot);
        assert!(!finding.passed);
        assert_eq!(
            finding.message.as_deref(),
            Some("missing required file: package.json")
        );
    }

    #[test]
    fn test_structure_rule_present_file() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[("index.html", "<html></html>")]);
        let finding = rule(&rules, "structure:index.html").evaluate(&snapshot);
        assert!(finding.passed);
        assert!(finding.message.is_none());
    }

    #[test]
    fn test_gitignore_entry_rules() {
        let rules = rule_set();

        let covered = snapshot_with(&[(".gitignore", "node_modules\ndist\n.env\n")]);
        assert!(rule(&rules, "structure:ignore:node_modules").evaluate(&covered).passed);
        assert!(rule(&rules, "structure:ignore:.env").evaluate(&covered).passed);

        let bare = snapshot_with(&[(".gitignore", "dist/\n")]);
        let finding = rule(&rules, "structure:ignore:node_modules").evaluate(&bare);
        assert!(!finding.passed);
        assert_eq!(finding.severity, Severity::Recommended);
        assert_eq!(
            finding.message.as_deref(),
            Some(".gitignore missing node_modules entry")
        );
        let finding = rule(&rules, "structure:ignore:.env").evaluate(&bare);
        assert_eq!(finding.message.as_deref(), Some(".gitignore missing .env entry"));
    }

    #[test]
    fn test_gitignore_entry_rules_vacuous_when_file_absent() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[]);
        for entry in GITIGNORE_ENTRIES {
            assert!(
                rule(&rules, &format!("structure:ignore:{entry}")).evaluate(&snapshot).passed,
                "{entry} check must leave absence to the presence rule"
            );
        }
    }

    #[test]
    fn test_manifest_parse_rule_rejects_broken_json() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[("package.json", "{ not json")]);
        let finding = rule(&rules, "manifest:parse").evaluate(&snapshot);
        assert!(!finding.passed);
        assert_eq!(finding.severity, Severity::Required);
        assert_eq!(
            finding.message.as_deref(),
            Some("package.json is not a JSON object")
        );
    }

    #[test]
    fn test_manifest_parse_rule_rejects_non_object_json() {
        // Valid JSON, but an array holds no manifest fields
        let rules = rule_set();
        let snapshot = snapshot_with(&[("package.json", "[1, 2, 3]")]);
        let finding = rule(&rules, "manifest:parse").evaluate(&snapshot);
        assert!(!finding.passed);
        assert_eq!(finding.severity, Severity::Required);
        assert_eq!(
            finding.message.as_deref(),
            Some("package.json is not a JSON object")
        );
    }

    #[test]
    fn test_manifest_field_rules_vacuous_when_unparsed() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[("package.json", "{ not json")]);
        for field in REQUIRED_FIELDS {
            let finding = rule(&rules, &format!("manifest:field:{field}")).evaluate(&snapshot);
            assert!(finding.passed, "field rule {field} must not double-report a parse failure");
        }
    }

    #[test]
    fn test_manifest_script_rule() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[(
            "package.json",
            r#"{"scripts": {"dev": "vite", "preview": "vite preview"}}"#,
        )]);
        let finding = rule(&rules, "manifest:script:build").evaluate(&snapshot);
        assert!(!finding.passed);
        assert_eq!(finding.message.as_deref(), Some("missing script \"build\""));
        assert!(rule(&rules, "manifest:script:dev").evaluate(&snapshot).passed);
    }

    #[test]
    fn test_dependency_rules_are_recommended() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[("package.json", r#"{"dependencies": {}}"#)]);
        let finding = rule(&rules, "manifest:dependency:react").evaluate(&snapshot);
        assert!(!finding.passed);
        assert_eq!(finding.severity, Severity::Recommended);
    }

    #[test]
    fn test_placeholder_name_rule() {
        let rules = rule_set();

        let real = snapshot_with(&[("package.json", r#"{"name": "resume_optimizer"}"#)]);
        assert!(rule(&rules, "manifest:name-placeholder").evaluate(&real).passed);

        for manifest in [
            r#"{"name": "your-project-name"}"#,
            r#"{"name": ""}"#,
            r#"{"version": "1.0.0"}"#,
        ] {
            let snapshot = snapshot_with(&[("package.json", manifest)]);
            let finding = rule(&rules, "manifest:name-placeholder").evaluate(&snapshot);
            assert!(!finding.passed, "{manifest} should trip the placeholder check");
            assert_eq!(finding.severity, Severity::Recommended);
            assert_eq!(
                finding.message.as_deref(),
                Some("package.json has placeholder name")
            );
        }
    }

    #[test]
    fn test_placeholder_name_rule_vacuous_when_unparsed() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[("package.json", "{ not json")]);
        assert!(rule(&rules, "manifest:name-placeholder").evaluate(&snapshot).passed);
    }

    #[test]
    fn test_api_integration_pattern() {
        let rules = rule_set();
        let with_api = snapshot_with(&[("src/App.jsx", "fetch('https://api.anthropic.com/v1/messages')")]);
        assert!(rule(&rules, "code-quality:api-integration").evaluate(&with_api).passed);

        let without = snapshot_with(&[("src/App.jsx", "export default function App() {}")]);
        let finding = rule(&rules, "code-quality:api-integration").evaluate(&without);
        assert!(!finding.passed);
        assert_eq!(finding.message.as_deref(), Some("no API integration detected"));
    }

    #[test]
    fn test_error_handling_needs_catch_and_error() {
        let rules = rule_set();
        let catch_only = snapshot_with(&[("src/App.jsx", "try {} catch (e) {}")]);
        assert!(!rule(&rules, "code-quality:error-handling").evaluate(&catch_only).passed);

        let both = snapshot_with(&[("src/App.jsx", "try {} catch (e) { setError(e) }")]);
        assert!(rule(&rules, "code-quality:error-handling").evaluate(&both).passed);
    }

    #[test]
    fn test_code_rules_vacuous_without_source() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[]);
        for id in [
            "code-quality:api-integration",
            "code-quality:error-handling",
            "code-quality:loading-state",
            "code-quality:react-hooks",
        ] {
            assert!(
                rule(&rules, id).evaluate(&snapshot).passed,
                "{id} must pass vacuously when src/App.jsx is absent"
            );
        }
    }

    #[test]
    fn test_readme_length_rule() {
        let rules = rule_set();
        let short = snapshot_with(&[("README.md", "# Tiny")]);
        let finding = rule(&rules, "documentation:readme-length").evaluate(&short);
        assert!(!finding.passed);
        assert_eq!(finding.message.as_deref(), Some("README.md seems too short"));

        let body = "# Title\n\nwords ".repeat(20);
        let long = snapshot_with(&[("README.md", body.as_str())]);
        assert!(rule(&rules, "documentation:readme-length").evaluate(&long).passed);
    }

    #[test]
    fn test_readme_title_detection() {
        assert!(has_markdown_title("# Resume Optimizer\n\nBody"));
        assert!(has_markdown_title("intro\n#   Spaced Title"));
        assert!(!has_markdown_title("#NoSpace heading"));
        assert!(!has_markdown_title("plain text only"));
        assert!(!has_markdown_title("# \n"));
    }

    #[test]
    fn test_env_key_rule() {
        let rules = rule_set();
        let good = snapshot_with(&[(".env.example", "VITE_ANTHROPIC_API_KEY=your-api-key-here\n")]);
        assert!(rule(&rules, "documentation:env-api-key").evaluate(&good).passed);

        let bad = snapshot_with(&[(".env.example", "API_KEY=foo\n")]);
        assert!(!rule(&rules, "documentation:env-api-key").evaluate(&bad).passed);
    }

    #[test]
    fn test_env_placeholder_rule() {
        let rules = rule_set();

        let good = snapshot_with(&[(".env.example", "VITE_ANTHROPIC_API_KEY=your-api-key-here\n")]);
        assert!(rule(&rules, "documentation:env-placeholder").evaluate(&good).passed);

        // Match is case-insensitive
        let shouting = snapshot_with(&[(".env.example", "VITE_ANTHROPIC_API_KEY=YOUR-API-KEY-HERE\n")]);
        assert!(rule(&rules, "documentation:env-placeholder").evaluate(&shouting).passed);

        let real_key = snapshot_with(&[(".env.example", "VITE_ANTHROPIC_API_KEY=sk-ant-api03-0a1b\n")]);
        let finding = rule(&rules, "documentation:env-placeholder").evaluate(&real_key);
        assert!(!finding.passed);
        assert_eq!(finding.severity, Severity::Recommended);
        assert_eq!(
            finding.message.as_deref(),
            Some(".env.example missing placeholder value")
        );
    }

    #[test]
    fn test_vercel_rule_outcomes() {
        let rules = rule_set();

        let ok = snapshot_with(&[("vercel.json", r#"{"rewrites": []}"#)]);
        assert!(rule(&rules, "deployment:vercel-rewrites").evaluate(&ok).passed);

        let missing_key = snapshot_with(&[("vercel.json", r#"{"headers": []}"#)]);
        let finding = rule(&rules, "deployment:vercel-rewrites").evaluate(&missing_key);
        assert_eq!(
            finding.message.as_deref(),
            Some("vercel.json missing rewrites configuration")
        );

        let broken = snapshot_with(&[("vercel.json", "{")]);
        let finding = rule(&rules, "deployment:vercel-rewrites").evaluate(&broken);
        assert_eq!(finding.message.as_deref(), Some("vercel.json is not valid JSON"));
        assert_eq!(finding.severity, Severity::Recommended);
    }

    #[test]
    fn test_netlify_rule_outcomes() {
        let rules = rule_set();

        let ok = snapshot_with(&[(
            "netlify.toml",
            "[[redirects]]\nfrom = \"/*\"\nto = \"/index.html\"\nstatus = 200\n",
        )]);
        assert!(rule(&rules, "deployment:netlify-redirects").evaluate(&ok).passed);

        let missing = snapshot_with(&[("netlify.toml", "[build]\ncommand = \"npm run build\"\n")]);
        assert!(!rule(&rules, "deployment:netlify-redirects").evaluate(&missing).passed);

        let broken = snapshot_with(&[("netlify.toml", "[[redirects\n")]);
        let finding = rule(&rules, "deployment:netlify-redirects").evaluate(&broken);
        assert_eq!(finding.message.as_deref(), Some("netlify.toml is not valid TOML"));
    }

    #[test]
    fn test_deployment_rules_vacuous_when_files_absent() {
        let rules = rule_set();
        let snapshot = snapshot_with(&[]);
        assert!(rule(&rules, "deployment:vercel-rewrites").evaluate(&snapshot).passed);
        assert!(rule(&rules, "deployment:netlify-redirects").evaluate(&snapshot).passed);
    }
}
