//! Project generator
//! Writes the complete React + Vite + Tailwind skeleton for one tool

pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, ToolsmithError};
use crate::registry::{ToolRegistry, ToolSpec};

/// Generates tool projects from the shared base templates
///
/// Output satisfies every validator rule by construction: the required
/// file layout, manifest fields, source patterns, README sections, and
/// deployment descriptors. Regenerating into an existing directory
/// overwrites the managed files and leaves everything else alone.
pub struct ProjectGenerator {
    registry: ToolRegistry,
}

impl ProjectGenerator {
    /// Create a generator over the full tool registry
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
        }
    }

    /// Create a generator over a specific registry
    pub fn with_registry(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// The registry this generator draws from
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Generate `output_dir/<tool_id>/` and return its path
    pub fn generate(&self, tool_id: &str, output_dir: &Path) -> Result<PathBuf> {
        let spec = self
            .registry
            .get(tool_id)
            .ok_or_else(|| ToolsmithError::UnknownTool(tool_id.to_string()))?;

        let project_dir = output_dir.join(&spec.id);
        fs::create_dir_all(project_dir.join("src").join("components"))?;
        self.write_project_files(&project_dir, spec)?;
        Ok(project_dir)
    }

    fn write_project_files(&self, root: &Path, spec: &ToolSpec) -> Result<()> {
        let manifest = serde_json::to_string_pretty(&templates::package_json(spec))?;
        fs::write(root.join("package.json"), manifest + "\n")?;

        let vercel = serde_json::to_string_pretty(&templates::vercel_json())?;
        fs::write(root.join("vercel.json"), vercel + "\n")?;

        fs::write(root.join("vite.config.js"), templates::VITE_CONFIG)?;
        fs::write(root.join("tailwind.config.js"), templates::TAILWIND_CONFIG)?;
        fs::write(root.join("postcss.config.js"), templates::POSTCSS_CONFIG)?;
        fs::write(root.join("index.html"), templates::index_html(spec))?;
        fs::write(root.join(".env.example"), templates::ENV_EXAMPLE)?;
        fs::write(root.join(".gitignore"), templates::GITIGNORE)?;
        fs::write(root.join("README.md"), templates::readme(spec))?;
        fs::write(root.join("netlify.toml"), templates::NETLIFY_CONFIG)?;

        let src = root.join("src");
        fs::write(src.join("main.jsx"), templates::MAIN_JSX)?;
        fs::write(src.join("App.jsx"), templates::app_jsx(spec))?;
        fs::write(src.join("App.css"), templates::APP_CSS)?;

        Ok(())
    }
}

impl Default for ProjectGenerator {
    fn default() -> Self {
        Self::new()
    }
}
