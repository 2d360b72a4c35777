//! Toolsmith - AI Tool Project Scaffolding & Quality Checks
//!
//! A toolkit that scaffolds small AI-powered frontend tools (React + Vite +
//! Tailwind, wired to the Anthropic API) and checks finished projects against
//! a launch-readiness rule set.
//!
//! # Architecture
//!
//! - **registry**: the catalog of tool blueprints the generator knows about
//! - **generator**: renders a blueprint into a complete project directory
//! - **validation**: rule engine that grades a project and produces a report
//! - **cli / config**: command surface and persisted defaults

pub mod errors;
pub mod registry;
pub mod generator;
pub mod validation;
pub mod cli;
pub mod config;

// Re-export commonly used types
pub use errors::{Result, ToolsmithError};
pub use generator::ProjectGenerator;
pub use registry::{ToolRegistry, ToolSpec};
pub use validation::{
    Finding, ProjectValidator, RuleCategory, Severity, ValidationReport, Verdict,
};
pub use config::Config;
