use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Where projects are written when no output flag is given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("ai-tools")
}

impl Config {
    /// Read the config file, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Persist the current configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Location of the config file under the user's home directory
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".toolsmith").join("config.toml"))
    }

    /// Default output directory for generated projects
    pub fn output_dir(&self) -> &Path {
        &self.generator.output_dir
    }

    /// Change the default output directory
    pub fn set_output_dir(&mut self, dir: PathBuf) {
        self.generator.output_dir = dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output_dir(), Path::new("ai-tools"));
    }

    #[test]
    fn test_set_output_dir() {
        let mut config = Config::default();
        config.set_output_dir(PathBuf::from("/tmp/tools"));
        assert_eq!(config.output_dir(), Path::new("/tmp/tools"));
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.set_output_dir(PathBuf::from("generated"));

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("generated"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized.output_dir(), Path::new("generated"));
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.output_dir(), Path::new("ai-tools"));
    }

    #[test]
    fn test_config_path_location() {
        let path = Config::config_path().unwrap();
        assert!(path.ends_with(".toolsmith/config.toml"));
    }
}
