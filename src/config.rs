//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::catalog::DEFAULT_RECENT_LIMIT;
use crate::site::SiteOptions;

/// Command line configuration for Lectern.
#[derive(Debug, Clone, Parser)]
#[command(name = "lectern", version, about, long_about = None)]
pub struct Config {
    /// Directory of lecture records (one JSON document per lecture)
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in page titles
    #[arg(long)]
    pub name: Option<String>,

    /// Number of lectures listed as recent on the dashboard
    #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
    pub recent: usize,

    /// Open the generated dashboard in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input path does not exist or is not a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input path does not exist: {}", self.input.display());
        }
        if !self.input.is_dir() {
            bail!("Input path is not a directory: {}", self.input.display());
        }

        Ok(())
    }

    /// Returns site name from configuration or input directory.
    ///
    /// # Errors
    ///
    /// Returns error if input path has no name component or contains invalid UTF8.
    pub fn site_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let path = self
            .input
            .canonicalize()
            .unwrap_or_else(|_| self.input.clone());

        path.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract site name from path: {}", path.display()))
            .map(String::from)
    }

    /// Builds site generation options.
    ///
    /// # Errors
    ///
    /// Returns error if the site name cannot be determined.
    pub fn site_options(&self) -> Result<SiteOptions> {
        Ok(SiteOptions {
            site_name: self.site_name()?,
            recent_limit: self.recent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(input: PathBuf, name: Option<&str>) -> Config {
        Config {
            input,
            output: PathBuf::from("dist"),
            name: name.map(String::from),
            recent: DEFAULT_RECENT_LIMIT,
            open: false,
        }
    }

    #[test]
    fn test_config_site_name_with_explicit_name() {
        // Arrange
        let config = config(PathBuf::from("."), Some("Fall Term"));

        // Act
        let result = config.site_name();

        // Assert
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Fall Term");
    }

    #[test]
    fn test_config_site_name_from_directory() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let input = dir.path().join("biology-notes");
        std::fs::create_dir(&input)?;
        let config = config(input, None);

        // Act
        let name = config.site_name()?;

        // Assert
        assert_eq!(name, "biology-notes");

        Ok(())
    }

    #[test]
    fn test_validate_existing_directory() {
        let config = config(PathBuf::from("."), None);

        assert!(config.validate().is_ok(), "Current directory should be valid");
    }

    #[test]
    fn test_validate_missing_path() {
        let config = config(PathBuf::from("/nonexistent/lectern/input"), None);

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("does not exist"), "{}", err);
    }

    #[test]
    fn test_validate_file_is_rejected() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let file = dir.path().join("lecture.json");
        std::fs::write(&file, "{}")?;

        // Act
        let result = config(file, None).validate();

        // Assert
        assert!(result.is_err(), "A file is not a record directory");

        Ok(())
    }

    #[test]
    fn test_parse_arguments() {
        // Arrange & Act
        let config = Config::try_parse_from([
            "lectern", "records", "-o", "site", "--name", "Notes", "--recent", "3", "--open",
        ])
        .expect("Arguments should parse");

        // Assert
        assert_eq!(config.input, PathBuf::from("records"));
        assert_eq!(config.output, PathBuf::from("site"));
        assert_eq!(config.name.as_deref(), Some("Notes"));
        assert_eq!(config.recent, 3);
        assert!(config.open);
    }

    #[test]
    fn test_parse_defaults() {
        let config = Config::try_parse_from(["lectern"]).expect("Defaults should parse");

        assert_eq!(config.input, PathBuf::from("."));
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.recent, DEFAULT_RECENT_LIMIT);
        assert!(!config.open);
    }

    #[test]
    fn test_site_options() -> Result<()> {
        let mut config = config(PathBuf::from("."), Some("Notes"));
        config.recent = 4;

        let options = config.site_options()?;

        assert_eq!(options.site_name, "Notes");
        assert_eq!(options.recent_limit, 4);

        Ok(())
    }
}
