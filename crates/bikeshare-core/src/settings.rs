use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::{BikeshareError, Result};
use crate::models::City;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Explore US bikeshare trip data interactively
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare",
    about = "Explore US bikeshare trip data interactively",
    version
)]
pub struct Settings {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_level: "WARNING".to_string(),
            debug: false,
        }
    }
}

impl Settings {
    /// Parse process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Fail early when the data directory does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            return Err(BikeshareError::Config(format!(
                "data directory {} does not exist",
                self.data_dir.display()
            )));
        }
        Ok(())
    }
}

/// Path of the trip file for `city` inside `data_dir`.
pub fn city_path_in(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["bikeshare"]);

        assert_eq!(settings.data_dir, PathBuf::from("."));
        assert_eq!(settings.log_level, "WARNING");
        assert!(!settings.debug);
    }

    #[test]
    fn test_settings_cli_data_dir() {
        let settings = Settings::parse_from(["bikeshare", "--data-dir", "/srv/bikeshare"]);
        assert_eq!(settings.data_dir, PathBuf::from("/srv/bikeshare"));
    }

    #[test]
    fn test_settings_rejects_unknown_log_level() {
        let result = Settings::try_parse_from(["bikeshare", "--log-level", "TRACE"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_overrides_log_level() {
        let settings = Settings::load_from_args(["bikeshare", "--log-level", "ERROR", "--debug"]);
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_city_path_in() {
        assert_eq!(
            city_path_in(Path::new("/data"), City::NewYorkCity),
            PathBuf::from("/data/new_york_city.csv")
        );
    }

    #[test]
    fn test_validate_existing_dir() {
        let tmp = TempDir::new().expect("tempdir");
        let settings = Settings {
            data_dir: tmp.path().to_path_buf(),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_dir() {
        let tmp = TempDir::new().expect("tempdir");
        let settings = Settings {
            data_dir: tmp.path().join("nope"),
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, BikeshareError::Config(_)));
    }
}
