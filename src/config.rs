//! Run settings: where the grades file lives and how strictly the weights
//! are compared.
//!
//! Sources, highest precedence first: command-line values, the
//! `GRADES_PATH` / `GRADES_WEIGHT_TOLERANCE` environment variables (a `.env`
//! file is loaded by the binary), then defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::validator::DEFAULT_WEIGHT_TOLERANCE;

pub const GRADES_PATH_ENV: &str = "GRADES_PATH";
pub const WEIGHT_TOLERANCE_ENV: &str = "GRADES_WEIGHT_TOLERANCE";

/// Default grades file, relative to the directory holding the executable.
pub const DEFAULT_GRADES_FILE: &str = "../grades.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub grades_path: PathBuf,
    pub weight_tolerance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grades_path: default_grades_path(),
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
        }
    }
}

impl Settings {
    /// Resolves settings from CLI overrides and the process environment.
    pub fn resolve(
        grades_path: Option<PathBuf>,
        weight_tolerance: Option<f64>,
    ) -> Result<Self, ConfigError> {
        Self::from_sources(
            grades_path,
            weight_tolerance,
            std::env::var(GRADES_PATH_ENV).ok(),
            std::env::var(WEIGHT_TOLERANCE_ENV).ok(),
        )
    }

    /// Same as [`Settings::resolve`] with the environment values passed in.
    pub fn from_sources(
        cli_path: Option<PathBuf>,
        cli_tolerance: Option<f64>,
        env_path: Option<String>,
        env_tolerance: Option<String>,
    ) -> Result<Self, ConfigError> {
        let grades_path = cli_path
            .or_else(|| env_path.filter(|p| !p.is_empty()).map(PathBuf::from))
            .unwrap_or_else(default_grades_path);

        let weight_tolerance = match (cli_tolerance, env_tolerance) {
            (Some(t), _) => t,
            (None, Some(raw)) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidTolerance(raw.clone()))?,
            (None, None) => DEFAULT_WEIGHT_TOLERANCE,
        };
        if !weight_tolerance.is_finite() || weight_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(weight_tolerance.to_string()));
        }

        Ok(Self {
            grades_path,
            weight_tolerance,
        })
    }
}

/// [`DEFAULT_GRADES_FILE`] joined onto the executable's directory, or onto
/// the working directory when the executable path is unknown.
pub fn default_grades_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join(DEFAULT_GRADES_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GRADES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_sources(None, None, None, None).unwrap();
        assert!(settings.grades_path.ends_with("grades.json"));
        assert_eq!(settings.weight_tolerance, DEFAULT_WEIGHT_TOLERANCE);
    }

    #[test]
    fn test_cli_overrides_env() {
        let settings = Settings::from_sources(
            Some(PathBuf::from("cli.json")),
            Some(0.5),
            Some("env.json".to_string()),
            Some("0.1".to_string()),
        )
        .unwrap();
        assert_eq!(settings.grades_path, PathBuf::from("cli.json"));
        assert_eq!(settings.weight_tolerance, 0.5);
    }

    #[test]
    fn test_env_used_without_cli() {
        let settings = Settings::from_sources(
            None,
            None,
            Some("env.json".to_string()),
            Some(" 0 ".to_string()),
        )
        .unwrap();
        assert_eq!(settings.grades_path, PathBuf::from("env.json"));
        assert_eq!(settings.weight_tolerance, 0.0);
    }

    #[test]
    fn test_empty_env_path_falls_back_to_default() {
        let settings = Settings::from_sources(None, None, Some(String::new()), None).unwrap();
        assert_eq!(settings.grades_path, default_grades_path());
    }

    #[test]
    fn test_invalid_tolerance() {
        assert_eq!(
            Settings::from_sources(None, None, None, Some("tight".to_string())),
            Err(ConfigError::InvalidTolerance("tight".to_string()))
        );
        assert!(Settings::from_sources(None, Some(-1.0), None, None).is_err());
        assert!(Settings::from_sources(None, Some(f64::NAN), None, None).is_err());
    }
}
