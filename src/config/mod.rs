#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::{Path, PathBuf};

pub const URL_ENV: &str = "QR_CODE_URL";
pub const OUTPUT_DIR_ENV: &str = "QR_OUTPUT_DIR";
pub const LOG_DIR_ENV: &str = "QR_LOG_DIR";

pub const DEFAULT_URL: &str = "http://github.com/kaw393939";
pub const DEFAULT_OUTPUT_DIR: &str = "qr_codes";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Values given explicitly on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrConfig {
    pub url: String,
    pub output_dir: PathBuf,
    pub log_dir: PathBuf,
    pub verbose: bool,
}

impl QrConfig {
    /// Resolves every setting as flag, then environment variable, then default.
    ///
    /// `env` looks up a variable by name. An empty value counts as unset.
    pub fn resolve<F>(overrides: ConfigOverrides, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|value| !value.is_empty());

        let url = overrides
            .url
            .or_else(|| lookup(URL_ENV))
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let output_dir = overrides
            .output_dir
            .or_else(|| lookup(OUTPUT_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let log_dir = overrides
            .log_dir
            .or_else(|| lookup(LOG_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        Self {
            url,
            output_dir,
            log_dir,
            verbose: overrides.verbose,
        }
    }

    pub fn from_env(overrides: ConfigOverrides) -> Self {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self::resolve(ConfigOverrides::default(), |_| None)
    }
}

impl Validate for QrConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("url", &self.url)?;
        validate_path("output_dir", &self.output_dir.to_string_lossy())?;
        validate_path("log_dir", &self.log_dir.to_string_lossy())?;
        Ok(())
    }
}

impl ConfigProvider for QrConfig {
    fn url(&self) -> &str {
        &self.url
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        let config = QrConfig::resolve(ConfigOverrides::default(), env_from(&[]));

        assert_eq!(config.url, "http://github.com/kaw393939");
        assert_eq!(config.output_dir, PathBuf::from("qr_codes"));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(!config.verbose);
        assert_eq!(config, QrConfig::default());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = env_from(&[
            (URL_ENV, "https://env.example"),
            (OUTPUT_DIR_ENV, "/tmp/env_codes"),
            (LOG_DIR_ENV, "/tmp/env_logs"),
        ]);
        let config = QrConfig::resolve(ConfigOverrides::default(), env);

        assert_eq!(config.url, "https://env.example");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/env_codes"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/env_logs"));
    }

    #[test]
    fn test_flags_override_env() {
        let env = env_from(&[(URL_ENV, "https://env.example"), (OUTPUT_DIR_ENV, "env_codes")]);
        let overrides = ConfigOverrides {
            url: Some("https://flag.example".to_string()),
            output_dir: Some(PathBuf::from("flag_codes")),
            log_dir: None,
            verbose: true,
        };
        let config = QrConfig::resolve(overrides, env);

        assert_eq!(config.url, "https://flag.example");
        assert_eq!(config.output_dir, PathBuf::from("flag_codes"));
        assert_eq!(config.log_dir, PathBuf::from(DEFAULT_LOG_DIR));
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_env_value_falls_back_to_default() {
        let env = env_from(&[(URL_ENV, ""), (OUTPUT_DIR_ENV, "")]);
        let config = QrConfig::resolve(ConfigOverrides::default(), env);

        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_url_is_passed_through_verbatim() {
        let overrides = ConfigOverrides {
            url: Some("not a url at all".to_string()),
            ..ConfigOverrides::default()
        };
        let config = QrConfig::resolve(overrides, env_from(&[]));

        assert_eq!(config.url(), "not a url at all");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_values() {
        let mut config = QrConfig::default();
        config.url = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = QrConfig::default();
        config.output_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
