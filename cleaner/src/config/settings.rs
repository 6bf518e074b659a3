// Cleaner settings: the two file paths, optionally overridden by a JSON file.
use crate::error::{CleanerError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional JSON settings file.
pub const CONFIG_ENV_VAR: &str = "EARNINGS_CLEANER_CONFIG";

const INPUT_FILE_NAME: &str = "earnings_raw.csv";
const OUTPUT_FILE_NAME: &str = "earnings_data_cleaned.csv";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CleanerSettings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for CleanerSettings {
    fn default() -> Self {
        let data_dir = default_data_dir();
        CleanerSettings {
            input_path: data_dir.join(INPUT_FILE_NAME),
            output_path: data_dir.join(OUTPUT_FILE_NAME),
        }
    }
}

impl CleanerSettings {
    /// Reads settings from the file named by `EARNINGS_CLEANER_CONFIG`, or the defaults.
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_json_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CleanerError::ConfigError(format!("Failed to read settings file '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            CleanerError::ConfigError(format!("Invalid settings file '{}': {}", path.display(), e))
        })
    }
}

// `data/` sits next to the crate directory.
fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_paths_point_into_data_dir() {
        let settings = CleanerSettings::default();
        assert!(settings.input_path.ends_with("data/earnings_raw.csv"));
        assert!(settings.output_path.ends_with("data/earnings_data_cleaned.csv"));
    }

    #[test]
    fn json_file_overrides_paths() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"input_path": "/tmp/in.tsv", "output_path": "/tmp/out.csv"}}"#).unwrap();
        let settings = CleanerSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.input_path, PathBuf::from("/tmp/in.tsv"));
        assert_eq!(settings.output_path, PathBuf::from("/tmp/out.csv"));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"output_path": "/tmp/out.csv"}}"#).unwrap();
        let settings = CleanerSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.input_path, CleanerSettings::default().input_path);
        assert_eq!(settings.output_path, PathBuf::from("/tmp/out.csv"));
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CleanerSettings::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CleanerError::ConfigError(_)));
    }

    // The only test that touches the environment variable.
    #[test]
    fn load_reads_file_named_by_env_var() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"input_path": "/tmp/from_env.tsv"}}"#).unwrap();

        env::set_var(CONFIG_ENV_VAR, file.path());
        let loaded = CleanerSettings::load();
        env::remove_var(CONFIG_ENV_VAR);
        let settings = loaded.unwrap();

        assert_eq!(settings.input_path, PathBuf::from("/tmp/from_env.tsv"));
        assert_eq!(settings.output_path, CleanerSettings::default().output_path);
        assert_eq!(CleanerSettings::load().unwrap(), CleanerSettings::default());
    }

    #[test]
    fn malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = CleanerSettings::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CleanerError::ConfigError(_)));
    }
}
