use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_INPUT_PATH: &str = "result.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "custom.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Caaj CSV to read.
    pub input_path: PathBuf,
    /// Cryptact custom file to write.
    pub output_path: PathBuf,
    /// Print resolved records to stdout before writing.
    pub print_records: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            print_records: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let input_path = path_from_map(&env_map, "CAAJ_INPUT_PATH", DEFAULT_INPUT_PATH)?;
        let output_path = path_from_map(&env_map, "CRYPTACT_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)?;

        let print_records = match env_map
            .get("PRINT_RECORDS")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
            .unwrap_or("true")
        {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            other => {
                return Err(ConfigError::InvalidValue(
                    "PRINT_RECORDS".to_string(),
                    format!("must be true or false, got {}", other),
                ))
            }
        };

        Ok(Config {
            input_path,
            output_path,
            print_records,
        })
    }

    /// Override the input path, e.g. from the command line.
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }
}

fn path_from_map(
    env_map: &HashMap<String, String>,
    key: &str,
    default: &str,
) -> Result<PathBuf, ConfigError> {
    match env_map.get(key).map(|s| s.trim()) {
        None => Ok(PathBuf::from(default)),
        Some("") => Err(ConfigError::InvalidValue(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Some(path) => Ok(PathBuf::from(path)),
    }
}
