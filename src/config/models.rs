use crate::humanize::LoanPeriod;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub circulation: CirculationConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the persisted JSON document.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("library_data.json")
}

/// Circulation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CirculationConfig {
    /// Default loan period applied when an issue request names none.
    #[serde(default)]
    pub loan_period: LoanPeriod,
}

impl Default for CirculationConfig {
    fn default() -> Self {
        Self {
            loan_period: LoanPeriod::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(
            config.storage.data_file,
            PathBuf::from("library_data.json")
        );
        assert_eq!(config.circulation.loan_period.days(), 14);
    }

    #[test]
    fn test_loan_period_from_toml_string() {
        let config: Config = toml::from_str(
            r#"
[circulation]
loan_period = "3w"
        "#,
        )
        .unwrap();

        assert_eq!(config.circulation.loan_period.days(), 21);
    }
}
