//! Run configuration loaded from TOML.
//!
//! ```
//! use shelf_alloc::config::{ReportFormat, RunConfig};
//!
//! let config = RunConfig::from_toml_str(r#"
//!     catalog = "store.toml"
//!
//!     [ga]
//!     population_size = 80
//!     max_generations = 150
//!     seed = 7
//!
//!     [report]
//!     format = "json"
//! "#).unwrap();
//!
//! assert_eq!(config.ga.population_size, 80);
//! assert_eq!(config.ga.tournament_size, 3);
//! assert_eq!(config.report.format, ReportFormat::Json);
//! ```

use crate::error::Result;
use crate::ga::GaConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Catalog file. The built-in sample catalog is used when absent.
    pub catalog: Option<PathBuf>,

    pub ga: GaConfig,

    pub report: ReportConfig,
}

impl RunConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// How the final allocation is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,

    /// Write the report here instead of only printing it.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    /// Comma-separated rows for spreadsheet tools.
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AllocError;

    #[test]
    fn test_csv_format() {
        let config = RunConfig::from_toml_str(
            r#"
            [report]
            format = "csv"
            output = "allocation.csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.report.format, ReportFormat::Csv);
        assert_eq!(config.report.output, Some(PathBuf::from("allocation.csv")));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = RunConfig::from_toml_str("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.ga, GaConfig::default());
        assert_eq!(config.report.format, ReportFormat::Table);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_report_output() {
        let config = RunConfig::from_toml_str(
            r#"
            [report]
            output = "out/allocation.txt"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.report.output.as_deref(),
            Some(Path::new("out/allocation.txt"))
        );
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = RunConfig::from_toml_str(
            r#"
            [report]
            format = "xlsx"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AllocError::Toml(_)));
    }
}
