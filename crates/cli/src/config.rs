use std::path::PathBuf;

use ledcalc_core::format::NumberFormat;
use ledcalc_report::ExportFormat;

use crate::error::CliError;

/// Command-line configuration loaded from environment variables.
///
/// | Env Var                 | Default  |
/// |-------------------------|----------|
/// | `LEDCALC_REQUEST_FILE`  | none (built-in default request) |
/// | `LEDCALC_OUTPUT_FORMAT` | `text`   |
/// | `LEDCALC_OUTPUT_PATH`   | stdout   |
/// | `LEDCALC_NUMBER_FORMAT` | `latam`  |
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub request_file: Option<PathBuf>,
    pub output_format: ExportFormat,
    pub output_path: Option<PathBuf>,
    pub number_format: NumberFormat,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let request_file = get("LEDCALC_REQUEST_FILE").map(PathBuf::from);

        let output_format = match get("LEDCALC_OUTPUT_FORMAT") {
            Some(value) => value.parse()?,
            None => ExportFormat::Text,
        };

        let output_path = get("LEDCALC_OUTPUT_PATH").map(PathBuf::from);

        let number_format = match get("LEDCALC_NUMBER_FORMAT")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("latam") => NumberFormat::LATAM,
            Some("international") | Some("intl") => NumberFormat::INTERNATIONAL,
            Some(other) => {
                return Err(CliError::Config(format!(
                    "LEDCALC_NUMBER_FORMAT must be 'latam' or 'international', got '{other}'"
                )))
            }
        };

        if output_format.is_binary() && output_path.is_none() {
            return Err(CliError::Config(format!(
                "LEDCALC_OUTPUT_PATH is required for {} output",
                output_format.extension()
            )));
        }

        Ok(Self {
            request_file,
            output_format,
            output_path,
            number_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<CliConfig, CliError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.request_file, None);
        assert_eq!(config.output_format, ExportFormat::Text);
        assert_eq!(config.output_path, None);
        assert_eq!(config.number_format, NumberFormat::LATAM);
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("LEDCALC_REQUEST_FILE", "wall.json"),
            ("LEDCALC_OUTPUT_FORMAT", "csv"),
            ("LEDCALC_OUTPUT_PATH", "out.csv"),
            ("LEDCALC_NUMBER_FORMAT", "International"),
        ])
        .unwrap();
        assert_eq!(config.request_file, Some(PathBuf::from("wall.json")));
        assert_eq!(config.output_format, ExportFormat::Csv);
        assert_eq!(config.output_path, Some(PathBuf::from("out.csv")));
        assert_eq!(config.number_format, NumberFormat::INTERNATIONAL);
    }

    #[test]
    fn empty_values_are_unset() {
        let config = config_from(&[("LEDCALC_OUTPUT_FORMAT", "  ")]).unwrap();
        assert_eq!(config.output_format, ExportFormat::Text);
    }

    #[test]
    fn xlsx_requires_output_path() {
        assert_matches!(
            config_from(&[("LEDCALC_OUTPUT_FORMAT", "xlsx")]),
            Err(CliError::Config(_))
        );
        assert!(config_from(&[
            ("LEDCALC_OUTPUT_FORMAT", "xlsx"),
            ("LEDCALC_OUTPUT_PATH", "report.xlsx"),
        ])
        .is_ok());
    }

    #[test]
    fn unknown_values_rejected() {
        assert_matches!(
            config_from(&[("LEDCALC_OUTPUT_FORMAT", "pdf")]),
            Err(CliError::Report(_))
        );
        assert_matches!(
            config_from(&[("LEDCALC_NUMBER_FORMAT", "roman")]),
            Err(CliError::Config(_))
        );
    }
}
