//! `ledcalc-cli` library crate.
//!
//! Loads a request, runs the engineering estimate and renders it in the
//! configured export format. The binary entrypoint lives in `main.rs`.

pub mod config;
pub mod error;
pub mod request;

use std::path::Path;

use ledcalc_core::estimate::estimate;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::request::RequestFile;

/// Read a request file from disk. Missing fields take their defaults.
pub fn load_request(path: &Path) -> Result<RequestFile, CliError> {
    let json = std::fs::read_to_string(path)?;
    RequestFile::from_json(&json)
}

/// Produce the rendered report bytes for the given configuration.
pub fn run(config: &CliConfig) -> Result<Vec<u8>, CliError> {
    let file = match &config.request_file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading request file");
            load_request(path)?
        }
        None => {
            tracing::info!("No request file given, using the default request");
            RequestFile::default()
        }
    };

    let inputs = file.into_engine_inputs()?;
    let est = estimate(&inputs.request, &inputs.source, &inputs.site);

    let bytes = config
        .output_format
        .render(&est, &config.number_format)?;

    tracing::info!(
        format = config.output_format.extension(),
        bytes = bytes.len(),
        "Report rendered",
    );

    Ok(bytes)
}
