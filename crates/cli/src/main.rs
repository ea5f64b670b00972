//! `ledcalc` -- LED video wall engineering calculator.
//!
//! Reads a JSON request (or uses the built-in default), computes layout,
//! signal, processor, power and rigging figures, and writes the report.
//!
//! # Usage
//!
//! ```text
//! ledcalc [REQUEST_FILE]
//! ```
//!
//! A positional argument overrides `LEDCALC_REQUEST_FILE`.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default | Description                              |
//! |-------------------------|----------|---------|------------------------------------------|
//! | `LEDCALC_REQUEST_FILE`  | no       | --      | JSON request file                        |
//! | `LEDCALC_OUTPUT_FORMAT` | no       | `text`  | `text`, `csv`, `tsv`, `xlsx` or `json`   |
//! | `LEDCALC_OUTPUT_PATH`   | for xlsx | stdout  | Destination file                         |
//! | `LEDCALC_NUMBER_FORMAT` | no       | `latam` | `latam` (1.234,5) or `international`     |
//! | `LEDCALC_LOG_FORMAT`    | no       | `pretty`| `pretty` or `json` log lines             |
//! | `RUST_LOG`              | no       | `ledcalc=info` | Log filter (logs go to stderr)    |

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use ledcalc_cli::config::CliConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let json_logs = std::env::var("LEDCALC_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledcalc=info,ledcalc_cli=info,ledcalc_core=info".into()),
        )
        .with(json_logs.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    let mut config = CliConfig::from_env().context("Invalid configuration")?;
    if let Some(arg) = std::env::args().nth(1) {
        config.request_file = Some(PathBuf::from(arg));
    }

    tracing::info!(
        request_file = ?config.request_file,
        format = config.output_format.extension(),
        "Starting ledcalc",
    );

    let bytes = ledcalc_cli::run(&config).context("Failed to produce report")?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, &bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
