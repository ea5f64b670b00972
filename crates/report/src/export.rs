//! Export format selection and dispatch.

use std::str::FromStr;

use ledcalc_core::estimate::ProjectEstimate;
use ledcalc_core::format::NumberFormat;

use crate::error::ReportError;
use crate::json::render_json;
use crate::sections::Report;
use crate::spreadsheet::render_xlsx;
use crate::table::{render_table, Delimiter};
use crate::text::render_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
    Tsv,
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Xlsx => "xlsx",
            Self::Json => "json",
        }
    }

    /// Binary formats cannot be written to a terminal.
    pub fn is_binary(self) -> bool {
        matches!(self, Self::Xlsx)
    }

    pub fn render(
        self,
        estimate: &ProjectEstimate,
        fmt: &NumberFormat,
    ) -> Result<Vec<u8>, ReportError> {
        let report = Report::build(estimate, fmt);
        let bytes = match self {
            Self::Text => render_text(&report).into_bytes(),
            Self::Csv => render_table(&report, Delimiter::Comma).into_bytes(),
            Self::Tsv => render_table(&report, Delimiter::Tab).into_bytes(),
            Self::Xlsx => render_xlsx(&report)?,
            Self::Json => render_json(estimate, &report)?.into_bytes(),
        };
        Ok(bytes)
    }
}

impl FromStr for ExportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "json" => Ok(Self::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}
