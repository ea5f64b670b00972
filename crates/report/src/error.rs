/// Errors raised while serializing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Spreadsheet export failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown export format: '{0}'. Valid formats: text, csv, tsv, xlsx, json")]
    UnknownFormat(String),
}
