//! Two-column delimited table (CSV / TSV).
//!
//! One header row, the requested size, then per section a `--- TITLE ---`
//! row followed by its label/value rows and a blank separator.

use ledcalc_core::labeled::FieldValue;

use crate::sections::Report;

pub const HEADER: [&str; 2] = ["Parameter", "Technical Specification"];
pub const REQUESTED_SIZE_LABEL: &str = "REQUESTED SIZE";

/// One table cell. Numbers stay numbers so the spreadsheet writer can
/// emit numeric cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl From<&FieldValue> for Cell {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Integer(v) => Self::Number(*v as f64),
            FieldValue::Float(v) => Self::Number(*v),
            FieldValue::Text(s) => Self::Text(s.clone()),
        }
    }
}

/// Field separator for delimited output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

/// Data rows (excluding [`HEADER`]).
pub fn table_rows(report: &Report) -> Vec<[Cell; 2]> {
    let mut rows = vec![
        [
            Cell::Text(REQUESTED_SIZE_LABEL.to_string()),
            Cell::Text(report.requested_size.clone()),
        ],
        [Cell::Empty, Cell::Empty],
    ];

    let last = report.sections.len().saturating_sub(1);
    for (i, section) in report.sections.iter().enumerate() {
        rows.push([
            Cell::Text(format!("--- {} ---", section.title.to_uppercase())),
            Cell::Empty,
        ]);
        for (label, value) in section.entries.iter() {
            rows.push([Cell::Text(label.to_string()), Cell::from(value)]);
        }
        if i < last {
            rows.push([Cell::Empty, Cell::Empty]);
        }
    }
    rows
}

pub fn render_table(report: &Report, delimiter: Delimiter) -> String {
    let sep = delimiter.as_char();
    let mut out = String::new();
    let mut write_row = |cells: [String; 2]| {
        out.push_str(&quote(&cells[0], sep));
        out.push(sep);
        out.push_str(&quote(&cells[1], sep));
        out.push_str("\r\n");
    };

    write_row(HEADER.map(str::to_string));
    for row in table_rows(report) {
        write_row([row[0].render(), row[1].render()]);
    }
    out
}

/// Quote a field when it contains the separator, a quote or a line break.
fn quote(field: &str, sep: char) -> String {
    if field.contains(|c: char| c == sep || c == '"' || c == '\n' || c == '\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
