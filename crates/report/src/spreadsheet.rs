//! Spreadsheet (`.xlsx`) report, same rows as the delimited table.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ReportError;
use crate::sections::Report;
use crate::table::{table_rows, Cell, HEADER};

pub const SHEET_NAME: &str = "LED Engineering Report";
const LABEL_COLUMN_WIDTH: u16 = 40;
const VALUE_COLUMN_WIDTH: u16 = 80;

/// Render the report as an in-memory `.xlsx` workbook.
pub fn render_xlsx(report: &Report) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_column_width(0, LABEL_COLUMN_WIDTH)?;
    worksheet.set_column_width(1, VALUE_COLUMN_WIDTH)?;

    for (col, title) in HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    for (i, row) in table_rows(report).iter().enumerate() {
        let row_num = i as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col, text)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(row_num, col, *n)?;
                }
                Cell::Empty => {}
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(bytes = bytes.len(), "Rendered spreadsheet report");
    Ok(bytes)
}
