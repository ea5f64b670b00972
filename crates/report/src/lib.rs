//! Report serializers over a [`ledcalc_core::estimate::ProjectEstimate`].
//!
//! Every format walks the same [`sections::Report`], so label/value pairs
//! are identical across text, delimited, spreadsheet and JSON exports.

pub mod error;
pub mod export;
pub mod json;
pub mod sections;
pub mod spreadsheet;
pub mod table;
pub mod text;

pub use error::ReportError;
pub use export::ExportFormat;
pub use sections::Report;
