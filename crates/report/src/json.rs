//! JSON export: raw estimate plus raw layout views and the formatted
//! report sections.

use ledcalc_core::estimate::ProjectEstimate;
use ledcalc_core::labeled::LabeledMap;
use serde::Serialize;

use crate::error::ReportError;
use crate::sections::Report;

#[derive(Serialize)]
struct RawLayouts {
    nearest: LabeledMap,
    floor: LabeledMap,
    ceiling: LabeledMap,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    estimate: &'a ProjectEstimate,
    raw_layouts: RawLayouts,
    report: &'a Report,
}

pub fn render_json(estimate: &ProjectEstimate, report: &Report) -> Result<String, ReportError> {
    let layout = &estimate.layout;
    let doc = JsonDocument {
        estimate,
        raw_layouts: RawLayouts {
            nearest: layout.nearest.raw_view(),
            floor: layout.floor.raw_view(),
            ceiling: layout.ceiling.raw_view(),
        },
        report,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
