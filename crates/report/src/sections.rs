//! Ordered report sections shared by every serializer.
//!
//! Text, delimited and spreadsheet exports all walk the same
//! [`Report`], so the label/value pairs are identical across formats.

use ledcalc_core::estimate::ProjectEstimate;
use ledcalc_core::format::NumberFormat;
use ledcalc_core::labeled::LabeledMap;
use serde::Serialize;

/// Whether a section is one of the three layout options or a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    LayoutOption,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub title: String,
    pub entries: LabeledMap,
}

/// A rendered-ready report: requested size plus ordered sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Requested size, e.g. `10,00m (W) x 5,00m (H)`.
    pub requested_size: String,
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn build(estimate: &ProjectEstimate, fmt: &NumberFormat) -> Self {
        let layout = &estimate.layout;
        let options = [
            ("Option 1: Ideal Fit", &layout.nearest),
            ("Option 2: Lower Fit", &layout.floor),
            ("Option 3: Upper Fit", &layout.ceiling),
        ];

        let mut sections: Vec<ReportSection> = options
            .into_iter()
            .map(|(title, variant)| ReportSection {
                kind: SectionKind::LayoutOption,
                title: title.to_string(),
                entries: variant.formatted_view(&layout.cabinet, fmt),
            })
            .collect();

        let profiles = [
            ("Viewing Criteria", layout.viewing.labeled(fmt)),
            (
                "Processing and Data Engineering",
                estimate.signal.labeled(fmt),
            ),
            (
                "Processor Hardware (Topology)",
                estimate.processor.labeled(fmt),
            ),
            (
                "Electrical and HVAC Engineering (Option 1)",
                estimate.power.labeled(fmt),
            ),
            (
                "Structural and Rigging Engineering (Option 1)",
                estimate.rigging.labeled(fmt),
            ),
        ];
        sections.extend(profiles.into_iter().map(|(title, entries)| ReportSection {
            kind: SectionKind::Profile,
            title: title.to_string(),
            entries,
        }));

        Self {
            requested_size: format!(
                "{}m (W) x {}m (H)",
                fmt.number(estimate.request.width_mm / 1000.0, 2),
                fmt.number(estimate.request.height_mm / 1000.0, 2)
            ),
            sections,
        }
    }

    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}
