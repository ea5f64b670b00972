//! Plain-text report.

use std::fmt::Write;

use crate::sections::{Report, SectionKind};

const BANNER_WIDTH: usize = 70;
const RULE_WIDTH: usize = 50;
const TITLE: &str = "LED ENGINEERING REPORT - LEDCALC";

pub fn render_text(report: &Report) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "{:^width$}", TITLE, width = BANNER_WIDTH);
    let _ = writeln!(out, "{banner}\n");
    let _ = writeln!(
        out,
        "[A] HARDWARE DESIGN (REQUESTED SIZE: {})",
        report.requested_size
    );

    let mut letter = b'B';
    for section in &report.sections {
        match section.kind {
            SectionKind::LayoutOption => {
                let _ = writeln!(out, "\n  --- {} ---", section.title.to_uppercase());
                for (label, value) in section.entries.iter() {
                    let _ = writeln!(out, "    > {label}: {value}");
                }
            }
            SectionKind::Profile => {
                let _ = writeln!(
                    out,
                    "\n{rule}\n[{}] {}",
                    letter as char,
                    section.title.to_uppercase()
                );
                letter += 1;
                for (label, value) in section.entries.iter() {
                    let _ = writeln!(out, "  > {label}: {value}");
                }
            }
        }
    }

    let _ = writeln!(out, "\n{banner}\nEND OF TECHNICAL REPORT.\n{banner}");
    out
}
