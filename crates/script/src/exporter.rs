//! Deterministic markdown export of the presentation script.

use chrono::{NaiveDate, Utc};

use studio_core::placeholder::PlaceholderScanner;
use studio_core::types::{ScriptBlock, TimelineSegment};

use crate::timing;

/// Renders the 21-block presentation script as a single markdown document.
///
/// Output is byte-identical for identical inputs: block order is the input
/// order, timestamps come from [`timing::reconcile`], and every text field
/// goes through the shared placeholder cleaner. The generation date is held
/// by the exporter and can be pinned for reproducible documents.
pub struct ScriptExporter {
    cleaner: PlaceholderScanner,
    generated_on: NaiveDate,
}

impl ScriptExporter {
    pub fn new() -> Self {
        Self::with_date(Utc::now().date_naive())
    }

    /// Pin the generation date, making exports reproducible across days.
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            cleaner: PlaceholderScanner::new(),
            generated_on: date,
        }
    }

    /// Render the full script.
    ///
    /// Assumes [`crate::blocks::verify_block_set`] has already passed;
    /// block-set completeness is the caller's responsibility and is not
    /// re-checked here.
    pub fn export(
        &self,
        blocks: &[ScriptBlock],
        timeline: Option<&[TimelineSegment]>,
        title: &str,
    ) -> String {
        let timestamps = timing::reconcile(blocks, timeline);
        let mut doc = String::new();

        doc.push_str(&format!("# {}\n\n", title));
        doc.push_str(&format!(
            "*Generated: {}*\n\n",
            self.generated_on.format("%Y-%m-%d")
        ));

        doc.push_str("## Table of Contents\n\n");
        for block in blocks {
            let heading = format!("{}: {}", block.id, block.title);
            doc.push_str(&format!("- [{}](#{})\n", heading, slugify(&heading)));
        }
        doc.push('\n');

        for block in blocks {
            doc.push_str(&format!("## {}: {}\n\n", block.id, block.title));

            doc.push_str(&format!(
                "**Phase:** {} | **Duration:** {} min",
                block.phase.label(),
                block.duration_minutes
            ));
            if let Some(ts) = timestamps.get(&block.id) {
                doc.push_str(&format!(
                    " | **Time:** {} - {}",
                    format_clock(ts.start_minute),
                    format_clock(ts.end_minute)
                ));
            }
            doc.push_str("\n\n");

            doc.push_str("### What to Say\n\n");
            doc.push_str(&self.cleaner.clean(&block.talk_track));
            doc.push_str("\n\n");

            let directions = self.stage_directions(block);
            if !directions.is_empty() {
                doc.push_str("### Stage Directions\n\n");
                doc.push_str(&directions);
                doc.push_str("\n\n");
            }

            if !block.proof_points.is_empty() {
                doc.push_str("### Proof Points\n\n");
                for point in &block.proof_points {
                    doc.push_str(&format!("- {}\n", self.cleaner.clean(point)));
                }
                doc.push('\n');
            }

            if !block.objections.is_empty() {
                doc.push_str("### Objections to Address\n\n");
                for objection in &block.objections {
                    doc.push_str(&format!("- {}\n", self.cleaner.clean(objection)));
                }
                doc.push('\n');
            }

            if !block.transition_out.is_empty() {
                doc.push_str("### Transition\n\n");
                doc.push_str(&self.cleaner.clean(&block.transition_out));
                doc.push_str("\n\n");
            }

            doc.push_str("---\n\n");
        }

        doc
    }

    /// Enter/Purpose/Exit labels for the non-empty direction fields, joined
    /// by blank lines. Empty when all three fields are empty.
    fn stage_directions(&self, block: &ScriptBlock) -> String {
        let mut parts = Vec::new();
        if !block.transition_in.is_empty() {
            parts.push(format!(
                "**Enter:** {}",
                self.cleaner.clean(&block.transition_in)
            ));
        }
        if !block.purpose.is_empty() {
            parts.push(format!("**Purpose:** {}", self.cleaner.clean(&block.purpose)));
        }
        if !block.transition_out.is_empty() {
            parts.push(format!(
                "**Exit:** {}",
                self.cleaner.clean(&block.transition_out)
            ));
        }
        parts.join("\n\n")
    }
}

impl Default for ScriptExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase with non-alphanumeric runs collapsed to single hyphens.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Minutes rendered as a presentation clock, e.g. `75` becomes `1:15`.
fn format_clock(total_minutes: u32) -> String {
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}
