//! Deliverable Studio — turns raw deliverable documents into audience-safe,
//! deterministic marketing outputs.
//!
//! Thin assembly over the library crates: load a document, redact it for an
//! audience, run the leak check, and either emit the sanitized JSON or
//! export the presentation script as markdown.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use studio_core::catalog::DeliverableCatalog;
use studio_core::config::AppConfig;
use studio_core::placeholder::PlaceholderScanner;
use studio_core::types::{Audience, DeliverableId, ScriptBlock, TimelineSegment};
use studio_redaction::{OutputValidator, RedactionEngine};
use studio_script::{verify_block_set, ScriptExporter};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "deliverable-studio")]
#[command(about = "Audience-safe transformation and export of marketing deliverables")]
#[command(version)]
struct Cli {
    /// Path to the deliverable document (JSON)
    #[arg(long)]
    input: PathBuf,

    /// Deliverable type (WR2, WR4, WR5, WR6, WR7, WR9, PREFLIGHT)
    #[arg(long, env = "DELIVERABLE_STUDIO__DELIVERABLE")]
    deliverable: String,

    /// Target audience: client or operator (overrides config)
    #[arg(long, env = "DELIVERABLE_STUDIO__AUDIENCE")]
    audience: Option<String>,

    /// Project title used in exported documents (overrides config)
    #[arg(long, env = "DELIVERABLE_STUDIO__PROJECT_TITLE")]
    title: Option<String>,

    /// Export the presentation script as markdown (script deliverables only)
    #[arg(long, default_value_t = false)]
    export_script: bool,

    /// Write output to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deliverable_studio=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let run_id = Uuid::new_v4();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    let deliverable: DeliverableId = cli.deliverable.parse()?;
    let audience: Audience = cli
        .audience
        .as_deref()
        .unwrap_or(&config.redaction.default_audience)
        .parse()?;
    let title = cli.title.unwrap_or_else(|| config.project_title.clone());

    info!(
        %run_id,
        deliverable = deliverable.as_str(),
        audience = audience.as_str(),
        input = %cli.input.display(),
        "Deliverable Studio starting"
    );

    let raw = std::fs::read_to_string(&cli.input)?;
    let document: serde_json::Value = serde_json::from_str(&raw)?;

    let catalog = DeliverableCatalog::new();
    if let Some(entry) = catalog.get(deliverable) {
        info!(title = %entry.title, script_mode = entry.script_mode, "Deliverable recognized");
    }

    // Completeness warnings are informational; export still proceeds with
    // [Missing: ...] annotations in place of the raw markers.
    let scanner = PlaceholderScanner::new();
    let hits = scanner.scan(&document);
    if !hits.is_empty() {
        warn!(count = hits.len(), "Document contains unfinished content");
        for hit in &hits {
            warn!(path = %hit.path, excerpt = %hit.excerpt, "placeholder found");
        }
    }

    let engine = RedactionEngine::new();
    let Some(sanitized) = engine.redact(&document, deliverable, audience) else {
        info!("Deliverable is internal-only; nothing to emit for this audience");
        return Ok(());
    };

    if config.redaction.validate_output && audience == Audience::Client {
        let report = OutputValidator::new().validate(&sanitized);
        if !report.valid {
            for path in &report.found_fields {
                error!(field = %path, "internal field survived redaction");
            }
            anyhow::bail!(
                "leak check failed: {} internal field(s) survived redaction",
                report.found_fields.len()
            );
        }
        info!("Leak check passed");
    }

    let rendered = if cli.export_script {
        let blocks: Vec<ScriptBlock> = serde_json::from_value(
            sanitized
                .get("blocks")
                .cloned()
                .unwrap_or(serde_json::Value::Array(Vec::new())),
        )?;
        verify_block_set(&blocks)?;

        let timeline: Option<Vec<TimelineSegment>> = sanitized
            .get("timeline")
            .map(|t| serde_json::from_value(t.clone()))
            .transpose()?;

        if uses_estimated_timing(&blocks, timeline.as_deref()) {
            info!("No reconcilable timeline, using estimated timing");
        }

        ScriptExporter::new().export(&blocks, timeline.as_deref(), &title)
    } else {
        let mut json = serde_json::to_string_pretty(&sanitized)?;
        json.push('\n');
        json
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!(path = %path.display(), bytes = rendered.len(), "Output written");
        }
        None => print!("{}", rendered),
    }

    info!(%run_id, "Deliverable Studio finished");
    Ok(())
}

/// The reconciler does not signal which path it took; callers derive the
/// "estimated timing" indicator by re-checking timeline coverage.
fn uses_estimated_timing(blocks: &[ScriptBlock], timeline: Option<&[TimelineSegment]>) -> bool {
    match timeline {
        None => true,
        Some(segments) if segments.is_empty() => true,
        Some(segments) => {
            let covered: HashSet<&str> =
                segments.iter().map(|s| s.block_id.as_str()).collect();
            !blocks.iter().all(|b| covered.contains(b.id.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::types::Phase;

    fn block(id: &str) -> ScriptBlock {
        ScriptBlock {
            id: id.to_string(),
            title: "t".to_string(),
            phase: Phase::End,
            duration_minutes: 1,
            talk_track: String::new(),
            speaker_notes: String::new(),
            purpose: String::new(),
            transition_in: String::new(),
            transition_out: String::new(),
            proof_points: Vec::new(),
            objections: Vec::new(),
        }
    }

    #[test]
    fn test_estimated_timing_indicator() {
        let blocks = [block("B01"), block("B02")];
        assert!(uses_estimated_timing(&blocks, None));
        assert!(uses_estimated_timing(&blocks, Some(&[])));

        let partial = [TimelineSegment {
            block_id: "B01".to_string(),
            start_minute: 0,
            end_minute: 5,
        }];
        assert!(uses_estimated_timing(&blocks, Some(&partial)));

        let full = [
            TimelineSegment {
                block_id: "B01".to_string(),
                start_minute: 0,
                end_minute: 5,
            },
            TimelineSegment {
                block_id: "B02".to_string(),
                start_minute: 5,
                end_minute: 8,
            },
        ];
        assert!(!uses_estimated_timing(&blocks, Some(&full)));
    }
}
