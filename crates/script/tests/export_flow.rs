//! Integration test for the full deliverable flow: redact a detailed
//! script document, validate the output, and export it as markdown.

use chrono::NaiveDate;
use serde_json::{json, Value};
use studio_core::types::{Audience, DeliverableId, ScriptBlock, TimelineSegment};
use studio_redaction::{OutputValidator, RedactionEngine};
use studio_script::{verify_block_set, ScriptExporter};

/// A WR7 document as the upstream pipeline would hand it over: 21 blocks,
/// coach-only fields, QA metadata, and one unfinished talk track.
fn sample_script_document() -> Value {
    let blocks: Vec<Value> = (1..=21)
        .map(|n| {
            let phase = match n {
                1..=5 => "beginning",
                6..=16 => "middle",
                _ => "end",
            };
            json!({
                "id": format!("B{:02}", n),
                "title": format!("Block {}", n),
                "phase": phase,
                "duration_minutes": 4,
                "talk_track": if n == 3 {
                    "Our flagship client {{client_name}} grew [TBD] percent.".to_string()
                } else {
                    format!("Talk track for block {}.", n)
                },
                "speaker_notes": "Pause here and make eye contact",
                "purpose": format!("Purpose of block {}", n),
                "transition_in": "Step forward",
                "transition_out": "Advance the slide",
                "proof_points": ["Case study: 3x pipeline"],
                "objections": ["We already have an agency"],
                "coach_notes": "Watch the pacing on this one"
            })
        })
        .collect();

    json!({
        "deliverable_id": "WR7",
        "qa_results": { "passed": false, "issues": 2 },
        "readiness_score": 0.71,
        "blocks": blocks,
        "timeline": [
            { "block_id": "B01", "start_minute": 0, "end_minute": 5 },
            { "block_id": "B02", "start_minute": 5, "end_minute": 9 }
        ]
    })
}

#[test]
fn test_redact_validate_export_flow() {
    let document = sample_script_document();

    // Redact for the client audience.
    let engine = RedactionEngine::new();
    let sanitized = engine
        .redact(&document, DeliverableId::Wr7, Audience::Client)
        .expect("WR7 is client-visible");

    // Coach-only and internal fields are gone at every depth.
    assert!(sanitized.get("qa_results").is_none());
    assert!(sanitized.get("readiness_score").is_none());
    assert!(sanitized["blocks"][0].get("speaker_notes").is_none());
    assert!(sanitized["blocks"][0].get("coach_notes").is_none());

    // The leak check agrees.
    let report = OutputValidator::new().validate(&sanitized);
    assert!(report.valid, "leaked: {:?}", report.found_fields);

    // Reparse the sanitized blocks; stripped fields fall back to defaults.
    let blocks: Vec<ScriptBlock> =
        serde_json::from_value(sanitized["blocks"].clone()).unwrap();
    verify_block_set(&blocks).unwrap();
    assert!(blocks[0].speaker_notes.is_empty());

    let timeline: Vec<TimelineSegment> =
        serde_json::from_value(sanitized["timeline"].clone()).unwrap();

    // The timeline covers 2 of 21 blocks, so the export uses the
    // cumulative fallback (callers derive the indicator the same way).
    let covered = blocks
        .iter()
        .all(|b| timeline.iter().any(|s| s.block_id == b.id));
    assert!(!covered);

    let exporter = ScriptExporter::with_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    let markdown = exporter.export(&blocks, Some(&timeline), "Acme Spring Launch");

    // Cumulative timing: 21 blocks of 4 minutes each.
    assert!(markdown.contains("**Time:** 0:00 - 0:04"));
    assert!(markdown.contains("**Time:** 1:20 - 1:24"));

    // Placeholder annotations replaced the raw markers.
    assert!(markdown.contains("[Missing: client_name]"));
    assert!(markdown.contains("[Missing: Content to be determined]"));
    assert!(!markdown.contains("{{client_name}}"));

    // No coach-only content in the deliverable.
    assert!(!markdown.contains("Pause here and make eye contact"));
    assert!(!markdown.contains("Watch the pacing"));

    // Byte-identical on repeat.
    assert_eq!(
        markdown,
        exporter.export(&blocks, Some(&timeline), "Acme Spring Launch")
    );
}

#[test]
fn test_operator_flow_keeps_coach_fields_but_not_qa() {
    let document = sample_script_document();
    let engine = RedactionEngine::new();
    let sanitized = engine
        .redact(&document, DeliverableId::Wr7, Audience::Operator)
        .unwrap();

    assert!(sanitized.get("qa_results").is_none());
    assert_eq!(
        sanitized["blocks"][0]["speaker_notes"],
        "Pause here and make eye contact"
    );

    // Operator output intentionally fails the client-grade leak check.
    let report = OutputValidator::new().validate(&sanitized);
    assert!(!report.valid);
    assert!(report
        .found_fields
        .iter()
        .any(|f| f == "blocks[0].speaker_notes (coach-only)"));
}

#[test]
fn test_internal_deliverables_never_reach_clients() {
    let engine = RedactionEngine::new();
    let doc = json!({ "summary": "do not ship" });
    assert!(engine
        .redact(&doc, DeliverableId::Wr9, Audience::Client)
        .is_none());
    assert!(engine
        .redact(&doc, DeliverableId::Preflight, Audience::Client)
        .is_none());
}
