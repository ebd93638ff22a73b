//! Deliverable, audience, and script types shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StudioError;

/// Number of blocks in a complete presentation script (`B01`..`B21`).
pub const SCRIPT_BLOCK_COUNT: usize = 21;

/// Closed set of deliverable document types produced by the upstream
/// pipeline. The wire codes (`WR2`, `PREFLIGHT`, ...) are the identifiers
/// documents carry in their `deliverable_id` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliverableId {
    /// Landing page copy.
    #[serde(rename = "WR2")]
    Wr2,
    /// Email nurture sequence.
    #[serde(rename = "WR4")]
    Wr4,
    /// Social post pack.
    #[serde(rename = "WR5")]
    Wr5,
    /// Script framework (21-block outline).
    #[serde(rename = "WR6")]
    Wr6,
    /// Detailed presentation script.
    #[serde(rename = "WR7")]
    Wr7,
    /// Content QA report. Internal only.
    #[serde(rename = "WR9")]
    Wr9,
    /// Launch readiness check. Internal only.
    #[serde(rename = "PREFLIGHT")]
    Preflight,
}

impl DeliverableId {
    pub const ALL: [DeliverableId; 7] = [
        DeliverableId::Wr2,
        DeliverableId::Wr4,
        DeliverableId::Wr5,
        DeliverableId::Wr6,
        DeliverableId::Wr7,
        DeliverableId::Wr9,
        DeliverableId::Preflight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableId::Wr2 => "WR2",
            DeliverableId::Wr4 => "WR4",
            DeliverableId::Wr5 => "WR5",
            DeliverableId::Wr6 => "WR6",
            DeliverableId::Wr7 => "WR7",
            DeliverableId::Wr9 => "WR9",
            DeliverableId::Preflight => "PREFLIGHT",
        }
    }

    /// True for deliverables that exist only for the operating team and
    /// must never reach a client in any form.
    pub fn is_fully_internal(&self) -> bool {
        matches!(self, DeliverableId::Wr9 | DeliverableId::Preflight)
    }

    /// True for the deliverables structured as a 21-block script.
    pub fn is_script(&self) -> bool {
        matches!(self, DeliverableId::Wr6 | DeliverableId::Wr7)
    }
}

impl fmt::Display for DeliverableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliverableId {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliverableId::ALL
            .iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| StudioError::UnknownDeliverable(s.to_string()))
    }
}

/// Consumer class a deliverable is being prepared for. Clients get the
/// full exclusion policy; operators keep everything except the universal
/// internal fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Client,
    Operator,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Client => "client",
            Audience::Operator => "operator",
        }
    }
}

impl FromStr for Audience {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "client" => Ok(Audience::Client),
            "operator" => Ok(Audience::Operator),
            other => Err(StudioError::UnknownAudience(other.to_string())),
        }
    }
}

/// Where a block sits in the arc of the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Beginning,
    Middle,
    End,
}

impl Phase {
    /// Capitalized label for rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Beginning => "Beginning",
            Phase::Middle => "Middle",
            Phase::End => "End",
        }
    }
}

/// One segment of the 21-part presentation script. Authored upstream and
/// read-only to this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptBlock {
    /// Stable identifier, `B01`..`B21`.
    pub id: String,
    pub title: String,
    pub phase: Phase,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub talk_track: String,
    #[serde(default)]
    pub speaker_notes: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub transition_in: String,
    #[serde(default)]
    pub transition_out: String,
    #[serde(default)]
    pub proof_points: Vec<String>,
    #[serde(default)]
    pub objections: Vec<String>,
}

/// Independently authored per-block timing. A full set of segments is
/// authoritative only when it covers every block in the current script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub block_id: String,
    pub start_minute: u32,
    pub end_minute: u32,
}

/// Derived per-block timing. Never persisted; recomputed on every export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimestampInfo {
    pub start_minute: u32,
    pub end_minute: u32,
    pub duration_minutes: u32,
}
