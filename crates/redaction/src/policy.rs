//! Field exclusion policy: which keys are stripped for which
//! (deliverable, audience) pair.

use std::collections::HashMap;

use studio_core::types::{Audience, DeliverableId};

/// Keys internal to the pipeline, stripped for every audience and every
/// deliverable type.
const UNIVERSAL_EXCLUSIONS: &[&str] = &[
    "qa_results",
    "validation",
    "validation_metadata",
    "readiness_score",
    "internal_notes",
    "pipeline_metadata",
    "generated_by",
];

/// Lookup table from `(deliverable, audience)` to the additional keys
/// stripped for that pair. Adding a deliverable type is a data change
/// here, not a new code branch.
pub struct ExclusionPolicy {
    audience_exclusions: HashMap<(DeliverableId, Audience), Vec<&'static str>>,
}

impl ExclusionPolicy {
    pub fn new() -> Self {
        let client_rules: [(DeliverableId, &[&str]); 5] = [
            (
                DeliverableId::Wr2,
                &["positioning_rationale", "coaching_cues"],
            ),
            (
                DeliverableId::Wr4,
                &["send_strategy_notes", "coaching_cues"],
            ),
            (DeliverableId::Wr5, &["channel_guidance", "coaching_cues"]),
            (DeliverableId::Wr6, &["speaker_notes", "coach_notes"]),
            (
                DeliverableId::Wr7,
                &["speaker_notes", "coach_notes", "delivery_tips"],
            ),
        ];

        let mut audience_exclusions = HashMap::new();
        for (id, keys) in client_rules {
            audience_exclusions.insert((id, Audience::Client), keys.to_vec());
        }

        Self {
            audience_exclusions,
        }
    }

    /// Keys stripped regardless of deliverable type and audience.
    pub fn universal(&self) -> &'static [&'static str] {
        UNIVERSAL_EXCLUSIONS
    }

    /// True if `key` must be stripped for this (deliverable, audience) pair.
    /// The universal set always applies; the per-pair set is added on top.
    pub fn is_excluded(&self, key: &str, id: DeliverableId, audience: Audience) -> bool {
        UNIVERSAL_EXCLUSIONS.contains(&key)
            || self
                .audience_exclusions
                .get(&(id, audience))
                .is_some_and(|keys| keys.contains(&key))
    }

    /// True when the whole deliverable is withheld from this audience.
    pub fn collapses_entirely(&self, id: DeliverableId, audience: Audience) -> bool {
        audience == Audience::Client && id.is_fully_internal()
    }

    /// Union of every audience-restricted key across all deliverable types,
    /// sorted and deduplicated. The output validator checks against this
    /// union rather than any single deliverable's policy.
    pub fn all_audience_restricted(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self
            .audience_exclusions
            .values()
            .flatten()
            .copied()
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new()
    }
}
