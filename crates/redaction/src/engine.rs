//! Audience-aware field redaction over deliverable content trees.

use serde_json::{Map, Value};
use tracing::debug;

use studio_core::types::{Audience, DeliverableId};

use crate::policy::ExclusionPolicy;

/// Strips forbidden keys from deliverable content before it is exposed to
/// an audience. Input trees are never mutated; every call returns a fresh
/// tree.
pub struct RedactionEngine {
    policy: ExclusionPolicy,
}

impl RedactionEngine {
    pub fn new() -> Self {
        Self {
            policy: ExclusionPolicy::new(),
        }
    }

    pub fn with_policy(policy: ExclusionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ExclusionPolicy {
        &self.policy
    }

    /// Produce a copy of `content` safe for the given audience.
    ///
    /// Fully-internal deliverable types collapse to `None` for the client
    /// audience. Otherwise the tree is rebuilt key by key: excluded keys
    /// are dropped at every depth, mapping key order and sequence order
    /// are preserved, and scalars pass through unchanged. Identical inputs
    /// always produce structurally identical outputs.
    pub fn redact(
        &self,
        content: &Value,
        id: DeliverableId,
        audience: Audience,
    ) -> Option<Value> {
        if self.policy.collapses_entirely(id, audience) {
            debug!(
                deliverable = id.as_str(),
                "fully internal deliverable withheld from client output"
            );
            return None;
        }
        Some(self.redact_value(content, id, audience))
    }

    fn redact_value(&self, value: &Value, id: DeliverableId, audience: Audience) -> Value {
        match value {
            Value::Object(map) => {
                let mut rebuilt = Map::with_capacity(map.len());
                for (key, child) in map {
                    if self.policy.is_excluded(key, id, audience) {
                        continue;
                    }
                    rebuilt.insert(key.clone(), self.redact_value(child, id, audience));
                }
                Value::Object(rebuilt)
            }
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|child| self.redact_value(child, id, audience))
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }
}

impl Default for RedactionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_doc() -> Value {
        json!({
            "headline": "Launch week",
            "qa_results": { "passed": false },
            "sections": [
                {
                    "body": "Section one",
                    "coaching_cues": "Slow down here",
                    "meta": { "readiness_score": 0.4 }
                },
                { "body": "Section two", "qa_results": [1, 2, 3] }
            ],
            "speaker_notes": "Operator eyes only",
            "footer": null
        })
    }

    #[test]
    fn test_universal_keys_stripped_at_every_depth() {
        let engine = RedactionEngine::new();
        let out = engine
            .redact(&sample_doc(), DeliverableId::Wr2, Audience::Client)
            .unwrap();

        assert!(out.get("qa_results").is_none());
        assert!(out["sections"][0]["meta"].get("readiness_score").is_none());
        assert!(out["sections"][1].get("qa_results").is_none());
        assert_eq!(out["sections"][0]["body"], "Section one");
    }

    #[test]
    fn test_client_audience_applies_per_deliverable_set() {
        let engine = RedactionEngine::new();
        let out = engine
            .redact(&sample_doc(), DeliverableId::Wr2, Audience::Client)
            .unwrap();
        assert!(out["sections"][0].get("coaching_cues").is_none());
        // WR2 has no speaker_notes rule; the key survives for WR2 clients.
        assert_eq!(out["speaker_notes"], "Operator eyes only");

        let out = engine
            .redact(&sample_doc(), DeliverableId::Wr7, Audience::Client)
            .unwrap();
        assert!(out.get("speaker_notes").is_none());
    }

    #[test]
    fn test_operator_audience_keeps_coach_fields() {
        let engine = RedactionEngine::new();
        let out = engine
            .redact(&sample_doc(), DeliverableId::Wr7, Audience::Operator)
            .unwrap();
        assert_eq!(out["speaker_notes"], "Operator eyes only");
        assert_eq!(out["sections"][0]["coaching_cues"], "Slow down here");
        // Universal fields are stripped even for operators.
        assert!(out.get("qa_results").is_none());
    }

    #[test]
    fn test_fully_internal_types_collapse_for_clients() {
        let engine = RedactionEngine::new();
        assert!(engine
            .redact(&sample_doc(), DeliverableId::Wr9, Audience::Client)
            .is_none());
        assert!(engine
            .redact(&sample_doc(), DeliverableId::Preflight, Audience::Client)
            .is_none());
        assert!(engine
            .redact(&sample_doc(), DeliverableId::Wr9, Audience::Operator)
            .is_some());
    }

    #[test]
    fn test_redaction_is_idempotent() {
        let engine = RedactionEngine::new();
        let once = engine
            .redact(&sample_doc(), DeliverableId::Wr7, Audience::Client)
            .unwrap();
        let twice = engine
            .redact(&once, DeliverableId::Wr7, Audience::Client)
            .unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_and_scalars_preserved() {
        let engine = RedactionEngine::new();
        let doc = json!({
            "z_first": 1,
            "a_second": [true, null, "three"],
            "m_third": null
        });
        let out = engine
            .redact(&doc, DeliverableId::Wr5, Audience::Client)
            .unwrap();

        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z_first", "a_second", "m_third"]);
        assert_eq!(out["a_second"], json!([true, null, "three"]));
        assert!(out["m_third"].is_null());
    }

    #[test]
    fn test_non_object_roots_pass_through() {
        let engine = RedactionEngine::new();
        for doc in [json!(null), json!("plain text"), json!(42)] {
            let out = engine
                .redact(&doc, DeliverableId::Wr4, Audience::Client)
                .unwrap();
            assert_eq!(out, doc);
        }
    }
}
