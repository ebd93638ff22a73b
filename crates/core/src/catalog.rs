//! Deliverable catalog: display metadata for each deliverable type.

use serde::Serialize;

use crate::types::DeliverableId;

/// Display metadata for a deliverable type.
#[derive(Debug, Clone, Serialize)]
pub struct DeliverableInfo {
    pub id: DeliverableId,
    pub title: String,
    pub description: String,
    /// Structured as a 21-block presentation script.
    pub script_mode: bool,
    /// Never shown to clients in any form.
    pub internal_only: bool,
}

/// Catalog of every deliverable type the upstream pipeline produces.
pub struct DeliverableCatalog {
    entries: Vec<DeliverableInfo>,
}

impl DeliverableCatalog {
    pub fn new() -> Self {
        let defs = [
            (
                DeliverableId::Wr2,
                "Landing Page Copy",
                "Hero, benefits, social proof, and CTA copy for the launch page",
            ),
            (
                DeliverableId::Wr4,
                "Email Nurture Sequence",
                "Five-part email sequence from first touch to offer",
            ),
            (
                DeliverableId::Wr5,
                "Social Post Pack",
                "Channel-ready posts for the launch window",
            ),
            (
                DeliverableId::Wr6,
                "Script Framework",
                "21-block outline of the presentation with timing targets",
            ),
            (
                DeliverableId::Wr7,
                "Detailed Presentation Script",
                "Full talk track, stage directions, and objection handling per block",
            ),
            (
                DeliverableId::Wr9,
                "Content QA Report",
                "Automated completeness and consistency checks across deliverables",
            ),
            (
                DeliverableId::Preflight,
                "Launch Readiness Check",
                "Go/no-go readiness summary for the operating team",
            ),
        ];

        let entries = defs
            .into_iter()
            .map(|(id, title, description)| DeliverableInfo {
                id,
                title: title.to_string(),
                description: description.to_string(),
                script_mode: id.is_script(),
                internal_only: id.is_fully_internal(),
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, id: DeliverableId) -> Option<&DeliverableInfo> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn list(&self) -> &[DeliverableInfo] {
        &self.entries
    }
}

impl Default for DeliverableCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_deliverable() {
        let catalog = DeliverableCatalog::new();
        for id in DeliverableId::ALL {
            assert!(catalog.get(id).is_some(), "missing catalog entry: {}", id);
        }
    }

    #[test]
    fn test_internal_flags_follow_the_id() {
        let catalog = DeliverableCatalog::new();
        assert!(catalog.get(DeliverableId::Wr9).unwrap().internal_only);
        assert!(catalog.get(DeliverableId::Wr7).unwrap().script_mode);
        assert!(!catalog.get(DeliverableId::Wr2).unwrap().script_mode);
    }
}
