//! Methodology phases and their accent colors.

use super::ColorRole;
use std::path::Path;

/// A methodology phase directory (e.g. `5-architecture`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Directory key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Accent color role
    pub accent: ColorRole,
}

/// Known phases in methodology order.
pub const PHASES: &[Phase] = &[
    Phase { key: "0-source", name: "Source Materials", accent: ColorRole::Dark },
    Phase { key: "1-research", name: "Research & Discovery", accent: ColorRole::Primary },
    Phase { key: "2-requirements", name: "Requirements Analysis", accent: ColorRole::Primary },
    Phase { key: "3-analysis", name: "Stakeholder Analysis", accent: ColorRole::Secondary },
    Phase { key: "4-business-case", name: "Business Case", accent: ColorRole::Dark },
    Phase { key: "5-architecture", name: "Architecture Design", accent: ColorRole::Primary },
    Phase { key: "6-solution-design", name: "Solution Design", accent: ColorRole::Secondary },
    Phase { key: "7-implementation-plan", name: "Implementation Plan", accent: ColorRole::Dark },
    Phase { key: "8-proposal", name: "Proposal Materials", accent: ColorRole::Primary },
    Phase { key: "9-contract", name: "Contract Documents", accent: ColorRole::Dark },
    Phase { key: "10-audit", name: "Audit & Validation", accent: ColorRole::Text },
];

/// Phase whose documents get a cover page outside of SOW handling.
pub const CONTRACT_PHASE: &str = "9-contract";

/// Look up a phase by key.
pub fn find_phase(key: &str) -> Option<&'static Phase> {
    PHASES.iter().find(|p| p.key == key)
}

/// First path component naming a known phase.
pub fn phase_from_path(path: &Path) -> Option<&'static Phase> {
    path.components()
        .filter_map(|c| c.as_os_str().to_str())
        .find_map(find_phase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_phase() {
        let phase = find_phase("3-analysis").unwrap();
        assert_eq!(phase.name, "Stakeholder Analysis");
        assert_eq!(phase.accent, ColorRole::Secondary);
        assert!(find_phase("11-unknown").is_none());
    }

    #[test]
    fn test_phase_from_path() {
        let path = Path::new("opportunity/9-contract/client-sow.md");
        assert_eq!(phase_from_path(path).map(|p| p.key), Some("9-contract"));

        let path = Path::new("notes/draft.md");
        assert!(phase_from_path(path).is_none());
    }

    #[test]
    fn test_phase_order() {
        assert_eq!(PHASES.len(), 11);
        assert_eq!(PHASES.first().map(|p| p.key), Some("0-source"));
        assert_eq!(PHASES.last().map(|p| p.key), Some("10-audit"));
    }
}
