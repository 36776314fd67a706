//! Human-readable rationale generation.

use newsbeat_core::evidence::SourceKind;

use crate::accumulator::BeatScoreAccumulator;

/// Build the reasoning string from the top-ranked beat's contributing
/// evidence: cite a section match if one exists, else a keyword match, else
/// fall back to a generic context phrase. When at least two beats qualified,
/// the remaining ones are listed as secondary.
pub(crate) fn build(top: &BeatScoreAccumulator, qualifying: &[&str]) -> String {
    let evidence_of = |kind: SourceKind| {
        top.sources
            .iter()
            .find(|item| item.source == kind)
            .map(|item| item.evidence.clone())
    };

    let lead = if let Some(ev) = evidence_of(SourceKind::Section) {
        format!("'{}' classified from section evidence ({ev})", top.beat)
    } else if let Some(ev) = evidence_of(SourceKind::Keyword) {
        format!("'{}' classified from keyword evidence ({ev})", top.beat)
    } else {
        format!("'{}' classified from context analysis of the content", top.beat)
    };

    let rest: Vec<&str> = qualifying
        .iter()
        .copied()
        .filter(|beat| *beat != top.beat)
        .collect();

    if qualifying.len() >= 2 && !rest.is_empty() {
        format!("{lead}; secondary beats: {}.", rest.join(", "))
    } else {
        format!("{lead}.")
    }
}
