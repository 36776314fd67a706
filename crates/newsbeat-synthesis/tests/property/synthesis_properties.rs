use proptest::prelude::*;

use newsbeat_core::evidence::{EvidenceItem, SourceKind};
use newsbeat_synthesis::Synthesizer;

fn arb_source() -> impl Strategy<Value = SourceKind> {
    prop_oneof![
        Just(SourceKind::Section),
        Just(SourceKind::Keyword),
        Just(SourceKind::Context),
        Just(SourceKind::Byline),
    ]
}

fn arb_item() -> impl Strategy<Value = EvidenceItem> {
    (
        "[a-e]{1,2}",
        arb_source(),
        0.0f64..=1.0,
        0.1f64..=12.0,
    )
        .prop_map(|(beat, source, confidence, weight)| {
            EvidenceItem::new(beat, source, confidence, weight, "generated evidence")
        })
}

fn arb_items() -> impl Strategy<Value = Vec<EvidenceItem>> {
    proptest::collection::vec(arb_item(), 0..48)
}

// ── Confidence stays bounded ──────────────────────────────────────────────

proptest! {
    #[test]
    fn analysis_confidence_bounded_zero_to_one(items in arb_items()) {
        let analysis = Synthesizer::default().synthesize(&items);
        let confidence = analysis.confidence.value();
        prop_assert!(
            (0.0..=1.0).contains(&confidence),
            "out of bounds: {confidence}"
        );
    }
}

// ── Caps and disjointness ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn ranked_sets_respect_caps_and_are_disjoint(items in arb_items()) {
        let analysis = Synthesizer::default().synthesize(&items);
        prop_assert!(analysis.primary_beats.len() <= 3);
        prop_assert!(analysis.secondary_beats.len() <= 5);
        for beat in &analysis.secondary_beats {
            prop_assert!(
                !analysis.primary_beats.contains(beat),
                "beat '{beat}' appears in both sets"
            );
        }
    }
}

// ── Determinism ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn synthesis_is_deterministic(items in arb_items()) {
        let synthesizer = Synthesizer::default();
        prop_assert_eq!(
            synthesizer.synthesize(&items),
            synthesizer.synthesize(&items)
        );
    }
}

// ── Empty evidence is the only zero-confidence source ─────────────────────

proptest! {
    #[test]
    fn nonempty_positive_evidence_yields_positive_confidence(
        items in proptest::collection::vec(
            ("[a-e]{1,2}", arb_source(), 0.1f64..=1.0, 0.5f64..=12.0).prop_map(
                |(beat, source, confidence, weight)| {
                    EvidenceItem::new(beat, source, confidence, weight, "generated evidence")
                },
            ),
            1..16,
        )
    ) {
        let analysis = Synthesizer::default().synthesize(&items);
        prop_assert!(analysis.confidence.value() > 0.0);
    }
}

// ── Merge invariants ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn merging_a_singleton_is_identity(items in arb_items()) {
        let synthesizer = Synthesizer::default();
        let analysis = synthesizer.synthesize(&items);
        let merged = synthesizer.merge(std::slice::from_ref(&analysis));
        prop_assert_eq!(merged, analysis);
    }
}
