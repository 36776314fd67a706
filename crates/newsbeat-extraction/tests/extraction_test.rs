use std::sync::Arc;

use newsbeat_core::config::ExtractionConfig;
use newsbeat_core::evidence::SourceKind;
use newsbeat_core::models::ContentDescriptor;
use newsbeat_core::traits::IEvidenceExtractor;
use newsbeat_extraction::{
    BylineExtractor, ContextExtractor, ExtractionEngine, KeywordExtractor, SectionExtractor,
};
use newsbeat_taxonomy::BeatTaxonomy;
use test_fixtures::descriptor;

fn builtin() -> Arc<BeatTaxonomy> {
    Arc::new(BeatTaxonomy::builtin())
}

// ── Section extractor ─────────────────────────────────────────────────────

#[test]
fn section_direct_match_emits_high_trust_evidence() {
    let extractor = SectionExtractor::new(builtin(), ExtractionConfig::default());
    let items = extractor.extract(&descriptor(Some("/politics"), None, None, None));

    let direct = items
        .iter()
        .find(|i| i.evidence == "Section path: /politics")
        .unwrap();
    assert_eq!(direct.beat, "politics");
    assert_eq!(direct.source, SourceKind::Section);
    assert_eq!(direct.confidence.value(), 0.9);
    assert_eq!(direct.weight, 10.0);
}

#[test]
fn section_direct_and_partial_both_fire_for_one_segment() {
    let extractor = SectionExtractor::new(builtin(), ExtractionConfig::default());
    let items = extractor.extract(&descriptor(Some("/technology"), None, None, None));

    // Exact lookup plus the symmetric substring scan (keys "tech" and
    // "technology") — over-generation is deliberate.
    assert!(items.iter().any(|i| i.evidence == "Section path: /technology"));
    assert!(items
        .iter()
        .any(|i| i.evidence == "Section path contains: tech"));
    assert!(items
        .iter()
        .any(|i| i.evidence == "Section path contains: technology"));
}

#[test]
fn section_path_is_segmented_and_lowercased() {
    let extractor = SectionExtractor::new(builtin(), ExtractionConfig::default());
    let items = extractor.extract(&descriptor(Some("/News/SPORTS/2026"), None, None, None));
    assert!(items.iter().any(|i| i.beat == "sports"));
}

#[test]
fn missing_or_empty_path_yields_no_evidence() {
    let extractor = SectionExtractor::new(builtin(), ExtractionConfig::default());
    assert!(extractor
        .extract(&descriptor(None, Some("title"), None, None))
        .is_empty());
    assert!(extractor
        .extract(&descriptor(Some("///"), None, None, None))
        .is_empty());
}

// ── Keyword extractor ─────────────────────────────────────────────────────

#[test]
fn keyword_match_cites_the_matched_text() {
    let extractor = KeywordExtractor::new(builtin(), ExtractionConfig::default());
    let items = extractor.extract(&descriptor(
        None,
        Some("Inflation worries return"),
        Some("Markets slid on the report."),
        None,
    ));

    let hit = items.iter().find(|i| i.beat == "finance").unwrap();
    assert_eq!(hit.evidence, "Keyword match: \"Inflation\"");
    assert_eq!(hit.confidence.value(), 0.6);
    assert_eq!(hit.weight, 5.0);
}

#[test]
fn each_matching_pattern_emits_its_own_item() {
    let extractor = KeywordExtractor::new(builtin(), ExtractionConfig::default());
    let items = extractor.extract(&descriptor(
        None,
        Some("AI chatbot launch"),
        Some("The chatbot is built on a large language model."),
        None,
    ));

    let ai_items: Vec<_> = items
        .iter()
        .filter(|i| i.beat == "artificial intelligence")
        .collect();
    // \bai\b, "chatbot", and "large language model" each fire once.
    assert_eq!(ai_items.len(), 3);
}

#[test]
fn title_and_body_are_both_searched() {
    let extractor = KeywordExtractor::new(builtin(), ExtractionConfig::default());
    let title_only = extractor.extract(&descriptor(None, Some("Senate vote today"), None, None));
    let body_only = extractor.extract(&descriptor(None, None, Some("Senate vote today"), None));
    assert!(title_only.iter().any(|i| i.beat == "politics"));
    assert!(body_only.iter().any(|i| i.beat == "politics"));
}

// ── Context extractor ─────────────────────────────────────────────────────

#[test]
fn single_indicator_does_not_clear_the_multiplicity_gate() {
    let extractor = ContextExtractor::new(builtin(), ExtractionConfig::default());
    let items = extractor.extract(&descriptor(
        None,
        None,
        Some("An investment was declared this week."),
        None,
    ));
    assert!(items.iter().all(|i| i.beat != "finance"));
}

#[test]
fn two_distinct_indicators_emit_one_item_with_stepped_confidence() {
    let extractor = ContextExtractor::new(builtin(), ExtractionConfig::default());
    let items = extractor.extract(&descriptor(
        None,
        None,
        Some("The round brought new investment and funding from existing backers."),
        None,
    ));

    let finance: Vec<_> = items.iter().filter(|i| i.beat == "finance").collect();
    assert_eq!(finance.len(), 1);
    assert_eq!(finance[0].confidence.value(), 0.4 + 0.1 * 2.0);
    assert_eq!(finance[0].weight, 3.0);
    assert_eq!(finance[0].evidence, "Context indicators: investment, funding");
}

#[test]
fn context_confidence_is_clamped_at_one() {
    let extractor = ContextExtractor::new(builtin(), ExtractionConfig::default());
    let items = extractor.extract(&descriptor(
        None,
        None,
        Some(
            "Their investment, funding, capital, valuation, portfolio and \
             shares all grew this quarter.",
        ),
        None,
    ));

    let finance = items.iter().find(|i| i.beat == "finance").unwrap();
    // 0.4 + 0.1 × 6 would be 1.0 exactly; more indicators must never exceed it.
    assert!(finance.confidence.value() <= 1.0);
}

// ── Byline extractor ──────────────────────────────────────────────────────

#[test]
fn byline_can_match_multiple_beats() {
    let extractor = BylineExtractor::new(builtin(), ExtractionConfig::default());
    let items = extractor.extract(&descriptor(
        None,
        None,
        None,
        Some("Alex Kim, finance and politics editor"),
    ));

    let beats: Vec<&str> = items.iter().map(|i| i.beat.as_str()).collect();
    assert_eq!(beats, ["business", "politics"]);
    assert!(items
        .iter()
        .all(|i| i.evidence == "Byline mention: \"Alex Kim, finance and politics editor\""));
}

#[test]
fn absent_byline_is_skipped_entirely() {
    let extractor = BylineExtractor::new(builtin(), ExtractionConfig::default());
    assert!(extractor
        .extract(&descriptor(None, Some("title"), Some("body"), None))
        .is_empty());
}

// ── Extraction engine ─────────────────────────────────────────────────────

#[test]
fn engine_joins_evidence_from_all_extractor_classes() {
    let engine = ExtractionEngine::new(builtin(), ExtractionConfig::default());
    let items = engine.extract(&test_fixtures::tech_article());

    for kind in [
        SourceKind::Section,
        SourceKind::Keyword,
        SourceKind::Context,
        SourceKind::Byline,
    ] {
        assert!(
            items.iter().any(|i| i.source == kind),
            "expected evidence from {kind}"
        );
    }
}

#[test]
fn parallel_extraction_matches_sequential_output_exactly() {
    let engine = ExtractionEngine::new(builtin(), ExtractionConfig::default());
    let content = test_fixtures::tech_article();
    assert_eq!(engine.extract(&content), engine.extract_parallel(&content));
}

#[test]
fn empty_descriptor_yields_no_evidence() {
    let engine = ExtractionEngine::new(builtin(), ExtractionConfig::default());
    assert!(engine.extract(&ContentDescriptor::default()).is_empty());
}

#[test]
fn caller_chosen_extractor_subset_is_respected() {
    let taxonomy = builtin();
    let engine = ExtractionEngine::with_extractors(vec![Box::new(SectionExtractor::new(
        taxonomy,
        ExtractionConfig::default(),
    ))]);
    let items = engine.extract(&test_fixtures::tech_article());
    assert!(!items.is_empty());
    assert!(items.iter().all(|i| i.source == SourceKind::Section));
}
