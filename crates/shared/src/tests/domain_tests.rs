use super::*;
use serde_json::json;

fn brief(value: Value) -> Brief {
    Brief::from_value(value).expect("brief object")
}

#[test]
fn reads_populated_fields() {
    let brief = brief(json!({
        "title": "Best Running Shoes for Flat Feet",
        "search_intent": "Commercial",
        "tone": "Friendly",
        "word_count": 1200,
        "h2_headings": ["Intro", "Buying Guide"],
        "cta_suggestion": "Find your fit",
    }));

    assert_eq!(brief.title(), Some("Best Running Shoes for Flat Feet"));
    assert_eq!(brief.search_intent(), Some("Commercial"));
    assert_eq!(brief.tone(), Some("Friendly"));
    assert_eq!(brief.word_count(), Some(1200));
    assert_eq!(brief.h2_headings(), vec!["Intro", "Buying Guide"]);
    assert_eq!(brief.cta_suggestion(), Some("Find your fit"));
    assert!(brief.content_gaps().is_empty());
    assert_eq!(brief.meta_description(), None);
}

#[test]
fn wrong_shaped_fields_read_as_absent() {
    let brief = brief(json!({
        "title": 42,
        "meta_description": "   ",
        "tone": null,
        "word_count": "1200",
        "h2_headings": "Intro",
        "content_gaps": {"a": 1},
    }));

    assert_eq!(brief.title(), None);
    assert_eq!(brief.meta_description(), None);
    assert_eq!(brief.tone(), None);
    assert_eq!(brief.word_count(), None);
    assert!(brief.h2_headings().is_empty());
    assert!(brief.content_gaps().is_empty());
}

#[test]
fn word_count_accepts_integral_numbers_only() {
    assert_eq!(brief(json!({"word_count": 1500.0})).word_count(), Some(1500));
    assert_eq!(brief(json!({"word_count": 1500.5})).word_count(), None);
    assert_eq!(brief(json!({"word_count": 0})).word_count(), None);
    assert_eq!(brief(json!({"word_count": -20})).word_count(), None);
}

#[test]
fn list_items_keep_order_and_skip_structured_values() {
    let brief = brief(json!({
        "internal_linking_suggestions": ["C", null, "A", 7, {"x": 1}, "A", ["nested"], true]
    }));

    assert_eq!(
        brief.internal_linking_suggestions(),
        vec!["C", "A", "7", "A", "true"]
    );
}

#[test]
fn empty_string_items_are_kept_in_place() {
    let brief = brief(json!({ "h2_headings": ["A", "", "B", "  "] }));

    assert_eq!(brief.h2_headings(), vec!["A", "", "B", "  "]);
}

#[test]
fn rejects_non_object_payloads() {
    let err = Brief::from_value(json!(["title"])).expect_err("array is not a brief");
    assert_eq!(err.found, "an array");
    assert_eq!(
        err.to_string(),
        "expected a JSON object for the brief, got an array"
    );
}

#[test]
fn serializes_the_document_as_received() {
    let source = json!({
        "title": "T",
        "word_count": "lots",
        "extra": {"kept": true},
    });
    let brief = brief(source.clone());

    assert_eq!(serde_json::to_value(&brief).expect("serialize"), source);

    let decoded: Brief = serde_json::from_value(source).expect("deserialize");
    assert_eq!(decoded, brief);
}

#[test]
fn pretty_json_uses_two_space_indent() {
    let brief = brief(json!({"title": "T"}));
    assert_eq!(
        brief.to_pretty_json().expect("pretty json"),
        "{\n  \"title\": \"T\"\n}"
    );
}
