use super::*;

fn plain(text: &str) -> InlineSpan {
    InlineSpan {
        text: text.to_string(),
        ..InlineSpan::default()
    }
}

#[test]
fn heading_then_paragraph() {
    let blocks = parse_markdown("# Title\n\nBody text");
    assert_eq!(
        blocks,
        vec![
            MarkdownBlock::Heading {
                level: 1,
                spans: vec![plain("Title")],
            },
            MarkdownBlock::Paragraph {
                spans: vec![plain("Body text")],
            },
        ]
    );
}

#[test]
fn inline_styles_are_kept_apart() {
    let blocks = parse_markdown("Pick **supportive** shoes, *not* `flat` ones.");
    let MarkdownBlock::Paragraph { spans } = &blocks[0] else {
        panic!("expected paragraph, got {blocks:?}");
    };
    let strong: Vec<&str> = spans.iter().filter(|s| s.strong).map(|s| s.text.as_str()).collect();
    let emphasis: Vec<&str> = spans.iter().filter(|s| s.emphasis).map(|s| s.text.as_str()).collect();
    let code: Vec<&str> = spans.iter().filter(|s| s.code).map(|s| s.text.as_str()).collect();
    assert_eq!(strong, vec!["supportive"]);
    assert_eq!(emphasis, vec!["not"]);
    assert_eq!(code, vec!["flat"]);
    let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(joined, "Pick supportive shoes, not flat ones.");
}

#[test]
fn strikethrough_is_its_own_span() {
    let blocks = parse_markdown("Was ~~$120~~ now $90");
    assert_eq!(
        blocks,
        vec![MarkdownBlock::Paragraph {
            spans: vec![
                plain("Was "),
                InlineSpan {
                    text: "$120".to_string(),
                    strikethrough: true,
                    ..InlineSpan::default()
                },
                plain(" now $90"),
            ],
        }]
    );
}

#[test]
fn soft_breaks_join_lines_of_a_paragraph() {
    let blocks = parse_markdown("first line\nsecond line");
    assert_eq!(
        blocks,
        vec![MarkdownBlock::Paragraph {
            spans: vec![plain("first line second line")],
        }]
    );
}

#[test]
fn bullet_and_numbered_lists_with_nesting() {
    let blocks = parse_markdown("- arch support\n  - insoles\n- cushioning\n\n3. measure\n4. try on\n");
    assert_eq!(
        blocks,
        vec![
            MarkdownBlock::ListItem {
                depth: 0,
                marker: ListMarker::Bullet,
                spans: vec![plain("arch support")],
            },
            MarkdownBlock::ListItem {
                depth: 1,
                marker: ListMarker::Bullet,
                spans: vec![plain("insoles")],
            },
            MarkdownBlock::ListItem {
                depth: 0,
                marker: ListMarker::Bullet,
                spans: vec![plain("cushioning")],
            },
            MarkdownBlock::ListItem {
                depth: 0,
                marker: ListMarker::Number(3),
                spans: vec![plain("measure")],
            },
            MarkdownBlock::ListItem {
                depth: 0,
                marker: ListMarker::Number(4),
                spans: vec![plain("try on")],
            },
        ]
    );
}

#[test]
fn loose_item_paragraphs_show_marker_once() {
    let blocks = parse_markdown("1. first para\n\n   second para\n");
    assert_eq!(
        blocks,
        vec![
            MarkdownBlock::ListItem {
                depth: 0,
                marker: ListMarker::Number(1),
                spans: vec![plain("first para")],
            },
            MarkdownBlock::ListItem {
                depth: 0,
                marker: ListMarker::Continuation,
                spans: vec![plain("second para")],
            },
        ]
    );
}

#[test]
fn quotes_code_and_rules() {
    let blocks = parse_markdown("> Shop in the evening.\n\n---\n\n```toml\nsize = 42\n```\n");
    assert_eq!(
        blocks,
        vec![
            MarkdownBlock::Quote {
                spans: vec![plain("Shop in the evening.")],
            },
            MarkdownBlock::Rule,
            MarkdownBlock::Code {
                language: Some("toml".to_string()),
                text: "size = 42".to_string(),
            },
        ]
    );
}

#[test]
fn empty_source_has_no_blocks() {
    assert!(parse_markdown("").is_empty());
    assert!(parse_markdown("   \n\n").is_empty());
}
