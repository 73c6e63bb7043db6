//! Brief rendering: a pure mapping from a [`Brief`] to what the view shows.
//!
//! The view layer only lays out a [`BriefView`]; every decision about which
//! fields appear, in which order and with which labels is made here.

use std::fmt::Write as _;

use shared::domain::Brief;

pub const H2_MARKER: &str = "H2";
pub const GAP_MARKER: &str = "→";
pub const LINK_MARKER: &str = "↗";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Intent,
    WordCount,
    Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldBody {
    Text(String),
    /// Rendered italic inside quotes.
    Quote(String),
    List {
        marker: &'static str,
        items: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefField {
    pub label: &'static str,
    pub body: FieldBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefView {
    pub badges: Vec<Badge>,
    pub fields: Vec<BriefField>,
}

impl BriefView {
    pub fn is_empty(&self) -> bool {
        self.badges.is_empty() && self.fields.is_empty()
    }

    pub fn field(&self, label: &str) -> Option<&BriefField> {
        self.fields.iter().find(|field| field.label == label)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.label).collect()
    }

    /// Terminal rendering used by the CLI.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        if !self.badges.is_empty() {
            let tags: Vec<String> = self.badges.iter().map(|badge| format!("[{}]", badge.text)).collect();
            let _ = writeln!(out, "{}", tags.join(" "));
            out.push('\n');
        }
        for field in &self.fields {
            let _ = writeln!(out, "{}", field.label.to_uppercase());
            match &field.body {
                FieldBody::Text(text) => {
                    let _ = writeln!(out, "  {text}");
                }
                FieldBody::Quote(text) => {
                    let _ = writeln!(out, "  \"{text}\"");
                }
                FieldBody::List { marker, items } => {
                    for item in items {
                        let _ = writeln!(out, "  {marker} {item}");
                    }
                }
            }
            out.push('\n');
        }
        out.truncate(out.trim_end().len());
        out
    }
}

pub fn render_brief(brief: &Brief) -> BriefView {
    let mut badges = Vec::new();
    if let Some(intent) = brief.search_intent() {
        badges.push(Badge {
            kind: BadgeKind::Intent,
            text: format!("Intent: {intent}"),
        });
    }
    if let Some(count) = brief.word_count() {
        badges.push(Badge {
            kind: BadgeKind::WordCount,
            text: format!("~{count} words"),
        });
    }
    if let Some(tone) = brief.tone() {
        badges.push(Badge {
            kind: BadgeKind::Tone,
            text: tone.to_string(),
        });
    }

    let mut fields = Vec::new();
    push_text(&mut fields, "Page Title", brief.title());
    push_text(&mut fields, "Meta Description", brief.meta_description());
    push_text(&mut fields, "Target Audience", brief.target_audience());
    push_text(&mut fields, "Unique Angle", brief.unique_angle());
    push_list(&mut fields, "H2 Headings", H2_MARKER, brief.h2_headings());
    push_list(&mut fields, "Content Gaps", GAP_MARKER, brief.content_gaps());
    push_list(
        &mut fields,
        "Internal Links",
        LINK_MARKER,
        brief.internal_linking_suggestions(),
    );
    if let Some(cta) = brief.cta_suggestion() {
        fields.push(BriefField {
            label: "CTA",
            body: FieldBody::Quote(cta.to_string()),
        });
    }

    BriefView { badges, fields }
}

fn push_text(fields: &mut Vec<BriefField>, label: &'static str, value: Option<&str>) {
    if let Some(text) = value {
        fields.push(BriefField {
            label,
            body: FieldBody::Text(text.to_string()),
        });
    }
}

fn push_list(fields: &mut Vec<BriefField>, label: &'static str, marker: &'static str, items: Vec<String>) {
    if !items.is_empty() {
        fields.push(BriefField {
            label,
            body: FieldBody::List { marker, items },
        });
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
