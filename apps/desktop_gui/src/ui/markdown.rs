//! Markdown to egui: parsing into a flat list of display blocks, then
//! drawing those blocks. Parsing is kept separate so the article is parsed
//! once per session revision instead of once per frame.

use eframe::egui;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineSpan {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
    pub strikethrough: bool,
}

impl InlineSpan {
    fn same_style(&self, other: &InlineSpan) -> bool {
        self.strong == other.strong
            && self.emphasis == other.emphasis
            && self.code == other.code
            && self.strikethrough == other.strikethrough
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Number(u64),
    /// Further paragraphs of an item that already showed its marker.
    Continuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownBlock {
    Heading { level: u8, spans: Vec<InlineSpan> },
    Paragraph { spans: Vec<InlineSpan> },
    ListItem { depth: usize, marker: ListMarker, spans: Vec<InlineSpan> },
    Quote { spans: Vec<InlineSpan> },
    Code { language: Option<String>, text: String },
    Rule,
}

#[derive(Debug)]
enum Open {
    Heading(u8),
    Paragraph,
    List,
    Item,
    Quote,
    Code,
    Strong,
    Emphasis,
    Strikethrough,
    Other,
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<MarkdownBlock>,
    open: Vec<Open>,
    spans: Vec<InlineSpan>,
    // Next number per open list; `None` for bullet lists.
    lists: Vec<Option<u64>>,
    // Marker still to be shown per open item.
    items: Vec<ListMarker>,
    code_language: Option<String>,
    code_text: String,
}

impl BlockBuilder {
    fn is_open(&self, wanted: fn(&Open) -> bool) -> bool {
        self.open.iter().any(wanted)
    }

    fn push_text(&mut self, text: &str, code: bool) {
        if text.is_empty() {
            return;
        }
        let span = InlineSpan {
            text: text.to_string(),
            strong: self.is_open(|open| matches!(open, Open::Strong)),
            emphasis: self.is_open(|open| matches!(open, Open::Emphasis)),
            code,
            strikethrough: self.is_open(|open| matches!(open, Open::Strikethrough)),
        };
        match self.spans.last_mut() {
            Some(last) if last.same_style(&span) => last.text.push_str(&span.text),
            _ => self.spans.push(span),
        }
    }

    /// Turns pending inline text into a block that fits the innermost
    /// container (list item or quote).
    fn flush_inline(&mut self) {
        if self.spans.iter().all(|span| span.text.trim().is_empty()) {
            self.spans.clear();
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        let container = self
            .open
            .iter()
            .rev()
            .find(|open| matches!(open, Open::Item | Open::Quote));
        let block = match container {
            Some(Open::Item) => {
                let depth = self.lists.len().saturating_sub(1);
                let marker = self
                    .items
                    .last_mut()
                    .map(|marker| std::mem::replace(marker, ListMarker::Continuation))
                    .unwrap_or(ListMarker::Continuation);
                MarkdownBlock::ListItem { depth, marker, spans }
            }
            Some(_) => MarkdownBlock::Quote { spans },
            None => MarkdownBlock::Paragraph { spans },
        };
        self.blocks.push(block);
    }

    fn start(&mut self, tag: Tag<'_>) {
        let open = match tag {
            Tag::Heading { level, .. } => {
                self.flush_inline();
                Open::Heading(level as u8)
            }
            Tag::Paragraph => Open::Paragraph,
            Tag::List(first) => {
                self.flush_inline();
                self.lists.push(first);
                Open::List
            }
            Tag::Item => {
                let marker = match self.lists.last_mut() {
                    Some(Some(next)) => {
                        let marker = ListMarker::Number(*next);
                        *next += 1;
                        marker
                    }
                    _ => ListMarker::Bullet,
                };
                self.items.push(marker);
                Open::Item
            }
            Tag::BlockQuote(_) => {
                self.flush_inline();
                Open::Quote
            }
            Tag::CodeBlock(kind) => {
                self.flush_inline();
                self.code_language = match kind {
                    CodeBlockKind::Fenced(language) if !language.trim().is_empty() => {
                        Some(language.trim().to_string())
                    }
                    _ => None,
                };
                self.code_text.clear();
                Open::Code
            }
            Tag::Strong => Open::Strong,
            Tag::Emphasis => Open::Emphasis,
            Tag::Strikethrough => Open::Strikethrough,
            _ => Open::Other,
        };
        self.open.push(open);
    }

    fn end(&mut self) {
        if matches!(self.open.last(), Some(Open::Item | Open::Quote)) {
            self.flush_inline();
        }
        let Some(open) = self.open.pop() else {
            return;
        };
        match open {
            Open::Heading(level) => {
                let spans = std::mem::take(&mut self.spans);
                self.blocks.push(MarkdownBlock::Heading { level, spans });
            }
            // Popped first so the container lookup sees the enclosing item or quote.
            Open::Paragraph => self.flush_inline(),
            Open::Item => {
                self.items.pop();
            }
            Open::List => {
                self.lists.pop();
            }
            Open::Code => {
                let text = std::mem::take(&mut self.code_text);
                self.blocks.push(MarkdownBlock::Code {
                    language: self.code_language.take(),
                    text: text.trim_end_matches('\n').to_string(),
                });
            }
            Open::Quote | Open::Strong | Open::Emphasis | Open::Strikethrough | Open::Other => {}
        }
    }

    fn finish(mut self) -> Vec<MarkdownBlock> {
        self.open.clear();
        self.flush_inline();
        self.blocks
    }
}

/// Parses CommonMark (plus strikethrough) into display blocks.
pub fn parse_markdown(source: &str) -> Vec<MarkdownBlock> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut builder = BlockBuilder::default();
    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(tag) => builder.start(tag),
            Event::End(_) => builder.end(),
            Event::Text(text) => {
                if builder.is_open(|open| matches!(open, Open::Code)) {
                    builder.code_text.push_str(&text);
                } else {
                    builder.push_text(&text, false);
                }
            }
            Event::Code(text) => builder.push_text(&text, true),
            Event::SoftBreak => builder.push_text(" ", false),
            Event::HardBreak => builder.push_text("\n", false),
            Event::Rule => {
                builder.flush_inline();
                builder.blocks.push(MarkdownBlock::Rule);
            }
            Event::TaskListMarker(done) => builder.push_text(if done { "☑ " } else { "☐ " }, false),
            _ => {}
        }
    }
    builder.finish()
}

fn heading_size(level: u8) -> f32 {
    match level {
        1 => 24.0,
        2 => 20.0,
        3 => 17.0,
        _ => 15.0,
    }
}

fn span_text(span: &InlineSpan) -> egui::RichText {
    let mut text = egui::RichText::new(&span.text);
    if span.strong {
        text = text.strong();
    }
    if span.emphasis {
        text = text.italics();
    }
    if span.code {
        text = text.code();
    }
    if span.strikethrough {
        text = text.strikethrough();
    }
    text
}

fn show_spans(ui: &mut egui::Ui, spans: &[InlineSpan], decorate: impl Fn(egui::RichText) -> egui::RichText) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            ui.label(decorate(span_text(span)));
        }
    });
}

pub fn show_markdown(ui: &mut egui::Ui, blocks: &[MarkdownBlock]) {
    for block in blocks {
        match block {
            MarkdownBlock::Heading { level, spans } => {
                ui.add_space(6.0);
                let size = heading_size(*level);
                show_spans(ui, spans, |text| text.size(size).strong());
                ui.add_space(2.0);
            }
            MarkdownBlock::Paragraph { spans } => {
                show_spans(ui, spans, |text| text);
                ui.add_space(4.0);
            }
            MarkdownBlock::ListItem { depth, marker, spans } => {
                ui.horizontal(|ui| {
                    ui.add_space(12.0 + 16.0 * *depth as f32);
                    let marker = match marker {
                        ListMarker::Bullet => "•".to_string(),
                        ListMarker::Number(n) => format!("{n}."),
                        ListMarker::Continuation => String::new(),
                    };
                    ui.add_sized([18.0, 0.0], egui::Label::new(marker));
                    show_spans(ui, spans, |text| text);
                });
            }
            MarkdownBlock::Quote { spans } => {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("▎").color(ui.visuals().weak_text_color()));
                    show_spans(ui, spans, |text| text.italics());
                });
            }
            MarkdownBlock::Code { text, .. } => {
                egui::Frame::new()
                    .fill(ui.visuals().code_bg_color)
                    .corner_radius(4.0)
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(text).monospace());
                    });
                ui.add_space(4.0);
            }
            MarkdownBlock::Rule => {
                ui.separator();
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/markdown_tests.rs"]
mod tests;
