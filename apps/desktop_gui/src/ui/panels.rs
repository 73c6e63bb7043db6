//! Page regions. Each function only draws and reports what the user asked
//! for; the app applies the resulting actions to the session.

use client_core::{Badge, BriefField, BriefView, FieldBody, Session};
use eframe::egui;

use crate::ui::markdown::{show_markdown, MarkdownBlock};
use crate::ui::theme;
use crate::ui::widgets::{busy_button, copy_button, CopyFeedback, ARTICLE_BUSY_LABEL, BRIEF_BUSY_LABEL};

pub const KEYWORD_HINT: &str = "e.g., best running shoes for flat feet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    SubmitBrief,
    GenerateArticle,
    DismissError,
}

pub fn header(ui: &mut egui::Ui, service_url: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("microgen").strong().size(18.0).color(theme::ACCENT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(service_url).small().color(theme::MUTED_TEXT))
                .on_hover_text("Generation service");
        });
    });
    ui.add_space(18.0);
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("Content Brief Generator").size(28.0).strong());
        ui.label(egui::RichText::new("Enter keywords to generate SEO strategy in seconds").color(theme::MUTED_TEXT));
    });
    ui.add_space(14.0);
}

/// Keyword input plus the Generate button. The whole form is disabled while
/// any request is in flight.
pub fn keyword_form(ui: &mut egui::Ui, keyword_input: &mut String, session: &Session) -> Option<PanelAction> {
    let idle = session.in_flight().is_none();
    let mut action = None;

    theme::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            let button_width = 190.0;
            let input = egui::TextEdit::singleline(keyword_input)
                .hint_text(KEYWORD_HINT)
                .desired_width((ui.available_width() - button_width).max(120.0));
            let response = ui.add_enabled(idle, input);
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let clicked = busy_button(
                ui,
                BRIEF_BUSY_LABEL,
                session.brief_pending(),
                session.can_request_brief(keyword_input),
            );
            if (clicked || submitted) && session.can_request_brief(keyword_input) {
                action = Some(PanelAction::SubmitBrief);
            }
        });
    });

    action
}

pub fn error_region(ui: &mut egui::Ui, message: &str) -> Option<PanelAction> {
    let mut action = None;
    egui::Frame::new()
        .fill(theme::ERROR_FILL)
        .stroke(egui::Stroke::new(1.0, theme::ERROR_STROKE))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(message).color(theme::ERROR_TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        action = Some(PanelAction::DismissError);
                    }
                });
            });
        });
    action
}

fn badge(ui: &mut egui::Ui, badge: &Badge) {
    let (fg, bg) = theme::badge_colors(badge.kind);
    egui::Frame::new()
        .fill(bg)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(&badge.text).small().strong().color(fg));
        });
}

fn field(ui: &mut egui::Ui, field: &BriefField) {
    ui.label(
        egui::RichText::new(field.label.to_uppercase())
            .small()
            .strong()
            .color(theme::MUTED_TEXT),
    );
    match &field.body {
        FieldBody::Text(text) => {
            ui.label(text);
        }
        FieldBody::Quote(text) => {
            ui.label(egui::RichText::new(format!("\u{201c}{text}\u{201d}")).italics());
        }
        FieldBody::List { marker, items } => {
            for item in items {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(*marker).monospace().color(theme::ACCENT));
                    ui.label(item);
                });
            }
        }
    }
    ui.add_space(8.0);
}

pub fn brief_card(
    ui: &mut egui::Ui,
    view: &BriefView,
    brief_json: &str,
    feedback: &mut CopyFeedback,
    status: &mut String,
    session: &Session,
) -> Option<PanelAction> {
    let mut action = None;

    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Content Brief").strong().size(18.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                copy_button(ui, feedback, brief_json, status);
            });
        });
        ui.add_space(6.0);

        if !view.badges.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for item in &view.badges {
                    badge(ui, item);
                }
            });
            ui.add_space(10.0);
        }

        for item in &view.fields {
            field(ui, item);
        }
        if view.is_empty() {
            ui.label(egui::RichText::new("The service returned an empty brief.").color(theme::MUTED_TEXT));
            ui.add_space(8.0);
        }

        ui.separator();
        if busy_button(
            ui,
            ARTICLE_BUSY_LABEL,
            session.article_pending(),
            session.can_request_article(),
        ) {
            action = Some(PanelAction::GenerateArticle);
        }
    });

    action
}

/// The article region is only drawn for a non-empty article.
pub fn article_to_show(session: &Session) -> Option<&str> {
    session.article().filter(|article| !article.is_empty())
}

pub fn article_card(
    ui: &mut egui::Ui,
    blocks: &[MarkdownBlock],
    article: &str,
    feedback: &mut CopyFeedback,
    status: &mut String,
) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Publish-ready SEO article:").strong().size(18.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                copy_button(ui, feedback, article, status);
            });
        });
        ui.separator();
        show_markdown(ui, blocks);
    });
}

pub fn status_bar(ui: &mut egui::Ui, status: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(status).small().color(theme::MUTED_TEXT));
    });
}

#[cfg(test)]
#[path = "tests/panels_tests.rs"]
mod tests;
