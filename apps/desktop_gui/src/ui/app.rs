use std::time::{Duration, Instant};

use client_core::{render_brief, BriefView, Session};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{apply_ui_event, submit_article, submit_brief};
use crate::ui::markdown::{parse_markdown, MarkdownBlock};
use crate::ui::panels::{self, PanelAction};
use crate::ui::theme;
use crate::ui::widgets::CopyFeedback;

const PENDING_REPAINT: Duration = Duration::from_millis(100);
const CONTENT_MAX_WIDTH: f32 = 860.0;

/// Derived view data, rebuilt only when the session revision changes.
#[derive(Default)]
struct ViewCache {
    revision: Option<u64>,
    brief_view: BriefView,
    brief_json: String,
    article_blocks: Vec<MarkdownBlock>,
}

pub struct MicrogenApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    session: Session,
    keyword_input: String,
    status: String,
    service_url: String,
    cache: ViewCache,
    brief_copy: CopyFeedback,
    article_copy: CopyFeedback,
}

impl MicrogenApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        service_url: String,
    ) -> Self {
        theme::apply(&cc.egui_ctx);
        Self {
            cmd_tx,
            ui_rx,
            session: Session::new(),
            keyword_input: String::new(),
            status: "Starting backend worker…".to_string(),
            service_url,
            cache: ViewCache::default(),
            brief_copy: CopyFeedback::default(),
            article_copy: CopyFeedback::default(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.session, event, &mut self.status);
        }
    }

    fn refresh_cache(&mut self) {
        let revision = self.session.revision();
        if self.cache.revision == Some(revision) {
            return;
        }

        let mut cache = ViewCache {
            revision: Some(revision),
            ..ViewCache::default()
        };
        if let Some(brief) = self.session.brief() {
            cache.brief_view = render_brief(brief);
            cache.brief_json = match brief.to_pretty_json() {
                Ok(json) => json,
                Err(err) => {
                    tracing::warn!("failed to serialise brief for copying: {err}");
                    String::new()
                }
            };
        }
        if let Some(article) = self.session.article() {
            cache.article_blocks = parse_markdown(article);
        }
        self.cache = cache;
    }

    fn apply_action(&mut self, action: PanelAction) {
        let result = match action {
            PanelAction::SubmitBrief => {
                tracing::info!(keyword_len = self.keyword_input.len(), "submitting brief request");
                submit_brief(&mut self.session, &self.keyword_input, &self.cmd_tx)
            }
            PanelAction::GenerateArticle => {
                tracing::info!("submitting article request");
                submit_article(&mut self.session, &self.cmd_tx)
            }
            PanelAction::DismissError => {
                self.session.dismiss_error();
                Ok(())
            }
        };
        if let Err(err) = result {
            tracing::debug!("ui action rejected: {err}");
            self.status = err.to_string();
        }
    }

    fn show_page(&mut self, ui: &mut egui::Ui) -> Vec<PanelAction> {
        let mut actions = Vec::new();

        panels::header(ui, &self.service_url);
        actions.extend(panels::keyword_form(ui, &mut self.keyword_input, &self.session));

        if let Some(message) = self.session.error() {
            ui.add_space(10.0);
            actions.extend(panels::error_region(ui, message));
        }

        if self.session.phase().shows_brief() {
            ui.add_space(14.0);
            actions.extend(panels::brief_card(
                ui,
                &self.cache.brief_view,
                &self.cache.brief_json,
                &mut self.brief_copy,
                &mut self.status,
                &self.session,
            ));
        }

        if let Some(article) = panels::article_to_show(&self.session) {
            ui.add_space(14.0);
            panels::article_card(
                ui,
                &self.cache.article_blocks,
                article,
                &mut self.article_copy,
                &mut self.status,
            );
        }
        ui.add_space(24.0);

        actions
    }
}

impl eframe::App for MicrogenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.refresh_cache();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.status);
        });

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let side = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(side);
                    ui.vertical(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        actions = self.show_page(ui);
                    });
                });
            });
        });

        for action in actions {
            self.apply_action(action);
        }

        // Results arrive over a channel; keep polling while one is due and
        // until the copy acknowledgements expire.
        let now = Instant::now();
        let mut next_repaint = self.session.in_flight().map(|_| PENDING_REPAINT);
        for left in [self.brief_copy.remaining(now), self.article_copy.remaining(now)]
            .into_iter()
            .flatten()
        {
            next_repaint = Some(next_repaint.map_or(left, |current| current.min(left)));
        }
        if let Some(after) = next_repaint {
            ctx.request_repaint_after(after);
        }
    }
}
