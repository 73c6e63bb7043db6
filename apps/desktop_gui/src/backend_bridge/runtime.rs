//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{GenerationService, HttpGenerationService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, service_url: String) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        let service = match HttpGenerationService::new(&service_url) {
            Ok(service) => service,
            Err(err) => {
                tracing::error!(service_url = %service_url, "failed to configure generation service: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info(format!("Ready (service: {service_url})")));
        runtime.block_on(serve_commands(&service, cmd_rx, ui_tx));
        tracing::info!("backend worker stopped");
    });
}

/// Processes commands in arrival order until either queue is closed.
pub async fn serve_commands<S: GenerationService>(
    service: &S,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        let event = run_command(service, cmd).await;
        if ui_tx.send(event).is_err() {
            tracing::warn!("ui event queue closed; dropping backend result");
            break;
        }
    }
}

pub async fn run_command<S: GenerationService>(service: &S, cmd: BackendCommand) -> UiEvent {
    tracing::info!(command = cmd.name(), request_id = cmd.ticket().id(), "backend: running command");
    match cmd {
        BackendCommand::FetchBrief { ticket, request } => UiEvent::BriefFinished {
            ticket,
            result: service.fetch_brief(&request).await,
        },
        BackendCommand::GenerateArticle { ticket, request } => UiEvent::ArticleFinished {
            ticket,
            result: service.generate_article(&request).await,
        },
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
