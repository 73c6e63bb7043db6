//! Command orchestration from UI actions to the backend command queue, and
//! application of backend events to the session.

use chrono::Local;
use client_core::{Session, SessionError};
use crossbeam_channel::{Sender, TrySendError};
use shared::error::ServiceError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorCategory, UiEvent};

pub fn dispatch_backend_command(cmd_tx: &Sender<BackendCommand>, cmd: BackendCommand) -> Result<(), String> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err("UI command queue is full; please retry".to_string())
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err("Backend worker is not running (possible startup failure); restart the app".to_string())
        }
    }
}

/// Starts a brief request and queues it. A queueing failure resolves the
/// request immediately with that failure so the form is usable again.
pub fn submit_brief(session: &mut Session, keyword: &str, cmd_tx: &Sender<BackendCommand>) -> Result<(), SessionError> {
    let started = session.begin_brief(keyword)?;
    let ticket = started.ticket;
    let cmd = BackendCommand::FetchBrief {
        ticket,
        request: started.payload,
    };
    if let Err(reason) = dispatch_backend_command(cmd_tx, cmd) {
        session.complete_brief(ticket, Err(ServiceError::Transport(reason)));
    }
    Ok(())
}

pub fn submit_article(session: &mut Session, cmd_tx: &Sender<BackendCommand>) -> Result<(), SessionError> {
    let started = session.begin_article()?;
    let ticket = started.ticket;
    let cmd = BackendCommand::GenerateArticle {
        ticket,
        request: started.payload,
    };
    if let Err(reason) = dispatch_backend_command(cmd_tx, cmd) {
        session.complete_article(ticket, Err(ServiceError::Transport(reason)));
    }
    Ok(())
}

pub fn apply_ui_event(session: &mut Session, event: UiEvent, status: &mut String) {
    match event {
        UiEvent::Info(message) => *status = message,
        UiEvent::BackendFailed(message) => {
            tracing::error!("{message}");
            *status = message;
        }
        UiEvent::BriefFinished { ticket, result } => {
            let outcome = describe_outcome("Brief", &result);
            if session.complete_brief(ticket, result) {
                *status = outcome;
            }
        }
        UiEvent::ArticleFinished { ticket, result } => {
            let outcome = describe_outcome("Article", &result);
            if session.complete_article(ticket, result) {
                *status = outcome;
            }
        }
    }
}

fn describe_outcome<T>(what: &str, result: &Result<T, ServiceError>) -> String {
    let at = Local::now().format("%H:%M:%S");
    match result {
        Ok(_) => format!("{what} ready at {at}"),
        Err(err) => {
            let category = UiErrorCategory::of(err);
            tracing::warn!(
                category = category.label(),
                status = ?err.status(),
                "{what} request failed: {err}"
            );
            format!("{what} request failed ({}) at {at}", category.label())
        }
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
