//! Backend-to-UI events and failure classification for the desktop GUI.

use client_core::RequestTicket;
use shared::{domain::Brief, error::ServiceError};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    BackendFailed(String),
    BriefFinished {
        ticket: RequestTicket,
        result: Result<Brief, ServiceError>,
    },
    ArticleFinished {
        ticket: RequestTicket,
        result: Result<String, ServiceError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Remote,
    Transport,
    Protocol,
    Configuration,
}

impl UiErrorCategory {
    pub fn of(err: &ServiceError) -> Self {
        match err {
            ServiceError::Remote { .. } => Self::Remote,
            ServiceError::Transport(_) => Self::Transport,
            ServiceError::Decode(_) => Self::Protocol,
            ServiceError::InvalidEndpoint(_) => Self::Configuration,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Remote => "Service",
            Self::Transport => "Transport",
            Self::Protocol => "Protocol",
            Self::Configuration => "Configuration",
        }
    }
}
