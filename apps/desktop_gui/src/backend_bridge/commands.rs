//! Backend commands queued from UI to backend worker.

use client_core::RequestTicket;
use shared::protocol::{ArticleRequest, BriefRequest};

#[derive(Debug)]
pub enum BackendCommand {
    FetchBrief {
        ticket: RequestTicket,
        request: BriefRequest,
    },
    GenerateArticle {
        ticket: RequestTicket,
        request: ArticleRequest,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchBrief { .. } => "fetch_brief",
            Self::GenerateArticle { .. } => "generate_article",
        }
    }

    pub fn ticket(&self) -> RequestTicket {
        match self {
            Self::FetchBrief { ticket, .. } | Self::GenerateArticle { ticket, .. } => *ticket,
        }
    }
}
