//! Session record and the transitions allowed on it.
//!
//! A [`Session`] is the whole interaction state of one window: the keyword
//! the current brief was requested for, the brief and article results, the
//! single error slot and the request currently in flight. Every mutation
//! goes through `begin_*`/`complete_*` so the invariants hold structurally:
//! at most one request is in flight, and an article never outlives the brief
//! it was generated from.

use std::fmt;

use shared::{
    domain::Brief,
    error::ServiceError,
    protocol::{ArticleRequest, BriefRequest},
};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Brief,
    Article,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brief => f.write_str("brief"),
            Self::Article => f.write_str("article"),
        }
    }
}

/// Identifies one issued request. Completions must hand it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    id: u64,
    kind: RequestKind,
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// A request accepted by the session, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct StartedRequest<P> {
    pub ticket: RequestTicket,
    pub payload: P,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    BriefLoading,
    BriefReady,
    ArticleLoading,
    ArticleReady,
}

impl Phase {
    pub fn shows_brief(self) -> bool {
        matches!(self, Self::BriefReady | Self::ArticleLoading | Self::ArticleReady)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("enter a keyword to generate a brief")]
    EmptyKeyword,
    #[error("a {0} request is already in progress")]
    RequestInFlight(RequestKind),
    #[error("generate a brief before requesting an article")]
    NoBrief,
}

#[derive(Debug, Default)]
pub struct Session {
    keyword: String,
    brief: Option<Brief>,
    article: Option<String>,
    error: Option<String>,
    in_flight: Option<RequestTicket>,
    next_request_id: u64,
    revision: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyword of the most recent brief request.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn brief(&self) -> Option<&Brief> {
        self.brief.as_ref()
    }

    pub fn article(&self) -> Option<&str> {
        self.article.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn brief_pending(&self) -> bool {
        self.pending_kind() == Some(RequestKind::Brief)
    }

    pub fn article_pending(&self) -> bool {
        self.pending_kind() == Some(RequestKind::Article)
    }

    pub fn in_flight(&self) -> Option<RequestTicket> {
        self.in_flight
    }

    /// Bumped on every change; views use it to invalidate cached layouts.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn phase(&self) -> Phase {
        match (self.pending_kind(), &self.brief, &self.article) {
            (Some(RequestKind::Brief), _, _) => Phase::BriefLoading,
            (Some(RequestKind::Article), _, _) => Phase::ArticleLoading,
            (None, None, _) => Phase::Idle,
            (None, Some(_), None) => Phase::BriefReady,
            (None, Some(_), Some(_)) => Phase::ArticleReady,
        }
    }

    pub fn can_request_brief(&self, keyword: &str) -> bool {
        self.in_flight.is_none() && !keyword.is_empty()
    }

    pub fn can_request_article(&self) -> bool {
        self.in_flight.is_none() && self.brief.is_some()
    }

    /// Starts a brief request: clears brief, article and error, then marks
    /// the brief as pending. The keyword is sent exactly as given. Rejections
    /// leave the session untouched.
    pub fn begin_brief(&mut self, keyword: &str) -> Result<StartedRequest<BriefRequest>, SessionError> {
        if keyword.is_empty() {
            return Err(SessionError::EmptyKeyword);
        }
        self.ensure_idle()?;

        self.keyword = keyword.to_string();
        self.brief = None;
        self.article = None;
        self.error = None;
        let ticket = self.issue(RequestKind::Brief);
        debug!(request_id = ticket.id, keyword_len = keyword.len(), "brief request started");

        Ok(StartedRequest {
            ticket,
            payload: BriefRequest {
                keyword: self.keyword.clone(),
            },
        })
    }

    /// Starts an article request for the retained brief.
    pub fn begin_article(&mut self) -> Result<StartedRequest<ArticleRequest>, SessionError> {
        self.ensure_idle()?;
        let brief = self.brief.clone().ok_or(SessionError::NoBrief)?;

        self.article = None;
        self.error = None;
        let ticket = self.issue(RequestKind::Article);
        debug!(request_id = ticket.id, "article request started");

        Ok(StartedRequest {
            ticket,
            payload: ArticleRequest {
                keyword: self.keyword.clone(),
                brief,
            },
        })
    }

    /// Applies the outcome of a brief request. Returns `false` and changes
    /// nothing when `ticket` is not the brief request in flight.
    pub fn complete_brief(&mut self, ticket: RequestTicket, result: Result<Brief, ServiceError>) -> bool {
        if !self.accepts(ticket, RequestKind::Brief) {
            return false;
        }

        self.in_flight = None;
        match result {
            Ok(brief) => self.brief = Some(brief),
            Err(err) => self.error = Some(err.to_string()),
        }
        self.touch();
        true
    }

    /// Applies the outcome of an article request. On failure the brief stays.
    pub fn complete_article(&mut self, ticket: RequestTicket, result: Result<String, ServiceError>) -> bool {
        if !self.accepts(ticket, RequestKind::Article) {
            return false;
        }

        self.in_flight = None;
        match result {
            Ok(article) => self.article = Some(article),
            Err(err) => self.error = Some(err.to_string()),
        }
        self.touch();
        true
    }

    pub fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            self.touch();
        }
    }

    fn pending_kind(&self) -> Option<RequestKind> {
        self.in_flight.map(|ticket| ticket.kind)
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        match self.in_flight {
            Some(ticket) => Err(SessionError::RequestInFlight(ticket.kind)),
            None => Ok(()),
        }
    }

    fn issue(&mut self, kind: RequestKind) -> RequestTicket {
        self.next_request_id += 1;
        let ticket = RequestTicket {
            id: self.next_request_id,
            kind,
        };
        self.in_flight = Some(ticket);
        self.touch();
        ticket
    }

    fn accepts(&self, ticket: RequestTicket, kind: RequestKind) -> bool {
        if ticket.kind != kind || self.in_flight != Some(ticket) {
            warn!(
                request_id = ticket.id,
                kind = %ticket.kind,
                in_flight = ?self.in_flight.map(|t| t.id),
                "ignoring completion for a request that is not in flight"
            );
            return false;
        }
        true
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
