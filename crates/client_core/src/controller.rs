use tracing::{info, warn};

use crate::{
    service::GenerationService,
    session::{Phase, Session, SessionError},
};

/// Drives a [`Session`] against a [`GenerationService`].
///
/// Each request borrows the controller mutably for its whole duration, so a
/// second request cannot be issued from the same owner until the first one
/// has resolved.
pub struct WorkflowController<S> {
    service: S,
    session: Session,
}

impl<S: GenerationService> WorkflowController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Runs a brief request to completion and returns the resulting phase:
    /// `BriefReady` on success, `Idle` with the session error set otherwise.
    pub async fn request_brief(&mut self, keyword: &str) -> Result<Phase, SessionError> {
        let started = self.session.begin_brief(keyword)?;
        let result = self.service.fetch_brief(&started.payload).await;
        if let Err(err) = &result {
            warn!(status = ?err.status(), "brief request failed: {err}");
        } else {
            info!(request_id = started.ticket.id(), "brief received");
        }
        self.session.complete_brief(started.ticket, result);
        Ok(self.session.phase())
    }

    /// Runs an article request for the current brief.
    pub async fn request_article(&mut self) -> Result<Phase, SessionError> {
        let started = self.session.begin_article()?;
        let result = self.service.generate_article(&started.payload).await;
        match &result {
            Ok(article) => info!(
                request_id = started.ticket.id(),
                article_len = article.len(),
                "article received"
            ),
            Err(err) => warn!(status = ?err.status(), "article request failed: {err}"),
        }
        self.session.complete_article(started.ticket, result);
        Ok(self.session.phase())
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
