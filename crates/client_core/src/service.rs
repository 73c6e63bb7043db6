//! HTTP client for the remote generation service.

use std::error::Error as _;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use shared::{
    domain::Brief,
    error::ServiceError,
    protocol::{ArticleRequest, ArticleResponse, BriefRequest, ARTICLE_PATH, BRIEF_PATH},
};
use tracing::{info, warn};
use url::Url;

/// The two operations the workflow needs from the generation service.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn fetch_brief(&self, request: &BriefRequest) -> Result<Brief, ServiceError>;

    /// Returns the article markdown.
    async fn generate_article(&self, request: &ArticleRequest) -> Result<String, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpGenerationService {
    http: Client,
    brief_url: Url,
    article_url: Url,
}

impl HttpGenerationService {
    pub fn new(service_url: &str) -> Result<Self, ServiceError> {
        Self::with_client(Client::new(), service_url)
    }

    pub fn with_client(http: Client, service_url: &str) -> Result<Self, ServiceError> {
        let base = service_base_url(service_url)?;
        let join = |path: &str| {
            base.join(path)
                .map_err(|err| ServiceError::InvalidEndpoint(format!("{service_url}: {err}")))
        };
        Ok(Self {
            brief_url: join(BRIEF_PATH)?,
            article_url: join(ARTICLE_PATH)?,
            http,
        })
    }

    pub fn brief_url(&self) -> &Url {
        &self.brief_url
    }

    pub fn article_url(&self) -> &Url {
        &self.article_url
    }

    /// POSTs `body` as JSON and returns the success body as text. Any other
    /// status becomes [`ServiceError::Remote`] carrying the body verbatim.
    async fn post_json<B: Serialize + Sync>(&self, url: &Url, body: &B) -> Result<String, ServiceError> {
        let response = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|err| ServiceError::Transport(describe_transport_failure(&err)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ServiceError::Transport(describe_transport_failure(&err)))?;

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "generation service returned an error");
            return Err(ServiceError::Remote {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn fetch_brief(&self, request: &BriefRequest) -> Result<Brief, ServiceError> {
        info!(keyword_len = request.keyword.len(), "requesting brief");
        let body = self.post_json(&self.brief_url, request).await?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|err| ServiceError::Decode(format!("invalid brief response payload: {err}")))?;
        Brief::from_value(value)
            .map_err(|err| ServiceError::Decode(format!("invalid brief response payload: {err}")))
    }

    async fn generate_article(&self, request: &ArticleRequest) -> Result<String, ServiceError> {
        info!(keyword_len = request.keyword.len(), "requesting article");
        let body = self.post_json(&self.article_url, request).await?;
        let response: ArticleResponse = serde_json::from_str(&body).map_err(|err| {
            ServiceError::Decode(format!("invalid article response payload: {err}"))
        })?;
        Ok(response.article)
    }
}

/// Parses the configured service URL, normalising it to end with `/` so the
/// endpoint paths are appended rather than replacing the last segment.
pub fn service_base_url(service_url: &str) -> Result<Url, ServiceError> {
    let mut url = Url::parse(service_url.trim())
        .map_err(|err| ServiceError::InvalidEndpoint(format!("{service_url}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ServiceError::InvalidEndpoint(format!(
            "{service_url}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// `reqwest` keeps the useful part ("connection refused", DNS failures) in
/// the source chain, so flatten it into one line.
fn describe_transport_failure(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
