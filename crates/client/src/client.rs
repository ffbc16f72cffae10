//! Blocking client for `POST /api/assist`.

use std::time::Duration;

use study_core::{AnswerDocument, Error, Result};

use crate::request::AssistRequest;

/// Environment variable that overrides the backend base URL.
pub const ENV_BACKEND_URL: &str = "STUDY_BACKEND_URL";

/// Fallback base URL when neither a flag nor the environment provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The service generates answers with a language model, so responses can
/// take a while.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the remote assist endpoint.
#[derive(Debug, Clone)]
pub struct AssistClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl AssistClient {
    /// Create a client for the given base URL. Trailing slashes are
    /// trimmed so joining the endpoint path never doubles them.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("study-assist/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { http, base_url }
    }

    /// Create a client from `STUDY_BACKEND_URL`, falling back to
    /// `http://localhost:8000`.
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(None))
    }

    /// The full URL requests are sent to.
    pub fn endpoint_url(&self) -> String {
        format!("{}/api/assist", self.base_url)
    }

    /// Ask the assist service a question and return its answer document.
    ///
    /// Fails with [`Error::EmptyQuestion`] before any network traffic when
    /// the question is empty or whitespace-only.
    pub fn ask(&self, request: &AssistRequest) -> Result<AnswerDocument> {
        if request.question.trim().is_empty() {
            return Err(Error::EmptyQuestion);
        }

        let url = self.endpoint_url();
        log::debug!(
            "POST {} (subject={}, class={})",
            url,
            request.subject,
            request.student_class
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RequestFailed(status.as_u16()));
        }

        let doc = response
            .json::<AnswerDocument>()
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        log::debug!(
            "Received {} sections for topic '{}'",
            doc.sections.len(),
            doc.display_topic()
        );

        Ok(doc)
    }
}

/// Resolve the backend base URL: an explicit value wins, then the
/// `STUDY_BACKEND_URL` environment variable, then `http://localhost:8000`.
pub fn resolve_base_url(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| {
            std::env::var(ENV_BACKEND_URL)
                .ok()
                .filter(|v| !v.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
