//! Single-URL verbose error page check: validate, fetch once, match patterns.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, info_span, warn, Instrument};
use url::Url;

use crate::config::DetectorConfig;
use crate::error::{DetectError, DetectResult};
use crate::patterns::PatternSet;

/// What to scan and how to reach it.
#[derive(Debug, Clone)]
pub struct Target {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Target {
    pub fn new(url: impl Into<String>, config: &DetectorConfig) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(config.timeout),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// True when `url` has both a scheme and a host.
///
/// The authority must be written out as `scheme://host`; forms like `http:example.com`
/// are rejected even though the URL parser would repair them.
pub fn validate(url: &str) -> bool {
    let has_authority = url
        .split_once(':')
        .and_then(|(_, rest)| rest.strip_prefix("//"))
        .is_some_and(|rest| !rest.is_empty() && !rest.starts_with(['/', '?', '#']));
    if !has_authority {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

pub struct Detector {
    target: Target,
    patterns: PatternSet,
}

impl Detector {
    pub fn new(target: Target, patterns: PatternSet) -> Self {
        Self { target, patterns }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn is_valid_url(&self) -> bool {
        validate(&self.target.url)
    }

    /// Fetches the page body. Transport and HTTP status failures are logged and yield `None`.
    pub async fn fetch_page(&self) -> Option<String> {
        match self.try_fetch().await {
            Ok(body) => Some(body),
            Err(e) => {
                error!("Error fetching {}: {}", self.target.url, e);
                None
            }
        }
    }

    async fn try_fetch(&self) -> DetectResult<String> {
        let client = Client::builder()
            .timeout(self.target.timeout)
            .user_agent(self.target.user_agent.as_str())
            .build()?;

        debug!("GET {} (timeout {:?})", self.target.url, self.target.timeout);
        let response = client.get(&self.target.url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(DetectError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    /// True if any pattern occurs in `content`; stops at the first hit.
    pub fn analyze_content(&self, content: &str) -> bool {
        if content.is_empty() {
            return false;
        }

        match self.patterns.first_match(content) {
            Some(pattern) => {
                debug!("Matched pattern {:?}", pattern);
                true
            }
            None => false,
        }
    }

    pub async fn run(&self) -> bool {
        let span = info_span!("detector", url = %self.target.url);
        self.run_inner().instrument(span).await
    }

    async fn run_inner(&self) -> bool {
        if !self.is_valid_url() {
            error!("{}", DetectError::InvalidUrl(self.target.url.clone()));
            return false;
        }

        let content = match self.fetch_page().await {
            Some(c) if !c.is_empty() => c,
            Some(_) => {
                debug!("Empty response body from {}", self.target.url);
                return false;
            }
            None => return false,
        };

        if self.analyze_content(&content) {
            warn!("Potential verbose error page detected at: {}", self.target.url);
            true
        } else {
            info!("No sensitive information found at: {}", self.target.url);
            false
        }
    }
}
