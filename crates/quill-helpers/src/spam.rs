//! Spam classification through an Akismet-compatible comment-check endpoint.
//!
//! The checker is innocent-until-proven-guilty: an inactive integration, a
//! missing API key, a transport failure, or any response other than the
//! literal body `"true"` all classify the content as clean. Only a positive
//! verdict has a side effect (the persisted spam counter is incremented).

use indexmap::IndexMap;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::config::SpamConfig;
use crate::request::{RequestMeta, SiteLinks};
use crate::{Error, Result};

/// Option-store key holding the running count of positive spam verdicts.
pub const SPAM_COUNT_OPTION: &str = "spam_count";

/// Read/write access to the host's persisted option storage.
///
/// Values are stored as strings; the spam counter is parsed on read and
/// rewritten on increment.
pub trait OptionStore {
    /// Fetch an option value, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist an option value.
    fn set(&self, key: &str, value: String);
}

/// HTTP client for the spam-detection service.
pub struct SpamChecker {
    client: Client,
    config: SpamConfig,
}

impl SpamChecker {
    /// Creates a checker with the configured timeout.
    pub fn new(config: SpamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("quill-helpers/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client, config })
    }

    /// Check submitted form fields against the spam service.
    ///
    /// Returns `Ok(false)` without any network I/O when the integration is
    /// disabled or unconfigured. When active, the fields are augmented with
    /// the request's user agent, its referrer (falling back to the current
    /// permalink when the header is absent), and the site home URL, then
    /// submitted URL-encoded to the service's comment-check endpoint. A
    /// literal `"true"` response body is spam and bumps the persisted spam
    /// counter; anything else, including transport failures, is clean.
    pub async fn is_spam<L, S>(
        &self,
        fields: &IndexMap<String, String>,
        request: &RequestMeta,
        links: &L,
        store: &S,
    ) -> Result<bool>
    where
        L: SiteLinks + ?Sized,
        S: OptionStore + ?Sized,
    {
        if !self.config.enabled {
            debug!("spam integration inactive, content passes");
            return Ok(false);
        }
        let Some(api_key) = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
        else {
            debug!("no spam API key configured, content passes");
            return Ok(false);
        };

        let body = build_body(fields, request, links);
        let url = self.comment_check_url(api_key);

        let response = match self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "spam check request failed, treating content as clean");
                return Ok(false);
            },
        };

        let verdict = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "spam check response unreadable, treating content as clean");
                return Ok(false);
            },
        };

        if verdict == "true" {
            debug!("spam service flagged content");
            bump_spam_count(store);
            return Ok(true);
        }

        Ok(false)
    }

    fn comment_check_url(&self, api_key: &str) -> String {
        let base = self.config.endpoint.replace("{key}", api_key);
        format!("{}/1.1/comment-check", base.trim_end_matches('/'))
    }
}

/// URL-encoded request body: the submitted fields plus request metadata,
/// empty values skipped.
fn build_body<L: SiteLinks + ?Sized>(
    fields: &IndexMap<String, String>,
    request: &RequestMeta,
    links: &L,
) -> String {
    let mut payload = fields.clone();

    if let Some(user_agent) = &request.user_agent {
        payload.insert("user_agent".to_string(), user_agent.clone());
    }

    let referrer = request
        .referrer
        .clone()
        .filter(|referrer| !referrer.is_empty())
        .or_else(|| links.permalink());
    if let Some(referrer) = referrer {
        payload.insert("referrer".to_string(), referrer);
    }

    payload.insert("blog".to_string(), links.home_url(""));

    let mut body = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &payload {
        if !value.is_empty() {
            body.append_pair(key, value);
        }
    }
    body.finish()
}

fn bump_spam_count<S: OptionStore + ?Sized>(store: &S) {
    let count = store
        .get(SPAM_COUNT_OPTION)
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(0);
    store.set(SPAM_COUNT_OPTION, (count + 1).to_string());
}
