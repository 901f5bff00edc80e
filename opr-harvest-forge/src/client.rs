use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use opr_harvest_core::{ArmyBookDetail, ArmyBookSummary, GameSystem};
use reqwest::Url;
use reqwest::blocking::{Client, Request};
use serde::de::DeserializeOwned;

use crate::error::ForgeError;

pub const DEFAULT_BASE_URL: &str = "https://army-forge.onepagerules.com/api";
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ERROR_EXCERPT_CHARS: usize = 200;

/// Connection settings for [`ArmyForgeClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API root, e.g. `https://army-forge.onepagerules.com/api`
    pub base_url: String,
    /// Minimum time between two requests
    pub request_interval: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_interval: DEFAULT_REQUEST_INTERVAL,
            timeout: REQUEST_TIMEOUT,
            user_agent: concat!("opr-harvest/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Blocking HTTP client for the Army Forge army-book endpoints.
///
/// Requests are paced: each call waits until `request_interval` has passed
/// since the previous one, so a sequential harvest never hammers the server.
pub struct ArmyForgeClient {
    http: Client,
    base_url: Url,
    request_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl ArmyForgeClient {
    pub fn new(options: ClientOptions) -> Result<Self, ForgeError> {
        let base_url = Url::parse(options.base_url.trim()).map_err(|e| {
            ForgeError::config(format!("Invalid base URL '{}': {e}", options.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ForgeError::config(format!(
                "Base URL '{}' cannot carry a path",
                options.base_url
            )));
        }

        let http = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url,
            request_interval: options.request_interval,
            last_request: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the official army book listing request for a game system.
    pub fn listing_request(&self, system: GameSystem) -> Result<Request, ForgeError> {
        let request = self
            .http
            .get(self.endpoint(&["army-books"]))
            .query(&[("filters", "official"), ("gameSystemSlug", system.slug())])
            .build()?;
        Ok(request)
    }

    /// Build the army book detail request for `uid` as seen under `system_id`.
    pub fn detail_request(&self, uid: &str, system_id: u32) -> Result<Request, ForgeError> {
        let request = self
            .http
            .get(self.endpoint(&["army-books", uid]))
            .query(&[("gameSystem", system_id.to_string())])
            .build()?;
        Ok(request)
    }

    /// List the official army books published for a game system.
    pub fn list_official(&self, system: GameSystem) -> Result<Vec<ArmyBookSummary>, ForgeError> {
        let request = self.listing_request(system)?;
        self.execute_json(request, "army book listing")
    }

    /// Fetch the full army book, including spells and special rules.
    pub fn army_book(&self, uid: &str, system_id: u32) -> Result<ArmyBookDetail, ForgeError> {
        let request = self.detail_request(uid, system_id)?;
        self.execute_json(request, "army book detail")
    }

    fn execute_json<T: DeserializeOwned>(
        &self,
        request: Request,
        what: &str,
    ) -> Result<T, ForgeError> {
        self.rate_limit();

        let url = request.url().to_string();
        log::debug!("GET {url}");

        let resp = self.http.execute(request)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ForgeError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|e| {
            ForgeError::api(format!(
                "Failed to parse {what}: {e}. Response: {}",
                excerpt(&text)
            ))
        })
    }

    /// Enforce pacing: wait until at least `request_interval` has passed
    /// since the last request.
    fn rate_limit(&self) {
        let mut last = self
            .last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.request_interval {
                std::thread::sleep(self.request_interval - elapsed);
            }
        }
        *last = Some(Instant::now());
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL can always carry path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// First characters of a response body, for error messages.
pub(crate) fn excerpt(text: &str) -> String {
    text.chars().take(ERROR_EXCERPT_CHARS).collect()
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
