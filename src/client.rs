// The client: builds the query, performs the GET, validates the status
// and hands the parsed document to the endpoint's result mapper. One
// synchronous round-trip per call, no state shared between calls.

use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, Request};
use crate::error::{BggError, Result};
use crate::result::{Collection, Family, Guild, Hot, Plays, Search, User};
use crate::xml::{self, Element};

/// Async client for the BGG XML API2.
///
/// Holds a pooled `reqwest::Client` and the immutable configuration;
/// safe to share and to call from multiple tasks concurrently.
#[derive(Debug, Clone)]
pub struct BggClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl BggClient {
    /// Client against the production API with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| BggError::InvalidBaseUrl(e.to_string()))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(BggError::InvalidBaseUrl(format!(
                "unsupported scheme `{}`",
                base.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Dynamic entry point: dispatch by endpoint name and return the
    /// generic parsed document. Unknown names fail with
    /// `MethodNotFound` instead of falling through.
    pub async fn call(&self, method: &str, params: &[(&str, &str)]) -> Result<Element> {
        let endpoint = Endpoint::from_name(method)
            .ok_or_else(|| BggError::MethodNotFound(method.to_string()))?;
        self.fetch(&Request::new(endpoint).params(params)).await
    }

    /// Search for items by name.
    pub async fn search(&self, query: &str, extra: &[(&str, &str)]) -> Result<Search> {
        let request = Request::new(Endpoint::Search)
            .param("query", query)
            .params(extra);
        Ok(Search::from_document(self.fetch(&request).await?))
    }

    /// A user's game collection.
    pub async fn collection(&self, username: &str, extra: &[(&str, &str)]) -> Result<Collection> {
        let request = Request::new(Endpoint::Collection)
            .param("username", username)
            .params(extra);
        Ok(Collection::from_document(self.fetch(&request).await?))
    }

    /// A game family by id.
    pub async fn family(&self, id: u64) -> Result<Family> {
        let request = Request::new(Endpoint::Family).param("id", id.to_string());
        Ok(Family::from_document(self.fetch(&request).await?))
    }

    /// A guild by id. The member list is always requested.
    pub async fn guild(&self, id: u64, extra: &[(&str, &str)]) -> Result<Guild> {
        let request = Request::new(Endpoint::Guild)
            .param("id", id.to_string())
            .param("members", "1")
            .params(extra);
        Ok(Guild::from_document(self.fetch(&request).await?))
    }

    /// The current hotness list.
    pub async fn hot(&self, extra: &[(&str, &str)]) -> Result<Hot> {
        let request = Request::new(Endpoint::Hot).params(extra);
        Ok(Hot::from_document(self.fetch(&request).await?))
    }

    /// Plays of one thing logged by one user.
    pub async fn plays(&self, username: &str, thing_id: u64) -> Result<Plays> {
        let request = Request::new(Endpoint::Plays)
            .param("id", thing_id.to_string())
            .param("username", username);
        Ok(Plays::from_document(self.fetch(&request).await?))
    }

    /// Things by id. Returns the raw parsed document: the API exposes no
    /// stable schema for things, so callers index the tree themselves.
    pub async fn thing(&self, params: &[(&str, &str)]) -> Result<Element> {
        self.fetch(&Request::new(Endpoint::Thing).params(params)).await
    }

    /// A user profile by name. Fails with `UserNotFound` when the API
    /// answers with an empty `id` attribute.
    pub async fn user(&self, name: &str) -> Result<User> {
        let request = Request::new(Endpoint::User).param("name", name);
        User::from_document(self.fetch(&request).await?)
    }

    // One round-trip: build URL, GET, require status exactly 200, parse.
    async fn fetch(&self, request: &Request) -> Result<Element> {
        let url = request.url(&self.config.base_url)?;
        debug!(endpoint = %request.endpoint(), url = %url, "sending request");

        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(endpoint = %request.endpoint(), status, bytes = body.len(), "response received");

        if status != 200 {
            return Err(BggError::Http { status, body });
        }
        xml::parse(&body)
    }
}
