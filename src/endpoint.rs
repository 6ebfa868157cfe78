// The closed set of API endpoints and the query builder that turns a
// method call into a GET URL.

use std::fmt;

use url::Url;

use crate::error::{BggError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Collection,
    Family,
    Guild,
    Hot,
    Plays,
    Search,
    Thing,
    User,
}

impl Endpoint {
    /// Path segment appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Collection => "collection",
            Endpoint::Family => "family",
            Endpoint::Guild => "guild",
            Endpoint::Hot => "hot",
            Endpoint::Plays => "plays",
            Endpoint::Search => "search",
            Endpoint::Thing => "thing",
            Endpoint::User => "user",
        }
    }

    /// Lookup table behind the dynamic entry point. Names match the API
    /// paths; anything else is an unknown method.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "collection" => Some(Endpoint::Collection),
            "family" => Some(Endpoint::Family),
            "guild" => Some(Endpoint::Guild),
            "hot" => Some(Endpoint::Hot),
            "plays" => Some(Endpoint::Plays),
            "search" => Some(Endpoint::Search),
            "thing" => Some(Endpoint::Thing),
            "user" => Some(Endpoint::User),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// A query described as plain data: endpoint plus an ordered parameter
// list. Parameters are passed through unfiltered; the API ignores ones
// it does not know.
#[derive(Debug, Clone)]
pub struct Request {
    endpoint: Endpoint,
    params: Vec<(String, String)>,
}

impl Request {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn params(mut self, extra: &[(&str, &str)]) -> Self {
        for (name, value) in extra {
            self.params.push(((*name).to_string(), (*value).to_string()));
        }
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.params
    }

    /// Render the full GET URL. The `url` crate percent-encodes the
    /// query string. Only an unparsable base URL can fail here, and the
    /// client validates that at construction.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let full = format!("{}/{}", base_url.trim_end_matches('/'), self.endpoint.path());
        // Parameterless calls must not grow a dangling `?`.
        let parsed = if self.params.is_empty() {
            Url::parse(&full)
        } else {
            Url::parse_with_params(&full, self.params.iter())
        };
        parsed.map_err(|e| BggError::InvalidBaseUrl(e.to_string()))
    }
}
