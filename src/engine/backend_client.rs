use anyhow::Result;
use reqwest::blocking::Client;

use crate::model::book_request::BookRequest;
use crate::model::story::{GenerateBookReply, StoryResponse};

/// Environment variable holding the backend base URL. There is no
/// default: with the variable unset, requests go to a bare path and
/// fail down the ordinary logged error path.
pub const API_BASE_URL_VAR: &str = "LEGEND_LAB_API_BASE_URL";

pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var(API_BASE_URL_VAR).unwrap_or_default())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// POST the form to `/generate-book` and unwrap the reply envelope.
    pub fn generate_book(&self, request: &BookRequest) -> Result<Option<StoryResponse>> {
        let reply = self
            .http
            .post(self.endpoint("generate-book"))
            .json(request)
            .send()?
            .json::<GenerateBookReply>()?;

        Ok(reply.response)
    }

    /// Probe the backend root. It answers `{"msg": "Connected!"}`.
    pub fn test_connection(&self) -> Result<String> {
        let reply: serde_json::Value =
            self.http.get(self.endpoint("")).send()?.json()?;

        Ok(reply["msg"].as_str().unwrap_or_default().to_string())
    }
}
