//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state between
//! calls. The listing is split into `build_list_posts`, which produces an
//! `HttpRequest`, and `parse_list_posts`, which consumes an `HttpResponse`.
//! The host executes the round-trip in between.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{ListEnvelope, Post};

/// Path of the listing endpoint, relative to the base URL.
pub const LIST_PATH: &str = "/api/posts";

#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `None` asks for the unfiltered listing. `Some("")` is sent as
    /// `search=` and relies on the server treating it the same way.
    pub fn build_list_posts(&self, search: Option<&str>) -> HttpRequest {
        HttpRequest {
            url: format!("{}{LIST_PATH}", self.base_url),
            query: search
                .map(|q| vec![("search".to_string(), q.to_string())])
                .unwrap_or_default(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_status(&response, 200)?;
        let envelope: ListEnvelope = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(envelope.data.posts)
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
