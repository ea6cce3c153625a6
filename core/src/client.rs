//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `BlogClient` holds only a `base_url` and carries no mutable state between
//! calls. Each read operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The status check and the JSON parse both happen inside `parse_*`, so a
//! caller only ever sees a finished `Result`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Post;

/// Characters kept verbatim when an id is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Synchronous, stateless client for the posts API.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
}

impl BlogClient {
    /// `base_url` is the server origin; an empty string yields relative
    /// URLs such as `/api/posts`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self, limit: Option<u32>) -> HttpRequest {
        let mut url = format!("{}/api/posts", self.base_url);
        if let Some(limit) = limit {
            url.push_str(&format!("?limit={limit}"));
        }
        HttpRequest {
            url,
            headers: accept_json(),
        }
    }

    pub fn build_get_post(&self, id: &str) -> HttpRequest {
        let id = utf8_percent_encode(id, PATH_SEGMENT);
        HttpRequest {
            url: format!("{}/api/posts/{id}", self.base_url),
            headers: accept_json(),
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, FetchError> {
        parse_json(response)
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Post, FetchError> {
        parse_json(response)
    }
}

fn accept_json() -> Vec<(String, String)> {
    vec![("accept".to_string(), "application/json".to_string())]
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, FetchError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Map any status outside 2xx to `FetchError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if response.is_success() {
        return Ok(());
    }
    Err(FetchError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
