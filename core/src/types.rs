//! Domain DTOs for the posts listing API.
//!
//! # Design
//! These types mirror the server's wire schema (`_id`, `createdAt`) but are
//! defined independently of the mock-server crate. The integration tests
//! catch any schema drift between the two.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Creation time as the server sent it.
///
/// Kept verbatim; only a `DateFormatter` interprets it. Numbers are epoch
/// milliseconds and may be integral or fractional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Iso(String),
    EpochMillis(Number),
}

/// A single blog post as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

/// `{ "data": { "posts": [...] } }`
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub data: ListData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListData {
    pub posts: Vec<Post>,
}
