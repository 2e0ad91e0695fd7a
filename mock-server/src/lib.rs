use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(title: &str, author: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: object_id(),
            title: title.to_string(),
            author: author.to_string(),
            created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub author: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

pub type Db = Arc<RwLock<Vec<Post>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(posts));
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", get(get_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener, posts: Vec<Post>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(posts)).await
}

/// A handful of posts for local demos, newest last.
pub fn demo_posts() -> Vec<Post> {
    let base = Utc::now();
    [
        ("Getting started with SEO", "Ada Park"),
        ("Email campaigns that convert", "Luis Romero"),
        ("Measuring social reach", "Ada Park"),
        ("Content calendars in practice", "Mina Okafor"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (title, author))| {
        let age = chrono::Duration::days(i64::try_from(4 - i).unwrap_or(0));
        Post::new(title, author, base - age)
    })
    .collect()
}

/// Mongo-style identifier: 24 lowercase hex characters.
fn object_id() -> String {
    Uuid::new_v4().simple().to_string()[..24].to_string()
}

fn mentions(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle) || post.author.to_lowercase().contains(needle)
}

async fn list_posts(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Value> {
    let posts = db.read().await;
    let needle = params.search.unwrap_or_default().to_lowercase();

    let mut found: Vec<Post> = posts
        .iter()
        .filter(|p| needle.is_empty() || mentions(p, &needle))
        .cloned()
        .collect();
    found.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    tracing::debug!(search = %needle, results = found.len(), "listing posts");
    Json(json!({
        "status": "success",
        "results": found.len(),
        "data": { "posts": found },
    }))
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Value>) {
    let post = Post::new(&input.title, &input.author, Utc::now());
    db.write().await.push(post.clone());
    (
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "post": post } })),
    )
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let posts = db.read().await;
    posts
        .iter()
        .find(|p| p.id == id)
        .map(|post| Json(json!({ "status": "success", "data": { "post": post } })))
        .ok_or(StatusCode::NOT_FOUND)
}
