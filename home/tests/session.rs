use std::net::SocketAddr;
use std::time::Duration;

use axum::{extract::Query, routing::get, Json, Router};
use blog_home::{Config, Session, UiEvent};
use mock_server::Post;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio::time::timeout;

/// How long the listing for the query "a" takes to answer.
const SLOW: Duration = Duration::from_secs(2);

async fn start_server(posts: Vec<Post>) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener, posts));
    addr
}

fn config(addr: SocketAddr) -> Config {
    Config {
        api_url: format!("http://{addr}"),
        ..Config::default()
    }
}

async fn next_frame(frames: &mut mpsc::UnboundedReceiver<String>) -> String {
    timeout(Duration::from_secs(5), frames.recv())
        .await
        .expect("no frame within 5s")
        .expect("frame channel closed")
}

#[tokio::test]
async fn renders_initial_load_then_search_results() {
    let addr = start_server(mock_server::demo_posts()).await;
    let session = Session::new(&config(addr)).unwrap();
    let (events_tx, events_rx) = mpsc::channel(8);
    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let running = tokio::spawn(session.run(events_rx, frames_tx));

    let first = next_frame(&mut frames).await;
    assert!(first.starts_with("1. Content calendars in practice </posts/"));
    assert_eq!(first.lines().count(), 8);

    events_tx
        .send(UiEvent::Input("email".to_string()))
        .await
        .unwrap();
    let filtered = next_frame(&mut frames).await;
    assert!(filtered.starts_with("1. Email campaigns that convert </posts/"));
    assert!(filtered.contains("   Luis Romero - "));
    assert_eq!(filtered.lines().count(), 2);

    events_tx.send(UiEvent::Input(String::new())).await.unwrap();
    let restored = next_frame(&mut frames).await;
    assert_eq!(restored, first);

    events_tx.send(UiEvent::Quit).await.unwrap();
    timeout(Duration::from_secs(5), running).await.unwrap().unwrap();
    assert!(frames.recv().await.is_none());
}

#[tokio::test]
async fn no_hits_renders_empty_frame() {
    let addr = start_server(mock_server::demo_posts()).await;
    let session = Session::new(&config(addr)).unwrap();
    let (events_tx, events_rx) = mpsc::channel(8);
    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let running = tokio::spawn(session.run(events_rx, frames_tx));

    next_frame(&mut frames).await;
    events_tx
        .send(UiEvent::Input("kubernetes".to_string()))
        .await
        .unwrap();
    assert_eq!(next_frame(&mut frames).await, "");

    drop(events_tx);
    timeout(Duration::from_secs(5), running).await.unwrap().unwrap();
}

#[tokio::test]
async fn unreachable_api_renders_nothing_and_still_quits() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let session = Session::new(&config(addr)).unwrap();
    let (events_tx, events_rx) = mpsc::channel(8);
    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let running = tokio::spawn(session.run(events_rx, frames_tx));

    events_tx.send(UiEvent::Input("seo".to_string())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    events_tx.send(UiEvent::Quit).await.unwrap();

    timeout(Duration::from_secs(5), running).await.unwrap().unwrap();
    assert!(frames.recv().await.is_none());
}

#[derive(Deserialize)]
struct ListParams {
    search: Option<String>,
}

/// Answers every listing with one post named after the query; "a" is slow.
async fn echo_listing(Query(params): Query<ListParams>) -> Json<Value> {
    let query = params.search.unwrap_or_default();
    if query == "a" {
        tokio::time::sleep(SLOW).await;
    }
    Json(json!({
        "data": { "posts": [{
            "_id": format!("id-{query}"),
            "title": format!("results for {query:?}"),
            "author": "Ada Park",
            "createdAt": "2024-03-05T10:00:00Z",
        }]}
    }))
}

async fn start_echo_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/api/posts", get(echo_listing));
    tokio::spawn(async move { axum::serve(listener, app).await });
    addr
}

#[tokio::test]
async fn slow_older_query_never_becomes_a_frame() {
    let addr = start_echo_server().await;
    let session = Session::new(&config(addr)).unwrap();
    let (events_tx, events_rx) = mpsc::channel(8);
    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let running = tokio::spawn(session.run(events_rx, frames_tx));

    let initial = next_frame(&mut frames).await;
    assert!(initial.starts_with("1. results for \"\" "));

    events_tx.send(UiEvent::Input("a".to_string())).await.unwrap();
    events_tx.send(UiEvent::Input("ab".to_string())).await.unwrap();

    let shown = next_frame(&mut frames).await;
    assert!(shown.starts_with("1. results for \"ab\" </posts/id-ab>"));

    // Long enough for the slow "a" listing to have answered had it survived.
    let late = timeout(SLOW + Duration::from_millis(500), frames.recv()).await;
    assert!(late.is_err(), "unexpected frame: {late:?}");

    events_tx.send(UiEvent::Quit).await.unwrap();
    timeout(Duration::from_secs(5), running).await.unwrap().unwrap();
    assert!(frames.recv().await.is_none());
}

#[tokio::test]
async fn quit_during_slow_fetch_ends_without_a_frame() {
    let addr = start_echo_server().await;
    let session = Session::new(&config(addr)).unwrap();
    let (events_tx, events_rx) = mpsc::channel(8);
    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let running = tokio::spawn(session.run(events_rx, frames_tx));

    next_frame(&mut frames).await;
    events_tx.send(UiEvent::Input("a".to_string())).await.unwrap();
    events_tx.send(UiEvent::Quit).await.unwrap();

    // Teardown must not wait for the slow listing.
    timeout(SLOW / 2, running).await.unwrap().unwrap();
    assert!(frames.recv().await.is_none());
}

#[tokio::test]
async fn finish_shows_the_pending_result_before_ending() {
    let addr = start_echo_server().await;
    let session = Session::new(&config(addr)).unwrap();
    let (events_tx, events_rx) = mpsc::channel(8);
    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let running = tokio::spawn(session.run(events_rx, frames_tx));

    events_tx.send(UiEvent::Input("a".to_string())).await.unwrap();
    events_tx.send(UiEvent::Finish).await.unwrap();
    drop(events_tx);

    timeout(SLOW * 3, running).await.unwrap().unwrap();
    let mut shown = Vec::new();
    while let Some(frame) = frames.recv().await {
        shown.push(frame);
    }
    let last = shown.last().expect("no frame after finish");
    assert!(last.starts_with("1. results for \"a\" "));
}

#[tokio::test]
async fn finish_with_fast_api_prints_search_results() {
    let addr = start_server(mock_server::demo_posts()).await;
    let session = Session::new(&config(addr)).unwrap();
    let (events_tx, events_rx) = mpsc::channel(8);
    let (frames_tx, mut frames) = mpsc::unbounded_channel();
    let running = tokio::spawn(session.run(events_rx, frames_tx));

    events_tx
        .send(UiEvent::Input("email".to_string()))
        .await
        .unwrap();
    events_tx.send(UiEvent::Finish).await.unwrap();

    timeout(Duration::from_secs(5), running).await.unwrap().unwrap();
    let mut last = None;
    while let Some(frame) = frames.recv().await {
        last = Some(frame);
    }
    let last = last.expect("no frame printed for finished input");
    assert!(last.starts_with("1. Email campaigns that convert </posts/"));
    assert_eq!(last.lines().count(), 2);
}
