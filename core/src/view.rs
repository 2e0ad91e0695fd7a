//! The post listing view: load once on mount, refetch on every search input.
//!
//! # Design
//! The view never performs I/O. `mount` and `search` hand back a [`Fetch`]
//! (a [`Ticket`] plus the request to run) and the host reports the outcome
//! through [`PostListView::complete`]. Tickets carry a monotonic sequence
//! number; only the most recently issued one may change state, so a slow
//! response to an older query can never overwrite a newer result. After
//! [`PostListView::unmount`] every completion is ignored.
//!
//! Failures are logged and otherwise swallowed: the previous posts stay on
//! screen and nothing is retried.

use crate::client::PostsClient;
use crate::date::{DateFormatter, LongDate};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::navigation::{Navigator, RouteNavigator};
use crate::render::PostRow;
use crate::state::PostListState;
use crate::types::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    InitialLoad,
    Search,
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    seq: u64,
    kind: FetchKind,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn kind(&self) -> FetchKind {
        self.kind
    }
}

/// A request the host must execute, tagged with its ticket.
#[derive(Debug, Clone)]
pub struct Fetch {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// What `complete` did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// State replaced; these are the rows to show now.
    Applied { rows: Vec<PostRow> },
    /// A newer fetch was issued after this one; ignored.
    Stale,
    /// The fetch failed; previous posts kept.
    Failed(ApiError),
    /// The view was torn down; ignored.
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    TornDown,
}

#[derive(Debug)]
pub struct PostListView<N = RouteNavigator, D = LongDate> {
    client: PostsClient,
    navigator: N,
    formatter: D,
    state: PostListState,
    query: String,
    lifecycle: Lifecycle,
    next_seq: u64,
    latest: Option<Ticket>,
}

impl PostListView {
    pub fn new(client: PostsClient) -> Self {
        Self::with_collaborators(client, RouteNavigator::default(), LongDate)
    }
}

impl<N: Navigator, D: DateFormatter> PostListView<N, D> {
    pub fn with_collaborators(client: PostsClient, navigator: N, formatter: D) -> Self {
        Self {
            client,
            navigator,
            formatter,
            state: PostListState::default(),
            query: String::new(),
            lifecycle: Lifecycle::Created,
            next_seq: 0,
            latest: None,
        }
    }

    /// Issues the unfiltered load. Only the first call does anything.
    pub fn mount(&mut self) -> Option<Fetch> {
        if self.lifecycle != Lifecycle::Created {
            tracing::debug!("mount ignored, view already mounted or torn down");
            return None;
        }
        self.lifecycle = Lifecycle::Mounted;
        Some(self.issue(FetchKind::InitialLoad, None))
    }

    /// Issues a filtered load for the current contents of the search field.
    ///
    /// Every call supersedes all earlier fetches, including the initial load.
    /// Before `mount` and after `unmount` there is no search field, so nothing
    /// is issued and the query is left alone.
    pub fn search(&mut self, query: &str) -> Option<Fetch> {
        if self.lifecycle != Lifecycle::Mounted {
            tracing::debug!(query, "search ignored, view not mounted");
            return None;
        }
        self.query = query.to_string();
        Some(self.issue(FetchKind::Search, Some(query)))
    }

    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Completion {
        if self.lifecycle == Lifecycle::TornDown {
            tracing::debug!(seq = ticket.seq, "completion after teardown ignored");
            return Completion::Detached;
        }
        if self.latest != Some(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest.map(|t| t.seq),
                "stale completion ignored"
            );
            return Completion::Stale;
        }

        let posts = match outcome.and_then(|response| self.client.parse_list_posts(response)) {
            Ok(posts) => posts,
            Err(err) => {
                tracing::warn!(seq = ticket.seq, error = %err, "fetching posts failed, keeping previous list");
                return Completion::Failed(err);
            }
        };

        let state = std::mem::take(&mut self.state);
        self.state = match ticket.kind {
            FetchKind::InitialLoad => state.on_initial_load_succeeded(posts),
            FetchKind::Search => state.on_search_succeeded(posts),
        };
        tracing::debug!(seq = ticket.seq, count = self.state.posts().len(), "posts replaced");

        Completion::Applied { rows: self.rows() }
    }

    /// Tears the view down; in-flight completions become [`Completion::Detached`].
    pub fn unmount(&mut self) {
        self.lifecycle = Lifecycle::TornDown;
    }

    pub fn rows(&self) -> Vec<PostRow> {
        self.state
            .posts()
            .iter()
            .map(|post| PostRow {
                key: post.id.clone(),
                title: post.title.clone(),
                href: self.navigator.target(&post.id),
                author: post.author.clone(),
                date: self.formatter.format(&post.created_at),
            })
            .collect()
    }

    pub fn posts(&self) -> &[Post] {
        self.state.posts()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn latest_ticket(&self) -> Option<Ticket> {
        self.latest
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    fn issue(&mut self, kind: FetchKind, search: Option<&str>) -> Fetch {
        let ticket = Ticket {
            seq: self.next_seq,
            kind,
        };
        self.next_seq += 1;
        self.latest = Some(ticket);
        tracing::debug!(seq = ticket.seq, ?kind, search, "issuing fetch");
        Fetch {
            ticket,
            request: self.client.build_list_posts(search),
        }
    }
}
