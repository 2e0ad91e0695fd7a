//! I/O-free core of the blog home page listing.
//!
//! # Overview
//! [`PostListView`] owns the visible list of posts. It loads the unfiltered
//! listing once on mount and reloads it, filtered server-side, on every
//! change of the search field. The view builds plain-data requests and the
//! host executes them (host-does-IO pattern), so everything here is
//! deterministic and testable without a network.
//!
//! # Design
//! - `PostsClient` is stateless; it builds `GET /api/posts[?search=]` and
//!   parses the `{ data: { posts } }` envelope.
//! - `PostListState` is the reducer: two pure transitions, each replacing the
//!   collection wholesale.
//! - Every fetch carries a `Ticket`; only the most recently issued ticket may
//!   change state, so out-of-order responses cannot show an older query.
//! - `Navigator` and `DateFormatter` are the seams to routing and date
//!   display; `RouteNavigator` and `LongDate` are the defaults.
//! - Failed fetches keep the previous list and are only logged.

pub mod client;
pub mod date;
pub mod error;
pub mod http;
pub mod navigation;
pub mod render;
pub mod state;
pub mod types;
pub mod view;

pub use client::PostsClient;
pub use date::{DateFormatter, LongDate};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use navigation::{Navigator, RouteNavigator};
pub use render::{render_list, PostRow};
pub use state::PostListState;
pub use types::{Post, Timestamp};
pub use view::{Completion, Fetch, FetchKind, PostListView, Ticket};
