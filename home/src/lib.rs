//! Terminal host for the blog home page listing.
//!
//! Wires a [`blog_core::PostListView`] to a real HTTP client and a tokio
//! event loop: each line on stdin is the new value of the search field, and
//! every applied result is printed as a numbered list.

pub mod config;
pub mod error;
pub mod executor;
pub mod session;

pub use config::Config;
pub use error::HomeError;
pub use executor::HttpExecutor;
pub use session::{Session, UiEvent};
