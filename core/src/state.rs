//! The listing's state container and its two transitions.
//!
//! Both transitions replace the collection wholesale. Nothing from the
//! previous collection survives, so a post whose title changed between two
//! fetches shows the new title and never appears twice.

use std::collections::HashSet;

use crate::types::Post;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListState {
    posts: Vec<Post>,
}

impl PostListState {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn on_initial_load_succeeded(self, posts: Vec<Post>) -> Self {
        Self::replaced(posts)
    }

    #[must_use]
    pub fn on_search_succeeded(self, posts: Vec<Post>) -> Self {
        Self::replaced(posts)
    }

    /// Keeps server order; the first occurrence of a repeated id wins so
    /// row keys stay unique.
    fn replaced(posts: Vec<Post>) -> Self {
        let mut seen = HashSet::with_capacity(posts.len());
        let received = posts.len();
        let posts: Vec<Post> = posts
            .into_iter()
            .filter(|p| seen.insert(p.id.clone()))
            .collect();
        if posts.len() != received {
            tracing::debug!(
                received,
                kept = posts.len(),
                "dropped posts with duplicate ids"
            );
        }
        Self { posts }
    }
}
