//! Maps a post id to the address of its detail page.

/// Resolves a post id to a navigable target.
pub trait Navigator {
    fn target(&self, id: &str) -> String;
}

/// `/posts/{id}`, or `{prefix}/{id}` for a custom prefix.
#[derive(Debug, Clone)]
pub struct RouteNavigator {
    prefix: String,
}

impl RouteNavigator {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for RouteNavigator {
    fn default() -> Self {
        Self::with_prefix("/posts")
    }
}

impl Navigator for RouteNavigator {
    fn target(&self, id: &str) -> String {
        format!("{}/{id}", self.prefix)
    }
}
