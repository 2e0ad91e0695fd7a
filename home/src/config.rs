//! Host configuration, read from the environment.

use std::time::Duration;

use crate::error::{HomeError, Result};

pub const API_URL_VAR: &str = "BLOG_API_URL";
pub const FETCH_TIMEOUT_VAR: &str = "BLOG_FETCH_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the posts API, without the `/api/posts` path.
    pub api_url: String,

    /// Upper bound for a single listing fetch.
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3000".to_string(),
            fetch_timeout: Duration::from_millis(5000),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = present(API_URL_VAR).unwrap_or(defaults.api_url);

        let fetch_timeout = match present(FETCH_TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .ok_or(HomeError::InvalidConfig {
                    key: FETCH_TIMEOUT_VAR,
                    value: raw,
                })?,
            None => defaults.fetch_timeout,
        };

        Ok(Self {
            api_url,
            fetch_timeout,
        })
    }
}
