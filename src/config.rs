//! API endpoint configuration.
//!
//! The base URL of the remote blog API is baked in at build time via the
//! `BLOG_API_URL` environment variable. Fetching the public post list
//! falls back to the default endpoint when unset; authenticated calls
//! require an explicit configuration and fail fast without one.

/// Default endpoint used for the public fetch-all-posts call only.
pub const DEFAULT_API_URL: &str = "https://blog-task-backend.vercel.app";

/// The configured API base URL, if one was supplied at build time.
pub fn api_base() -> Option<&'static str> {
    option_env!("BLOG_API_URL")
}

/// Base URL for the public post list: configured value or the default.
pub fn blogs_base() -> &'static str {
    api_base().unwrap_or(DEFAULT_API_URL)
}
