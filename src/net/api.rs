//! REST calls to the remote blog API.
//!
//! Browser builds (`csr`): real HTTP via `gloo-net`, each request bounded
//! by a client-side timeout. Non-browser builds: stubs returning
//! [`ApiError::Unavailable`] so the crate compiles and tests natively.
//!
//! ERROR HANDLING
//! ==============
//! Every call converts failures into [`ApiError`]; nothing here panics.
//! Non-2xx responses carry the server's `message` (or joined validation
//! `errors`) when the body provides one. The ownership check collapses
//! all failure detail into `false`; callers cannot distinguish "not
//! owner" from "check failed"; the cause is logged only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::BlogPost;

/// Upper bound on any single request round trip.
#[cfg(feature = "csr")]
const REQUEST_TIMEOUT_MS: u64 = 15_000;

/// Failure of a single API call. Terminal for that user action; the
/// client never retries.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("request timed out")]
    Timeout,
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("API base URL is not configured")]
    Unconfigured,
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// The message the server attached to a non-2xx response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Extract a human-readable message from an error response body.
///
/// Prefers the `message` field; falls back to joining the values of a
/// validation `errors` map. Returns `None` for anything else.
pub fn parse_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_owned());
    }
    let errors = value.get("errors")?.as_object()?;
    let joined = errors
        .values()
        .filter_map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    if joined.is_empty() { None } else { Some(joined) }
}

/// Membership test over the owned-id set returned by the server.
pub fn owns(owned_ids: &[String], blog_id: &str) -> bool {
    owned_ids.iter().any(|id| id == blog_id)
}

/// Check whether the current token's subject owns `blog_id`.
///
/// Fail-closed: any failure (network, non-2xx, malformed body, timeout)
/// resolves to `false`. Callers must hold a present token, since the
/// auth gate runs first. Every invocation is a fresh round trip.
pub async fn is_owner(blog_id: &str, token: &str) -> bool {
    match owned_blog_ids(token).await {
        Ok(ids) => owns(&ids, blog_id),
        Err(e) => {
            leptos::logging::warn!("ownership lookup failed, treating as not owner: {e}");
            false
        }
    }
}

#[cfg(feature = "csr")]
fn require_base() -> Result<&'static str, ApiError> {
    crate::config::api_base().ok_or(ApiError::Unconfigured)
}

#[cfg(feature = "csr")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Send a built request, racing the round-trip against the timeout and
/// mapping non-2xx responses to [`ApiError::Status`].
#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};

    let round_trip = async { request.send().await.map_err(|e| ApiError::Network(e.to_string())) };
    let deadline = gloo_timers::future::sleep(std::time::Duration::from_millis(REQUEST_TIMEOUT_MS));

    let resp = match select(Box::pin(round_trip), Box::pin(deadline)).await {
        Either::Left((result, _)) => result?,
        Either::Right(((), _)) => return Err(ApiError::Timeout),
    };

    if resp.ok() {
        Ok(resp)
    } else {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message: parse_error_message(&body) })
    }
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the full post collection via `GET /blogs`.
///
/// The only call that works without explicit configuration: it falls
/// back to the default public endpoint.
///
/// # Errors
///
/// Returns an error on network failure, timeout, non-2xx status, or a
/// body that does not decode.
pub async fn fetch_blogs() -> Result<Vec<BlogPost>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/blogs", crate::config::blogs_base());
        let request = gloo_net::http::Request::get(&url)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let payload: super::types::BlogsPayload = decode(send(request).await?).await?;
        Ok(payload.blogs)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in via `POST /users/signin`; returns the bearer token.
///
/// # Errors
///
/// Returns an error on failure; [`ApiError::server_message`] carries the
/// server's rejection reason when one was provided.
pub async fn sign_in(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/users/signin", require_base()?);
        let request = gloo_net::http::Request::post(&url)
            .json(&super::types::SignInRequest { email, password })
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let payload: super::types::TokenPayload = decode(send(request).await?).await?;
        Ok(payload.token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Register via `POST /users/signup`; returns the server's message.
///
/// # Errors
///
/// Returns an error on failure; validation rejections surface through
/// [`ApiError::server_message`].
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/users/signup", require_base()?);
        let request = gloo_net::http::Request::post(&url)
            .json(&super::types::SignUpRequest { name, email, password })
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let payload: super::types::MessagePayload = decode(send(request).await?).await?;
        Ok(payload.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the session server-side via `POST /users/logout`.
///
/// # Errors
///
/// Returns an error when the server rejects the call; the caller keeps
/// the local token in that case.
pub async fn logout(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/users/logout", require_base()?);
        let request = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Delete a post via `DELETE /blogs/{id}`.
///
/// # Errors
///
/// Returns an error when the server refuses; authorization is decided
/// server-side.
pub async fn delete_blog(token: &str, blog_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/blogs/{blog_id}", require_base()?);
        let request = gloo_net::http::Request::delete(&url)
            .header("Authorization", &bearer(token))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, blog_id);
        Err(ApiError::Unavailable)
    }
}

/// Ids of the posts owned by the token's subject, via
/// `GET /blogs/user/blogId`.
///
/// # Errors
///
/// Returns an error on any failure; [`is_owner`] is the fail-closed
/// wrapper most callers want.
pub async fn owned_blog_ids(token: &str) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/blogs/user/blogId", require_base()?);
        let request = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let payload: super::types::OwnedIdsPayload = decode(send(request).await?).await?;
        Ok(payload.blog_ids)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Create a post via `POST /blogs` with a multipart form
/// (title, description, image, createdAt). Returns the stored post so
/// the caller can prepend it to the local collection.
///
/// # Errors
///
/// Returns an error on failure; the caller resets its form either way.
#[cfg(feature = "csr")]
pub async fn create_blog(
    token: &str,
    form: web_sys::FormData,
) -> Result<BlogPost, ApiError> {
    let url = format!("{}/blogs", require_base()?);
    let request = gloo_net::http::Request::post(&url)
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let payload: super::types::CreatedPayload = decode(send(request).await?).await?;
    Ok(payload.new_blog)
}

/// Update a post via `PUT /posts/{id}` with a multipart form. The
/// response body is not used; the collection is refreshed only by a full
/// replace-from-server.
///
/// # Errors
///
/// Returns an error on failure, with the server's message when provided.
#[cfg(feature = "csr")]
pub async fn update_blog(
    token: &str,
    blog_id: &str,
    form: web_sys::FormData,
) -> Result<(), ApiError> {
    let url = format!("{}/posts/{blog_id}", require_base()?);
    let request = gloo_net::http::Request::put(&url)
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await?;
    Ok(())
}
