//! Wire types exchanged with the remote blog API.
//!
//! Field renames pin the server's JSON names (`_id`, `userId`, …) so the
//! rest of the crate uses ordinary Rust naming.

use serde::{Deserialize, Serialize};

/// A published blog post as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// URL of the attached image.
    pub image: String,
    /// Owner identifier; list payloads may omit it.
    #[serde(rename = "userId", default)]
    pub user_id: String,
}

/// Body of `GET /blogs`.
#[derive(Debug, Deserialize)]
pub struct BlogsPayload {
    pub blogs: Vec<BlogPost>,
}

/// Body of a successful `POST /users/signin`.
#[derive(Debug, Deserialize)]
pub struct TokenPayload {
    pub token: String,
}

/// Body of a successful `POST /users/signup`.
#[derive(Debug, Deserialize)]
pub struct MessagePayload {
    pub message: String,
}

/// Body of a successful `POST /blogs`.
#[derive(Debug, Deserialize)]
pub struct CreatedPayload {
    #[serde(rename = "newBlog")]
    pub new_blog: BlogPost,
}

/// Body of `GET /blogs/user/blogId`: the ids owned by the caller.
#[derive(Debug, Deserialize)]
pub struct OwnedIdsPayload {
    #[serde(rename = "blogIds", default)]
    pub blog_ids: Vec<String>,
}

/// Request body of `POST /users/signin`.
#[derive(Debug, Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body of `POST /users/signup`.
#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
