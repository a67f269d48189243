//! Process-wide blog post collection.
//!
//! Single writer, many readers: all mutation goes through the methods
//! here; pages hold the store in a `RwSignal` context and never edit
//! post contents in place. Order is server order, except that freshly
//! created posts are prepended until the next full fetch.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use crate::net::types::BlogPost;

/// The client's view of the post collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogsState {
    pub posts: Vec<BlogPost>,
    /// Set once the first full fetch has landed.
    pub loaded: bool,
}

impl BlogsState {
    /// Atomically replace the whole collection after a fetch.
    ///
    /// Returns `false` when the incoming list is structurally equal to
    /// the already-loaded collection; callers route this through
    /// `RwSignal::maybe_update` so an unchanged fetch notifies nobody.
    pub fn replace_all(&mut self, posts: Vec<BlogPost>) -> bool {
        if self.loaded && self.posts == posts {
            return false;
        }
        self.posts = posts;
        self.loaded = true;
        true
    }

    /// Optimistic insert of a just-created post at index 0, ahead of
    /// server order.
    pub fn prepend(&mut self, post: BlogPost) {
        self.posts.insert(0, post);
    }

    /// Drop a post the server confirmed deleted, preserving the relative
    /// order of the rest. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        self.posts.len() != before
    }

    pub fn find(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }
}
