//! Clickable card for a post in the list grid.

#[cfg(test)]
#[path = "blog_card_test.rs"]
mod blog_card_test;

use leptos::prelude::*;

use crate::net::types::BlogPost;

/// List views show at most this many characters of a description.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 400;

/// Shorten a description for the list view: fixed cutoff plus an
/// ellipsis marker, applied only when the text is longer than the
/// cutoff. Counts characters, not bytes.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        let mut preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    } else {
        text.to_owned()
    }
}

/// A clickable card linking to the full post.
#[component]
pub fn BlogCard(blog: BlogPost) -> impl IntoView {
    let href = format!("/blogs/{}", blog.id);
    let preview = truncate_description(&blog.description);

    view! {
        <a class="blog-card" href=href>
            <img class="blog-card__image" src=blog.image alt=blog.title.clone()/>
            <h2 class="blog-card__title">{blog.title}</h2>
            <p class="blog-card__description">{preview}</p>
        </a>
    }
}
