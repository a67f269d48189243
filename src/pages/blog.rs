//! Full post page with the owner actions (update, delete).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loader::Loader;
use crate::state::blogs::BlogsState;
use crate::state::notices::NoticesState;
#[cfg(feature = "csr")]
use crate::state::notices::{NoticeKind, notify};
use crate::state::session::{SessionState, require_signed_in};

#[cfg(feature = "csr")]
const DELETE_DENIED: &str = "You're not Authorized to delete this blog";
#[cfg(feature = "csr")]
const UPDATE_DENIED: &str = "You are not authorized to update this blog.";

/// Single-post page.
///
/// Delete is gated on a session; the server still has the final say and
/// its refusal message is surfaced. Update additionally passes the
/// best-effort ownership check before navigating to the edit screen;
/// a failed check and a genuine "not owner" look identical here.
#[component]
pub fn BlogPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let blogs = expect_context::<RwSignal<BlogsState>>();
    let notices = expect_context::<RwSignal<NoticesState>>();
    let params = use_params_map();
    let deleting = RwSignal::new(false);

    let blog_id = move || params.read().get("id").unwrap_or_default();
    let blog = move || {
        let id = blog_id();
        blogs.with(|b| b.find(&id).cloned())
    };

    let nav_delete = use_navigate();
    let nav_update = use_navigate();

    let on_delete = Callback::new(move |()| {
        if !require_signed_in(session, notices) {
            return;
        }
        #[cfg(not(feature = "csr"))]
        let _ = &nav_delete;
        #[cfg(feature = "csr")]
        {
            let id = blog_id();
            let navigate = nav_delete.clone();
            deleting.set(true);
            leptos::task::spawn_local(async move {
                let token = session.with_untracked(|s| s.token.clone()).unwrap_or_default();
                match crate::net::api::delete_blog(&token, &id).await {
                    Ok(()) => {
                        blogs.update(|b| {
                            b.remove_by_id(&id);
                        });
                        notify(notices, NoticeKind::Success, "Blog deleted successfully!");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        let message = e.server_message().unwrap_or(DELETE_DENIED).to_owned();
                        notify(notices, NoticeKind::Error, message);
                    }
                }
                deleting.set(false);
            });
        }
    });

    let on_update = Callback::new(move |()| {
        if !require_signed_in(session, notices) {
            return;
        }
        #[cfg(not(feature = "csr"))]
        let _ = &nav_update;
        #[cfg(feature = "csr")]
        {
            let id = blog_id();
            let navigate = nav_update.clone();
            leptos::task::spawn_local(async move {
                let token = session.with_untracked(|s| s.token.clone()).unwrap_or_default();
                if crate::net::api::is_owner(&id, &token).await {
                    navigate(&format!("/update/{id}"), NavigateOptions::default());
                } else {
                    notify(notices, NoticeKind::Error, UPDATE_DENIED);
                }
            });
        }
    });

    view! {
        <div class="blog-page">
            <Show
                when=move || !deleting.get()
                fallback=move || {
                    view! {
                        <p class="blog-page__busy">"Deleting Blog..."</p>
                        <Loader/>
                    }
                }
            >
                {move || match blog() {
                    Some(blog) => {
                        view! {
                            <div class="blog-page__actions">
                                <button class="btn btn--primary" on:click=move |_| on_update.run(())>
                                    "Update Blog"
                                </button>
                                <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                                    "Delete Blog"
                                </button>
                            </div>
                            <h1 class="blog-page__title">{blog.title}</h1>
                            <img class="blog-page__image" src=blog.image alt="Blog"/>
                            <p class="blog-page__description">{blog.description}</p>
                        }
                            .into_any()
                    }
                    None => {
                        if blogs.with(|b| b.loaded) {
                            view! { <p class="blog-page__missing">"Blog not found."</p> }.into_any()
                        } else {
                            view! { <Loader/> }.into_any()
                        }
                    }
                }}
            </Show>
        </div>
    }
}
