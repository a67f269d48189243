//! Post list page with client-side pagination.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::blog_card::BlogCard;
use crate::components::loader::Loader;
use crate::state::blogs::BlogsState;
use crate::state::notices::NoticesState;
use crate::state::pagination::{PAGE_SIZE, Pager, page, total_pages};
use crate::state::session::{SessionState, require_signed_in};

/// All-posts page: paginated grid plus the gated create entry point.
/// Anonymous clicks on "Create Blog" surface a notice and go nowhere.
#[component]
pub fn BlogsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let blogs = expect_context::<RwSignal<BlogsState>>();
    let notices = expect_context::<RwSignal<NoticesState>>();
    let navigate = use_navigate();
    let pager = RwSignal::new(Pager::default());

    let total = move || blogs.with(|b| total_pages(b.posts.len(), PAGE_SIZE));

    // Deletes can empty the tail page; keep the cursor in range.
    Effect::new(move || {
        let bound = total();
        pager.maybe_update(|p| p.clamp(bound));
    });

    let current_page = move || {
        let number = pager.get().current;
        blogs.with(|b| page(&b.posts, number, PAGE_SIZE).to_vec())
    };

    let on_create = move |_| {
        if require_signed_in(session, notices) {
            navigate("/create", NavigateOptions::default());
        }
    };

    view! {
        <div class="blogs-page">
            <header class="blogs-page__header">
                <h1>"All Blogs"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "Create Blog"
                </button>
            </header>

            <Show when=move || blogs.with(|b| b.loaded) fallback=move || view! { <Loader/> }>
                <div class="blogs-page__grid">
                    {move || {
                        current_page()
                            .into_iter()
                            .map(|blog| view! { <BlogCard blog=blog/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="blogs-page__pagination">
                    <button
                        class="btn"
                        disabled=move || pager.get().current == 1
                        on:click=move |_| pager.maybe_update(Pager::previous)
                    >
                        "Previous"
                    </button>
                    <span>{move || format!("Page {} of {}", pager.get().current, total())}</span>
                    <button
                        class="btn"
                        disabled=move || pager.get().current >= total()
                        on:click=move |_| {
                            let bound = total();
                            pager.maybe_update(|p| p.next(bound));
                        }
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </div>
    }
}
