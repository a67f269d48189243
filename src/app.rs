//! Root application component: shared state contexts, routing, and the
//! one-shot initial fetch of the post collection.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toasts::Toasts;
use crate::pages::{
    blog::BlogPage, blogs::BlogsPage, create::CreateBlogPage, login::LoginPage,
    signup::SignupPage, update::UpdateBlogPage,
};
use crate::state::{blogs::BlogsState, notices::NoticesState, session::SessionState};

/// Root application component.
///
/// Provides the session, collection, and notice stores as contexts and
/// sets up client-side routing. The collection is fetched once on
/// startup; a structurally identical result must not notify readers.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::load());
    let blogs = RwSignal::new(BlogsState::default());
    let notices = RwSignal::new(NoticesState::default());

    provide_context(session);
    provide_context(blogs);
    provide_context(notices);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_blogs().await {
            Ok(posts) => blogs.maybe_update(|b| b.replace_all(posts)),
            Err(e) => leptos::logging::warn!("failed to load blogs: {e}"),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/blog-client.css"/>
        <Title text="Blog App"/>

        <Router>
            <Navbar/>
            <main class="app__content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=BlogsPage/>
                    <Route path=(StaticSegment("blogs"), ParamSegment("id")) view=BlogPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("create") view=CreateBlogPage/>
                    <Route path=(StaticSegment("update"), ParamSegment("id")) view=UpdateBlogPage/>
                </Routes>
            </main>
            <Toasts/>
        </Router>
    }
}
