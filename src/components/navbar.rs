//! Top navigation bar with session-dependent links and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;

/// Header bar: brand, Blog link, and Login link or Logout button
/// depending on the current session. Collapses behind a toggle on
/// narrow screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let at = move |path: &str| pathname.get() == path;

    // Clear the token only after the server confirms the logout; a
    // failed call leaves the session usable.
    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = session.with_untracked(|s| s.token.clone()) else {
                    return;
                };
                match crate::net::api::logout(&token).await {
                    Ok(()) => {
                        session.update(SessionState::sign_out);
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href("/");
                        }
                    }
                    Err(e) => leptos::logging::warn!("logout failed: {e}"),
                }
            });
        }
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <h1 class="navbar__brand">"Blog App"</h1>
                <nav class=move || {
                    if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }
                }>
                    <a
                        class=move || {
                            if at("/") { "navbar__link navbar__link--active" } else { "navbar__link" }
                        }
                        href="/"
                        on:click=move |_| menu_open.set(false)
                    >
                        "Blog"
                    </a>
                    <Show
                        when=move || session.with(SessionState::is_signed_in)
                        fallback=move || {
                            view! {
                                <a
                                    class=move || {
                                        if at("/login") {
                                            "navbar__link navbar__link--active"
                                        } else {
                                            "navbar__link"
                                        }
                                    }
                                    href="/login"
                                    on:click=move |_| menu_open.set(false)
                                >
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <button class="navbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </nav>
                <button
                    class="navbar__menu-toggle"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>
    }
}
