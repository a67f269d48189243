//! Sign-in page.

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::state::session::SessionState;

/// Login form. A successful sign-in persists the token and reloads to
/// the list page so the whole app restarts with the fresh session; a
/// rejection shows the server's reason inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            loading.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::sign_in(
                    &email.get_untracked(),
                    &password.get_untracked(),
                )
                .await;
                match result {
                    Ok(token) => {
                        session.update(|s| s.sign_in(token));
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href("/");
                        }
                    }
                    Err(e) => {
                        error.set(e.server_message().unwrap_or("Login failed").to_owned());
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, error, loading);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__panel">
                <form class="login-page__form" on:submit=on_submit>
                    <h1>"Login to Your Account"</h1>
                    <input
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <div class="login-page__error">{move || error.get()}</div>
                    </Show>
                    <Show when=move || loading.get()>
                        <Loader/>
                    </Show>
                    <button type="submit" class="btn btn--primary">
                        "Sign In"
                    </button>
                </form>
            </div>
            <div class="login-page__aside">
                <h1>"New Here?"</h1>
                <a class="btn" href="/signup">
                    "Sign Up"
                </a>
            </div>
        </div>
    }
}
