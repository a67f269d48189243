//! Registration page.

use leptos::prelude::*;

use crate::components::loader::Loader;

/// Signup form. Success shows the server's confirmation message (no
/// automatic sign-in); validation rejections are shown inline.
#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            loading.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::sign_up(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                )
                .await;
                match result {
                    Ok(confirmation) => message.set(confirmation),
                    Err(e) => {
                        error.set(e.server_message().unwrap_or("Signup failed").to_owned());
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (message, error, loading);
        }
    };

    view! {
        <div class="signup-page">
            <div class="signup-page__aside">
                <h1>"Welcome Back"</h1>
                <a class="btn" href="/login">
                    "Sign in"
                </a>
            </div>
            <div class="signup-page__panel">
                <form class="signup-page__form" on:submit=on_submit>
                    <h1>"Create Account"</h1>
                    <input
                        type="text"
                        placeholder="Enter Your Name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        <div class="signup-page__error">{move || error.get()}</div>
                    </Show>
                    <Show when=move || !message.get().is_empty()>
                        <div class="signup-page__message">{move || message.get()}</div>
                    </Show>
                    <Show when=move || loading.get()>
                        <Loader/>
                    </Show>
                    <button type="submit" class="btn btn--primary">
                        "Sign Up"
                    </button>
                </form>
            </div>
        </div>
    }
}
