//! Loading spinner shown while a request is in flight.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" aria-label="Loading">
            <div class="loader__spinner"></div>
        </div>
    }
}
