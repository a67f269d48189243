//! Presentation side of the notification port.
//!
//! Notices auto-dismiss on their own timer; clicking one dismisses it
//! early.

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticesState};

/// Stacked transient notices in the corner of the viewport.
#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    view! {
        <div class="toasts">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Error => "toast toast--error",
                            NoticeKind::Success => "toast toast--success",
                        };
                        let id = notice.id.clone();
                        view! {
                            <div class=class on:click=move |_| notices.update(|n| n.dismiss(&id))>
                                {notice.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
