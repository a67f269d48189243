//! Update-post form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loader::Loader;
use crate::state::notices::NoticesState;
#[cfg(feature = "csr")]
use crate::state::notices::{NoticeKind, notify};
use crate::state::session::SessionState;
use crate::util::image_preview;

/// Update-blog screen. The detail page only navigates here after the
/// ownership check passes, but the server re-checks on submit anyway.
/// Fields start empty; the collection refreshes only through the next
/// full fetch.
#[component]
pub fn UpdateBlogPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticesState>>();
    let params = use_params_map();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let preview = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let blog_id = move || params.read().get("id").unwrap_or_default();

    // Bounce anonymous visitors.
    let navigate = use_navigate();
    Effect::new(move || {
        if !session.with(SessionState::is_signed_in) {
            navigate("/login", NavigateOptions::default());
        }
    });

    let reset_form = move || {
        title.set(String::new());
        description.set(String::new());
        if let Some(url) = preview.get_untracked() {
            image_preview::revoke(&url);
        }
        preview.set(None);
        #[cfg(feature = "csr")]
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            match image_preview::selection(&input) {
                image_preview::Selection::Image(url) => {
                    if let Some(old) = preview.get_untracked() {
                        image_preview::revoke(&old);
                    }
                    preview.set(Some(url));
                }
                image_preview::Selection::NotAnImage => {
                    notify(notices, NoticeKind::Error, "Please upload an image file.");
                    input.set_value("");
                    preview.set(None);
                }
                image_preview::Selection::None => preview.set(None),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let id = blog_id();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let token = session.with_untracked(|s| s.token.clone()).unwrap_or_default();
                let result = match build_form(
                    &title.get_untracked(),
                    &description.get_untracked(),
                    file_input.get_untracked().as_ref(),
                ) {
                    Some(form) => crate::net::api::update_blog(&token, &id, form).await,
                    None => Err(crate::net::api::ApiError::Network(
                        "could not assemble the form".to_owned(),
                    )),
                };
                match result {
                    Ok(()) => {
                        reset_form();
                        notify(notices, NoticeKind::Success, "Blog updated successfully");
                    }
                    Err(e) => {
                        let message = e.server_message().unwrap_or("Error updating blog").to_owned();
                        reset_form();
                        notify(notices, NoticeKind::Error, message);
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (notices, reset_form, submitting);
        }
    });

    view! {
        <div class="update-page">
            <Show
                when=move || !submitting.get()
                fallback=move || {
                    view! {
                        <p class="update-page__busy">"Updating Blog..."</p>
                        <Loader/>
                    }
                }
            >
                <form class="update-page__form" on:submit=move |ev| on_submit.run(ev)>
                    <h1>"Update Post"</h1>
                    <label class="form__label">
                        "Id"
                        <input type="text" disabled prop:value=move || blog_id()/>
                    </label>
                    <label class="form__label">
                        "Title"
                        <input
                            type="text"
                            required
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Description"
                        <textarea
                            required
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="form__label">
                        "Image"
                        {move || match preview.get() {
                            Some(url) => {
                                view! { <img class="form__preview" src=url alt="Uploaded"/> }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="form__no-image">"No image uploaded"</p> }
                                    .into_any()
                            }
                        }}
                        <input
                            type="file"
                            accept="image/*"
                            required
                            node_ref=file_input
                            on:change=on_image_change
                        />
                    </label>
                    <button type="submit" class="btn btn--primary">
                        "Submit"
                    </button>
                </form>
            </Show>
        </div>
    }
}

/// Assemble the multipart body for an update: title, description, and
/// the replacement image when one was chosen.
#[cfg(feature = "csr")]
fn build_form(
    title: &str,
    description: &str,
    input: Option<&web_sys::HtmlInputElement>,
) -> Option<web_sys::FormData> {
    let form = web_sys::FormData::new().ok()?;
    form.append_with_str("title", title).ok()?;
    form.append_with_str("description", description).ok()?;
    if let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0)) {
        form.append_with_blob("image", &file).ok()?;
    }
    Some(form)
}
