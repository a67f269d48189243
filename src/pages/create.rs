//! Create-post form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::state::blogs::BlogsState;
use crate::state::notices::NoticesState;
#[cfg(feature = "csr")]
use crate::state::notices::{NoticeKind, notify};
use crate::state::session::SessionState;
use crate::util::image_preview;

/// Create-blog screen. Reachable through the gated list button, but a
/// direct URL hit by an anonymous visitor is bounced to the login page.
/// On success the new post is prepended to the local collection without
/// a re-fetch; on failure the form resets either way.
#[component]
pub fn CreateBlogPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let blogs = expect_context::<RwSignal<BlogsState>>();
    let notices = expect_context::<RwSignal<NoticesState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let preview = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let navigate = use_navigate();
    let nav_submit = use_navigate();

    // Bounce anonymous visitors.
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
            let navigate = nav_submit.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let token = session.with_untracked(|s| s.token.clone()).unwrap_or_default();
                let result = match build_form(
                    &title.get_untracked(),
                    &description.get_untracked(),
                    file_input.get_untracked().as_ref(),
                ) {
                    Some(form) => crate::net::api::create_blog(&token, form).await,
                    None => Err(crate::net::api::ApiError::Network(
                        "could not assemble the form".to_owned(),
                    )),
                };
                match result {
                    Ok(new_blog) => {
                        reset_form();
                        notify(notices, NoticeKind::Success, "Blog created successfully");
                        blogs.update(|b| b.prepend(new_blog));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("create failed: {e}");
                        reset_form();
                        notify(notices, NoticeKind::Error, "Error creating blog");
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&nav_submit, blogs, notices, reset_form, submitting);
        }
    });

    view! {
        <div class="create-page">
            <Show
                when=move || !submitting.get()
                fallback=move || {
                    view! {
                        <p class="create-page__busy">"Creating Blog..."</p>
                        <Loader/>
                    }
                }
            >
                <form class="create-page__form" on:submit=move |ev| on_submit.run(ev)>
                    <h1>"Create Blog"</h1>
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
                                view! { <img class="form__preview" src=url alt="Uploaded image"/> }
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

/// Assemble the multipart body: title, description, the chosen image,
/// and the locale-formatted creation date the server expects.
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
    form.append_with_str("createdAt", &created_at()).ok()?;
    Some(form)
}

#[cfg(feature = "csr")]
fn created_at() -> String {
    let options = js_sys::Object::new();
    for (key, value) in [
        ("timeZone", "Asia/Kolkata"),
        ("year", "numeric"),
        ("month", "short"),
        ("day", "2-digit"),
    ] {
        let _ = js_sys::Reflect::set(&options, &key.into(), &value.into());
    }
    js_sys::Date::new_0().to_locale_string("en-IN", &options).into()
}
