//! Image selection preview for the create/update forms.
//!
//! Previews use object URLs rather than reading the file into memory;
//! callers revoke a URL once it leaves the screen. Requires a browser
//! environment.

/// Outcome of inspecting the file input after a change event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// No file chosen.
    None,
    /// A file was chosen but is not an image.
    NotAnImage,
    /// An image was chosen; carries the preview object URL.
    Image(String),
}

/// Inspect the input's currently selected file.
#[cfg(feature = "csr")]
pub fn selection(input: &web_sys::HtmlInputElement) -> Selection {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Selection::None;
    };
    if !file.type_().starts_with("image/") {
        return Selection::NotAnImage;
    }
    match web_sys::Url::create_object_url_with_blob(&file) {
        Ok(url) => Selection::Image(url),
        Err(_) => Selection::None,
    }
}

/// Release a preview URL created by [`selection`].
pub fn revoke(url: &str) {
    #[cfg(feature = "csr")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
