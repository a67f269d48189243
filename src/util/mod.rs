//! Browser-only helpers.

pub mod image_preview;
