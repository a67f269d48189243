//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `blogs`, `notices`, `pagination`)
//! so individual pages depend on small focused models. The structs stay
//! plain (the root component wraps them in `RwSignal` contexts), which
//! keeps every invariant testable without a browser.

pub mod blogs;
pub mod notices;
pub mod pagination;
pub mod session;
