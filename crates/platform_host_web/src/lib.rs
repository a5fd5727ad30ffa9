//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for document root mutations and
//! the read-only environment queries the shell needs at boot. On native targets every adapter
//! compiles to an inert fallback so the runtime crates stay testable with `cargo test`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod document;
pub mod environment;

pub use adapters::{
    document_effects, host_strategy_name, selected_host_strategy, DocumentEffectsAdapter,
    HostStrategy,
};
pub use document::{WebDocumentEffects, DEFAULT_DARK_MODE_CLASS};
pub use environment::{element_text, location_search, viewport_width_px};
