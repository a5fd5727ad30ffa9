//! Typed host-domain contracts shared by the shell runtime and browser adapters.
//!
//! This crate is the API-first boundary for document-level host services. Concrete browser
//! adapters live in `platform_host_web`; the in-memory adapters here back native tests and
//! unsupported targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;

pub use document::{
    DocumentEffects, DocumentMutation, NoopDocumentEffects, RecordedDocument,
    RecordingDocumentEffects, LANGUAGE_TAG_EN, LANGUAGE_TAG_ZH_CN,
};
