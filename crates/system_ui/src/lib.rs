//! Shared UI primitive library for the application shell.
//!
//! The crate owns the structural chrome primitives (frame, sidebar, top bar, content region),
//! the `cn!` class-composition helper, and the stable `data-ui-*` DOM contract consumed by the
//! shell stylesheet. Page content composes these primitives instead of emitting ad hoc chrome
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod chrome;
mod class_names;

pub use chrome::{ChromeButton, ContentRegion, PageSlot, ShellFrame, SidebarPanel, TopBar};
pub use class_names::{merge_classes, ClassFragment};

