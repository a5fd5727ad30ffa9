//! Derived layout geometry. Everything here is recomputed from state on every render.

use system_ui::cn;

use crate::{config::ShellConfig, model::ShellState};

/// Base classes of the content region regardless of sidebar state.
pub const CONTENT_BASE_CLASS: &str = "ui-content flex min-h-screen flex-col transition-all";

/// Class string for the content region. The shift class is responsive, so the offset only
/// takes effect at or above the medium breakpoint.
pub fn content_offset_class(sidebar_open: bool, config: &ShellConfig) -> String {
    cn!(
        CONTENT_BASE_CLASS,
        sidebar_open.then_some(config.content_shift_class.as_str())
    )
}

/// Leading offset of the content region in CSS pixels for a given viewport width.
pub fn content_leading_offset_px(
    sidebar_open: bool,
    viewport_width_px: i32,
    config: &ShellConfig,
) -> i32 {
    if sidebar_open && viewport_width_px >= config.md_breakpoint_px {
        config.sidebar_width_px
    } else {
        0
    }
}

/// Inline style pinning the content offset to the configured sidebar width.
///
/// `None` until the viewport width is known, in which case the responsive shift class applies.
pub fn content_offset_style(
    sidebar_open: bool,
    viewport_width_px: Option<i32>,
    config: &ShellConfig,
) -> Option<String> {
    let width = viewport_width_px?;
    Some(format!(
        "margin-left: {}px",
        content_leading_offset_px(sidebar_open, width, config)
    ))
}

/// Output of one render pass of the shell chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutFrame {
    pub sidebar_open: bool,
    pub content_class: String,
}

impl LayoutFrame {
    pub fn derive(state: &ShellState, config: &ShellConfig) -> Self {
        Self {
            sidebar_open: state.sidebar_open,
            content_class: content_offset_class(state.sidebar_open, config),
        }
    }

    pub fn is_content_shifted(&self, config: &ShellConfig) -> bool {
        self.content_class
            .split_whitespace()
            .any(|token| token == config.content_shift_class)
    }
}
