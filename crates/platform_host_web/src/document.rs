//! `document.documentElement`-backed implementation of [`platform_host::DocumentEffects`].
//!
//! Both mutations are naturally idempotent at the DOM boundary: `classList.add` and
//! `classList.remove` ignore tokens that are already present/absent, and `setAttribute` with an
//! unchanged value does not alter the document.

use platform_host::DocumentEffects;

/// Marker class used by the shell stylesheet for dark-mode rules.
pub const DEFAULT_DARK_MODE_CLASS: &str = "dark";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser document adapter writing to the root `<html>` element.
pub struct WebDocumentEffects {
    dark_mode_class: String,
}

impl Default for WebDocumentEffects {
    fn default() -> Self {
        Self::new(DEFAULT_DARK_MODE_CLASS)
    }
}

impl WebDocumentEffects {
    /// Creates an adapter that toggles `dark_mode_class` on the document root.
    pub fn new(dark_mode_class: impl Into<String>) -> Self {
        Self {
            dark_mode_class: dark_mode_class.into(),
        }
    }

    /// Returns the marker class this adapter toggles.
    pub fn dark_mode_class(&self) -> &str {
        &self.dark_mode_class
    }
}

#[cfg(target_arch = "wasm32")]
fn document_root() -> Result<web_sys::Element, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| "document root element unavailable".to_string())
}

impl DocumentEffects for WebDocumentEffects {
    fn set_dark_mode(&self, enabled: bool) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let classes = document_root()?.class_list();
            let result = if enabled {
                classes.add_1(&self.dark_mode_class)
            } else {
                classes.remove_1(&self.dark_mode_class)
            };
            result.map_err(|e| format!("classList update failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = enabled;
            Ok(())
        }
    }

    fn set_language_tag(&self, tag: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            document_root()?
                .set_attribute("lang", tag)
                .map_err(|e| format!("lang attribute update failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = tag;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_adapter_uses_dark_marker_class() {
        assert_eq!(WebDocumentEffects::default().dark_mode_class(), "dark");
        assert_eq!(WebDocumentEffects::new("theme-dark").dark_mode_class(), "theme-dark");
    }

    #[test]
    fn native_target_mutations_are_accepted() {
        let effects = WebDocumentEffects::default();
        effects.set_dark_mode(true).expect("dark");
        effects.set_language_tag("zh-CN").expect("lang");
    }
}
