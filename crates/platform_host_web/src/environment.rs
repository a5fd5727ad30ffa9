//! Read-only browser environment queries used during shell boot.

/// Returns the current page query string (including the leading `?`), if any.
pub fn location_search() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        (!search.is_empty()).then_some(search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Returns the current viewport width in CSS pixels.
pub fn viewport_width_px() -> Option<i32> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .and_then(css_px_to_i32)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Rounds a CSS pixel measurement to whole pixels, clamped to `0..=i32::MAX`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn css_px_to_i32(value: f64) -> Option<i32> {
    value
        .is_finite()
        .then(|| value.round().clamp(0.0, f64::from(i32::MAX)) as i32)
}

/// Returns the text content of the element with `id`, typically an inline
/// `<script type="application/json">` configuration block.
pub fn element_text(id: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        element
            .text_content()
            .filter(|text| !text.trim().is_empty())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_measurements_round_and_clamp() {
        assert_eq!(css_px_to_i32(767.6), Some(768));
        assert_eq!(css_px_to_i32(767.4), Some(767));
        assert_eq!(css_px_to_i32(-12.0), Some(0));
        assert_eq!(css_px_to_i32(1e12), Some(i32::MAX));
        assert_eq!(css_px_to_i32(f64::NAN), None);
        assert_eq!(css_px_to_i32(f64::INFINITY), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_environment_reports_nothing() {
        assert_eq!(viewport_width_px(), None);
        assert_eq!(location_search(), None);
        assert_eq!(element_text("shell-config"), None);
    }
}
