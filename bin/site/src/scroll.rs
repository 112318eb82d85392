//! Window scroll helpers.
//!
//! The browser calls are compiled only for the client build; during server
//! rendering they do nothing.

/// Offset in pixels past which the scroll-to-top button appears.
pub const SCROLL_BUTTON_THRESHOLD: f64 = 300.0;

/// Whether the scroll-to-top button should be visible at `offset`.
#[must_use]
pub fn should_show(offset: f64) -> bool {
    offset > SCROLL_BUTTON_THRESHOLD
}

/// Current vertical scroll offset of the window.
#[must_use]
pub fn current_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        leptos::prelude::window().scroll_y().unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smoothly scrolls the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        leptos::prelude::window().scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_appears_strictly_after_threshold() {
        assert!(!should_show(0.0));
        assert!(!should_show(300.0));
        assert!(should_show(300.5));
        assert!(should_show(5000.0));
    }
}
