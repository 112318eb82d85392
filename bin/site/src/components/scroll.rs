//! Scroll behaviour shared by all pages.

use crate::scroll::{current_offset, scroll_to_top, should_show};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Floating button that appears once the page has been scrolled down.
#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        set_visible.set(should_show(current_offset()));
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || visible.get()>
            <button
                class="scroll-to-top"
                aria-label="Scroll to top"
                on:click=move |_| scroll_to_top()
            >
                "\u{2191}"
            </button>
        </Show>
    }
}

/// Scrolls back to the top whenever the route changes.
#[component]
pub fn ScrollToTopOnNavigate() -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        pathname.track();
        scroll_to_top();
    });
}
