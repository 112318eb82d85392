//! Top navigation bar.

use crate::nav::{NAV_LINKS, is_active};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Sticky navigation with a collapsible mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    // Any route change closes the mobile menu.
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    let link_class = move |path: &'static str| {
        move || {
            if pathname.with(|current| is_active(current, path)) {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="/" class="logo">
                    <img src="/assets/logo.png" alt="SCADE Studio"/>
                </a>
                <ul class="nav-links">
                    {NAV_LINKS.iter().map(|link| view! {
                        <li>
                            <a href=link.path class=link_class(link.path)>{link.label}</a>
                        </li>
                    }).collect_view()}
                </ul>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <ul class="mobile-menu">
                    {NAV_LINKS.iter().map(|link| view! {
                        <li>
                            <a
                                href=link.path
                                class=link_class(link.path)
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {link.label}
                            </a>
                        </li>
                    }).collect_view()}
                </ul>
            </Show>
        </nav>
    }
}
