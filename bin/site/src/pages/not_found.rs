//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | SCADE Studio"/>
        <div class="not-found">
            <h1>"404 | Page Not Found"</h1>
            <a href="/" class="cta-button">"Back to Home"</a>
        </div>
    }
}
