//! Main Leptos application component and routing.

use crate::components::{ChatbotWidget, Footer, Navbar, ScrollToTopButton, ScrollToTopOnNavigate};
use crate::pages::{AboutPage, ContactPage, HomePage, NotFoundPage, ProductsPage, TeamPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use magmist_conversation::{ChatbotConfig, ChatbotParts};
use std::sync::LazyLock;

/// Chatbot content, validated once per process and shared by every render.
static CHATBOT_PARTS: LazyLock<Option<ChatbotParts>> =
    LazyLock::new(|| match ChatbotConfig::default().build() {
        Ok(parts) => Some(parts),
        Err(report) => {
            tracing::error!(error = %report, "Chatbot configuration is invalid, widget disabled");
            None
        }
    });

/// The shared chatbot parts, or `None` if the built-in content is invalid.
pub fn chatbot_parts() -> Option<&'static ChatbotParts> {
    CHATBOT_PARTS.as_ref()
}

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="SCADE Studio"/>
        <Router>
            <ScrollToTopOnNavigate/>
            <Navbar/>
            <main class="container">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/team") view=TeamPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
            <ScrollToTopButton/>
            <Chatbot/>
        </Router>
    }
}

/// Mounts the chat widget, or nothing if its content failed to build.
#[component]
fn Chatbot() -> impl IntoView {
    chatbot_parts().map(|parts| view! { <ChatbotWidget parts=parts.clone()/> })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn chatbot_parts_are_built_once() {
        let first = chatbot_parts().expect("built-in content is valid");
        let second = chatbot_parts().expect("built-in content is valid");
        assert!(std::ptr::eq(first, second));
        assert!(Arc::ptr_eq(&first.catalog, &second.clone().catalog));
    }
}
