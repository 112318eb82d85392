//! Shared layout components mounted on every page.

pub mod chatbot;
pub mod footer;
pub mod navbar;
pub mod scroll;

pub use chatbot::ChatbotWidget;
pub use footer::Footer;
pub use navbar::Navbar;
pub use scroll::{ScrollToTopButton, ScrollToTopOnNavigate};
