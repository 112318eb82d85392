//! Page components for the application.
//!
//! Each page is a Leptos component that renders one route from the static
//! copy in [`crate::content`].

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod products;
pub mod team;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use products::ProductsPage;
pub use team::TeamPage;
