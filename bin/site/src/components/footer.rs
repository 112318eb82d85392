//! Site footer.

use crate::content::{FOOTER_CREDIT, SOCIAL_LINKS, studio};
use crate::nav::QUICK_LINKS;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <img src="/assets/logo.jpg" alt="SCADE Studio Logo" loading="lazy"/>
                    <p>
                        {studio::TAGLINE}
                        " Innovating sustainable hydration for a better tomorrow."
                    </p>
                    <div class="social-links">
                        {SOCIAL_LINKS.iter().map(|social| view! {
                            <a
                                href=social.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=social.label
                                class=format!("social-link social-{}", social.label.to_lowercase())
                            >
                                {social.label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>

                <div class="footer-links">
                    <h3>"Quick Links"</h3>
                    <ul>
                        {QUICK_LINKS.iter().map(|link| view! {
                            <li><a href=link.path>{link.label}</a></li>
                        }).collect_view()}
                    </ul>
                </div>

                <div class="footer-contact">
                    <h3>"Get in Touch"</h3>
                    <a href=format!("mailto:{}", studio::EMAIL)>{studio::EMAIL}</a>
                    <a href=studio::PHONE_TEL>{studio::PHONE_DISPLAY}</a>
                    <a href=studio::MAPS_URL target="_blank" rel="noopener noreferrer">
                        {studio::CITY}
                    </a>
                </div>
            </div>

            <div class="footer-bottom">
                <p>
                    {format!("\u{a9} {year} ")}
                    <a href=FOOTER_CREDIT.url target="_blank" rel="noopener noreferrer">
                        {FOOTER_CREDIT.label}
                    </a>
                    ". All rights reserved."
                    <span class="footer-motto">"Innovating Water. Sustaining Life."</span>
                </p>
            </div>
        </footer>
    }
}
