//! Home page.

use crate::content::{DEMO_VIDEO, FLAGSHIP_POINTS, PRINCIPLES, STATS, autoplay_video};
use leptos::prelude::*;
use leptos_meta::Title;

const PRODUCT_IMAGE: &str = "https://plus.unsplash.com/premium_photo-1726837561635-6e9fd565041c?ixlib=rb-4.1.0&auto=format&fit=crop&q=60&w=600";

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="SCADE Studio | Magmist"/>
        <div class="home-page">
            <header class="page-hero">
                <h1>
                    <span class="accent">"SCADE -"</span>
                    " Precision, Reliability & Advanced Solutions"
                </h1>
                <p>
                    "Redefining the future through "
                    <strong>"science, care, and technology"</strong>
                    "\u{2014}pioneering products that enhance human health while protecting the planet."
                </p>
            </header>

            <div class="video-banner">
                <div class="video-frame" inner_html=autoplay_video(DEMO_VIDEO, None)></div>
                <div class="video-overlay">
                    <h2>"The Future of Air-to-Water Technology"</h2>
                    <p>"Atmospheric water generator extracting pure water from air"</p>
                </div>
            </div>

            <section class="card-grid principles">
                {PRINCIPLES.iter().map(|principle| view! {
                    <article class="card">
                        <h3>{principle.title}</h3>
                        <p>{principle.description}</p>
                    </article>
                }).collect_view()}
            </section>

            <section class="flagship">
                <div>
                    <span class="badge">"Flagship Product"</span>
                    <h2>"Introducing " <strong>"Magmist"</strong> ": Hydration Redefined"</h2>
                    <p>
                        "Our flagship product, Magmist, is a cutting-edge Atmospheric Water Generator (AWG) that "
                        "transforms air into life-sustaining hydration \u{2014} delivering pure, mineral-enriched, "
                        "perfectly alkaline water without a drop of water waste."
                    </p>
                    <ul class="check-list">
                        {FLAGSHIP_POINTS.iter().map(|point| view! {
                            <li>
                                <strong>{point.title} ":"</strong>
                                " "
                                {point.description}
                            </li>
                        }).collect_view()}
                    </ul>
                    <a href="/products" class="cta-button">"Discover the Magmist Difference"</a>
                </div>
                <img src=PRODUCT_IMAGE alt="Magmist Atmospheric Water Generator"/>
            </section>

            <section class="stats">
                <h2>"Global Trust & Proven Innovation"</h2>
                <div class="stats-grid">
                    {STATS.iter().map(|stat| view! {
                        <div class="stat">
                            <p class="stat-value">{stat.value}</p>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <div class="final-cta">
                <h3>"Ready to Experience True Purity?"</h3>
                <a href="/products" class="cta-button">"Explore All Products"</a>
            </div>
        </div>
    }
}
