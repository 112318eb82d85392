//! About page.

use crate::content::{HEALTH_BENEFITS, MAGMIST_BENEFITS, PILLARS, SCADE_REASONS, studio};
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn AboutPage() -> impl IntoView {
    let tagline = format!("\u{201c}{}\u{201d}", studio::TAGLINE);

    view! {
        <Title text="About | SCADE Studio"/>
        <div class="about-page">
            <header class="page-hero">
                <h1>"About " <span class="accent">"SCADE store-Studio"</span></h1>
                <p>
                    "Founded in " <strong>"2025"</strong> " in " <strong>"Mysore, Karnataka"</strong>
                    ", we are more than a company \u{2014} we are a movement toward healthier, sustainable living."
                </p>
                <div class="hero-badge">{tagline.clone()}</div>
            </header>

            <section>
                <h2>"Built on " <span class="accent">"Three Enduring Pillars"</span></h2>
                <div class="card-grid">
                    {PILLARS.iter().map(|pillar| view! {
                        <div class="card">
                            <h3>{pillar.title}</h3>
                            <p>{pillar.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="highlight">
                <h2>"Magmist \u{2013} The Future of Hydration"</h2>
                <p>
                    "SCADE\u{2019}s flagship creation \u{2014} an advanced "
                    <strong>"Atmospheric Water Generator (AWG)"</strong>
                    " that produces clean, natural, and " <strong>"alkaline water"</strong>
                    " directly from the air around you."
                </p>
                <p>
                    "Using next-generation condensation technology, Magmist captures moisture, purifies it through "
                    "a multi-stage filtration system, and enriches it with essential minerals \u{2014} providing water that is "
                    <strong>"pure, healthy, and perfectly balanced"</strong> "."
                </p>
            </section>

            <section>
                <h2>"Why " <span class="accent">"Magmist"</span> " is a Game-Changer"</h2>
                <div class="benefit-grid">
                    {MAGMIST_BENEFITS.iter().map(|benefit| view! {
                        <div class="benefit"><p>{*benefit}</p></div>
                    }).collect_view()}
                </div>
            </section>

            <section>
                <h2>"Health Benefits of " <span class="accent">"Magmist Alkaline Water"</span></h2>
                <div class="card-grid">
                    {HEALTH_BENEFITS.iter().map(|benefit| view! {
                        <div class="card">
                            <h4>{benefit.title}</h4>
                            <p>{benefit.description}</p>
                        </div>
                    }).collect_view()}
                </div>
                <p class="section-footnote">
                    "Every drop of Magmist water is a fusion of science and nature \u{2014} "
                    <strong>"clean, pure, and revitalizing"</strong> "."
                </p>
            </section>

            <section>
                <h2>"Why Choose " <span class="accent">"SCADE?"</span></h2>
                <div class="card-grid">
                    {SCADE_REASONS.iter().map(|reason| view! {
                        <div class="card">
                            <h3>{reason.title}</h3>
                            <p>{reason.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="made-in-india">
                <h3>
                    "Made in " <span class="accent">"India"</span>
                    ", Built for the " <span class="accent">"World"</span>
                </h3>
                <p>
                    "Engineered with pride in " <strong>"Mysore"</strong>
                    ", Magmist combines global innovation with Indian ingenuity \u{2014} delivering sustainable "
                    "hydration solutions to homes, offices, and communities worldwide."
                </p>
            </section>

            <section class="mission-vision">
                <div class="card">
                    <h3>"Our Mission"</h3>
                    <p>
                        "To deliver " <strong>"innovative, sustainable, and scientifically proven"</strong>
                        " technologies that enhance daily health while preserving the planet\u{2019}s natural balance."
                    </p>
                </div>
                <div class="card">
                    <h3>"Our Vision"</h3>
                    <p>
                        "To become a " <strong>"global leader in health-focused technology"</strong>
                        ", empowering communities with reliable, life-enhancing solutions."
                    </p>
                </div>
            </section>

            <section class="highlight">
                <h2>"Our Philosophy"</h2>
                <p>
                    "Born from " <strong>"unity, care, and responsibility"</strong> ", SCADE was founded by "
                    <strong>"two visionary families"</strong> " \u{2014} one rooted in " <strong>"healthcare"</strong>
                    ", the other in " <strong>"engineering"</strong> "."
                </p>
                <p>
                    "Our flagship product, " <strong>"Magmist"</strong> ", transforms air into "
                    <strong>"pure, alkaline, mineral-rich water"</strong>
                    " \u{2014} solving one of humanity\u{2019}s greatest challenges: "
                    <em>"access to truly healthy hydration"</em> "."
                </p>
            </section>

            <p class="final-tagline">{tagline}</p>
        </div>
    }
}
