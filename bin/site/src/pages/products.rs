//! Products page with the photo gallery lightbox.

use crate::content::{
    DEMO_VIDEO, GALLERY, PRODUCT_FEATURES, autoplay_video, prefill, studio_whatsapp,
};
use crate::gallery::{Gallery, GalleryCommand};
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let gallery = RwSignal::new(Gallery::new(GALLERY.len()));

    view! {
        <Title text="Magmist | SCADE Studio"/>
        <div class="products-page">
            <header class="page-hero">
                <h1>"Magmist \u{2014} " <span class="accent">"Hydration Reborn"</span></h1>
                <p>"SCADE's Flagship " <strong>"Atmospheric Water Generator"</strong></p>
                <div class="hero-badge">"Revolutionizing Access to Pure Water"</div>
            </header>

            <section class="product-intro">
                <div class="product-video">
                    <div class="video-frame" inner_html=autoplay_video(DEMO_VIDEO, Some(GALLERY[0].src))></div>
                    <p class="video-caption">"Magmist in Action"</p>
                </div>
                <div>
                    <h2>"Pure Water. From Thin Air."</h2>
                    <p>
                        "Magmist doesn't just " <em>"filter"</em> " water \u{2014} it " <strong>"creates"</strong>
                        " it. Using advanced condensation and multi-stage purification, it delivers "
                        <strong>"alkaline, mineral-rich water"</strong>
                        " with zero waste, zero plastic, and zero dependency on external sources."
                    </p>
                    <blockquote>
                        "\"Tackles one of humanity's greatest challenges \u{2014} access to truly healthy drinking water.\""
                    </blockquote>
                </div>
            </section>

            <section class="gallery">
                <h2>"Discover " <span class="accent">"Magmist"</span> " Up Close"</h2>
                <div class="gallery-grid">
                    {GALLERY.iter().enumerate().map(|(index, image)| view! {
                        <button
                            class="gallery-item"
                            on:click=move |_| gallery.update(|g| g.open_at(index))
                        >
                            <img src=image.src alt=image.alt loading="lazy"/>
                            <span class="gallery-caption">{image.alt}</span>
                        </button>
                    }).collect_view()}
                </div>
                <Show when=move || gallery.with(Gallery::is_open)>
                    <Lightbox gallery=gallery/>
                </Show>
            </section>

            <section>
                <h2>"Why Magmist Stands " <span class="accent">"Above"</span></h2>
                <div class="card-grid">
                    {PRODUCT_FEATURES.iter().map(|feature| view! {
                        <div class="card">
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <div class="final-cta">
                <h3>"Ready to Drink the Future?"</h3>
                <a
                    href=studio_whatsapp(prefill::GET_MAGMIST)
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-button whatsapp"
                >
                    "Get Magmist"
                </a>
            </div>
        </div>
    }
}

/// Full-screen viewer. Arrow keys page through photos, Escape closes.
#[component]
fn Lightbox(gallery: RwSignal<Gallery>) -> impl IntoView {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if let Some(command) = GalleryCommand::from_key(&ev.key()) {
            gallery.update(|g| g.apply(command));
        }
    });
    on_cleanup(move || handle.remove());

    let current = move || GALLERY[gallery.with(Gallery::index)];

    view! {
        <div class="lightbox" on:click=move |_| gallery.update(Gallery::close)>
            <button class="lightbox-close" aria-label="Close">"\u{2715}"</button>
            <button
                class="lightbox-prev"
                aria-label="Previous"
                on:click=move |ev| {
                    ev.stop_propagation();
                    gallery.update(Gallery::prev);
                }
            >
                "\u{2039}"
            </button>
            <button
                class="lightbox-next"
                aria-label="Next"
                on:click=move |ev| {
                    ev.stop_propagation();
                    gallery.update(Gallery::next);
                }
            >
                "\u{203a}"
            </button>
            <img
                class="lightbox-image"
                src=move || current().src
                alt=move || current().alt
                on:click=|ev| ev.stop_propagation()
            />
            <div class="lightbox-thumbnails">
                {GALLERY.iter().enumerate().map(|(index, image)| view! {
                    <button
                        class=move || {
                            if gallery.with(Gallery::index) == index { "thumb active" } else { "thumb" }
                        }
                        on:click=move |ev| {
                            ev.stop_propagation();
                            gallery.update(|g| g.open_at(index));
                        }
                    >
                        <img src=image.src alt=""/>
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}
