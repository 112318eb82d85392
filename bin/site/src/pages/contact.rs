//! Contact page and enquiry form.

use crate::contact::{ContactForm, FieldErrors, SUBMIT_DELAY};
use crate::content::{prefill, studio, studio_whatsapp};
use crate::error::ContactFieldError;
use crate::timer::BrowserSleeper;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use magmist_conversation::Sleeper;

/// A reachable channel shown beside the form.
struct Channel {
    title: &'static str,
    content: &'static str,
    href: String,
    note: &'static str,
}

fn channels() -> [Channel; 3] {
    [
        Channel {
            title: "Email Us",
            content: studio::EMAIL,
            href: format!("mailto:{}", studio::EMAIL),
            note: "Response within 24 hours",
        },
        Channel {
            title: "Call Us",
            content: studio::PHONE_DISPLAY,
            href: studio::PHONE_TEL.to_string(),
            note: studio::HOURS,
        },
        Channel {
            title: "Visit Us",
            content: "SCADE Studio, Mysore, Karnataka, India",
            href: studio::MAPS_URL.to_string(),
            note: "By appointment only",
        },
    ]
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact | SCADE Studio"/>
        <div class="contact-page">
            <header class="page-hero">
                <h1>"Let\u{2019}s " <span class="accent">"Connect"</span></h1>
                <p>"Inquiries, partnerships, or just want to say hi? We\u{2019}re here."</p>
                <a
                    href=studio_whatsapp(prefill::START_CONVERSATION)
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-button whatsapp"
                >
                    "Start a Conversation"
                </a>
            </header>

            <section class="studio-info">
                <h2>"Contact Us \u{2013} SCADE Store-Studio"</h2>
                <div class="info-grid">
                    <div>
                        <p class="info-label">"Address"</p>
                        <p>{studio::NAME} <br/> {studio::CITY}</p>
                    </div>
                    <div>
                        <p class="info-label">"Email"</p>
                        <a href=format!("mailto:{}", studio::EMAIL)>{studio::EMAIL}</a>
                    </div>
                    <div>
                        <p class="info-label">"Phone"</p>
                        <a href=studio::PHONE_TEL>{studio::PHONE_DISPLAY}</a>
                    </div>
                    <div>
                        <p class="info-label">"Social Media"</p>
                        <p class="muted">"Coming Soon"</p>
                    </div>
                </div>
                <p>
                    "We\u{2019}d love to hear from you! Reach out for product inquiries, collaborations, or dealership opportunities."
                    <br/>
                    <strong>"Together, let\u{2019}s create a world where every drop supports better living."</strong>
                </p>
            </section>

            <div class="contact-layout">
                <div class="channels">
                    {channels().into_iter().map(|channel| {
                        let external = channel.href.starts_with("http");
                        view! {
                            <a
                                class="channel"
                                href=channel.href
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                            >
                                <h3>{channel.title}</h3>
                                <p>{channel.content}</p>
                                <p class="muted">{channel.note}</p>
                            </a>
                        }
                    }).collect_view()}
                </div>
                <ContactFormPanel/>
            </div>

            <div class="map-frame">
                <iframe
                    src=studio::MAP_EMBED_URL
                    width="100%"
                    height="500"
                    {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                    referrerpolicy="no-referrer-when-downgrade"
                    title="SCADE Studio Location - Mysore, Karnataka"
                ></iframe>
            </div>

            <div class="final-cta">
                <h3>"Ready to Partner with Us?"</h3>
                <p>"Join dealerships, distributors, or collaborate on innovation."</p>
                <a
                    href=studio_whatsapp(prefill::BECOME_PARTNER)
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-button whatsapp"
                >
                    "Become a Partner"
                </a>
            </div>
        </div>
    }
}

fn field_error(error: Option<ContactFieldError>) -> impl IntoView {
    error.map(|error| view! { <p class="field-error">{error.to_string()}</p> })
}

/// The enquiry form and its thank-you panel.
#[component]
fn ContactFormPanel() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match form.validate() {
            Ok(submission) => {
                set_errors.set(FieldErrors::default());
                set_submitting.set(true);
                spawn_local(async move {
                    BrowserSleeper.sleep(SUBMIT_DELAY).await;
                    tracing::info!(
                        name = %submission.name,
                        email = %submission.email,
                        message_len = submission.message.len(),
                        "Contact form submitted"
                    );
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                    set_submitting.set(false);
                    set_submitted.set(true);
                });
            }
            Err(field_errors) => set_errors.set(field_errors),
        }
    };

    view! {
        <div class="contact-form">
            <h2>"Send a Message"</h2>
            <Show
                when=move || submitted.get()
                fallback=move || view! {
                    <form on:submit=on_submit novalidate=true>
                        <div>
                            <input
                                type="text"
                                placeholder="Your Full Name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            {move || field_error(errors.get().name)}
                        </div>
                        <div>
                            <input
                                type="email"
                                placeholder="your@email.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            {move || field_error(errors.get().email)}
                        </div>
                        <div>
                            <textarea
                                rows="5"
                                placeholder="How can we help you today?"
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                            {move || field_error(errors.get().message)}
                        </div>
                        <button type="submit" class="cta-button" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                }
            >
                <div class="thank-you">
                    <h3>"Thank You!"</h3>
                    <p>"We\u{2019}ve received your message and will reply within 24 hours."</p>
                </div>
            </Show>
        </div>
    }
}
