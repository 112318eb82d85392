//! Team page.

use crate::content::{TEAM, TeamMember};
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <Title text="Team | SCADE Studio"/>
        <div class="team-page">
            <header class="page-hero">
                <h1>"Meet the " <span class="accent">"Family Behind SCADE"</span></h1>
                <p>
                    "Two families. One vision. Healthcare meets engineering \u{2014} driven by "
                    <strong>"care, science, and responsibility"</strong> "."
                </p>
                <div class="hero-badge">"United for Healthier Tomorrows"</div>
            </header>

            <section class="team-grid">
                {TEAM.iter().map(|member| view! { <TeamCard member=*member/> }).collect_view()}
            </section>

            <div class="final-cta">
                <h3>"We Are More Than a Team"</h3>
                <p>
                    "We are " <strong>"families united by purpose"</strong>
                    " \u{2014} building technology that doesn\u{2019}t just work, but " <em>"cares"</em> "."
                </p>
                <div class="hero-badge">"Health. Innovation. Trust."</div>
            </div>
        </div>
    }
}

/// One member card. The personal story expands per card.
#[component]
fn TeamCard(member: TeamMember) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    view! {
        <article class="team-card">
            <div class="team-card-header">
                <h3>{member.name}</h3>
                <p class="team-title">{member.title}</p>
                <p class="team-role">{member.role}</p>
            </div>
            <div class="team-section">
                <p class="team-label">"Background"</p>
                <p>{member.background}</p>
            </div>
            <div class="team-section">
                <p class="team-label">"Contribution"</p>
                <p>{member.contribution}</p>
            </div>
            <div class="team-bio">
                <button
                    class="team-bio-toggle"
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| set_expanded.update(|open| *open = !*open)
                >
                    "Personal Story"
                    <span class=move || if expanded.get() { "chevron open" } else { "chevron" }>"\u{25be}"</span>
                </button>
                <Show when=move || expanded.get()>
                    <p class="team-bio-text">{member.bio}</p>
                </Show>
            </div>
            <blockquote class="team-quote">{member.quote}</blockquote>
        </article>
    }
}
