use leptos::prelude::*;

use super::OWNER;
use crate::registry::SectionId;
use crate::scene::SceneEmbed;
use crate::scroll::navigate_to;

/// Hero: full-height intro with the 3D scene behind the copy.
///
/// The entrance here runs on mount, not on viewport entry; the hero is the
/// one block that is already visible when the page loads.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero-glow hero-glow-top" aria-hidden="true"></div>
            <div class="hero-glow hero-glow-bottom" aria-hidden="true"></div>

            <div class="hero-scene">
                <SceneEmbed />
            </div>

            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title rise-in">{OWNER}</h1>
                    <p class="hero-subtitle rise-in delay-1">
                        "Web Developer — React, Next.js, Three.js"
                    </p>
                    <div class="hero-actions rise-in delay-2">
                        <button class="btn btn-primary" on:click=move |_| navigate_to(SectionId::Projects)>
                            "View My Work ↗"
                        </button>
                        <button class="btn btn-ghost" on:click=move |_| navigate_to(SectionId::Contact)>
                            "Contact Me ✉"
                        </button>
                    </div>
                    <div class="hero-badges">
                        <span class="hero-badge">"⚡ Performant"</span>
                        <span class="hero-badge">"🧊 3D Interactive"</span>
                        <span class="hero-badge">"🚀 SEO Ready"</span>
                    </div>
                </div>
                <div class="hero-spacer"></div>
            </div>

            <button
                class="hero-chevron"
                aria-label="Scroll to about section"
                on:click=move |_| navigate_to(SectionId::About)
            >
                <svg viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <polyline points="6 9 12 15 18 9"></polyline>
                </svg>
            </button>
        </section>
    }
}
