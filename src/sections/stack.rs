use leptos::prelude::*;

use crate::reveal::Reveal;

/// Icon + name per tool, rendered in page order.
const STACK: [(&str, &str); 10] = [
    ("📄", "HTML"),
    ("🎨", "CSS"),
    ("⚡", "JavaScript"),
    ("⚛️", "React.js"),
    ("⭐️", "Next.js"),
    ("🧊", "Three.js"),
    ("🌌", "R3F"),
    ("🪶", "Tailwind"),
    ("🔧", "Git"),
    ("🐙", "GitHub"),
];

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section id="stack" class="section section-tinted">
            <div class="container">
                <Reveal>
                    <div class="section-header">
                        <h2 class="section-title">"Tech Stack"</h2>
                        <p class="section-copy">
                            "Tools yang saya gunakan untuk membangun website yang cepat, \
                             modern, dan mudah di-maintain."
                        </p>
                    </div>
                </Reveal>
                <div class="stack-grid">
                    {STACK
                        .into_iter()
                        .enumerate()
                        .map(|(i, (icon, name))| {
                            view! {
                                <Reveal delay_ms={(i as u32) * 30}>
                                    <div class="stack-card">
                                        <span class="stack-icon">{icon}</span>
                                        <span class="stack-name">{name}</span>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
