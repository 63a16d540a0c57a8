use leptos::prelude::*;

use crate::registry::SectionId;
use crate::reveal::Reveal;
use crate::scroll::navigate_to;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container about-grid">
                <Reveal class="reveal-from-left" threshold=0.3>
                    <h2 class="section-title">"About Me"</h2>
                    <p class="section-copy">
                        "Saya adalah developer front-end yang fokus pada performa, SEO, dan \
                         pengembangan web 3D interaktif. Saya membuat pengalaman web modern \
                         dengan React, Next.js, dan Three.js."
                    </p>
                    <div class="social-row">
                        <a href="https://github.com" target="_blank" rel="noreferrer" class="social-link">
                            "GitHub"
                        </a>
                        <a href="https://linkedin.com" target="_blank" rel="noreferrer" class="social-link">
                            "LinkedIn"
                        </a>
                        <button class="social-link" on:click=move |_| navigate_to(SectionId::Contact)>
                            "Email"
                        </button>
                    </div>
                </Reveal>

                <Reveal class="reveal-from-right" threshold=0.3>
                    <div class="about-panel">
                        <div class="about-panel-tile">
                            <span class="about-panel-glyph">"</>"</span>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
