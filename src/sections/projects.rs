use leptos::prelude::*;

use crate::reveal::Reveal;

struct Project {
    title: &'static str,
    desc: &'static str,
    tags: &'static [&'static str],
    live: &'static str,
    source: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Neon Interface",
        desc: "Dashboard futuristik dengan animasi halus dan arsitektur komponen yang skalabel.",
        tags: &["React", "Tailwind", "Framer Motion"],
        live: "#",
        source: "#",
    },
    Project {
        title: "3D Product Viewer",
        desc: "Visualisasi produk real-time dengan interaksi 3D dan lighting sinematik.",
        tags: &["Three.js", "React Three Fiber"],
        live: "#",
        source: "#",
    },
    Project {
        title: "Portfolio Next",
        desc: "Situs portfolio Next.js dengan SEO kuat dan skor Lighthouse tinggi.",
        tags: &["Next.js", "SEO", "Vercel"],
        live: "#",
        source: "#",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="container">
                <Reveal>
                    <div class="section-header">
                        <h2 class="section-title">"Featured Projects"</h2>
                        <p class="section-copy">
                            "Beberapa karya terpilih dengan fokus pada performa, \
                             interaktivitas, dan pengalaman pengguna."
                        </p>
                    </div>
                </Reveal>
                <div class="project-grid">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, p)| {
                            view! {
                                <Reveal delay_ms={(i as u32) * 50}>
                                    <ProjectCard project=p />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="project-preview" aria-hidden="true"></div>
            <h3 class="project-title">{project.title}</h3>
            <p class="project-desc">{project.desc}</p>
            <div class="project-tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="project-tag">{*tag}</span> })
                    .collect_view()}
            </div>
            <div class="project-links">
                <a href=project.live class="project-link accent">"Live Demo ↗"</a>
                <a href=project.source class="project-link">"Source Code"</a>
            </div>
        </article>
    }
}
