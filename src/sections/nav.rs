use leptos::prelude::*;

use super::OWNER;
use crate::registry::SectionId;
use crate::scroll::navigate_to;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <div class="nav-brand">
                    <span class="nav-brand-dot"></span>
                    <span class="nav-brand-name">{OWNER}</span>
                </div>
                <div class="nav-links">
                    {SectionId::NAV
                        .into_iter()
                        .map(|id| {
                            view! {
                                <button class="nav-link" on:click=move |_| navigate_to(id)>
                                    {id.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="btn btn-outline" on:click=move |_| navigate_to(SectionId::Projects)>
                    "View My Work →"
                </button>
            </div>
        </nav>
    }
}
