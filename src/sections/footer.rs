use leptos::prelude::*;

use super::OWNER;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copy">
                    {format!("© {year} {OWNER} — Built with Rust, Leptos, and a touch of 3D.")}
                </p>
            </div>
        </footer>
    }
}
