// Zayn — personal portfolio, Leptos CSR edition

mod registry;
mod reveal;
mod scene;
mod scroll;
mod sections;

use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    console_greeting();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <About />
            <TechStack />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
}

/// A small hello for anyone who opens the console.
fn console_greeting() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!(
            "%c{OWNER} — portfolio built with Rust + Leptos. Say hi via the contact form."
        )),
        &JsValue::from_str("color: #38BDF8; font-family: monospace;"),
    );
}
