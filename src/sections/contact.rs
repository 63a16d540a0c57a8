use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::reveal::Reveal;

/// The three required fields, as currently typed.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// All three fields carry non-blank text.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// The form's only two states. Submitted is reached exactly when a
/// complete draft is submitted; editing any field returns to Unsubmitted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormPhase {
    Unsubmitted,
    Submitted,
}

/// Phase transition for a submit attempt. An incomplete draft leaves the
/// phase untouched.
pub fn submit(phase: FormPhase, draft: &ContactDraft) -> FormPhase {
    if draft.is_complete() {
        FormPhase::Submitted
    } else {
        phase
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (phase, set_phase) = signal(FormPhase::Unsubmitted);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ContactDraft {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };
        if submit(phase.get(), &draft) == FormPhase::Submitted {
            set_phase.set(FormPhase::Submitted);
            set_name.set(String::new());
            set_email.set(String::new());
            set_message.set(String::new());
        }
    };

    view! {
        <section id="contact" class="section section-tinted">
            <div class="container">
                <Reveal>
                    <div class="section-header">
                        <h2 class="section-title">"Let’s Work Together"</h2>
                        <p class="section-copy">
                            "Punya ide menarik? Kirim pesan dan mari diskusikan project Anda."
                        </p>
                    </div>
                </Reveal>

                <div class="contact-grid">
                    <Reveal>
                        <form class="contact-form" on:submit=on_submit>
                            <div class="form-row">
                                <label class="form-field">
                                    <span class="form-label">"Name"</span>
                                    <input
                                        type="text"
                                        required
                                        placeholder="Your name"
                                        prop:value=name
                                        on:input:target=move |ev| {
                                            set_name.set(ev.target().value());
                                            set_phase.set(FormPhase::Unsubmitted);
                                        }
                                    />
                                </label>
                                <label class="form-field">
                                    <span class="form-label">"Email"</span>
                                    <input
                                        type="email"
                                        required
                                        placeholder="you@example.com"
                                        prop:value=email
                                        on:input:target=move |ev| {
                                            set_email.set(ev.target().value());
                                            set_phase.set(FormPhase::Unsubmitted);
                                        }
                                    />
                                </label>
                            </div>
                            <label class="form-field">
                                <span class="form-label">"Message"</span>
                                <textarea
                                    required
                                    rows="5"
                                    placeholder="Tell me about your project..."
                                    prop:value=message
                                    on:input:target=move |ev| {
                                        set_message.set(ev.target().value());
                                        set_phase.set(FormPhase::Unsubmitted);
                                    }
                                ></textarea>
                            </label>

                            <Show when=move || phase.get() == FormPhase::Submitted>
                                <p class="form-ack">"Thanks! I will get back to you."</p>
                            </Show>

                            <div class="form-footer">
                                <div class="social-row">
                                    <a href="https://github.com" target="_blank" rel="noreferrer" class="social-link">
                                        "GitHub"
                                    </a>
                                    <a href="https://linkedin.com" target="_blank" rel="noreferrer" class="social-link">
                                        "LinkedIn"
                                    </a>
                                    <a href="mailto:hello@example.com" class="social-link">"Email"</a>
                                </div>
                                <button type="submit" class="btn btn-primary">"Send Message →"</button>
                            </div>
                        </form>
                    </Reveal>

                    <div class="contact-aside">
                        <Reveal class="reveal-from-right">
                            <div class="aside-card">
                                <h4 class="aside-title">"Availability"</h4>
                                <p class="aside-copy">"Open for freelance and remote opportunities."</p>
                            </div>
                        </Reveal>
                        <Reveal class="reveal-from-right" delay_ms=80>
                            <div class="aside-card">
                                <h4 class="aside-title">"Based In"</h4>
                                <p class="aside-copy">"Remote — GMT+7"</p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn complete_draft_submits() {
        let d = draft("Jane", "jane@x.com", "Hi");
        assert_eq!(submit(FormPhase::Unsubmitted, &d), FormPhase::Submitted);
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        for d in [
            draft("", "jane@x.com", "Hi"),
            draft("Jane", "", "Hi"),
            draft("Jane", "jane@x.com", ""),
            draft("", "", ""),
        ] {
            assert!(!d.is_complete());
            assert_eq!(submit(FormPhase::Unsubmitted, &d), FormPhase::Unsubmitted);
        }
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let d = draft("   ", "jane@x.com", "Hi");
        assert!(!d.is_complete());
    }

    #[test]
    fn failed_submit_preserves_current_phase() {
        let d = draft("Jane", "", "Hi");
        assert_eq!(submit(FormPhase::Submitted, &d), FormPhase::Submitted);
    }
}
