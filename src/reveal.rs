//! Viewport-triggered reveal of content blocks.
//!
//! A block starts hidden (offset + transparent) and settles into place when
//! enough of it crosses into the viewport. The threshold-crossing logic is
//! a plain state machine ([`RevealLatch`]) so the once/re-arm semantics are
//! testable without a browser; [`use_reveal`] binds that machine to an
//! `IntersectionObserver`, and [`Reveal`] wraps children in a block whose
//! CSS class tracks the state. The motion itself is a CSS transition.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;

/// Intersection fraction a block must reach before it reveals, unless the
/// caller asks for something else.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Visibility of a content block.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// Per-block reveal policy.
#[derive(Clone, Copy, Debug)]
pub struct RevealOptions {
    /// One-shot latch: after the first reveal, stop tracking entirely.
    pub once: bool,
    /// Fraction of the block's area that must intersect the viewport.
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            once: true,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Threshold-crossing state machine for one block.
///
/// Feed it intersection-fraction samples; it reports the transition each
/// sample causes, if any. With `once` set it detaches after the first
/// Hidden -> Visible transition and ignores everything afterwards.
#[derive(Debug)]
pub struct RevealLatch {
    once: bool,
    threshold: f64,
    state: RevealState,
    detached: bool,
}

impl RevealLatch {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            once: options.once,
            threshold: options.threshold.clamp(0.0, 1.0),
            state: RevealState::Hidden,
            detached: false,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// A detached latch will never change state again.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Observe one intersection-fraction sample. Returns the new state if
    /// this sample caused a transition.
    pub fn observe(&mut self, fraction: f64) -> Option<RevealState> {
        if self.detached {
            return None;
        }
        match self.state {
            RevealState::Hidden if fraction >= self.threshold => {
                self.state = RevealState::Visible;
                if self.once {
                    self.detached = true;
                }
                Some(RevealState::Visible)
            }
            RevealState::Visible if !self.once && fraction < self.threshold => {
                self.state = RevealState::Hidden;
                Some(RevealState::Hidden)
            }
            _ => None,
        }
    }
}

/// Attach a reveal trigger to a block.
///
/// Returns the node ref to put on the block and a signal carrying its
/// [`RevealState`]. The observer is created when the node mounts and torn
/// down when the owning component is removed; a `once` latch additionally
/// disconnects itself as soon as it fires.
pub fn use_reveal(options: RevealOptions) -> (NodeRef<Div>, ReadSignal<RevealState>) {
    let node = NodeRef::<Div>::new();
    let (state, set_state) = signal(RevealState::Hidden);
    let observer: Rc<RefCell<Option<web_sys::IntersectionObserver>>> =
        Rc::new(RefCell::new(None));

    let observer_in_effect = Rc::clone(&observer);
    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };
        if observer_in_effect.borrow().is_some() {
            return;
        }

        let latch = Rc::new(RefCell::new(RevealLatch::new(options)));
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, obs: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let mut latch = latch.borrow_mut();
                    if let Some(next) = latch.observe(entry.intersection_ratio()) {
                        set_state.set(next);
                    }
                    if latch.is_detached() {
                        obs.disconnect();
                    }
                }
            },
        ) as Box<dyn FnMut(_, _)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold.clamp(0.0, 1.0)));

        let Ok(obs) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) else {
            return;
        };
        obs.observe(&el);
        callback.forget();
        *observer_in_effect.borrow_mut() = Some(obs);
    });

    let observer = send_wrapper::SendWrapper::new(observer);
    on_cleanup(move || {
        if let Some(obs) = observer.borrow_mut().take() {
            obs.disconnect();
        }
    });

    (node, state)
}

/// Wrap children in a block that reveals on viewport entry.
///
/// The block renders as `div.reveal`, gains `is-visible` when its latch
/// fires, and hands the actual motion to the stylesheet. `class` selects a
/// directional entrance variant; `delay_ms` staggers items in a grid.
#[component]
pub fn Reveal(
    #[prop(default = true)] once: bool,
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[prop(default = "")] class: &'static str,
    #[prop(default = 0)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let (node, state) = use_reveal(RevealOptions { once, threshold });

    let class_list = move || {
        let mut list = String::from("reveal");
        if !class.is_empty() {
            list.push(' ');
            list.push_str(class);
        }
        if state.get() == RevealState::Visible {
            list.push_str(" is-visible");
        }
        list
    };

    view! {
        <div
            node_ref=node
            class=class_list
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn latch(once: bool, threshold: f64) -> RevealLatch {
        RevealLatch::new(RevealOptions { once, threshold })
    }

    #[test]
    fn starts_hidden() {
        let l = latch(true, 0.3);
        assert_eq!(l.state(), RevealState::Hidden);
        assert!(!l.is_detached());
    }

    #[test]
    fn one_shot_fires_exactly_once() {
        let mut l = latch(true, 0.3);
        assert_eq!(l.observe(0.1), None);
        assert_eq!(l.observe(0.35), Some(RevealState::Visible));
        assert!(l.is_detached());
        // Leaving and re-entering the viewport changes nothing.
        assert_eq!(l.observe(0.0), None);
        assert_eq!(l.observe(0.9), None);
        assert_eq!(l.state(), RevealState::Visible);
    }

    #[test]
    fn rearming_latch_alternates_on_each_crossing() {
        let mut l = latch(false, 0.5);
        assert_eq!(l.observe(0.6), Some(RevealState::Visible));
        assert_eq!(l.observe(0.4), Some(RevealState::Hidden));
        assert_eq!(l.observe(0.7), Some(RevealState::Visible));
        assert_eq!(l.observe(0.2), Some(RevealState::Hidden));
        assert!(!l.is_detached());
    }

    #[test]
    fn samples_on_the_same_side_do_not_refire() {
        let mut l = latch(false, 0.5);
        assert_eq!(l.observe(0.6), Some(RevealState::Visible));
        assert_eq!(l.observe(0.8), None);
        assert_eq!(l.observe(0.55), None);
        assert_eq!(l.observe(0.1), Some(RevealState::Hidden));
        assert_eq!(l.observe(0.05), None);
    }

    #[test]
    fn fraction_exactly_at_threshold_reveals() {
        let mut l = latch(true, 0.3);
        assert_eq!(l.observe(0.3), Some(RevealState::Visible));
    }

    #[test]
    fn zero_threshold_reveals_on_first_sample() {
        let mut l = latch(true, 0.0);
        assert_eq!(l.observe(0.0), Some(RevealState::Visible));
    }

    #[test]
    fn out_of_range_threshold_is_clamped() {
        let mut high = latch(true, 7.5);
        assert_eq!(high.observe(0.99), None);
        assert_eq!(high.observe(1.0), Some(RevealState::Visible));

        let mut low = latch(true, -3.0);
        assert_eq!(low.observe(0.0), Some(RevealState::Visible));
    }

    #[test]
    fn about_block_scenario() {
        // Page load: about block below the fold, then scrolled past 0.3.
        let mut l = latch(true, 0.3);
        let mut transitions = 0;
        for fraction in [0.0, 0.05, 0.2, 0.31, 0.6, 1.0, 0.4, 0.0] {
            if l.observe(fraction).is_some() {
                transitions += 1;
            }
        }
        assert_eq!(transitions, 1);
        assert_eq!(l.state(), RevealState::Visible);
    }
}
