//! Embedded 3D scene, treated as an opaque capability.
//!
//! The scene is an asynchronously-loading vendor asset addressed by URL.
//! If it fails to load the region simply stays empty; nothing here reports
//! an error.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;

/// Hero scene asset.
pub const HERO_SCENE_URL: &str = "https://prod.spline.design/VJLoxp84lCdVfdZu/scene.splinecode";

/// Handle to a mounted scene element.
pub struct SceneHandle {
    element: web_sys::Element,
}

impl SceneHandle {
    /// Detach the scene from the document.
    pub fn unload(self) {
        self.element.remove();
    }
}

/// Mount the vendor viewer element under `mount`, pointed at `url`.
///
/// Returns `None` when the document is unavailable or element creation
/// fails; the caller's region is left empty either way.
pub fn load_scene(mount: &web_sys::Element, url: &str) -> Option<SceneHandle> {
    let document = web_sys::window()?.document()?;
    let element = document.create_element("spline-viewer").ok()?;
    element.set_attribute("url", url).ok()?;
    mount.append_child(&element).ok()?;
    Some(SceneHandle { element })
}

/// A region of the page filled by the 3D scene.
#[component]
pub fn SceneEmbed(#[prop(default = HERO_SCENE_URL)] url: &'static str) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let handle: Rc<RefCell<Option<SceneHandle>>> = Rc::new(RefCell::new(None));

    let handle_in_effect = Rc::clone(&handle);
    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };
        let mut slot = handle_in_effect.borrow_mut();
        if slot.is_none() {
            *slot = load_scene(&el, url);
        }
    });

    let handle = send_wrapper::SendWrapper::new(handle);
    on_cleanup(move || {
        if let Some(scene) = handle.borrow_mut().take() {
            scene.unload();
        }
    });

    view! { <div node_ref=node class="scene-embed" aria-hidden="true"></div> }
}
