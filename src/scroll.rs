//! Smooth scroll navigation between page sections.
//!
//! The target position is resolved fresh on every request; layout may have
//! shifted since the last one. A request whose anchor is missing from the
//! document is a silent no-op. Re-invoking while a previous glide is still
//! in flight simply retargets it; the browser arbitrates the motion.

use crate::registry::SectionId;

/// Scroll the viewport until `id`'s block aligns its top edge with the
/// viewport top, with gradual motion.
pub fn navigate_to(id: SectionId) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(target) = document.get_element_by_id(id.anchor()) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
