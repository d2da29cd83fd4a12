//! Viewport observation: fade-in reveal and active-section tracking.

mod active;
mod visibility;

pub use active::{
    measure_sections, ActiveTracker, IntersectionSignal, ScrollListener, SectionBounds,
    SectionObserver,
};
pub(crate) use visibility::reveal_class;
pub use visibility::use_reveal;

/// Smooth-scroll a section into view by element id. No-op when the element
/// is not mounted.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
