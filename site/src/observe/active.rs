//! Active-section tracking for the navigation bar.
//!
//! Two inputs feed the tracker: an IntersectionObserver batch per observed
//! section and a scroll-position fallback. Both funnel through the pure
//! `ActiveTracker`, which owns the transition rules; the surrounding RAII
//! types (`SectionObserver`, `ScrollListener`) own the browser
//! subscriptions and their teardown.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{
    ACTIVE_RATIO_THRESHOLD, NAV_SCROLL_OFFSET_PX, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLDS,
};

/// One section's report from an observation batch.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionSignal {
    pub id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

/// Layout bounds of a section, as read from the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Decision core: which section is "current".
///
/// The value is advisory (nav highlighting), so the two update paths race
/// freely and the last writer wins. Ties inside one intersection batch are
/// resolved deterministically: entries are evaluated in section order and
/// the last qualifying section keeps the slot.
#[derive(Clone, Debug)]
pub struct ActiveTracker {
    order: Vec<String>,
    active: String,
}

impl ActiveTracker {
    pub fn new(order: Vec<String>) -> Self {
        let active = order.first().cloned().unwrap_or_else(|| "hero".to_string());
        Self { order, active }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Swap the observed section set, keeping the current selection.
    pub fn set_order(&mut self, order: Vec<String>) {
        self.order = order;
    }

    /// Intersection path: any section past the ratio threshold claims the
    /// slot; the last one in section order wins. Returns true on change.
    pub fn apply_intersections(&mut self, batch: &[IntersectionSignal]) -> bool {
        let mut claimed = None;
        for id in &self.order {
            let Some(signal) = batch.iter().find(|s| &s.id == id) else {
                continue;
            };
            if signal.intersecting && signal.ratio > ACTIVE_RATIO_THRESHOLD {
                claimed = Some(id.clone());
            }
        }
        match claimed {
            Some(id) if id != self.active => {
                self.active = id;
                true
            }
            _ => false,
        }
    }

    /// Scroll fallback: the last section whose `[top, top + height)` bounds
    /// contain the offset (plus the navbar compensation) becomes active.
    pub fn apply_scroll(&mut self, bounds: &[SectionBounds], scroll_offset: f64) -> bool {
        let position = scroll_offset + NAV_SCROLL_OFFSET_PX;
        let mut claimed = None;
        for section in bounds {
            if position >= section.top && position < section.top + section.height {
                claimed = Some(section.id.clone());
            }
        }
        match claimed {
            Some(id) if id != self.active => {
                self.active = id;
                true
            }
            _ => false,
        }
    }

    /// Explicit navigation override. Callers re-assert after a settle delay
    /// so the automatic paths cannot flicker the highlight mid-scroll.
    pub fn jump(&mut self, id: &str) -> bool {
        if self.active == id {
            return false;
        }
        self.active = id.to_string();
        true
    }
}

/// Owns an IntersectionObserver over the section elements plus its JS
/// callback. Disconnecting releases every observation; doing it twice is
/// safe, and dropping the value disconnects as well.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    pub fn install(
        section_ids: &[String],
        on_batch: impl Fn(Vec<IntersectionSignal>) + 'static,
    ) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<IntersectionSignal> = entries
                    .iter()
                    .map(|entry| {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        IntersectionSignal {
                            id: entry.target().id(),
                            ratio: entry.intersection_ratio(),
                            intersecting: entry.is_intersecting(),
                        }
                    })
                    .collect();
                on_batch(batch);
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(OBSERVER_ROOT_MARGIN);
        let thresholds = js_sys::Array::new();
        for step in OBSERVER_THRESHOLDS {
            thresholds.push(&JsValue::from_f64(step));
        }
        init.set_threshold(&thresholds.into());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for id in section_ids {
            if let Some(element) = document.get_element_by_id(id) {
                observer.observe(&element);
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Passive window scroll subscription with idempotent teardown.
pub struct ScrollListener {
    callback: Closure<dyn FnMut()>,
    attached: bool,
}

impl ScrollListener {
    pub fn attach(handler: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(Self {
            callback,
            attached: true,
        })
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Read live layout bounds for the given section ids. Sections that are not
/// mounted are skipped.
pub fn measure_sections(ids: &[String]) -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?;
            let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some(SectionBounds {
                id: id.clone(),
                top: element.offset_top() as f64,
                height: element.offset_height() as f64,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ActiveTracker {
        ActiveTracker::new(vec![
            "hero".into(),
            "about".into(),
            "skills".into(),
            "projects".into(),
            "experience".into(),
            "education".into(),
            "contact".into(),
        ])
    }

    fn signal(id: &str, ratio: f64, intersecting: bool) -> IntersectionSignal {
        IntersectionSignal {
            id: id.into(),
            ratio,
            intersecting,
        }
    }

    fn bounds(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.into(),
            top,
            height,
        }
    }

    #[test]
    fn starts_on_first_section() {
        assert_eq!(tracker().active(), "hero");
        assert_eq!(ActiveTracker::new(Vec::new()).active(), "hero");
    }

    #[test]
    fn intersection_past_threshold_wins() {
        let mut t = tracker();
        let changed = t.apply_intersections(&[
            signal("hero", 0.2, true),
            signal("skills", 0.6, true),
            signal("about", 0.4, true),
        ]);
        assert!(changed);
        assert_eq!(t.active(), "skills");
    }

    #[test]
    fn intersection_at_threshold_does_not_qualify() {
        let mut t = tracker();
        assert!(!t.apply_intersections(&[signal("about", 0.5, true)]));
        assert_eq!(t.active(), "hero");
    }

    #[test]
    fn non_intersecting_entries_never_qualify() {
        let mut t = tracker();
        assert!(!t.apply_intersections(&[signal("about", 0.9, false)]));
        assert_eq!(t.active(), "hero");
    }

    #[test]
    fn intersection_ties_resolve_to_last_in_section_order() {
        let mut t = tracker();
        // Batch order is scrambled on purpose; section order decides.
        t.apply_intersections(&[signal("projects", 0.8, true), signal("about", 0.7, true)]);
        assert_eq!(t.active(), "projects");
    }

    #[test]
    fn scroll_fallback_picks_containing_section() {
        let mut t = tracker();
        let layout = [
            bounds("hero", 0.0, 600.0),
            bounds("about", 600.0, 500.0),
            bounds("skills", 1100.0, 700.0),
        ];
        // 550 + 100 falls inside about's [600, 1100).
        assert!(t.apply_scroll(&layout, 550.0));
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn scroll_outside_all_bounds_changes_nothing() {
        let mut t = tracker();
        let layout = [bounds("hero", 0.0, 50.0)];
        assert!(!t.apply_scroll(&layout, 5000.0));
        assert_eq!(t.active(), "hero");
    }

    #[test]
    fn scroll_bound_end_is_exclusive() {
        let mut t = tracker();
        let layout = [bounds("hero", 0.0, 100.0), bounds("about", 100.0, 100.0)];
        // Position lands exactly on about's top edge.
        assert!(t.apply_scroll(&layout, 0.0));
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn jump_overrides_and_settle_reassert_holds() {
        let mut t = tracker();
        assert!(t.jump("contact"));
        assert_eq!(t.active(), "contact");

        // A scroll event fires while the smooth scroll is still animating.
        let layout = [bounds("hero", 0.0, 600.0), bounds("about", 600.0, 600.0)];
        t.apply_scroll(&layout, 0.0);
        assert_eq!(t.active(), "hero");

        // The delayed re-assert lands and pins the target again.
        t.jump("contact");
        assert_eq!(t.active(), "contact");
    }

    #[test]
    fn set_order_keeps_selection() {
        let mut t = tracker();
        t.jump("skills");
        t.set_order(vec!["hero".into(), "skills".into()]);
        assert_eq!(t.active(), "skills");
    }
}
