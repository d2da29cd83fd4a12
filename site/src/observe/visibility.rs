//! One-shot visibility reveal, used to gate fade-in animations.

use leptos::html::Div;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::REVEAL_THRESHOLD;

/// Latch semantics: once an element has been seen, it stays seen for the
/// element's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub(crate) fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting {
            self.visible = true;
        }
        self.visible
    }

    pub(crate) fn visible(self) -> bool {
        self.visible
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns a node ref to attach to the fade-in container and a signal that
/// latches true the first time the element enters the viewport. Safe to call
/// before the element exists; observation starts at mount.
pub fn use_reveal() -> (NodeRef<Div>, ReadSignal<bool>) {
    let node_ref: NodeRef<Div> = NodeRef::new();
    let (visible, set_visible) = signal(false);
    let observer_slot = StoredValue::new_local(None::<RevealObserver>);

    Effect::new(move || {
        let Some(element) = node_ref.get() else {
            return;
        };
        if observer_slot.with_value(|slot| slot.is_some()) {
            return;
        }

        let latch = Rc::new(RefCell::new(RevealLatch::default()));
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut latch = latch.borrow_mut();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    latch.observe(entry.is_intersecting());
                }
                if latch.visible() {
                    set_visible.try_set(true);
                    // Fired once; nothing left to watch.
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        let thresholds = js_sys::Array::new();
        thresholds.push(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_threshold(&thresholds.into());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                observer_slot.set_value(Some(RevealObserver {
                    observer,
                    _callback: callback,
                }));
            }
            Err(err) => {
                web_sys::console::warn_1(&err);
            }
        }
    });

    on_cleanup(move || {
        observer_slot.update_value(|slot| {
            slot.take();
        });
    });

    (node_ref, visible)
}

/// Class helper for the fade-in container.
pub(crate) fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} fade-in visible")
    } else {
        format!("{base} fade-in")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
    }

    #[test]
    fn latch_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true));
        // Element scrolls back out of the viewport.
        assert!(latch.observe(false));
        assert!(latch.visible());
    }

    #[test]
    fn reveal_class_gates_visible_marker() {
        assert_eq!(reveal_class("hero-content", false), "hero-content fade-in");
        assert_eq!(
            reveal_class("hero-content", true),
            "hero-content fade-in visible"
        );
    }
}
