//! Navigation bar: section links with active highlighting, theme toggle,
//! mobile drawer.
//!
//! Active-section tracking runs on two racing inputs, an
//! IntersectionObserver and a scroll-position fallback, both funneled
//! through the pure `ActiveTracker`. Subscriptions are torn down and
//! rebuilt whenever the tracked section set changes.

use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::SectionLink;
use crate::config::{SETTLE_DELAY_MS, SITE_INITIALS, SITE_OWNER};
use crate::observe::{
    measure_sections, scroll_to_section, ActiveTracker, ScrollListener, SectionObserver,
};
use crate::theme::{self, Theme};

#[component]
pub fn Navbar(sections: ReadSignal<Vec<SectionLink>>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (theme, set_theme) = signal(theme::load());
    let (active_section, set_active_section) = signal(String::from("hero"));

    let tracker = StoredValue::new(ActiveTracker::new(Vec::new()));
    let observer_slot = StoredValue::new_local(None::<SectionObserver>);
    let listener_slot = StoredValue::new_local(None::<ScrollListener>);
    let ticking = Rc::new(Cell::new(false));

    Effect::new(move || theme::apply(theme.get()));

    // Observer lifecycle: fully dispose the previous observer before a new
    // one is installed, and again on unmount.
    Effect::new(move || {
        let sections = sections.get();
        observer_slot.update_value(|slot| {
            if let Some(old) = slot.take() {
                old.disconnect();
            }
        });
        if sections.is_empty() {
            return;
        }

        let order: Vec<String> = sections.iter().map(|s| s.id.to_string()).collect();
        tracker.update_value(|t| t.set_order(order.clone()));

        let on_batch = move |batch: Vec<_>| {
            let changed = tracker
                .try_update_value(|t| t.apply_intersections(&batch))
                .unwrap_or(false);
            if changed {
                if let Some(id) = tracker.try_with_value(|t| t.active().to_string()) {
                    set_active_section.try_set(id);
                }
            }
        };
        match SectionObserver::install(&order, on_batch) {
            Ok(observer) => observer_slot.set_value(Some(observer)),
            Err(err) => web_sys::console::warn_1(&err),
        }
    });

    // Scroll fallback, throttled through requestAnimationFrame: at most one
    // recomputation per frame no matter how often the event fires.
    Effect::new({
        let ticking = ticking.clone();
        move || {
            let sections = sections.get();
            listener_slot.update_value(|slot| {
                if let Some(mut old) = slot.take() {
                    old.detach();
                }
            });
            if sections.is_empty() {
                return;
            }

            let order: Vec<String> = sections.iter().map(|s| s.id.to_string()).collect();
            let ticking = ticking.clone();
            let listener = ScrollListener::attach(move || {
                if ticking.get() {
                    return;
                }
                ticking.set(true);
                let ticking = ticking.clone();
                let order = order.clone();
                let frame = Closure::once_into_js(move || {
                    ticking.set(false);
                    let offset = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    let bounds = measure_sections(&order);
                    let changed = tracker
                        .try_update_value(|t| t.apply_scroll(&bounds, offset))
                        .unwrap_or(false);
                    if changed {
                        if let Some(id) = tracker.try_with_value(|t| t.active().to_string()) {
                            set_active_section.try_set(id);
                        }
                    }
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.request_animation_frame(frame.unchecked_ref());
                }
            });
            listener_slot.set_value(listener);
        }
    });

    on_cleanup(move || {
        // Idempotent teardown: the slots may already be empty.
        observer_slot.update_value(|slot| {
            if let Some(observer) = slot.take() {
                observer.disconnect();
            }
        });
        listener_slot.update_value(|slot| {
            if let Some(mut listener) = slot.take() {
                listener.detach();
            }
        });
    });

    // Explicit navigation: pin the target immediately, then re-assert it
    // after the settle delay so a mid-animation scroll event cannot steal
    // the highlight.
    let jump_to = move |id: &'static str| {
        tracker.try_update_value(|t| {
            t.jump(id);
        });
        set_active_section.try_set(id.to_string());
        scroll_to_section(id);
        set_menu_open.try_set(false);
        set_timeout(
            move || {
                tracker.try_update_value(|t| {
                    t.jump(id);
                });
                set_active_section.try_set(id.to_string());
            },
            Duration::from_millis(SETTLE_DELAY_MS),
        );
    };

    let toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        set_theme.set(next);
        theme::store(next);
    };

    view! {
        <nav class="navbar">
            <div class="navbar-container container">
                <div class="navbar-logo" on:click=move |_| jump_to("hero")>
                    <span class="logo-text">{SITE_INITIALS}</span>
                    <span class="logo-name">{SITE_OWNER}</span>
                </div>

                <div class=move || {
                    if menu_open.get() { "navbar-links active" } else { "navbar-links" }
                }>
                    {move || {
                        sections
                            .get()
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=format!("#{}", section.id)
                                        class=move || {
                                            if active_section.get() == section.id {
                                                "nav-link active"
                                            } else {
                                                "nav-link"
                                            }
                                        }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            jump_to(section.id);
                                        }
                                    >
                                        {section.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="navbar-actions">
                    <button
                        class="theme-toggle"
                        aria-label="Toggle theme"
                        on:click=toggle_theme
                    >
                        {move || if theme.get() == Theme::Dark { "\u{2600}" } else { "\u{263e}" }}
                    </button>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
