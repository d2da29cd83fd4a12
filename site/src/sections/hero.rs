//! Hero section: profile headline, resume actions, themed background.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{log_error, ApiClient};
use crate::models::{Profile, Resume};
use crate::observe::{reveal_class, scroll_to_section, use_reveal};

#[component]
pub fn Hero() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let (profile, set_profile) = signal(None::<Profile>);
    let (resume, set_resume) = signal(None::<Resume>);
    let (loading, set_loading) = signal(true);
    let (bg_loaded, set_bg_loaded) = signal(false);
    let (avatar_failed, set_avatar_failed) = signal(false);
    let (reveal_ref, revealed) = use_reveal();

    // Profile and resume land together; either failing leaves its half
    // empty and the section degrades accordingly.
    Effect::new(move || {
        let api = api.clone();
        spawn_local(async move {
            let (profile_res, resume_res) = futures::future::join(
                api.get_json::<Profile>("/profile"),
                api.get_json::<Resume>("/resume"),
            )
            .await;
            match profile_res {
                Ok(payload) => {
                    set_profile.try_set(Some(payload));
                }
                Err(err) => log_error("error fetching /profile", &err),
            }
            match resume_res {
                Ok(payload) => {
                    set_resume.try_set(Some(payload));
                }
                Err(err) => log_error("error fetching /resume", &err),
            }
            set_loading.try_set(false);
        });
    });

    // Preload the hero background; the gradient fallback stays up until the
    // image has actually decoded, and keeps the slot on load failure.
    Effect::new(move || {
        let Some(url) = profile.get().and_then(|p| p.hero_image_url) else {
            return;
        };
        let Ok(image) = web_sys::HtmlImageElement::new() else {
            return;
        };
        let on_load = wasm_bindgen::closure::Closure::once_into_js(move || {
            set_bg_loaded.try_set(true);
        });
        let on_error = wasm_bindgen::closure::Closure::once_into_js(move || {
            set_bg_loaded.try_set(false);
        });
        image.set_onload(Some(on_load.unchecked_ref()));
        image.set_onerror(Some(on_error.unchecked_ref()));
        image.set_src(&url);
    });

    let hero_bg_url = move || profile.get().and_then(|p| p.hero_image_url);
    let resume_url = move || resume.get().and_then(|r| r.resume_pdf_url);

    let download_resume = move |_| {
        let Some(url) = resume.get_untracked().and_then(|r| r.resume_pdf_url) else {
            web_sys::console::error_1(&"no resume URL available".into());
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let file_name = url.rsplit('/').next().unwrap_or("resume.pdf").to_string();
        let Ok(element) = document.create_element("a") else {
            return;
        };
        let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
            return;
        };
        anchor.set_href(&url);
        anchor.set_download(&file_name);
        if let Some(body) = document.body() {
            let _ = body.append_child(&anchor);
            anchor.click();
            let _ = body.remove_child(&anchor);
        }
    };

    let view_resume = move |_| {
        if let Some(url) = resume.get_untracked().and_then(|r| r.resume_pdf_url) {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        }
    };

    view! {
        <Show when=move || !loading.get() && profile.get().is_some()>
            <section id="hero" class="hero">
                <Show when=move || hero_bg_url().is_some() && bg_loaded.get()>
                    <div class="hero-dynamic-background">
                        <div
                            class="hero-bg-image"
                            style=move || {
                                hero_bg_url()
                                    .map(|url| format!("background-image: url('{url}')"))
                                    .unwrap_or_default()
                            }
                        ></div>
                        <div class="hero-bg-overlay"></div>
                    </div>
                </Show>
                <Show when=move || hero_bg_url().is_none() || !bg_loaded.get()>
                    <div class="hero-gradient-background">
                        <div class="gradient-layer gradient-1"></div>
                        <div class="gradient-layer gradient-2"></div>
                        <div class="gradient-layer gradient-3"></div>
                    </div>
                </Show>

                <div class="container">
                    <div
                        node_ref=reveal_ref
                        class=move || reveal_class("hero-content", revealed.get())
                    >
                        <div class="hero-text">
                            <h1 class="hero-title">
                                <span class="hero-greeting">"Hello, I'm"</span>
                                <span class="gradient-text">
                                    {move || {
                                        profile
                                            .get()
                                            .map(|p| p.display_name().to_string())
                                            .unwrap_or_default()
                                    }}
                                </span>
                            </h1>
                            <h2 class="hero-subtitle">
                                {move || {
                                    profile
                                        .get()
                                        .map(|p| p.display_title().to_string())
                                        .unwrap_or_default()
                                }}
                            </h2>
                            <p class="hero-tagline">
                                {move || profile.get().and_then(|p| p.tagline).unwrap_or_default()}
                            </p>
                            <div class="hero-actions">
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| scroll_to_section("projects")
                                >
                                    "Explore Projects"
                                </button>
                                <Show when=move || resume_url().is_some()>
                                    <button class="btn btn-secondary" on:click=download_resume>
                                        "Download Resume"
                                    </button>
                                </Show>
                            </div>
                            <Show when=move || resume_url().is_some()>
                                <div class="resume-options">
                                    <button class="resume-view-link" on:click=view_resume>
                                        "View Resume Online \u{2197}"
                                    </button>
                                </div>
                            </Show>
                        </div>

                        <Show when=move || {
                            profile.get().and_then(|p| p.profile_image_url).is_some()
                                && !avatar_failed.get()
                        }>
                            <div class="hero-image">
                                <img
                                    class="profile-image"
                                    src=move || {
                                        profile
                                            .get()
                                            .and_then(|p| p.profile_image_url)
                                            .unwrap_or_default()
                                    }
                                    alt=move || {
                                        profile
                                            .get()
                                            .map(|p| p.display_name().to_string())
                                            .unwrap_or_default()
                                    }
                                    loading="lazy"
                                    on:error=move |_| set_avatar_failed.set(true)
                                />
                            </div>
                        </Show>
                        <Show when=move || {
                            profile.get().and_then(|p| p.profile_image_url).is_none()
                                || avatar_failed.get()
                        }>
                            <div class="hero-image">
                                <div class="avatar-fallback">
                                    {move || {
                                        profile.get().map(|p| p.initial()).unwrap_or_default()
                                    }}
                                </div>
                            </div>
                        </Show>
                    </div>
                </div>
            </section>
        </Show>
    }
}
