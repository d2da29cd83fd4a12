//! Social links section. Rendered on the page but not tracked by the nav.

use leptos::prelude::*;

use crate::fetch::use_fetch;
use crate::models::SocialLink;
use crate::observe::{reveal_class, use_reveal};

/// Fallback glyph when a link carries no icon URL.
fn platform_initial(platform: &str) -> String {
    platform
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "\u{1f310}".to_string())
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    let state = use_fetch::<Vec<SocialLink>>("/social");
    let (reveal_ref, revealed) = use_reveal();

    let links = move || state.data.get().unwrap_or_default();

    view! {
        <Show when=move || !state.loading.get() && !links().is_empty()>
            <section id="social" class="social">
                <div class="container">
                    <h2>"Connect With Me"</h2>
                    <p class="section-subtitle">
                        "Let's stay connected on professional networks"
                    </p>
                    <div
                        node_ref=reveal_ref
                        class=move || reveal_class("social-links", revealed.get())
                    >
                        {move || {
                            links()
                                .into_iter()
                                .map(|link| {
                                    let glyph = platform_initial(&link.platform);
                                    view! {
                                        <a
                                            href=link.url.clone()
                                            class="social-link"
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            title=link.platform.clone()
                                        >
                                            <div class="social-icon">
                                                {match link.icon_url.clone() {
                                                    Some(icon) => {
                                                        view! {
                                                            <img src=icon alt=link.platform.clone() />
                                                        }
                                                            .into_any()
                                                    }
                                                    None => {
                                                        view! { <span>{glyph}</span> }.into_any()
                                                    }
                                                }}
                                            </div>
                                            <span class="social-platform">
                                                {link.platform.clone()}
                                            </span>
                                        </a>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::platform_initial;

    #[test]
    fn initial_comes_from_platform_name() {
        assert_eq!(platform_initial("github"), "G");
        assert_eq!(platform_initial("LinkedIn"), "L");
    }

    #[test]
    fn empty_platform_gets_globe() {
        assert_eq!(platform_initial(""), "\u{1f310}");
    }
}
