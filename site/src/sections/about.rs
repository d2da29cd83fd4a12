//! About section: bio, highlights, optional stats.

use leptos::prelude::*;

use crate::fetch::use_fetch;
use crate::models::AboutInfo;
use crate::observe::{reveal_class, use_reveal};

#[component]
pub fn About() -> impl IntoView {
    let state = use_fetch::<AboutInfo>("/about");
    let (reveal_ref, revealed) = use_reveal();

    let about = move || state.data.get().unwrap_or_default();

    view! {
        <Show when=move || !state.loading.get() && state.data.get().is_some()>
            <section id="about" class="about">
                <div class="container">
                    <h2>"About Me"</h2>
                    <div
                        node_ref=reveal_ref
                        class=move || reveal_class("about-content", revealed.get())
                    >
                        <div class="about-text">
                            <p class="about-summary">{move || about().bio}</p>
                            <Show when=move || !about().highlights.is_empty()>
                                <div class="about-highlights">
                                    <h3>"Key Strengths"</h3>
                                    <ul class="highlight-list">
                                        {move || {
                                            about()
                                                .highlights
                                                .into_iter()
                                                .map(|highlight| {
                                                    view! {
                                                        <li class="highlight-item">
                                                            <span class="highlight-icon">"\u{2713}"</span>
                                                            <span>{highlight}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </ul>
                                </div>
                            </Show>
                        </div>
                        <Show when=move || !about().stats.is_empty()>
                            <div class="about-stats">
                                {move || {
                                    about()
                                        .stats
                                        .into_iter()
                                        .map(|stat| {
                                            view! {
                                                <div class="stat-item">
                                                    <div class="stat-number">{stat.value}</div>
                                                    <div class="stat-label">{stat.label}</div>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                    </div>
                </div>
            </section>
        </Show>
    }
}
