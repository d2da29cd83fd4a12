//! Education section: card grid with optional certificate links.

use leptos::prelude::*;

use crate::fetch::use_fetch;
use crate::models::EducationEntry;
use crate::observe::{reveal_class, use_reveal};

#[component]
pub fn Education() -> impl IntoView {
    let state = use_fetch::<Vec<EducationEntry>>("/education");
    let (reveal_ref, revealed) = use_reveal();

    let entries = move || state.data.get().unwrap_or_default();

    view! {
        <Show when=move || !state.loading.get() && !entries().is_empty()>
            <section id="education" class="education">
                <div class="container">
                    <h2>"Education"</h2>
                    <p class="section-subtitle">"Academic background and qualifications"</p>
                    <div
                        node_ref=reveal_ref
                        class=move || reveal_class("education-grid", revealed.get())
                    >
                        {move || {
                            entries()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <div class="education-card">
                                            <div class="education-content">
                                                <h3>{entry.degree.clone()}</h3>
                                                <div class="education-meta">
                                                    <span class="institution">
                                                        {entry.institution.clone()}
                                                    </span>
                                                    <span class="period">{entry.period.clone()}</span>
                                                </div>
                                                <p class="education-description">
                                                    {entry.description.clone()}
                                                </p>
                                                {entry
                                                    .certificate_url
                                                    .clone()
                                                    .map(|url| {
                                                        view! {
                                                            <a
                                                                href=url
                                                                class="certificate-link"
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                            >
                                                                "View Certificate"
                                                            </a>
                                                        }
                                                    })}
                                            </div>
                                        </div>
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
