//! Experience section: work-history timeline.

use leptos::prelude::*;

use crate::fetch::use_fetch;
use crate::models::ExperienceEntry;
use crate::observe::{reveal_class, use_reveal};

#[component]
pub fn Experience() -> impl IntoView {
    let state = use_fetch::<Vec<ExperienceEntry>>("/experience");
    let (reveal_ref, revealed) = use_reveal();

    let entries = move || state.data.get().unwrap_or_default();

    view! {
        <Show when=move || !state.loading.get() && !entries().is_empty()>
            <section id="experience" class="experience">
                <div class="container">
                    <h2>"Work Experience"</h2>
                    <p class="section-subtitle">"Professional journey and contributions"</p>
                    <div
                        node_ref=reveal_ref
                        class=move || reveal_class("experience-timeline", revealed.get())
                    >
                        {move || {
                            entries()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <div class="timeline-item">
                                            <div class="timeline-marker"></div>
                                            <div class="timeline-content">
                                                <div class="timeline-header">
                                                    <h3>{entry.role.clone()}</h3>
                                                    <div class="timeline-meta">
                                                        <span class="company">{entry.company.clone()}</span>
                                                        <span class="period">{entry.period.clone()}</span>
                                                    </div>
                                                </div>
                                                <div class="timeline-description">
                                                    <p>{entry.description.clone()}</p>
                                                    <Show when={
                                                        let has_tech = !entry.technologies.is_empty();
                                                        move || has_tech
                                                    }>
                                                        <div class="timeline-tech">
                                                            {entry
                                                                .technologies
                                                                .iter()
                                                                .map(|tech| {
                                                                    view! {
                                                                        <span class="tech-tag">{tech.clone()}</span>
                                                                    }
                                                                })
                                                                .collect_view()}
                                                        </div>
                                                    </Show>
                                                </div>
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
