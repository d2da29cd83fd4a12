//! Projects section: media card grid.

use leptos::prelude::*;

use crate::fetch::use_fetch;
use crate::models::Project;
use crate::observe::{reveal_class, use_reveal};

/// Media precedence: video, then image, then a placeholder built from the
/// first three stack entries.
#[component]
fn ProjectMedia(project: Project) -> impl IntoView {
    if let Some(video_url) = project.video_url.clone() {
        let poster = project.image_url.clone().unwrap_or_default();
        return view! {
            <video src=video_url poster=poster controls=true muted=true playsinline=true></video>
        }
        .into_any();
    }
    if let Some(image_url) = project.image_url.clone() {
        return view! { <img src=image_url alt=project.title.clone() loading="lazy" /> }
            .into_any();
    }
    view! {
        <div class="project-placeholder">
            <div class="placeholder-content">
                {project
                    .tech_stack
                    .iter()
                    .take(3)
                    .map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let media = project.clone();
    view! {
        <div class="project-card">
            <div class="project-media">
                <ProjectMedia project=media />
            </div>
            <div class="project-content">
                <h3>{project.title.clone()}</h3>
                <p class="project-description">{project.description.clone()}</p>
                <div class="project-tech">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| view! { <span class="tech-pill">{tech.clone()}</span> })
                        .collect_view()}
                </div>
                <div class="project-links">
                    {project
                        .github_url
                        .clone()
                        .map(|url| {
                            view! {
                                <a href=url class="project-link" target="_blank" rel="noopener noreferrer">
                                    "Code"
                                </a>
                            }
                        })}
                    {project
                        .live_url
                        .clone()
                        .map(|url| {
                            view! {
                                <a href=url class="project-link live" target="_blank" rel="noopener noreferrer">
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let state = use_fetch::<Vec<Project>>("/projects");
    let (reveal_ref, revealed) = use_reveal();

    let projects = move || state.data.get().unwrap_or_default();

    view! {
        <Show when=move || !state.loading.get() && !projects().is_empty()>
            <section id="projects" class="projects">
                <div class="container">
                    <h2>"Featured Projects"</h2>
                    <p class="section-subtitle">
                        "Real-world applications built with modern technologies"
                    </p>
                    <div
                        node_ref=reveal_ref
                        class=move || reveal_class("projects-grid", revealed.get())
                    >
                        {move || {
                            projects()
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </section>
        </Show>
    }
}
