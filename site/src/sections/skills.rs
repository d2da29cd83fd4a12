//! Skills section: category groups ranked by proficiency.
//!
//! The one section with explicit failure UI: a fetch error renders a
//! message plus a retry control instead of disappearing.

use leptos::prelude::*;

use crate::fetch::use_fetch;
use crate::models::{Skill, SkillLevel};
use crate::observe::{reveal_class, use_reveal};

/// Group by category in first-seen order; each group sorted by proficiency
/// rank, highest first. The sort is stable, so equal ranks keep payload
/// order.
pub(crate) fn group_by_category(skills: &[Skill]) -> Vec<(String, Vec<Skill>)> {
    let mut groups: Vec<(String, Vec<Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, members)) => members.push(skill.clone()),
            None => groups.push((skill.category.clone(), vec![skill.clone()])),
        }
    }
    for (_, members) in &mut groups {
        members.sort_by(|a, b| b.rank().cmp(&a.rank()));
    }
    groups
}

pub(crate) fn advanced_count(skills: &[Skill]) -> usize {
    skills
        .iter()
        .filter(|s| matches!(s.level, Some(SkillLevel::Expert) | Some(SkillLevel::Advanced)))
        .count()
}

fn category_color(category: &str) -> &'static str {
    match category {
        "Frontend" => "#3b82f6",
        "Backend" => "#10b981",
        "Database" => "#8b5cf6",
        "Tools" => "#f59e0b",
        "Other" => "#6b7280",
        _ => "#3b82f6",
    }
}

fn level_stars(level: Option<SkillLevel>) -> impl IntoView {
    let filled = level.map(SkillLevel::stars).unwrap_or(0);
    let label = level.map(SkillLevel::label).unwrap_or("Learning");
    view! {
        <div class="skill-level">
            {(0..5)
                .map(|slot| {
                    let class = if slot < filled { "star filled" } else { "star" };
                    view! { <span class=class>"\u{2605}"</span> }
                })
                .collect_view()}
            <span class="level-text">{label}</span>
        </div>
    }
}

#[component]
fn SkillCard(skill: Skill, color: &'static str) -> impl IntoView {
    let (icon_failed, set_icon_failed) = signal(false);
    let name = skill.name.clone();
    let alt = skill.name.clone();
    let level = skill.level;
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let icon_url = skill.icon_url.clone();
    let has_icon = move || icon_url.clone().filter(|_| !icon_failed.get());

    view! {
        <div class="skill-card" style=format!("border-left-color: {color}")>
            <div class="skill-header">
                {move || match has_icon() {
                    Some(url) => {
                        view! {
                            <div class="skill-icon">
                                <img
                                    src=url
                                    alt=alt.clone()
                                    loading="lazy"
                                    on:error=move |_| set_icon_failed.set(true)
                                />
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div
                                class="skill-icon fallback"
                                style=format!("background-color: {color}20")
                            >
                                {initial.clone()}
                            </div>
                        }
                            .into_any()
                    }
                }}
                <div class="skill-info">
                    <h4 class="skill-name">{name}</h4>
                    {level_stars(level)}
                </div>
            </div>
            <div class="skill-meta">
                {level
                    .map(|level| {
                        view! {
                            <span
                                class="skill-level-badge"
                                style=format!("background-color: {color}")
                            >
                                {level.label()}
                            </span>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let state = use_fetch::<Vec<Skill>>("/skills");
    let (reveal_ref, revealed) = use_reveal();

    let skills = move || state.data.get().unwrap_or_default();
    let grouped = move || group_by_category(&skills());
    let has_skills = move || !skills().is_empty();
    let failed = move || !state.loading.get() && state.error.get().is_some();
    let ready = move || !state.loading.get() && state.error.get().is_none() && has_skills();

    view! {
        <Show when=failed>
            <section id="skills" class="skills">
                <div class="container">
                    <h2>"Technical Skills"</h2>
                    <div class="skills-error">
                        <div class="error-icon">"\u{26a0}"</div>
                        <p>"Failed to load skills. Please try again later."</p>
                        <button class="btn btn-primary" on:click=move |_| state.retry()>
                            "Try Again"
                        </button>
                    </div>
                </div>
            </section>
        </Show>
        <Show when=ready>
            <section id="skills" class="skills">
                <div class="container">
                    <div class="skills-header">
                        <h2>"Technical Skills"</h2>
                        <p class="section-subtitle">
                            "Technologies and tools I work with - showing proficiency levels"
                        </p>
                        <div class="skills-stats">
                            <div class="stat-card">
                                <div class="stat-number">{move || skills().len()}</div>
                                <div class="stat-label">"Total Skills"</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-number">{move || grouped().len()}</div>
                                <div class="stat-label">"Categories"</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-number">
                                    {move || advanced_count(&skills())}
                                </div>
                                <div class="stat-label">"Advanced+"</div>
                            </div>
                        </div>
                    </div>

                    <div
                        node_ref=reveal_ref
                        class=move || reveal_class("skills-content", revealed.get())
                    >
                        <div class="skills-by-category">
                            {move || {
                                grouped()
                                    .into_iter()
                                    .map(|(category, members)| {
                                        let color = category_color(&category);
                                        view! {
                                            <div class="category-section">
                                                <div class="category-header">
                                                    <h3 class="category-title">{category.clone()}</h3>
                                                    <span class="category-count">
                                                        {members.len()} " skills"
                                                    </span>
                                                </div>
                                                <div class="skills-grid">
                                                    {members
                                                        .into_iter()
                                                        .map(|skill| {
                                                            view! { <SkillCard skill=skill color=color /> }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>

                        <div class="all-skills-section">
                            <h3 class="section-title">"All Skills at a Glance"</h3>
                            <div class="all-skills-grid">
                                {move || {
                                    skills()
                                        .into_iter()
                                        .map(|skill| {
                                            let color = category_color(&skill.category);
                                            let label =
                                                skill.level.map(SkillLevel::label).unwrap_or("Learning");
                                            view! {
                                                <div
                                                    class="skill-pill"
                                                    style=format!("border-color: {color}")
                                                >
                                                    <span class="pill-name">{skill.name.clone()}</span>
                                                    <span
                                                        class="pill-level"
                                                        style=format!("color: {color}")
                                                    >
                                                        {label}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn skill(name: &str, category: &str, level: Option<&str>) -> Skill {
        Skill {
            id: name.to_lowercase(),
            name: name.into(),
            category: category.into(),
            level: level.and_then(SkillLevel::parse),
            icon_url: None,
        }
    }

    #[test]
    fn groups_keep_first_seen_category_order() {
        let skills = [
            skill("React", "Frontend", Some("Advanced")),
            skill("Axum", "Backend", Some("Expert")),
            skill("CSS", "Frontend", Some("Intermediate")),
        ];
        let grouped = group_by_category(&skills);
        let categories: Vec<&str> = grouped.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(categories, vec!["Frontend", "Backend"]);
        assert_eq!(grouped[0].1.len(), 2);
    }

    #[test]
    fn categories_sort_highest_rank_first() {
        let skills = [
            skill("Git", "Tools", None),
            skill("Docker", "Tools", Some("Beginner")),
            skill("Linux", "Tools", Some("Expert")),
            skill("CI", "Tools", Some("Advanced")),
        ];
        let grouped = group_by_category(&skills);
        let names: Vec<&str> = grouped[0].1.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Linux", "CI", "Docker", "Git"]);
    }

    #[test]
    fn equal_ranks_keep_payload_order() {
        let skills = [
            skill("B", "Tools", Some("Advanced")),
            skill("A", "Tools", Some("Advanced")),
        ];
        let grouped = group_by_category(&skills);
        let names: Vec<&str> = grouped[0].1.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn advanced_count_spans_expert_and_advanced() {
        let skills = [
            skill("A", "x", Some("Expert")),
            skill("B", "x", Some("Advanced")),
            skill("C", "x", Some("Intermediate")),
            skill("D", "x", None),
        ];
        assert_eq!(advanced_count(&skills), 2);
    }

    #[test]
    fn unknown_categories_get_default_color() {
        assert_eq!(category_color("Backend"), "#10b981");
        assert_eq!(category_color("Gardening"), "#3b82f6");
    }
}
