//! View models for the remote content API.
//!
//! Everything here is fetched read-only and replaced wholesale on refetch.
//! Records tolerate missing optional fields; list records accept Mongo-style
//! `_id` identifiers.

use serde::{Deserialize, Deserializer, Serialize};

/// Owner profile shown in the hero.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub professional_title: Option<String>,
    pub tagline: Option<String>,
    pub profile_image_url: Option<String>,
    pub hero_image_url: Option<String>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }

    pub fn display_title(&self) -> &str {
        self.professional_title
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }

    /// First letter of the display name, for the letter-avatar fallback.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub resume_pdf_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutInfo {
    pub bio: String,
    pub highlights: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Proficiency rank for a skill. Ordering matters: later variants outrank
/// earlier ones when sorting a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Beginner" => Some(Self::Beginner),
            "Intermediate" => Some(Self::Intermediate),
            "Advanced" => Some(Self::Advanced),
            "Expert" => Some(Self::Expert),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// Filled stars out of five on the skill card.
    pub fn stars(self) -> usize {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 3,
            Self::Advanced => 4,
            Self::Expert => 5,
        }
    }
}

/// Unknown level strings degrade to "unset" instead of failing the payload.
fn de_skill_level<'de, D>(deserializer: D) -> Result<Option<SkillLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(SkillLevel::parse))
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(deserialize_with = "de_skill_level")]
    pub level: Option<SkillLevel>,
    pub icon_url: Option<String>,
}

impl Skill {
    pub fn rank(&self) -> u8 {
        match self.level {
            Some(SkillLevel::Expert) => 4,
            Some(SkillLevel::Advanced) => 3,
            Some(SkillLevel::Intermediate) => 2,
            Some(SkillLevel::Beginner) => 1,
            None => 0,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub certificate_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

impl ContactInfo {
    /// Compose link that opens a draft addressed to the owner.
    pub fn mail_link(&self) -> String {
        format!("https://mail.google.com/mail/?view=cm&to={}", self.email)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon_url: Option<String>,
}

/// Transient contact form state. Created empty, mutated per keystroke,
/// cleared on every submit attempt.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_prefers_long_forms() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"Ada","fullName":"Ada Lovelace","title":"Dev","professionalTitle":"Engineer"}"#,
        )
        .unwrap();
        assert_eq!(profile.display_name(), "Ada Lovelace");
        assert_eq!(profile.display_title(), "Engineer");
        assert_eq!(profile.initial(), "A");
    }

    #[test]
    fn profile_falls_back_to_short_forms() {
        let profile = Profile {
            name: "ada".into(),
            title: Some("Dev".into()),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "ada");
        assert_eq!(profile.display_title(), "Dev");
        assert_eq!(profile.initial(), "A");
    }

    #[test]
    fn skill_accepts_mongo_id_and_unknown_level() {
        let skill: Skill = serde_json::from_str(
            r#"{"_id":"abc123","name":"Rust","category":"Backend","level":"Wizard"}"#,
        )
        .unwrap();
        assert_eq!(skill.id, "abc123");
        assert_eq!(skill.level, None);
        assert_eq!(skill.rank(), 0);
    }

    #[test]
    fn skill_levels_rank_in_order() {
        let ranks: Vec<u8> = ["Beginner", "Intermediate", "Advanced", "Expert"]
            .iter()
            .map(|raw| Skill {
                level: SkillLevel::parse(raw),
                ..Default::default()
            })
            .map(|s| s.rank())
            .collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert!(SkillLevel::Expert > SkillLevel::Advanced);
    }

    #[test]
    fn message_draft_serializes_flat() {
        let draft = MessageDraft {
            name: "A".into(),
            email: "a@b.c".into(),
            message: "hi".into(),
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name":"A","email":"a@b.c","message":"hi"})
        );
    }

    #[test]
    fn optional_media_defaults_to_none() {
        let project: Project =
            serde_json::from_str(r#"{"title":"Site","description":"d","techStack":["Rust"]}"#)
                .unwrap();
        assert_eq!(project.image_url, None);
        assert_eq!(project.tech_stack, vec!["Rust".to_string()]);
    }
}
