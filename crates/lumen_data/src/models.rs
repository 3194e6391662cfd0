//! Wire models for the portfolio backend
//!
//! Shapes match what the backend's serializers emit to the page, not the
//! underlying database models. Collections arrive in the canonical
//! `{"results": [...]}` envelope (paginated list views); a bare top-level
//! array from an unpaginated view is also accepted and normalized at the
//! decode boundary, so consumers only ever see `Vec<T>`.

use serde::{Deserialize, Serialize};

/// A portfolio project card
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image URL; hosting is external
    #[serde(default)]
    pub image: String,
    /// Ordered technology tags, rendered in sequence
    #[serde(default)]
    pub tags: Vec<String>,
    /// Live demo link
    #[serde(default)]
    pub link: String,
    /// Source repository link
    #[serde(default)]
    pub github: String,
}

/// An education entry (degree, bootcamp, certification)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub gpa: String,
}

/// A work-history entry
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A skill category with its ordered skills
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Biography/about content
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bio {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub bio_description: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub twitter_url: String,
}

/// Body for `POST /contact/`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Collection envelope decoding
///
/// Canonical: `{"results": [...]}`. Compatibility: a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Collection<T> {
    Enveloped { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Collection<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            Collection::Enveloped { results } => results,
            Collection::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_decodes_with_missing_optionals() {
        let json = r#"{"title": "Analytics Dashboard"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.title, "Analytics Dashboard");
        assert!(project.tags.is_empty());
        assert!(project.github.is_empty());
    }

    #[test]
    fn test_envelope_and_bare_array_normalize() {
        let enveloped = r#"{"results": [{"title": "A"}, {"title": "B"}]}"#;
        let bare = r#"[{"title": "A"}, {"title": "B"}]"#;

        let from_envelope: Collection<Project> = serde_json::from_str(enveloped).unwrap();
        let from_bare: Collection<Project> = serde_json::from_str(bare).unwrap();

        let a = from_envelope.into_items();
        let b = from_bare.into_items();
        assert_eq!(a, b);
        assert_eq!(a[0].title, "A");
        assert_eq!(a[1].title, "B");
    }

    #[test]
    fn test_empty_envelope_is_empty_collection() {
        let collection: Collection<Project> =
            serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(collection.into_items().is_empty());
    }

    #[test]
    fn test_tags_preserve_order() {
        let json = r#"{"title": "X", "tags": ["Vue.js", "Django", "D3.js", "PostgreSQL"]}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(
            project.tags,
            vec!["Vue.js", "Django", "D3.js", "PostgreSQL"]
        );
    }

    #[test]
    fn test_contact_message_round_trip_shape() {
        let msg = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Hi there".into(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["subject"], "Hello");
        assert_eq!(value["message"], "Hi there");
    }
}
