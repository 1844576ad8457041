//! Learning-path and resource-catalog payload types.
//!
//! These types mirror the JSON payloads handed over by the conversational
//! backend: a learning path of ordered career phases, and a catalog of
//! courses and certifications. Every field is optional or defaulted so that
//! partial payloads deserialize without error; the layout pipeline supplies
//! documented fallbacks instead of failing.

use serde::Deserialize;

/// A learning path produced by the backend.
///
/// The phase sequence is the traversal order of the resulting diagram
/// chain. Equality is derived so callers can detect content changes between
/// successive payloads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LearningPathDocument {
    /// Ordered career phases. `None` means the backend has not produced a
    /// path yet, which selects the default two-node diagram.
    #[serde(rename = "learning_phases", default)]
    pub phases: Option<Vec<Phase>>,

    /// Free-text overall timeline, display only.
    #[serde(default)]
    pub timeline: Option<String>,

    /// Opaque change summary carried through from the backend, display
    /// only. Never laid out.
    #[serde(default)]
    pub changes_made: Option<serde_json::Value>,
}

/// One stage of a career learning path.
///
/// A phase carries no identity beyond its position in the sequence; node
/// ids are derived from the index alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Phase {
    /// Display name. Falls back to `"Phase {1-based index}"` when absent.
    #[serde(rename = "phase", default)]
    pub name: Option<String>,

    /// Estimated duration, free text.
    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Skills developed during this phase. May be empty.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Catalog of learning resources supplied alongside the learning path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResourceCatalog {
    #[serde(default)]
    pub courses: Vec<Course>,

    #[serde(default)]
    pub certifications: Vec<Certification>,
}

/// A course entry in the resource catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Course {
    pub title: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub provider: Option<String>,

    #[serde(default)]
    pub level: Option<CourseLevel>,

    #[serde(default)]
    pub skills: Vec<String>,
}

/// Difficulty level of a course, used by the phase-index level heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A certification entry in the resource catalog.
///
/// Certifications carry no level or URL; they qualify on skill overlap
/// alone and render with a placeholder link target.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Certification {
    pub title: String,

    #[serde(default)]
    pub provider: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_learning_path_payload() {
        let payload = r#"{
            "learning_phases": [
                {
                    "phase": "Cloud Fundamentals",
                    "duration": "3 months",
                    "description": "Core cloud concepts",
                    "skills": ["AWS", "Networking"]
                },
                { "skills": [] }
            ],
            "timeline": "12 months total",
            "changes_made": { "added": "security phase" }
        }"#;

        let document: LearningPathDocument = serde_json::from_str(payload).unwrap();
        let phases = document.phases.as_ref().unwrap();
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].name.as_deref(), Some("Cloud Fundamentals"));
        assert_eq!(phases[0].duration.as_deref(), Some("3 months"));
        assert_eq!(phases[0].skills, vec!["AWS", "Networking"]);
        assert_eq!(phases[1].name, None);
        assert!(phases[1].skills.is_empty());
        assert_eq!(document.timeline.as_deref(), Some("12 months total"));
        assert!(document.changes_made.is_some());
    }

    #[test]
    fn deserializes_empty_payload() {
        let document: LearningPathDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(document.phases, None);
        assert_eq!(document.timeline, None);
        assert_eq!(document.changes_made, None);
    }

    #[test]
    fn deserializes_resource_catalog() {
        let payload = r#"{
            "courses": [
                {
                    "title": "AWS Basics",
                    "url": "https://example.com/aws",
                    "provider": "Coursera",
                    "level": "Intermediate",
                    "skills": ["aws"]
                }
            ],
            "certifications": [
                { "title": "Cloud Practitioner", "skills": ["aws"] }
            ]
        }"#;

        let catalog: ResourceCatalog = serde_json::from_str(payload).unwrap();
        assert_eq!(catalog.courses.len(), 1);
        assert_eq!(catalog.courses[0].level, Some(CourseLevel::Intermediate));
        assert_eq!(catalog.certifications.len(), 1);
        assert_eq!(catalog.certifications[0].provider, None);
    }

    #[test]
    fn empty_catalog_defaults_to_empty_lists() {
        let catalog: ResourceCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.courses.is_empty());
        assert!(catalog.certifications.is_empty());
    }

    #[test]
    fn document_equality_detects_content_change() {
        let a: LearningPathDocument =
            serde_json::from_str(r#"{ "learning_phases": [ { "phase": "A" } ] }"#).unwrap();
        let b: LearningPathDocument =
            serde_json::from_str(r#"{ "learning_phases": [ { "phase": "A" } ] }"#).unwrap();
        let c: LearningPathDocument =
            serde_json::from_str(r#"{ "learning_phases": [ { "phase": "B" } ] }"#).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
