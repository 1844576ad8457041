//! Resource matching.
//!
//! Pairs catalog resources with a learning phase using two independent
//! boolean criteria: a bidirectional case-insensitive substring test over
//! skill names (the skill hit) and a phase-name/course-level heuristic
//! (the level hit). Matching is stable and bounded: catalog order is
//! preserved, courses are evaluated before certifications, and at most
//! [`MAX_RESOURCES_PER_PHASE`] entries are returned.

use roadmap_core::{
    diagram::{MatchedResource, ResourceKind},
    model::{CourseLevel, Phase, ResourceCatalog},
};

/// Cap on matched resources per phase. Keeps node cards manageable.
pub const MAX_RESOURCES_PER_PHASE: usize = 3;

/// Link target for entries without an authoritative URL.
const PLACEHOLDER_URL: &str = "#";

/// Selects the catalog resources relevant to one phase.
///
/// Pure and total: an absent or empty catalog yields an empty list, never
/// an error. Courses qualify on a skill hit or a level hit; certifications
/// are treated as a later-stage credential, so the first phase never shows
/// them and they qualify on a skill hit alone (they carry no level field).
///
/// # Arguments
///
/// * `phase` - The phase being annotated
/// * `catalog` - The resource catalog, if the backend supplied one
/// * `phase_index` - Zero-based position of the phase in the chain
pub fn relevant_resources(
    phase: &Phase,
    catalog: Option<&ResourceCatalog>,
    phase_index: usize,
) -> Vec<MatchedResource> {
    let Some(catalog) = catalog else {
        return Vec::new();
    };

    // An unnamed phase lowers to the empty string, which every course title
    // contains. Inherited behavior: such phases level-hit every course.
    let phase_name = phase.name.as_deref().unwrap_or("").to_lowercase();
    let mut matched = Vec::new();

    for course in &catalog.courses {
        let skill_hit = skills_overlap(&phase.skills, &course.skills);
        let level_hit = course.title.to_lowercase().contains(&phase_name)
            || (phase_index == 0 && course.level == Some(CourseLevel::Beginner))
            || (phase_index > 0 && course.level == Some(CourseLevel::Intermediate))
            || (phase_index > 1 && course.level == Some(CourseLevel::Advanced));

        if skill_hit || level_hit {
            matched.push(MatchedResource {
                title: course.title.clone(),
                url: course
                    .url
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
                kind: ResourceKind::Course,
                provider: course.provider.clone(),
            });
        }
    }

    if phase_index > 0 {
        for certification in &catalog.certifications {
            if skills_overlap(&phase.skills, &certification.skills) {
                matched.push(MatchedResource {
                    title: certification.title.clone(),
                    url: PLACEHOLDER_URL.to_string(),
                    kind: ResourceKind::Certification,
                    provider: certification.provider.clone(),
                });
            }
        }
    }

    matched.truncate(MAX_RESOURCES_PER_PHASE);
    matched
}

/// Bidirectional case-insensitive substring test over two skill lists.
///
/// Intentionally permissive rather than an equality test: both sides are
/// free text, so "aws" should hit "AWS Networking" and vice versa. Short
/// tokens can over-match ("C" hits "C++"); that imprecision is inherited
/// and preserved.
fn skills_overlap(phase_skills: &[String], resource_skills: &[String]) -> bool {
    phase_skills.iter().any(|phase_skill| {
        let phase_skill = phase_skill.to_lowercase();
        resource_skills.iter().any(|resource_skill| {
            let resource_skill = resource_skill.to_lowercase();
            resource_skill.contains(&phase_skill) || phase_skill.contains(&resource_skill)
        })
    })
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use roadmap_core::model::{Certification, Course};

    use super::*;

    fn level_strategy() -> impl Strategy<Value = Option<CourseLevel>> {
        proptest::option::of(prop_oneof![
            Just(CourseLevel::Beginner),
            Just(CourseLevel::Intermediate),
            Just(CourseLevel::Advanced),
        ])
    }

    fn course_strategy() -> impl Strategy<Value = Course> {
        (
            "[A-Za-z ]{1,16}",
            proptest::option::of("[a-z]{3,8}"),
            level_strategy(),
            proptest::collection::vec("[a-z]{1,6}", 0..3),
        )
            .prop_map(|(title, provider, level, skills)| Course {
                title,
                url: None,
                provider,
                level,
                skills,
            })
    }

    fn certification_strategy() -> impl Strategy<Value = Certification> {
        ("[A-Za-z ]{1,16}", proptest::collection::vec("[a-z]{1,6}", 0..3)).prop_map(
            |(title, skills)| Certification {
                title,
                provider: None,
                skills,
            },
        )
    }

    fn catalog_strategy() -> impl Strategy<Value = ResourceCatalog> {
        (
            proptest::collection::vec(course_strategy(), 0..6),
            proptest::collection::vec(certification_strategy(), 0..6),
        )
            .prop_map(|(courses, certifications)| ResourceCatalog {
                courses,
                certifications,
            })
    }

    fn phase_strategy() -> impl Strategy<Value = Phase> {
        (
            proptest::option::of("[A-Za-z ]{1,12}"),
            proptest::collection::vec("[a-z]{1,6}", 0..4),
        )
            .prop_map(|(name, skills)| Phase {
                name,
                duration: None,
                description: None,
                skills,
            })
    }

    proptest! {
        #[test]
        fn result_is_bounded_and_ordered(
            phase in phase_strategy(),
            catalog in catalog_strategy(),
            phase_index in 0usize..5,
        ) {
            let result = relevant_resources(&phase, Some(&catalog), phase_index);

            prop_assert!(result.len() <= MAX_RESOURCES_PER_PHASE);

            // All courses precede all certifications.
            if let Some(first_certification) = result
                .iter()
                .position(|resource| resource.kind == ResourceKind::Certification)
            {
                prop_assert!(
                    result[first_certification..]
                        .iter()
                        .all(|resource| resource.kind == ResourceKind::Certification)
                );
            }
        }

        #[test]
        fn first_phase_never_yields_certifications(
            phase in phase_strategy(),
            catalog in catalog_strategy(),
        ) {
            let result = relevant_resources(&phase, Some(&catalog), 0);
            prop_assert!(
                result
                    .iter()
                    .all(|resource| resource.kind == ResourceKind::Course)
            );
        }
    }
}
