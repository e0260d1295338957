//! Default catalog of postpartum exercises.
//!
//! This module provides the built-in exercise list for the system. The
//! catalog is loaded once at process start and never mutated.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
///
/// This function returns a reference to the pre-built catalog, avoiding
/// the overhead of rebuilding the exercise list on every operation.
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with the built-in exercises
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    let exercises = vec![
        Exercise {
            id: "1".into(),
            title: "Gentle Pelvic Floor Recovery".into(),
            category: ExerciseCategory::RecoveryBasics,
            duration: 5,
            image: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?q=80&w=800&auto=format&fit=crop".into(),
            requirements: vec![
                ExerciseRequirement::FloorSpace,
                ExerciseRequirement::CanDoWhileNursing,
            ],
            benefits: vec![
                ExerciseBenefit::PelvicFloorStrength,
                ExerciseBenefit::CoreActivation,
            ],
            connection_tips: vec![
                "Maintain eye contact with baby and smile while breathing through the exercises"
                    .into(),
            ],
            contraindications: None,
            steps: None,
            modifications: None,
            level: None,
            recommended_stage: None,
            description: None,
        },
        Exercise {
            id: "2".into(),
            title: "Standing Baby Cuddle Squats".into(),
            category: ExerciseCategory::BabyInclusive,
            duration: 8,
            image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=800&auto=format&fit=crop".into(),
            requirements: vec![
                ExerciseRequirement::Standing,
                ExerciseRequirement::BabyCarrierOrHold,
            ],
            benefits: vec![
                ExerciseBenefit::LegStrength,
                ExerciseBenefit::PostureSupport,
            ],
            connection_tips: vec![
                "Sing a gentle song to baby with each squat, creating a rhythm".into(),
            ],
            contraindications: None,
            steps: None,
            modifications: None,
            level: None,
            recommended_stage: None,
            description: None,
        },
        Exercise {
            id: "3".into(),
            title: "Diastasis Recti Healing".into(),
            category: ExerciseCategory::RecoveryBasics,
            duration: 10,
            image: "https://images.unsplash.com/photo-1721322800607-8c38375eef04?q=80&w=800&auto=format&fit=crop".into(),
            requirements: vec![
                ExerciseRequirement::FloorSpace,
                ExerciseRequirement::QuietEnvironment,
            ],
            benefits: vec![
                ExerciseBenefit::AbdominalHealing,
                ExerciseBenefit::CoreStability,
            ],
            connection_tips: vec![
                "Place baby where they can see you, talk softly about what you're doing".into(),
            ],
            contraindications: Some(vec![ExerciseContraindication::SevereDiastasisRecti]),
            steps: None,
            modifications: None,
            level: None,
            recommended_stage: None,
            description: None,
        },
        Exercise {
            id: "4".into(),
            title: "Gentle Back Stretch Series".into(),
            category: ExerciseCategory::RecoveryBasics,
            duration: 7,
            image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=800&auto=format&fit=crop".into(),
            requirements: vec![
                ExerciseRequirement::FloorSpace,
                ExerciseRequirement::SupportPillow,
            ],
            benefits: vec![
                ExerciseBenefit::BackPainRelief,
                ExerciseBenefit::ImprovedPosture,
            ],
            connection_tips: vec![
                "Position baby nearby where you can make faces at each other during holds".into(),
            ],
            contraindications: None,
            steps: None,
            modifications: None,
            level: None,
            recommended_stage: None,
            description: None,
        },
        Exercise {
            id: "5".into(),
            title: "Playful Tummy Time Exercises".into(),
            category: ExerciseCategory::BabyInclusive,
            duration: 5,
            image: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?q=80&w=800&auto=format&fit=crop".into(),
            requirements: vec![
                ExerciseRequirement::FloorSpace,
                ExerciseRequirement::TummyTime,
            ],
            benefits: vec![
                ExerciseBenefit::CoreStrength,
                ExerciseBenefit::UpperBodyTone,
            ],
            connection_tips: vec![
                "Do your exercises facing baby during their tummy time, creating a mirroring effect"
                    .into(),
            ],
            contraindications: None,
            steps: None,
            modifications: None,
            level: None,
            recommended_stage: None,
            description: None,
        },
        Exercise {
            id: "6".into(),
            title: "Quick Standing Core Activation".into(),
            category: ExerciseCategory::ShortRoutines,
            duration: 3,
            image: "https://images.unsplash.com/photo-1721322800607-8c38375eef04?q=80&w=800&auto=format&fit=crop".into(),
            requirements: vec![
                ExerciseRequirement::Standing,
                ExerciseRequirement::NoEquipment,
            ],
            benefits: vec![
                ExerciseBenefit::CoreActivation,
                ExerciseBenefit::PostureImprovement,
            ],
            connection_tips: vec![
                "Hold baby while doing gentle standing exercises, maintaining eye contact".into(),
            ],
            contraindications: None,
            steps: None,
            modifications: None,
            level: None,
            recommended_stage: None,
            description: None,
        },
    ];

    Catalog {
        exercises,
        default_contraindications: default_contraindications(),
    }
}

/// Conditions shown in the general health notice, applicable to every
/// exercise unless a record carries its own list.
fn default_contraindications() -> Vec<ExerciseContraindication> {
    vec![
        ExerciseContraindication::ImmediatePostpartum,
        ExerciseContraindication::HeavyBleeding,
        ExerciseContraindication::UncontrolledBloodPressure,
        ExerciseContraindication::ActiveInfection,
        ExerciseContraindication::Dizziness,
        ExerciseContraindication::NoMedicalClearance,
    ]
}

impl Catalog {
    /// Look up an exercise by its identifier.
    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|ex| ex.id == id)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen_ids = std::collections::HashSet::new();

        for exercise in &self.exercises {
            if exercise.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if !seen_ids.insert(exercise.id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", exercise.id));
            }
            if exercise.title.is_empty() {
                errors.push(format!("Exercise '{}' has empty title", exercise.id));
            }
            if exercise.duration == 0 {
                errors.push(format!("Exercise '{}' has zero duration", exercise.id));
            }
            if exercise.connection_tips.is_empty() {
                errors.push(format!("Exercise '{}' has no connection tips", exercise.id));
            }
            if let Some(ref contraindications) = exercise.contraindications {
                if contraindications.is_empty() {
                    errors.push(format!(
                        "Exercise '{}' has an empty contraindication list",
                        exercise.id
                    ));
                }
            }
        }

        if self.default_contraindications.is_empty() {
            errors.push("Catalog has no default contraindications".to_string());
        }

        errors
    }

    /// Validate the catalog and convert any problems into an error.
    ///
    /// Convenience for startup checks where a failed validation should
    /// abort rather than be inspected.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::CatalogValidation(errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.exercises.len(), 6);
        assert!(!catalog.default_contraindications.is_empty());
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_catalog();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_all_durations_positive() {
        let catalog = build_default_catalog();
        assert!(catalog.exercises.iter().all(|ex| ex.duration > 0));
    }

    #[test]
    fn test_ids_unique() {
        let catalog = build_default_catalog();
        let mut ids: Vec<_> = catalog.exercises.iter().map(|ex| ex.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.exercises.len());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = build_default_catalog();
        let exercise = catalog.exercise("2").expect("exercise 2 missing");
        assert_eq!(exercise.title, "Standing Baby Cuddle Squats");
        assert!(catalog.exercise("no-such-id").is_none());
    }

    #[test]
    fn test_cached_catalog_matches_built() {
        let cached = get_default_catalog();
        let built = build_default_catalog();
        assert_eq!(cached.exercises.len(), built.exercises.len());
    }

    #[test]
    fn test_validate_flags_duplicate_ids() {
        let mut catalog = build_default_catalog();
        let mut duplicate = catalog.exercises[0].clone();
        duplicate.title = "Copy".into();
        catalog.exercises.push(duplicate);

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("Duplicate exercise ID")));
    }

    #[test]
    fn test_validate_flags_zero_duration() {
        let mut catalog = build_default_catalog();
        catalog.exercises[0].duration = 0;

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("zero duration")));
    }

    #[test]
    fn test_ensure_valid() {
        let mut catalog = build_default_catalog();
        assert!(catalog.ensure_valid().is_ok());

        catalog.exercises[0].title = String::new();
        let err = catalog.ensure_valid().unwrap_err();
        assert!(matches!(err, Error::CatalogValidation(_)));
    }
}
