//! Core domain types for the postpartum exercise library.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their closed tag vocabularies
//! - Filter criteria for browsing the catalog
//! - Quick-pick time-budget options
//! - Persisted preference and completion records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Tag Vocabularies
// ============================================================================

/// Exercise category tags.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    RecoveryBasics,
    FullBodyStrength,
    ShortRoutines,
    BabyInclusive,
    CoreStrength,
    UpperBodyTone,
    LowerBodyStrength,
    Stretching,
    Cardio,
    Yoga,
    PelvicFloor,
    DiastasisRecti,
    GentleMobility,
    PosturalAlignment,
}

impl ExerciseCategory {
    /// Display label as shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseCategory::RecoveryBasics => "Recovery Basics",
            ExerciseCategory::FullBodyStrength => "Full Body Strength",
            ExerciseCategory::ShortRoutines => "Short Routines",
            ExerciseCategory::BabyInclusive => "Baby-inclusive",
            ExerciseCategory::CoreStrength => "Core Strength",
            ExerciseCategory::UpperBodyTone => "Upper Body Tone",
            ExerciseCategory::LowerBodyStrength => "Lower Body Strength",
            ExerciseCategory::Stretching => "Stretching",
            ExerciseCategory::Cardio => "Cardio",
            ExerciseCategory::Yoga => "Yoga",
            ExerciseCategory::PelvicFloor => "Pelvic Floor",
            ExerciseCategory::DiastasisRecti => "Diastasis Recti",
            ExerciseCategory::GentleMobility => "Gentle Mobility",
            ExerciseCategory::PosturalAlignment => "Postural Alignment",
        }
    }

    /// All categories, in display order.
    pub fn all() -> &'static [ExerciseCategory] {
        &[
            ExerciseCategory::RecoveryBasics,
            ExerciseCategory::FullBodyStrength,
            ExerciseCategory::ShortRoutines,
            ExerciseCategory::BabyInclusive,
            ExerciseCategory::CoreStrength,
            ExerciseCategory::UpperBodyTone,
            ExerciseCategory::LowerBodyStrength,
            ExerciseCategory::Stretching,
            ExerciseCategory::Cardio,
            ExerciseCategory::Yoga,
            ExerciseCategory::PelvicFloor,
            ExerciseCategory::DiastasisRecti,
            ExerciseCategory::GentleMobility,
            ExerciseCategory::PosturalAlignment,
        ]
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Context or equipment needed to perform an exercise.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseRequirement {
    FloorSpace,
    Standing,
    CanDoWhileNursing,
    BabyCarrierOrHold,
    NoEquipment,
    SupportPillow,
    QuietEnvironment,
    TummyTime,
    ResistanceBand,
    Chair,
    YogaMat,
    SmallWeights,
    WallSpace,
    WaterBottle,
}

impl ExerciseRequirement {
    /// Display label as shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseRequirement::FloorSpace => "Floor space",
            ExerciseRequirement::Standing => "Standing",
            ExerciseRequirement::CanDoWhileNursing => "Can do while nursing",
            ExerciseRequirement::BabyCarrierOrHold => "Baby carrier or hold",
            ExerciseRequirement::NoEquipment => "No equipment",
            ExerciseRequirement::SupportPillow => "Support pillow",
            ExerciseRequirement::QuietEnvironment => "Quiet environment",
            ExerciseRequirement::TummyTime => "Tummy time for baby",
            ExerciseRequirement::ResistanceBand => "Resistance band",
            ExerciseRequirement::Chair => "Chair for support",
            ExerciseRequirement::YogaMat => "Yoga mat",
            ExerciseRequirement::SmallWeights => "Small weights",
            ExerciseRequirement::WallSpace => "Wall space",
            ExerciseRequirement::WaterBottle => "Water bottle",
        }
    }

    /// All requirement options, in display order.
    pub fn all() -> &'static [ExerciseRequirement] {
        &[
            ExerciseRequirement::FloorSpace,
            ExerciseRequirement::Standing,
            ExerciseRequirement::CanDoWhileNursing,
            ExerciseRequirement::BabyCarrierOrHold,
            ExerciseRequirement::NoEquipment,
            ExerciseRequirement::SupportPillow,
            ExerciseRequirement::QuietEnvironment,
            ExerciseRequirement::TummyTime,
            ExerciseRequirement::ResistanceBand,
            ExerciseRequirement::Chair,
            ExerciseRequirement::YogaMat,
            ExerciseRequirement::SmallWeights,
            ExerciseRequirement::WallSpace,
            ExerciseRequirement::WaterBottle,
        ]
    }
}

impl fmt::Display for ExerciseRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Benefits an exercise provides.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseBenefit {
    // Core and pelvic health
    PelvicFloorStrength,
    PelvicStability,
    CoreActivation,
    CoreStability,
    CoreStrength,
    AbdominalHealing,
    DiastasisRectiRecovery,

    // Musculoskeletal
    PostureSupport,
    ImprovedPosture,
    PostureImprovement,
    BackPainRelief,
    NeckTensionRelief,
    LegStrength,
    LowerBodyStrength,
    UpperBodyTone,
    UpperBodyStrength,
    JointMobility,
    Flexibility,
    Balance,
    Strength,
    Endurance,

    // Mental and emotional
    StressRelief,
    Mindfulness,
    Relaxation,
    Focus,
    Energy,
    Calm,
    MoodImprovement,
    SleepQuality,

    // Functional
    ImprovedCarryingCapacity,
    BetterNursingPosture,
    ReducedFatigue,
    Connection,
    ImprovedBodyAwareness,
    HormonalBalance,
}

impl ExerciseBenefit {
    /// Display label as shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseBenefit::PelvicFloorStrength => "Pelvic floor strength",
            ExerciseBenefit::PelvicStability => "Pelvic stability",
            ExerciseBenefit::CoreActivation => "Core activation",
            ExerciseBenefit::CoreStability => "Core stability",
            ExerciseBenefit::CoreStrength => "Core strength",
            ExerciseBenefit::AbdominalHealing => "Abdominal healing",
            ExerciseBenefit::DiastasisRectiRecovery => "Diastasis recti recovery",
            ExerciseBenefit::PostureSupport => "Posture support",
            ExerciseBenefit::ImprovedPosture => "Improved posture",
            ExerciseBenefit::PostureImprovement => "Posture improvement",
            ExerciseBenefit::BackPainRelief => "Back pain relief",
            ExerciseBenefit::NeckTensionRelief => "Neck tension relief",
            ExerciseBenefit::LegStrength => "Leg strength",
            ExerciseBenefit::LowerBodyStrength => "Lower body strength",
            ExerciseBenefit::UpperBodyTone => "Upper body tone",
            ExerciseBenefit::UpperBodyStrength => "Upper body strength",
            ExerciseBenefit::JointMobility => "Joint mobility",
            ExerciseBenefit::Flexibility => "Flexibility",
            ExerciseBenefit::Balance => "Balance",
            ExerciseBenefit::Strength => "Strength",
            ExerciseBenefit::Endurance => "Endurance",
            ExerciseBenefit::StressRelief => "Stress relief",
            ExerciseBenefit::Mindfulness => "Mindfulness",
            ExerciseBenefit::Relaxation => "Relaxation",
            ExerciseBenefit::Focus => "Focus",
            ExerciseBenefit::Energy => "Energy",
            ExerciseBenefit::Calm => "Calm",
            ExerciseBenefit::MoodImprovement => "Mood improvement",
            ExerciseBenefit::SleepQuality => "Better sleep quality",
            ExerciseBenefit::ImprovedCarryingCapacity => "Improved carrying capacity",
            ExerciseBenefit::BetterNursingPosture => "Better nursing posture",
            ExerciseBenefit::ReducedFatigue => "Reduced fatigue",
            ExerciseBenefit::Connection => "Connection with baby",
            ExerciseBenefit::ImprovedBodyAwareness => "Improved body awareness",
            ExerciseBenefit::HormonalBalance => "Hormonal balance support",
        }
    }
}

impl fmt::Display for ExerciseBenefit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Medical conditions under which an exercise should be avoided.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseContraindication {
    // Postpartum recovery stages
    ImmediatePostpartum,
    CesareanRecovery,
    AcutePerinealTear,
    HeavyBleeding,

    // Pelvic and abdominal concerns
    SevereDiastasisRecti,
    PelvicOrganProlapse,
    PelvicPain,
    UrinaryIncontinence,

    // Maternal health conditions
    UncontrolledBloodPressure,
    Preeclampsia,
    ActiveInfection,
    ExcessiveFatigue,
    Dizziness,

    // Pain and discomfort
    BackPain,
    JointPain,
    Headache,
    Migraine,
    MuscleStrain,
    AbdominalPain,
    ShoulderPain,
    NeckPain,
    WristPain,
    KneePain,

    // General exercise considerations
    NoMedicalClearance,
    NotMedicallyApproved,
    Dehydration,
    SleepDeprivation,
}

impl ExerciseContraindication {
    /// Display label as shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseContraindication::ImmediatePostpartum => "Immediate postpartum (0-6 weeks)",
            ExerciseContraindication::CesareanRecovery => "Cesarean recovery (0-8 weeks)",
            ExerciseContraindication::AcutePerinealTear => "Acute perineal tear healing",
            ExerciseContraindication::HeavyBleeding => "Heavy postpartum bleeding",
            ExerciseContraindication::SevereDiastasisRecti => {
                "Severe diastasis recti (>3 finger width)"
            }
            ExerciseContraindication::PelvicOrganProlapse => "Pelvic organ prolapse symptoms",
            ExerciseContraindication::PelvicPain => "Pelvic pain or discomfort",
            ExerciseContraindication::UrinaryIncontinence => "Active urinary incontinence",
            ExerciseContraindication::UncontrolledBloodPressure => {
                "Uncontrolled high blood pressure"
            }
            ExerciseContraindication::Preeclampsia => "Preeclampsia symptoms",
            ExerciseContraindication::ActiveInfection => "Active infection or fever",
            ExerciseContraindication::ExcessiveFatigue => "Excessive fatigue or exhaustion",
            ExerciseContraindication::Dizziness => "Dizziness or lightheadedness",
            ExerciseContraindication::BackPain => "Acute back pain",
            ExerciseContraindication::JointPain => "Joint pain during exercise",
            ExerciseContraindication::Headache => "Severe headache",
            ExerciseContraindication::Migraine => "Active migraine",
            ExerciseContraindication::MuscleStrain => "Muscle strain or injury",
            ExerciseContraindication::AbdominalPain => "Acute abdominal pain",
            ExerciseContraindication::ShoulderPain => "Shoulder pain",
            ExerciseContraindication::NeckPain => "Neck pain",
            ExerciseContraindication::WristPain => "Wrist pain",
            ExerciseContraindication::KneePain => "Knee pain",
            ExerciseContraindication::NoMedicalClearance => "No medical clearance for exercise",
            ExerciseContraindication::NotMedicallyApproved => {
                "Not medically approved for specific exercises"
            }
            ExerciseContraindication::Dehydration => "Dehydration",
            ExerciseContraindication::SleepDeprivation => "Severe sleep deprivation",
        }
    }
}

impl fmt::Display for ExerciseContraindication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Exercise Record
// ============================================================================

/// A single exercise in the catalog.
///
/// Catalog records are immutable; the catalog is built once at startup and
/// never mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable unique identifier.
    pub id: String,
    /// Title shown on cards and in search results.
    pub title: String,
    /// Category tag.
    pub category: ExerciseCategory,
    /// Duration in minutes, always positive.
    pub duration: u32,
    /// URL or path of the display asset.
    pub image: String,
    /// Context/equipment needed to perform the exercise.
    pub requirements: Vec<ExerciseRequirement>,
    /// Benefits the exercise provides.
    pub benefits: Vec<ExerciseBenefit>,
    /// Parent-infant bonding suggestions, at least one per exercise.
    pub connection_tips: Vec<String>,
    /// Conditions under which this exercise should be skipped.
    pub contraindications: Option<Vec<ExerciseContraindication>>,
    /// Step-by-step instructions.
    pub steps: Option<Vec<String>>,
    /// Easier/harder variations.
    pub modifications: Option<Vec<String>>,
    /// Difficulty level label.
    pub level: Option<String>,
    /// Recommended postpartum stages (e.g. "0-6 weeks").
    pub recommended_stage: Option<Vec<String>>,
    /// Short description.
    pub description: Option<String>,
}

// ============================================================================
// Filtering
// ============================================================================

/// Duration buckets for filtering exercises.
///
/// "Under 5 min" keeps durations strictly below 5; "5-10 min" is inclusive
/// on both ends, so a 5-minute exercise falls in the 5-10 bucket only.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DurationFilter {
    #[default]
    All,
    Under5Min,
    FiveToTenMin,
}

impl DurationFilter {
    /// Display label as shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            DurationFilter::All => "All",
            DurationFilter::Under5Min => "Under 5 min",
            DurationFilter::FiveToTenMin => "5-10 min",
        }
    }

    /// All duration buckets, in display order.
    pub fn all() -> &'static [DurationFilter] {
        &[
            DurationFilter::All,
            DurationFilter::Under5Min,
            DurationFilter::FiveToTenMin,
        ]
    }
}

impl fmt::Display for DurationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Filter criteria for browsing the catalog.
///
/// `None` on category/requirement means "All" (no filtering on that axis).
#[derive(Clone, Debug, Default)]
pub struct ExerciseFilters {
    pub category: Option<ExerciseCategory>,
    pub duration: DurationFilter,
    pub requirement: Option<ExerciseRequirement>,
    /// Free-text query matched against titles, category, benefit and
    /// requirement labels. Blank/whitespace-only queries are ignored.
    pub search_query: Option<String>,
}

/// Post-filter options: shuffle and/or truncate the result list.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterOptions {
    pub random: bool,
    pub limit: Option<usize>,
}

// ============================================================================
// Quick Pick
// ============================================================================

/// The fixed quick-pick time budgets.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuickPickType {
    Micro,
    Reset,
    Mini,
}

/// A quick-pick bucket: a time budget plus presentation hints.
#[derive(Clone, Copy, Debug)]
pub struct QuickPickOption {
    pub kind: QuickPickType,
    /// Duration budget in minutes.
    pub minutes: u32,
    /// Maximum number of exercises shown for this bucket.
    pub exercise_count: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

// ============================================================================
// Persisted Records
// ============================================================================

/// Per-exercise favorite flag, at most one row per exercise.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExercisePreference {
    pub exercise_id: String,
    pub is_favorite: bool,
}

/// One completion event. Rows are created by the completion store with a
/// storage-assigned id and timestamp.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedExercise {
    pub id: i64,
    pub exercise_id: String,
    pub completed_at: DateTime<Utc>,
}

// ============================================================================
// Catalog
// ============================================================================

/// The complete read-only set of exercises shipped with the application,
/// together with the default contraindication list shown in health notices.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub default_contraindications: Vec<ExerciseContraindication>,
}
