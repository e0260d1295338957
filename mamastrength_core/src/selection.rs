//! Exercise selection engine.
//!
//! Pure query functions over the catalog: category/duration/requirement
//! filtering with free-text search, randomized sampling, and the greedy
//! time-budget packer behind the "quick pick" flow. Nothing in this module
//! touches storage or returns errors; empty inputs yield empty results.

use crate::types::*;
use rand::seq::SliceRandom;

/// The fixed quick-pick buckets offered by the UI.
pub const QUICK_PICK_OPTIONS: [QuickPickOption; 3] = [
    QuickPickOption {
        kind: QuickPickType::Micro,
        minutes: 2,
        exercise_count: 2,
        title: "Micro Movement",
        description: "Perfect for when baby is fussy or you only have a moment",
        color: "bg-mama-light-pink",
    },
    QuickPickOption {
        kind: QuickPickType::Reset,
        minutes: 5,
        exercise_count: 3,
        title: "Quick Reset",
        description: "A short but effective reset for your body and mind",
        color: "bg-mama-light-blue",
    },
    QuickPickOption {
        kind: QuickPickType::Mini,
        minutes: 10,
        exercise_count: 4,
        title: "Mini Session",
        description: "A more complete movement session when you have a bit more time",
        color: "bg-mama-sage",
    },
];

/// All quick-pick buckets, for UI population.
pub fn quick_pick_options() -> &'static [QuickPickOption] {
    &QUICK_PICK_OPTIONS
}

/// Look up a single quick-pick bucket by kind.
pub fn quick_pick_option(kind: QuickPickType) -> Option<&'static QuickPickOption> {
    QUICK_PICK_OPTIONS.iter().find(|option| option.kind == kind)
}

/// Filter the catalog by the given criteria, optionally shuffling and
/// truncating the result.
///
/// Category, duration bucket, requirement and the free-text search are
/// applied as a conjunction; a record must pass every present criterion.
/// The search term matches case-insensitively against the title, the
/// category label, and every benefit/requirement label. Result order is
/// catalog order unless `options.random` is set.
pub fn filter_exercises(
    catalog: &Catalog,
    filters: &ExerciseFilters,
    options: FilterOptions,
) -> Vec<Exercise> {
    let query = filters
        .search_query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let mut filtered: Vec<Exercise> = catalog
        .exercises
        .iter()
        .filter(|exercise| {
            if let Some(category) = filters.category {
                if exercise.category != category {
                    return false;
                }
            }

            if !matches_duration(exercise.duration, filters.duration) {
                return false;
            }

            if let Some(requirement) = filters.requirement {
                if !exercise.requirements.contains(&requirement) {
                    return false;
                }
            }

            match query {
                Some(ref q) => matches_search(exercise, q),
                None => true,
            }
        })
        .cloned()
        .collect();

    if options.random {
        filtered.shuffle(&mut rand::thread_rng());
    }

    if let Some(limit) = options.limit {
        if limit > 0 {
            filtered.truncate(limit);
        }
    }

    filtered
}

fn matches_duration(duration: u32, filter: DurationFilter) -> bool {
    match filter {
        DurationFilter::All => true,
        DurationFilter::Under5Min => duration < 5,
        // Inclusive on both ends; exactly 5 minutes lands here.
        DurationFilter::FiveToTenMin => (5..=10).contains(&duration),
    }
}

fn matches_search(exercise: &Exercise, query: &str) -> bool {
    exercise.title.to_lowercase().contains(query)
        || exercise
            .category
            .display_name()
            .to_lowercase()
            .contains(query)
        || exercise
            .benefits
            .iter()
            .any(|benefit| benefit.display_name().to_lowercase().contains(query))
        || exercise
            .requirements
            .iter()
            .any(|requirement| requirement.display_name().to_lowercase().contains(query))
}

/// Find exercises that fit within a time limit, longest first.
///
/// Single-pass greedy packing: the eligible list is sorted by duration
/// descending and each exercise is taken if it still fits the remaining
/// budget. The result's total duration never exceeds `time_limit`; a
/// smaller combination can occasionally use the budget better, which is an
/// accepted trade-off of the greedy pass.
pub fn find_exercises_for_time_limit(catalog: &Catalog, time_limit: u32) -> Vec<Exercise> {
    pack_time_budget(&catalog.exercises, time_limit)
}

fn pack_time_budget(exercises: &[Exercise], time_limit: u32) -> Vec<Exercise> {
    let mut eligible: Vec<&Exercise> = exercises
        .iter()
        .filter(|exercise| exercise.duration <= time_limit)
        .collect();

    // Stable sort keeps the incoming order on duration ties.
    eligible.sort_by(|a, b| b.duration.cmp(&a.duration));

    let mut remaining = time_limit;
    let mut selected = Vec::new();

    for exercise in eligible {
        if exercise.duration <= remaining {
            remaining -= exercise.duration;
            selected.push(exercise.clone());

            if remaining == 0 {
                break;
            }
        }
    }

    selected
}

/// Find exercises for a quick-pick bucket.
///
/// Packs the bucket's minute budget and truncates to its display count.
/// With `randomize` the eligible pool is shuffled before packing so
/// repeated calls can surface different valid combinations.
pub fn find_exercises_for_quick_pick(
    catalog: &Catalog,
    kind: QuickPickType,
    randomize: bool,
) -> Vec<Exercise> {
    let option = match quick_pick_option(kind) {
        Some(option) => option,
        None => return Vec::new(),
    };

    let mut pool = catalog.exercises.clone();
    if randomize {
        pool.shuffle(&mut rand::thread_rng());
    }

    let mut selected = pack_time_budget(&pool, option.minutes);
    selected.truncate(option.exercise_count);
    selected
}

/// Category labels for the filter dropdown, "All" first.
pub fn all_categories() -> Vec<String> {
    std::iter::once("All".to_string())
        .chain(
            ExerciseCategory::all()
                .iter()
                .map(|category| category.display_name().to_string()),
        )
        .collect()
}

/// Duration bucket labels for the filter dropdown.
pub fn all_duration_ranges() -> Vec<String> {
    DurationFilter::all()
        .iter()
        .map(|filter| filter.display_name().to_string())
        .collect()
}

/// Requirement labels for the filter dropdown, "All" first.
pub fn all_requirements() -> Vec<String> {
    std::iter::once("All".to_string())
        .chain(
            ExerciseRequirement::all()
                .iter()
                .map(|requirement| requirement.display_name().to_string()),
        )
        .collect()
}

/// Total duration of a list of exercises, in minutes.
pub fn total_duration(exercises: &[Exercise]) -> u32 {
    exercises.iter().map(|exercise| exercise.duration).sum()
}
