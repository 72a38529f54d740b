//! Table-driven plan builder. Resolves the per-goal weekly structure and the
//! meal catalog into a concrete `PlanResult` for one profile.
//!
//! Randomness is injectable: every builder has a `_with` variant taking the
//! rng, and the plain variant delegates with `rand::rng()`. Repeated calls
//! with identical inputs may pick different concrete exercises and meals;
//! only the structural shape is deterministic.

use std::fmt;

use rand::Rng;
use rand::RngExt;
use validator::Validate;

use crate::catalog::{self, DaySlot};
use crate::{
    ActivityLevel, BmiCategory, Goal, MealSlot, MuscleGroup, Result, UserProfile, Weekday,
    formulas,
};

/// One resolved day of the weekly workout.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutDay {
    Rest,
    /// Single-group day: one exercise with a duration window.
    Session {
        focus: MuscleGroup,
        exercise: &'static str,
        duration: &'static str,
    },
    /// Combined strength day: one pick per split group plus one core pick.
    Strength {
        exercises: [&'static str; 3],
        sets_reps: &'static str,
    },
}

impl fmt::Display for WorkoutDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutDay::Rest => f.write_str("Rest Day"),
            WorkoutDay::Session { focus, exercise, duration } => {
                write!(f, "{focus}: {exercise} ({duration})")
            }
            WorkoutDay::Strength { exercises: [a, b, core], sets_reps } => {
                write!(f, "Strength: {a}, {b}, {core} ({sets_reps})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDay {
    pub weekday: Weekday,
    pub workout: WorkoutDay,
}

/// 7-day workout plan, Monday first, with the per-goal explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyWorkout {
    pub days: Vec<PlannedDay>,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMeal {
    pub slot: MealSlot,
    pub description: String,
    pub portion_kcal: u32,
}

/// Daily diet plan: one entry per meal slot plus the calorie total and the
/// per-goal explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyDiet {
    pub meals: Vec<PlannedMeal>,
    pub total_kcal: u32,
    pub explanation: &'static str,
}

/// Full recommendation bundle for one planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub daily_calories: u32,
    pub water_intake_ml: u32,
    pub workout: WeeklyWorkout,
    pub diet: DailyDiet,
}

/// Generate the full plan for a validated profile.
pub fn generate_plan(profile: &UserProfile) -> Result<PlanResult> {
    generate_plan_with(&mut rand::rng(), profile)
}

/// Same as [`generate_plan`] with an injected random source, so plan-shape
/// tests can run against a seeded rng.
pub fn generate_plan_with<R: Rng + ?Sized>(rng: &mut R, profile: &UserProfile) -> Result<PlanResult> {
    profile.validate()?;

    let bmi = formulas::bmi(profile.weight_kg, profile.height_cm)?;
    let daily_calories = formulas::daily_calories(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        profile.activity,
        profile.goal,
    )?;
    let water_intake_ml = formulas::water_intake_ml(profile.weight_kg)?;

    let workout = build_workout_plan_with(rng, profile.goal, profile.activity);
    let diet = build_diet_plan_with(rng, daily_calories, profile.goal);

    tracing::debug!(
        goal = %profile.goal,
        activity = %profile.activity,
        daily_calories,
        "plan generated"
    );

    Ok(PlanResult {
        bmi,
        bmi_category: formulas::bmi_category(bmi),
        daily_calories,
        water_intake_ml,
        workout,
        diet,
    })
}

/// Resolve the weekly structure for a goal into 7 concrete days.
pub fn build_workout_plan(goal: Goal, activity: ActivityLevel) -> WeeklyWorkout {
    build_workout_plan_with(&mut rand::rng(), goal, activity)
}

pub fn build_workout_plan_with<R: Rng + ?Sized>(
    rng: &mut R,
    goal: Goal,
    activity: ActivityLevel,
) -> WeeklyWorkout {
    use strum::VariantArray;

    let days = Weekday::VARIANTS
        .iter()
        .zip(catalog::weekly_structure(goal))
        .map(|(weekday, slot)| {
            let workout = match *slot {
                DaySlot::Rest => WorkoutDay::Rest,
                DaySlot::Single(group) => WorkoutDay::Session {
                    focus: group,
                    exercise: pick(rng, catalog::exercises(group)),
                    duration: catalog::session_duration(group, activity),
                },
                DaySlot::Split(first, second) => WorkoutDay::Strength {
                    exercises: [
                        pick(rng, catalog::exercises(first)),
                        pick(rng, catalog::exercises(second)),
                        pick(rng, catalog::exercises(MuscleGroup::Core)),
                    ],
                    sets_reps: catalog::sets_reps(goal, activity),
                },
            };

            PlannedDay { weekday: *weekday, workout }
        })
        .collect();

    WeeklyWorkout {
        days,
        explanation: catalog::workout_explanation(goal),
    }
}

/// Pick one meal per slot (two for snacks) and portion the calorie budget
/// across the 25/35/30/10% split, rounded to the nearest 50 kcal.
pub fn build_diet_plan(daily_calories: u32, goal: Goal) -> DailyDiet {
    build_diet_plan_with(&mut rand::rng(), daily_calories, goal)
}

pub fn build_diet_plan_with<R: Rng + ?Sized>(
    rng: &mut R,
    daily_calories: u32,
    goal: Goal,
) -> DailyDiet {
    use strum::VariantArray;

    let meals = MealSlot::VARIANTS
        .iter()
        .map(|slot| {
            let options = catalog::meal_options(*slot);
            let description = match slot {
                MealSlot::Snacks => format!("{}, {}", pick(rng, options), pick(rng, options)),
                _ => pick(rng, options).to_string(),
            };

            PlannedMeal {
                slot: *slot,
                description,
                portion_kcal: portion_kcal(daily_calories, slot.fraction()),
            }
        })
        .collect();

    DailyDiet {
        meals,
        total_kcal: daily_calories,
        explanation: catalog::diet_explanation(goal),
    }
}

fn portion_kcal(daily_calories: u32, fraction: f64) -> u32 {
    ((f64::from(daily_calories) * fraction / 50.0).round() as u32) * 50
}

// Uniform selection with replacement. Catalogs are static and non-empty.
fn pick<R: Rng + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}
