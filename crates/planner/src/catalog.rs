//! Fixed lookup tables behind the plan builder: the exercise catalog, the
//! per-goal weekly structure, the meal catalog and the per-goal explanation
//! copy. Everything here is immutable `'static` data behind read-only
//! accessors; the builder never mutates it.

use crate::{ActivityLevel, Goal, MealSlot, MuscleGroup};

/// One slot of the 7-day weekly structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySlot {
    Rest,
    Single(MuscleGroup),
    /// Combined strength day covering two groups; the builder always appends
    /// one core exercise on top.
    Split(MuscleGroup, MuscleGroup),
}

const CARDIO: &[&str] = &[
    "High-Intensity Interval Training (HIIT)",
    "Long-Slow Distance (LSD) Cardio",
    "Fartlek Training",
];
const CHEST: &[&str] = &["Bench Press", "Incline Dumbbell Press", "Push-ups", "Chest Flys"];
const BACK: &[&str] = &["Pull-ups", "Deadlifts", "Bent-over Rows", "Lat Pulldowns"];
const LEGS: &[&str] = &["Squats", "Lunges", "Leg Press", "Romanian Deadlifts", "Calf Raises"];
const SHOULDERS: &[&str] = &["Overhead Press", "Lateral Raises", "Front Raises", "Face Pulls"];
const ARMS: &[&str] = &["Bicep Curls", "Tricep Dips", "Hammer Curls", "Tricep Pushdowns"];
const CORE: &[&str] = &["Plank", "Crunches", "Leg Raises", "Russian Twists", "Hanging Knee Raises"];
const FLEXIBILITY: &[&str] = &["Yoga", "Dynamic Stretching", "Static Stretching"];

/// Named exercises for one muscle/activity group.
pub fn exercises(group: MuscleGroup) -> &'static [&'static str] {
    match group {
        MuscleGroup::Cardio => CARDIO,
        MuscleGroup::Chest => CHEST,
        MuscleGroup::Back => BACK,
        MuscleGroup::Legs => LEGS,
        MuscleGroup::Shoulders => SHOULDERS,
        MuscleGroup::Arms => ARMS,
        MuscleGroup::Core => CORE,
        MuscleGroup::Flexibility => FLEXIBILITY,
    }
}

use DaySlot::{Rest, Single, Split};
use MuscleGroup::{Arms, Back, Cardio, Chest, Core, Flexibility, Legs, Shoulders};

const LOSE_WEEK: [DaySlot; 7] = [
    Single(Cardio),
    Split(Chest, Back),
    Single(Cardio),
    Single(Legs),
    Split(Shoulders, Arms),
    Single(Core),
    Single(Flexibility),
];

const GAIN_WEEK: [DaySlot; 7] = [
    Split(Chest, Arms),
    Single(Legs),
    Single(Back),
    Split(Shoulders, Core),
    Single(Legs),
    Rest,
    Rest,
];

const FIT_WEEK: [DaySlot; 7] = [
    Split(Chest, Back),
    Single(Legs),
    Single(Cardio),
    Split(Shoulders, Arms),
    Single(Core),
    Single(Flexibility),
    Rest,
];

/// The 7-slot weekly structure for a goal, Monday first.
pub fn weekly_structure(goal: Goal) -> &'static [DaySlot; 7] {
    match goal {
        Goal::Lose => &LOSE_WEEK,
        Goal::Gain => &GAIN_WEEK,
        Goal::Fit => &FIT_WEEK,
    }
}

const BREAKFAST: &[&str] = &[
    "Oatmeal with berries, nuts, and a scoop of protein powder",
    "Scrambled eggs (3) with spinach and a side of whole wheat toast",
    "Greek yogurt with granola, honey, and fresh fruit",
    "Protein smoothie with almond milk, banana, and spinach",
];
const LUNCH: &[&str] = &[
    "Grilled chicken breast salad with mixed greens, quinoa, and a light vinaigrette",
    "Large bowl of lentil soup with a side of whole grain bread",
    "Turkey and avocado wrap with a side of carrot sticks",
    "Salmon fillet with a side of brown rice and roasted broccoli",
];
const DINNER: &[&str] = &[
    "Baked cod with sweet potato wedges and asparagus",
    "Lean ground beef stir-fry with mixed vegetables and brown rice",
    "Vegetarian chili loaded with beans and vegetables",
    "Chicken breast with a large side of mixed greens and balsamic vinaigrette",
    "Tofu and vegetable curry with basmati rice",
];
const SNACKS: &[&str] = &[
    "Apple slices with almond butter",
    "A handful of mixed nuts and seeds",
    "Protein shake",
    "Cottage cheese with pineapple chunks",
    "Two hard-boiled eggs",
    "Greek yogurt",
];

/// Meal suggestions for one slot of the day.
pub fn meal_options(slot: MealSlot) -> &'static [&'static str] {
    match slot {
        MealSlot::Breakfast => BREAKFAST,
        MealSlot::Lunch => LUNCH,
        MealSlot::Dinner => DINNER,
        MealSlot::Snacks => SNACKS,
    }
}

/// Sets/reps prescription for combined strength days.
pub fn sets_reps(goal: Goal, activity: ActivityLevel) -> &'static str {
    match goal {
        Goal::Gain if activity == ActivityLevel::High => "5 sets of 6-8 reps",
        Goal::Gain => "4 sets of 8-10 reps",
        Goal::Lose if activity == ActivityLevel::High => "4 sets of 12-15 reps",
        Goal::Lose => "3 sets of 15-20 reps",
        Goal::Fit => "3 sets of 10-12 reps",
    }
}

/// Session duration for single-group days. Cardio scales with the activity
/// level; everything else gets the fixed strength window.
pub fn session_duration(group: MuscleGroup, activity: ActivityLevel) -> &'static str {
    match (group, activity) {
        (MuscleGroup::Cardio, ActivityLevel::Low) => "30 mins",
        (MuscleGroup::Cardio, ActivityLevel::Moderate) => "45 mins",
        (MuscleGroup::Cardio, ActivityLevel::High) => "60 mins",
        _ => "45-60 mins",
    }
}

pub fn workout_explanation(goal: Goal) -> &'static str {
    match goal {
        Goal::Lose => {
            "This plan focuses on high-intensity workouts and cardio to maximize calorie burn \
             and fat loss, while also including strength training to maintain muscle mass."
        }
        Goal::Gain => {
            "This plan emphasizes heavy compound lifts and progressive overload to stimulate \
             muscle growth. Rest days are crucial for muscle recovery and repair."
        }
        Goal::Fit => {
            "This plan provides a balanced mix of strength, cardio, and flexibility to maintain \
             your current fitness level and improve overall health and well-being."
        }
    }
}

pub fn diet_explanation(goal: Goal) -> &'static str {
    match goal {
        Goal::Lose => {
            "This diet is designed to be in a calorie deficit of approximately 500 calories per \
             day to promote gradual and sustainable weight loss. It is high in protein to help \
             you feel full and maintain muscle."
        }
        Goal::Gain => {
            "This diet provides a calorie surplus of approximately 500 calories per day to \
             support muscle growth. It is rich in protein and complex carbohydrates to fuel \
             your workouts and aid in recovery."
        }
        Goal::Fit => {
            "This diet is designed to provide you with the right balance of macronutrients to \
             maintain your current weight and support an active lifestyle. It is focused on \
             whole, nutrient-dense foods."
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn every_group_has_three_to_five_exercises() {
        for group in MuscleGroup::VARIANTS {
            let list = exercises(*group);
            assert!(
                (3..=5).contains(&list.len()),
                "{group} has {} exercises",
                list.len()
            );
        }
    }

    #[test]
    fn weekly_structures_cover_all_goals() {
        let rest_days = |goal| {
            weekly_structure(goal)
                .iter()
                .filter(|slot| **slot == DaySlot::Rest)
                .count()
        };
        assert_eq!(rest_days(Goal::Lose), 0);
        assert_eq!(rest_days(Goal::Gain), 2);
        assert_eq!(rest_days(Goal::Fit), 1);
    }

    #[test]
    fn every_meal_slot_has_options() {
        for slot in MealSlot::VARIANTS {
            assert!(!meal_options(*slot).is_empty());
        }
    }

    #[test]
    fn sets_reps_table_matches_goal_and_activity() {
        assert_eq!(sets_reps(Goal::Gain, ActivityLevel::High), "5 sets of 6-8 reps");
        assert_eq!(sets_reps(Goal::Gain, ActivityLevel::Low), "4 sets of 8-10 reps");
        assert_eq!(sets_reps(Goal::Lose, ActivityLevel::High), "4 sets of 12-15 reps");
        assert_eq!(sets_reps(Goal::Lose, ActivityLevel::Moderate), "3 sets of 15-20 reps");
        assert_eq!(sets_reps(Goal::Fit, ActivityLevel::High), "3 sets of 10-12 reps");
    }

    #[test]
    fn cardio_duration_scales_with_activity() {
        assert_eq!(session_duration(MuscleGroup::Cardio, ActivityLevel::Low), "30 mins");
        assert_eq!(session_duration(MuscleGroup::Cardio, ActivityLevel::Moderate), "45 mins");
        assert_eq!(session_duration(MuscleGroup::Cardio, ActivityLevel::High), "60 mins");
        assert_eq!(session_duration(MuscleGroup::Legs, ActivityLevel::High), "45-60 mins");
    }
}
