use fitplan_planner::{
    ActivityLevel, Gender, Goal, MealSlot, UserProfile, Weekday, WorkoutDay, generate_plan,
};
use strum::VariantArray;

fn profile(gender: Gender, goal: Goal, activity: ActivityLevel) -> UserProfile {
    UserProfile {
        age: 34,
        weight_kg: 78.5,
        height_cm: 181.0,
        gender,
        goal,
        activity,
    }
}

#[test]
fn every_combination_yields_a_complete_plan() {
    for gender in Gender::VARIANTS {
        for goal in Goal::VARIANTS {
            for activity in ActivityLevel::VARIANTS {
                let plan = generate_plan(&profile(*gender, *goal, *activity)).unwrap();

                assert!(plan.bmi > 0.0);
                assert!(plan.daily_calories > 0);
                assert!(plan.water_intake_ml > 0);

                let weekdays: Vec<Weekday> =
                    plan.workout.days.iter().map(|d| d.weekday).collect();
                assert_eq!(weekdays, Weekday::VARIANTS);
                assert!(!plan.workout.explanation.is_empty());

                let slots: Vec<MealSlot> = plan.diet.meals.iter().map(|m| m.slot).collect();
                assert_eq!(slots, MealSlot::VARIANTS);
                assert_eq!(plan.diet.total_kcal, plan.daily_calories);
                assert!(!plan.diet.explanation.is_empty());

                let portion_sum: u32 = plan.diet.meals.iter().map(|m| m.portion_kcal).sum();
                assert!(plan.diet.meals.iter().all(|m| m.portion_kcal % 50 == 0));
                assert!(portion_sum.abs_diff(plan.daily_calories) <= 4 * 25);
            }
        }
    }
}

#[test]
fn gain_plans_keep_the_weekend_for_recovery() {
    let plan = generate_plan(&profile(Gender::Male, Goal::Gain, ActivityLevel::Moderate)).unwrap();

    let saturday = &plan.workout.days[5];
    let sunday = &plan.workout.days[6];
    assert_eq!(saturday.workout, WorkoutDay::Rest);
    assert_eq!(sunday.workout, WorkoutDay::Rest);
}

#[test]
fn goal_shifts_the_calorie_budget() {
    let lose = generate_plan(&profile(Gender::Female, Goal::Lose, ActivityLevel::Low)).unwrap();
    let fit = generate_plan(&profile(Gender::Female, Goal::Fit, ActivityLevel::Low)).unwrap();
    let gain = generate_plan(&profile(Gender::Female, Goal::Gain, ActivityLevel::Low)).unwrap();

    assert_eq!(fit.daily_calories - lose.daily_calories, 500);
    assert_eq!(gain.daily_calories - fit.daily_calories, 500);
}

#[test]
fn invalid_profiles_never_produce_a_plan() {
    let mut invalid = profile(Gender::Male, Goal::Fit, ActivityLevel::Moderate);
    invalid.weight_kg = 0.0;
    assert!(generate_plan(&invalid).is_err());

    let mut invalid = profile(Gender::Male, Goal::Fit, ActivityLevel::Moderate);
    invalid.height_cm = -170.0;
    assert!(generate_plan(&invalid).is_err());

    let mut invalid = profile(Gender::Male, Goal::Fit, ActivityLevel::Moderate);
    invalid.age = 0;
    assert!(generate_plan(&invalid).is_err());
}
