//! Pure numeric formulas behind the planner: BMI, daily calorie need and
//! water intake. All functions are total over validated input and return
//! `Error::InvalidInput` for anything outside their documented domain.

use crate::{ActivityLevel, BmiCategory, Gender, Goal, Result, invalid_input};

/// Body Mass Index: weight(kg) / height(m)^2, rounded to 2 decimals.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    ensure_positive("weight", weight_kg)?;
    ensure_positive("height", height_cm)?;

    let height_m = height_cm / 100.0;
    Ok(round2(weight_kg / (height_m * height_m)))
}

/// WHO-style BMI classification.
///
/// Boundaries are the clean 18.5 / 25 / 30 thresholds; the narrow gaps left
/// by the 24.9 / 29.9 literals some calculators use are intentionally closed.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Suggested daily calorie intake.
///
/// Harris-Benedict BMR scaled by the activity multiplier, then shifted by the
/// goal adjustment (lose: -500, gain: +500, fit: 0). Rounded to the nearest
/// kcal and floored at zero.
pub fn daily_calories(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
    goal: Goal,
) -> Result<u32> {
    ensure_positive("weight", weight_kg)?;
    ensure_positive("height", height_cm)?;
    if age == 0 {
        invalid_input!("age must be greater than zero");
    }

    let bmr = match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * f64::from(age),
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * f64::from(age),
    };

    let calories = bmr * activity.multiplier() + goal.calorie_adjustment();
    Ok(calories.round().max(0.0) as u32)
}

/// Recommended daily water intake in milliliters: 33 ml per kg of body
/// weight, rounded to the nearest ml.
pub fn water_intake_ml(weight_kg: f64) -> Result<u32> {
    ensure_positive("weight", weight_kg)?;
    Ok((weight_kg * 33.0).round() as u32)
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        invalid_input!("{name} must be a positive number");
    }
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
