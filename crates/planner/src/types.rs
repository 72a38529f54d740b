use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Deserialize, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Deserialize, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Gain,
    Fit,
}

impl Goal {
    /// Daily calorie adjustment applied on top of the activity-scaled BMR.
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::Lose => -500.0,
            Goal::Gain => 500.0,
            Goal::Fit => 0.0,
        }
    }
}

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Deserialize, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Harris-Benedict activity multiplier.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Low => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
        }
    }
}

#[derive(Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MuscleGroup {
    Cardio,
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Flexibility,
}

#[derive(Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    /// Share of the daily calorie budget assigned to this slot.
    /// The four fractions sum to 1.0.
    pub fn fraction(self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snacks => 0.10,
        }
    }
}

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    #[strum(serialize = "Normal weight")]
    Normal,
    Overweight,
    #[strum(serialize = "Obesity")]
    Obese,
}

/// Validated planner input, scoped to a single planning request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: u32,

    #[validate(range(exclusive_min = 0.0, max = 500.0, message = "Weight must be a positive number of kilograms"))]
    pub weight_kg: f64,

    #[validate(range(exclusive_min = 0.0, max = 300.0, message = "Height must be a positive number of centimeters"))]
    pub height_cm: f64,

    pub gender: Gender,
    pub goal: Goal,
    pub activity: ActivityLevel,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn enums_parse_from_form_values() {
        assert_eq!(Gender::from_str("male").unwrap(), Gender::Male);
        assert_eq!(Goal::from_str("lose").unwrap(), Goal::Lose);
        assert_eq!(ActivityLevel::from_str("moderate").unwrap(), ActivityLevel::Moderate);
        assert!(Goal::from_str("bulk").is_err());
        assert!(ActivityLevel::from_str("extreme").is_err());
    }

    #[test]
    fn meal_fractions_sum_to_one() {
        let sum: f64 = MealSlot::VARIANTS.iter().map(|s| s.fraction()).sum();
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weekdays_are_in_fixed_order() {
        let names: Vec<String> = Weekday::VARIANTS.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }

    #[test]
    fn profile_validation_rejects_out_of_range_values() {
        let valid = UserProfile {
            age: 30,
            weight_kg: 70.0,
            height_cm: 175.0,
            gender: Gender::Male,
            goal: Goal::Fit,
            activity: ActivityLevel::Moderate,
        };
        assert!(valid.validate().is_ok());

        let zero_age = UserProfile { age: 0, ..valid.clone() };
        assert!(zero_age.validate().is_err());

        let negative_weight = UserProfile { weight_kg: -5.0, ..valid.clone() };
        assert!(negative_weight.validate().is_err());

        let nan_height = UserProfile { height_cm: f64::NAN, ..valid };
        assert!(nan_height.validate().is_err());
    }
}
