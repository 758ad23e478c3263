//! Body-composition and energy-expenditure estimation.
//!
//! The calculator never measures fat or muscle directly; the current state
//! is reconstructed from age, height, weight and gender. The model is an
//! explicitly approximate heuristic, not a medical instrument.
//!
//! All functions are pure.

use crate::types::{ActivityLevel, BodyComposition, Gender};

/// BMI considered the healthy midpoint for the fat-percentage baseline
const HEALTHY_BMI: f64 = 22.0;
/// Fat-percentage points added per BMI unit away from the healthy midpoint
const FAT_PERCENT_PER_BMI_UNIT: f64 = 1.2;
/// Fat-percentage points added per year of age above the reference age
const FAT_PERCENT_PER_YEAR: f64 = 0.1;
/// Age below which no age adjustment is applied
const REFERENCE_AGE: f64 = 25.0;

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Estimate current body-fat percentage from BMI, age and gender.
///
/// Starts from a gender baseline at BMI ~22, adjusts linearly with the BMI
/// distance from that midpoint and with age above 25 (never downward for
/// younger people), then clamps to the gender's plausible range.
pub fn estimate_fat_percent(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> f64 {
    let bmi = calculate_bmi(weight_kg, height_cm);
    let age_adjustment = (age as f64 - REFERENCE_AGE).max(0.0) * FAT_PERCENT_PER_YEAR;
    let estimate = gender.baseline_fat_percent()
        + (bmi - HEALTHY_BMI) * FAT_PERCENT_PER_BMI_UNIT
        + age_adjustment;

    let (floor, ceiling) = gender.fat_percent_range();
    estimate.clamp(floor, ceiling)
}

/// Reconstruct the current body composition from the measured inputs.
///
/// muscle = lean mass × gender fraction; lean = weight − fat mass.
pub fn estimate_current(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> BodyComposition {
    let fat_percent = estimate_fat_percent(weight_kg, height_cm, age, gender);
    let fat_mass_kg = weight_kg * fat_percent / 100.0;
    let lean_mass_kg = weight_kg - fat_mass_kg;

    BodyComposition {
        weight_kg,
        fat_percent,
        muscle_mass_kg: lean_mass_kg * gender.muscle_fraction(),
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Total Daily Energy Expenditure, rounded to the nearest kilocalorie
///
/// TDEE = BMR × activity multiplier
pub fn daily_energy_expenditure(
    weight_kg: f64,
    height_cm: f64,
    age: i32,
    gender: Gender,
    activity: ActivityLevel,
) -> i32 {
    let bmr = calculate_bmr(weight_kg, height_cm, age, gender);
    (bmr * activity.multiplier()).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmi_calculation() {
        // 90kg, 180cm -> BMI ~27.78
        let bmi = calculate_bmi(90.0, 180.0);
        assert!((bmi - 27.78).abs() < 0.01);
    }

    #[test]
    fn test_bmr_mifflin_worked_example() {
        // Male, 30y, 180cm, 90kg -> 10*90 + 6.25*180 - 5*30 + 5 = 1880
        let bmr = calculate_bmr(90.0, 180.0, 30, Gender::Male);
        assert_eq!(bmr, 1880.0);

        // Same stats, female -> 1880 - 166 = 1714
        let bmr = calculate_bmr(90.0, 180.0, 30, Gender::Female);
        assert_eq!(bmr, 1714.0);
    }

    #[test]
    fn test_tdee_worked_example() {
        // BMR 1880 * 1.375 = 2585
        let tdee = daily_energy_expenditure(90.0, 180.0, 30, Gender::Male, ActivityLevel::Moderate);
        assert_eq!(tdee, 2585);
    }

    #[test]
    fn test_fat_percent_baseline_at_healthy_bmi() {
        // BMI exactly 22, age 25: baseline only
        let weight = 22.0 * 1.80 * 1.80;
        let male = estimate_fat_percent(weight, 180.0, 25, Gender::Male);
        assert!((male - 10.0).abs() < 1e-9);
        let female = estimate_fat_percent(weight, 180.0, 25, Gender::Female);
        assert!((female - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_age_adjustment_below_reference() {
        let at_25 = estimate_fat_percent(75.0, 180.0, 25, Gender::Male);
        let at_18 = estimate_fat_percent(75.0, 180.0, 18, Gender::Male);
        assert_eq!(at_25, at_18);

        let at_40 = estimate_fat_percent(75.0, 180.0, 40, Gender::Male);
        assert!(at_40 > at_25);
    }

    #[test]
    fn test_fat_percent_clamped_to_gender_range() {
        // Very lean input hits the floor
        let lean = estimate_fat_percent(45.0, 200.0, 16, Gender::Male);
        assert_eq!(lean, 8.0);
        let lean = estimate_fat_percent(45.0, 200.0, 16, Gender::Female);
        assert_eq!(lean, 15.0);

        // Very heavy input hits the ceiling
        let heavy = estimate_fat_percent(200.0, 150.0, 70, Gender::Male);
        assert_eq!(heavy, 40.0);
        let heavy = estimate_fat_percent(200.0, 150.0, 70, Gender::Female);
        assert_eq!(heavy, 45.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: for every valid input, fat% stays in the gender range
        /// and estimated muscle mass is positive.
        #[test]
        fn prop_estimate_within_documented_range(
            weight in 40.0f64..=200.0,
            height in 140i32..=220,
            age in 16i32..=70,
        ) {
            for gender in [Gender::Male, Gender::Female] {
                let estimate = estimate_current(weight, height as f64, age, gender);
                let (floor, ceiling) = gender.fat_percent_range();
                prop_assert!(estimate.fat_percent >= floor && estimate.fat_percent <= ceiling);
                prop_assert!(estimate.muscle_mass_kg > 0.0);
                prop_assert!(estimate.muscle_mass_kg < estimate.weight_kg);
            }
        }

        /// Property: male BMR exceeds female BMR for identical stats
        #[test]
        fn prop_male_bmr_higher(
            weight in 40.0f64..=200.0,
            height in 140i32..=220,
            age in 16i32..=70,
        ) {
            let male = calculate_bmr(weight, height as f64, age, Gender::Male);
            let female = calculate_bmr(weight, height as f64, age, Gender::Female);
            prop_assert!(male > female);
        }

        /// Property: TDEE grows with activity level
        #[test]
        fn prop_tdee_monotone_in_activity(
            weight in 40.0f64..=200.0,
            height in 140i32..=220,
            age in 16i32..=70,
        ) {
            let beginner =
                daily_energy_expenditure(weight, height as f64, age, Gender::Male, ActivityLevel::Beginner);
            let moderate =
                daily_energy_expenditure(weight, height as f64, age, Gender::Male, ActivityLevel::Moderate);
            let advanced =
                daily_energy_expenditure(weight, height as f64, age, Gender::Male, ActivityLevel::Advanced);
            prop_assert!(beginner < moderate && moderate < advanced);
        }
    }
}
