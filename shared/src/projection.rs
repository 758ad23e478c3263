//! Goal projection model.
//!
//! Takes the reconstructed current composition and projects it over the
//! chosen duration according to the selected goal. Achievable rates decay
//! with age, scale with activity level, and are capped both per week and
//! in total so the forecast stays inside realistic natural-training limits.
//!
//! The projection returns structured numeric deltas only; sentence
//! rendering lives in [`crate::i18n`].

use crate::types::{round1, ActivityLevel, BodyComposition, CalculatorInput, Goal, GoalOutcome};

/// Weekly loss may never exceed 1% of body weight
const MAX_WEEKLY_LOSS_OF_BODYWEIGHT: f64 = 0.01;
/// Total loss may never exceed 15% of the starting weight
const MAX_TOTAL_LOSS_OF_BODYWEIGHT: f64 = 0.15;
/// Share of lost weight attributed to fat
const FAT_SHARE_OF_LOSS: f64 = 0.85;
/// Share of lost weight conceded from muscle despite training
const MUSCLE_SHARE_OF_LOSS: f64 = 0.05;
/// Fat gained per kilogram of muscle built (inevitable surplus)
const FAT_GAIN_PER_MUSCLE_KG: f64 = 0.25;
/// Recomposition runs fat loss at a reduced rate
const RECOMP_LOSS_SCALE: f64 = 0.6;
/// Recomposition runs muscle gain at a reduced rate
const RECOMP_GAIN_SCALE: f64 = 0.5;
/// Recomposition total fat loss cap, share of starting weight
const RECOMP_MAX_LOSS_OF_BODYWEIGHT: f64 = 0.08;
/// Recomposition monthly muscle-gain ceiling, kg
const RECOMP_MONTHLY_GAIN_CAP_KG: f64 = 0.4;
/// Forecast muscle never drops below this share of the current estimate
const MUSCLE_REGRESSION_FLOOR: f64 = 0.90;

/// Rate multipliers by age bracket. Change comes slower with age, and
/// muscle gain decays faster than fat loss.
#[derive(Debug, Clone, Copy)]
struct AgeFactor {
    loss: f64,
    gain: f64,
}

fn age_factor(age: i32) -> AgeFactor {
    match age {
        i32::MIN..=25 => AgeFactor { loss: 1.10, gain: 1.20 },
        26..=35 => AgeFactor { loss: 1.00, gain: 1.00 },
        36..=45 => AgeFactor { loss: 0.90, gain: 0.85 },
        46..=55 => AgeFactor { loss: 0.80, gain: 0.75 },
        _ => AgeFactor { loss: 0.70, gain: 0.65 },
    }
}

/// Base achievable weekly rates in kg/week before age adjustment
#[derive(Debug, Clone, Copy)]
struct WeeklyRate {
    loss: f64,
    gain: f64,
}

fn weekly_rate(activity: ActivityLevel) -> WeeklyRate {
    match activity {
        ActivityLevel::Beginner => WeeklyRate { loss: 0.35, gain: 0.15 },
        ActivityLevel::Moderate => WeeklyRate { loss: 0.45, gain: 0.20 },
        ActivityLevel::Advanced => WeeklyRate { loss: 0.60, gain: 0.25 },
    }
}

/// Early-training adaptation multiplier, applied to muscle gain only
fn newbie_bonus(activity: ActivityLevel) -> f64 {
    match activity {
        ActivityLevel::Beginner => 1.5,
        ActivityLevel::Moderate => 1.2,
        ActivityLevel::Advanced => 1.0,
    }
}

/// Monthly muscle-gain ceiling in kg
fn monthly_gain_cap(activity: ActivityLevel) -> f64 {
    match activity {
        ActivityLevel::Beginner => 1.0,
        _ => 0.5,
    }
}

/// Project the forecast composition and the per-goal deltas.
///
/// Pure and deterministic. `current` must be the unrounded estimate; all
/// display rounding (one decimal place) happens here, after the clamps.
pub fn project(input: &CalculatorInput, current: &BodyComposition) -> (BodyComposition, GoalOutcome) {
    let weeks = input.duration.weeks() as f64;
    let months = input.duration.months() as f64;
    let factor = age_factor(input.age);
    let rate = weekly_rate(input.activity);
    let fat_mass = current.weight_kg * current.fat_percent / 100.0;

    let (weight, fat_mass, muscle, outcome) = match input.goal {
        Goal::WeightLoss => {
            let weekly = (rate.loss * factor.loss)
                .min(MAX_WEEKLY_LOSS_OF_BODYWEIGHT * current.weight_kg);
            let lost = (weekly * weeks).min(MAX_TOTAL_LOSS_OF_BODYWEIGHT * current.weight_kg);
            (
                current.weight_kg - lost,
                fat_mass - FAT_SHARE_OF_LOSS * lost,
                current.muscle_mass_kg - MUSCLE_SHARE_OF_LOSS * lost,
                GoalOutcome::WeightLoss { lost_kg: round1(lost) },
            )
        }
        Goal::MuscleGain => {
            let weekly = rate.gain * factor.gain * newbie_bonus(input.activity);
            let gained = (weekly * weeks).min(monthly_gain_cap(input.activity) * months);
            let fat_gained = FAT_GAIN_PER_MUSCLE_KG * gained;
            (
                current.weight_kg + gained + fat_gained,
                fat_mass + fat_gained,
                current.muscle_mass_kg + gained,
                GoalOutcome::MuscleGain { gained_kg: round1(gained) },
            )
        }
        Goal::Complex => {
            let weekly_loss = (rate.loss * factor.loss)
                .min(MAX_WEEKLY_LOSS_OF_BODYWEIGHT * current.weight_kg)
                * RECOMP_LOSS_SCALE;
            let fat_lost =
                (weekly_loss * weeks).min(RECOMP_MAX_LOSS_OF_BODYWEIGHT * current.weight_kg);
            let weekly_gain = rate.gain * factor.gain * newbie_bonus(input.activity) * RECOMP_GAIN_SCALE;
            let gained = (weekly_gain * weeks).min(RECOMP_MONTHLY_GAIN_CAP_KG * months);
            (
                current.weight_kg - fat_lost + gained,
                fat_mass - fat_lost,
                current.muscle_mass_kg + gained,
                GoalOutcome::Complex {
                    fat_lost_kg: round1(fat_lost),
                    muscle_gained_kg: round1(gained),
                },
            )
        }
    };

    let (floor, ceiling) = input.gender.fat_percent_range();
    let fat_percent = (fat_mass / weight * 100.0).clamp(floor, ceiling);
    let muscle = muscle.max(MUSCLE_REGRESSION_FLOOR * current.muscle_mass_kg);

    let forecast = BodyComposition {
        weight_kg: weight,
        fat_percent,
        muscle_mass_kg: muscle,
    }
    .rounded();

    (forecast, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::estimate_current;
    use crate::types::{Duration, Gender};
    use rstest::rstest;

    fn input(goal: Goal, age: i32, duration: Duration) -> CalculatorInput {
        CalculatorInput {
            goal,
            gender: Gender::Male,
            age,
            height_cm: 180,
            weight_kg: 90.0,
            activity: ActivityLevel::Moderate,
            duration,
        }
    }

    fn run(input: &CalculatorInput) -> (BodyComposition, GoalOutcome) {
        let current = estimate_current(
            input.weight_kg,
            input.height_cm as f64,
            input.age,
            input.gender,
        );
        project(input, &current)
    }

    #[test]
    fn test_weight_loss_worked_example() {
        // Male, 30y, 180cm, 90kg, moderate, 3 months:
        // weekly = min(0.45 * 1.00, 0.9) = 0.45; total = 0.45 * 12 = 5.4
        // (below the 15% = 13.5 kg cap) -> forecast weight 84.6
        let (forecast, outcome) = run(&input(Goal::WeightLoss, 30, Duration::ThreeMonths));
        assert_eq!(forecast.weight_kg, 84.6);
        assert_eq!(outcome, GoalOutcome::WeightLoss { lost_kg: 5.4 });
    }

    #[test]
    fn test_weight_loss_monotone_in_duration() {
        let lost = |duration| match run(&input(Goal::WeightLoss, 30, duration)).1 {
            GoalOutcome::WeightLoss { lost_kg } => lost_kg,
            other => panic!("unexpected outcome {other:?}"),
        };
        let one = lost(Duration::OneMonth);
        let three = lost(Duration::ThreeMonths);
        let six = lost(Duration::SixMonths);
        assert!(one <= three && three <= six);
        // 6 months: 0.45 * 24 = 10.8, still below the 13.5 kg absolute cap
        assert_eq!(six, 10.8);
    }

    #[test]
    fn test_weight_loss_total_cap() {
        // Advanced young lifter, long duration, light body: the 15% cap binds.
        // 40kg: weekly = min(0.60 * 1.10, 0.4) = 0.4; 24 weeks = 9.6 > 6.0 cap
        let capped = CalculatorInput {
            goal: Goal::WeightLoss,
            gender: Gender::Female,
            age: 20,
            height_cm: 150,
            weight_kg: 40.0,
            activity: ActivityLevel::Advanced,
            duration: Duration::SixMonths,
        };
        let (forecast, outcome) = run(&capped);
        assert_eq!(outcome, GoalOutcome::WeightLoss { lost_kg: 6.0 });
        assert_eq!(forecast.weight_kg, 34.0);
    }

    #[rstest]
    #[case(25, 1.10, 1.20)]
    #[case(26, 1.00, 1.00)]
    #[case(35, 1.00, 1.00)]
    #[case(36, 0.90, 0.85)]
    #[case(45, 0.90, 0.85)]
    #[case(46, 0.80, 0.75)]
    #[case(55, 0.80, 0.75)]
    #[case(56, 0.70, 0.65)]
    #[case(70, 0.70, 0.65)]
    fn test_age_bracket_edges(#[case] age: i32, #[case] loss: f64, #[case] gain: f64) {
        let factor = age_factor(age);
        assert_eq!(factor.loss, loss);
        assert_eq!(factor.gain, gain);
    }

    #[test]
    fn test_age_56_slows_loss_versus_55() {
        let at_55 = run(&input(Goal::WeightLoss, 55, Duration::ThreeMonths)).1;
        let at_56 = run(&input(Goal::WeightLoss, 56, Duration::ThreeMonths)).1;
        // 0.45 * 0.80 * 12 = 4.32 -> 4.3 vs 0.45 * 0.70 * 12 = 3.78 -> 3.8
        assert_eq!(at_55, GoalOutcome::WeightLoss { lost_kg: 4.3 });
        assert_eq!(at_56, GoalOutcome::WeightLoss { lost_kg: 3.8 });
    }

    #[test]
    fn test_muscle_gain_monthly_ceiling() {
        // Moderate, 30y: weekly = 0.20 * 1.00 * 1.2 = 0.24; 12 weeks = 2.88,
        // capped at 0.5 kg/month * 3 = 1.5
        let (forecast, outcome) = run(&input(Goal::MuscleGain, 30, Duration::ThreeMonths));
        assert_eq!(outcome, GoalOutcome::MuscleGain { gained_kg: 1.5 });
        // Weight grows by gain plus 25% fat: 90 + 1.5 + 0.375 = 91.875 -> 91.9
        assert_eq!(forecast.weight_kg, 91.9);
    }

    #[test]
    fn test_beginner_ceiling_is_higher() {
        let beginner = CalculatorInput {
            activity: ActivityLevel::Beginner,
            ..input(Goal::MuscleGain, 30, Duration::SixMonths)
        };
        // weekly = 0.15 * 1.00 * 1.5 = 0.225; 24 weeks = 5.4, cap 1.0 * 6 = 6.0
        let (_, outcome) = run(&beginner);
        assert_eq!(outcome, GoalOutcome::MuscleGain { gained_kg: 5.4 });
    }

    #[test]
    fn test_recomposition_moves_both_ways() {
        // Moderate, 30y, 3 months: fat loss 0.45 * 0.6 * 12 = 3.24 (< 7.2 cap),
        // gain 0.24 * 0.5 * 12 = 1.44, capped at 0.4 * 3 = 1.2
        let (forecast, outcome) = run(&input(Goal::Complex, 30, Duration::ThreeMonths));
        assert_eq!(
            outcome,
            GoalOutcome::Complex {
                fat_lost_kg: 3.2,
                muscle_gained_kg: 1.2,
            }
        );
        // 90 - 3.24 + 1.2 = 87.96 -> 88.0
        assert_eq!(forecast.weight_kg, 88.0);
        let current = estimate_current(90.0, 180.0, 30, Gender::Male);
        assert!(forecast.fat_percent < current.fat_percent);
        assert!(forecast.muscle_mass_kg > current.muscle_mass_kg);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let spec = input(Goal::Complex, 44, Duration::SixMonths);
        assert_eq!(run(&spec), run(&spec));
    }

    #[test]
    fn test_forecast_fat_percent_respects_gender_floor() {
        // Already lean male losing weight: fat% must not drop below 8
        let lean = CalculatorInput {
            goal: Goal::WeightLoss,
            gender: Gender::Male,
            age: 20,
            height_cm: 190,
            weight_kg: 62.0,
            activity: ActivityLevel::Advanced,
            duration: Duration::SixMonths,
        };
        let (forecast, _) = run(&lean);
        assert!(forecast.fat_percent >= 8.0);
    }

    #[test]
    fn test_muscle_regression_guard() {
        // Heavy loss scenarios keep at least 90% of current muscle
        for duration in [Duration::OneMonth, Duration::ThreeMonths, Duration::SixMonths] {
            let spec = CalculatorInput {
                goal: Goal::WeightLoss,
                gender: Gender::Female,
                age: 60,
                height_cm: 160,
                weight_kg: 110.0,
                activity: ActivityLevel::Advanced,
                duration,
            };
            let current = estimate_current(110.0, 160.0, 60, Gender::Female);
            let (forecast, _) = project(&spec, &current);
            assert!(forecast.muscle_mass_kg >= round1(0.9 * current.muscle_mass_kg) - 0.05);
        }
    }
}
