//! Forecast orchestration: validation gate, current-state estimation and
//! goal projection, in that order.

use crate::composition;
use crate::projection;
use crate::types::{CalculatorInput, ForecastResult};
use crate::validation::{self, ValidationErrors};

/// Run one full calculator invocation.
///
/// Validation failures short-circuit before any estimation happens and
/// carry every failing field. The result is built fresh on each call;
/// nothing is cached or persisted.
pub fn compute_forecast(input: &CalculatorInput) -> Result<ForecastResult, ValidationErrors> {
    let errors = validation::validate_input(input);
    if !errors.is_empty() {
        return Err(errors);
    }

    let current = composition::estimate_current(
        input.weight_kg,
        input.height_cm as f64,
        input.age,
        input.gender,
    );
    let (forecast, outcome) = projection::project(input, &current);
    let daily_energy_expenditure = composition::daily_energy_expenditure(
        input.weight_kg,
        input.height_cm as f64,
        input.age,
        input.gender,
        input.activity,
    );

    Ok(ForecastResult {
        current: current.rounded(),
        forecast,
        daily_energy_expenditure,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivityLevel, Duration, Gender, Goal, GoalOutcome};

    fn worked_example() -> CalculatorInput {
        CalculatorInput {
            goal: Goal::WeightLoss,
            gender: Gender::Male,
            age: 30,
            height_cm: 180,
            weight_kg: 90.0,
            activity: ActivityLevel::Moderate,
            duration: Duration::ThreeMonths,
        }
    }

    #[test]
    fn test_end_to_end_worked_example() {
        let result = compute_forecast(&worked_example()).unwrap();

        // BMR = 10*90 + 6.25*180 - 5*30 + 5 = 1880; TDEE = 1880 * 1.375 = 2585
        assert_eq!(result.daily_energy_expenditure, 2585);
        // weekly loss min(0.45, 0.9) = 0.45; 12 weeks -> 5.4 kg
        assert_eq!(result.outcome, GoalOutcome::WeightLoss { lost_kg: 5.4 });
        assert_eq!(result.forecast.weight_kg, 84.6);
        assert_eq!(result.current.weight_kg, 90.0);
        assert!(result.forecast.fat_percent < result.current.fat_percent);
    }

    #[test]
    fn test_invalid_input_never_reaches_the_model() {
        let invalid = CalculatorInput {
            age: 15,
            ..worked_example()
        };
        let errors = compute_forecast(&invalid).unwrap_err();
        assert!(errors.age.is_some());
        assert!(errors.height.is_none());
    }

    #[test]
    fn test_forecast_is_idempotent() {
        let input = CalculatorInput {
            goal: Goal::Complex,
            gender: Gender::Female,
            age: 47,
            height_cm: 165,
            weight_kg: 72.5,
            activity: ActivityLevel::Beginner,
            duration: Duration::SixMonths,
        };
        assert_eq!(compute_forecast(&input), compute_forecast(&input));
    }

    #[test]
    fn test_result_serializes_for_the_frontend() {
        let result = compute_forecast(&worked_example()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["forecast"]["weight_kg"], 84.6);
        assert_eq!(json["outcome"]["goal"], "weightLoss");
        assert_eq!(json["daily_energy_expenditure"], 2585);
    }
}
