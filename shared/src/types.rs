//! Core data model for the transformation forecast calculator.

use serde::{Deserialize, Serialize};

/// Training goal selected in the first calculator step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    #[default]
    WeightLoss,
    MuscleGain,
    /// Simultaneous fat loss and muscle gain (recomposition)
    Complex,
}

/// Biological gender used by the physiological formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Baseline body-fat percentage at a healthy BMI (~22)
    pub fn baseline_fat_percent(&self) -> f64 {
        match self {
            Gender::Male => 10.0,
            Gender::Female => 18.0,
        }
    }

    /// Physiologically plausible body-fat range used to clamp estimates
    pub fn fat_percent_range(&self) -> (f64, f64) {
        match self {
            Gender::Male => (8.0, 40.0),
            Gender::Female => (15.0, 45.0),
        }
    }

    /// Share of lean mass carried as skeletal muscle
    pub fn muscle_fraction(&self) -> f64 {
        match self {
            Gender::Male => 0.48,
            Gender::Female => 0.42,
        }
    }
}

/// Self-reported training experience / activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little movement, no training history
    Beginner,
    /// Trains 1-2 times a week
    #[default]
    Moderate,
    /// Regular training
    Advanced,
}

impl ActivityLevel {
    /// Activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Beginner => 1.20,
            ActivityLevel::Moderate => 1.375,
            ActivityLevel::Advanced => 1.55,
        }
    }
}

/// Program duration. The calculator only offers these three terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Duration {
    OneMonth,
    #[default]
    ThreeMonths,
    SixMonths,
}

impl Duration {
    pub fn months(&self) -> u32 {
        match self {
            Duration::OneMonth => 1,
            Duration::ThreeMonths => 3,
            Duration::SixMonths => 6,
        }
    }

    pub fn weeks(&self) -> u32 {
        self.months() * 4
    }
}

impl TryFrom<u8> for Duration {
    type Error = String;

    fn try_from(months: u8) -> Result<Self, Self::Error> {
        match months {
            1 => Ok(Duration::OneMonth),
            3 => Ok(Duration::ThreeMonths),
            6 => Ok(Duration::SixMonths),
            other => Err(format!("duration must be 1, 3 or 6 months, got {other}")),
        }
    }
}

impl From<Duration> for u8 {
    fn from(duration: Duration) -> u8 {
        duration.months() as u8
    }
}

/// User-supplied calculator input, immutable once submitted for computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub goal: Goal,
    pub gender: Gender,
    /// Age in years
    pub age: i32,
    /// Height in centimeters
    pub height_cm: i32,
    /// Current weight in kilograms
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub duration: Duration,
}

/// A body-composition snapshot, either reconstructed from the input or
/// projected after the chosen duration. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    pub weight_kg: f64,
    pub fat_percent: f64,
    pub muscle_mass_kg: f64,
}

impl BodyComposition {
    /// Round all figures to one decimal place for display
    pub fn rounded(&self) -> Self {
        Self {
            weight_kg: round1(self.weight_kg),
            fat_percent: round1(self.fat_percent),
            muscle_mass_kg: round1(self.muscle_mass_kg),
        }
    }
}

/// Structured per-goal deltas produced by the projection model.
///
/// Deliberately numeric-only: the localized summary sentence is rendered
/// from these figures by the i18n layer, keeping the model language-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "goal", rename_all = "camelCase")]
pub enum GoalOutcome {
    WeightLoss { lost_kg: f64 },
    MuscleGain { gained_kg: f64 },
    Complex { fat_lost_kg: f64, muscle_gained_kg: f64 },
}

/// Output of one calculator invocation, replaced wholesale on recalculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Reconstructed current state (estimated, not measured)
    pub current: BodyComposition,
    /// Projected state after the chosen duration
    pub forecast: BodyComposition,
    /// TDEE in kilocalories per day
    pub daily_energy_expenditure: i32,
    pub outcome: GoalOutcome,
}

/// Lead submission payload relayed to the backend contact endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
