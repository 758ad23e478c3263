//! Interactive calculator form state.
//!
//! The form is an immutable snapshot replaced wholesale by a pure reducer,
//! so fields can never drift apart mid-edit. Every calculation reads the
//! current snapshot and fully replaces the result slot; nothing is merged.

use crate::forecast::compute_forecast;
use crate::types::{ActivityLevel, CalculatorInput, Duration, ForecastResult, Gender, Goal};
use crate::validation::{self, ValidationErrors};

/// Advisory delay before revealing a freshly computed result, in
/// milliseconds. Purely cosmetic; the core never sleeps and a UI is free
/// to skip it.
pub const RESULT_REVEAL_DELAY_MS: u64 = 800;

/// How long the submission-failure banner stays up before auto-dismissal
pub const ERROR_BANNER_DISMISS_MS: u64 = 5_000;

/// Lead-submission lifecycle. `InFlight` blocks a second submit from the
/// same control; `Submitted` is one-shot with no retry queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Submitted,
    Failed,
}

/// One snapshot of the calculator form. Numeric fields stay raw text until
/// a calculate attempt parses them.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    pub goal: Goal,
    pub gender: Gender,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub activity: ActivityLevel,
    pub duration: Duration,
    pub errors: ValidationErrors,
    pub result: Option<ForecastResult>,
    pub submission: SubmissionState,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            goal: Goal::WeightLoss,
            gender: Gender::Male,
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            activity: ActivityLevel::Moderate,
            duration: Duration::ThreeMonths,
            errors: ValidationErrors::default(),
            result: None,
            submission: SubmissionState::Idle,
        }
    }
}

/// A discrete user or I/O event applied to the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    GoalSelected(Goal),
    GenderSelected(Gender),
    AgeChanged(String),
    HeightChanged(String),
    WeightChanged(String),
    ActivitySelected(ActivityLevel),
    DurationSelected(Duration),
    CalculateRequested,
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
    /// Fired by the UI timer after [`ERROR_BANNER_DISMISS_MS`]
    BannerExpired,
}

/// Apply one event and return the next snapshot.
///
/// Editing a field clears only that field's error and invalidates any
/// previous result and submitted state; re-validation happens on the next
/// calculate attempt, not on edit.
pub fn reduce(form: &CalculatorForm, event: FormEvent) -> CalculatorForm {
    let mut next = form.clone();
    match event {
        FormEvent::GoalSelected(goal) => {
            next.goal = goal;
            invalidate_result(&mut next);
        }
        FormEvent::GenderSelected(gender) => {
            next.gender = gender;
            invalidate_result(&mut next);
        }
        FormEvent::AgeChanged(age) => {
            next.age = age;
            next.errors.age = None;
            invalidate_result(&mut next);
        }
        FormEvent::HeightChanged(height) => {
            next.height = height;
            next.errors.height = None;
            invalidate_result(&mut next);
        }
        FormEvent::WeightChanged(weight) => {
            next.weight = weight;
            next.errors.weight = None;
            invalidate_result(&mut next);
        }
        FormEvent::ActivitySelected(activity) => {
            next.activity = activity;
            invalidate_result(&mut next);
        }
        FormEvent::DurationSelected(duration) => {
            next.duration = duration;
            invalidate_result(&mut next);
        }
        FormEvent::CalculateRequested => match parse_input(&next) {
            Ok(input) => match compute_forecast(&input) {
                Ok(result) => {
                    next.errors = ValidationErrors::default();
                    next.result = Some(result);
                }
                Err(errors) => {
                    next.errors = errors;
                    next.result = None;
                }
            },
            Err(errors) => {
                next.errors = errors;
                next.result = None;
            }
        },
        FormEvent::SubmitStarted => {
            // Only meaningful with a computed result, and never while a
            // submission is already in flight.
            if next.result.is_some() && next.submission != SubmissionState::InFlight {
                next.submission = SubmissionState::InFlight;
            }
        }
        FormEvent::SubmitSucceeded => {
            if next.submission == SubmissionState::InFlight {
                next.submission = SubmissionState::Submitted;
            }
        }
        FormEvent::SubmitFailed => {
            if next.submission == SubmissionState::InFlight {
                next.submission = SubmissionState::Failed;
            }
        }
        FormEvent::BannerExpired => {
            if next.submission == SubmissionState::Failed {
                next.submission = SubmissionState::Idle;
            }
        }
    }
    next
}

/// Build the typed input from the current snapshot
fn parse_input(form: &CalculatorForm) -> Result<CalculatorInput, ValidationErrors> {
    let (age, height_cm, weight_kg) =
        validation::parse_fields(&form.age, &form.height, &form.weight)?;
    Ok(CalculatorInput {
        goal: form.goal,
        gender: form.gender,
        age,
        height_cm,
        weight_kg,
        activity: form.activity,
        duration: form.duration,
    })
}

fn invalidate_result(form: &mut CalculatorForm) {
    form.result = None;
    form.submission = SubmissionState::Idle;
}
