//! Input validation for the calculator and the contact form.
//!
//! Validation runs synchronously on every calculate or submit attempt and
//! reports all field errors at once. A failed validation must never reach
//! the estimation model.

use serde::Serialize;

use crate::types::CalculatorInput;

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 70;
pub const MIN_HEIGHT_CM: i32 = 140;
pub const MAX_HEIGHT_CM: i32 = 220;
pub const MIN_WEIGHT_KG: f64 = 40.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;

/// Localizable error key for a calculator field. Message rendering lives
/// in [`crate::i18n`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldError {
    AgeRange,
    HeightRange,
    WeightRange,
}

/// Per-field validation outcome. Empty means the input is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.height.is_none() && self.weight.is_none()
    }
}

fn age_in_range(age: i32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

fn height_in_range(height_cm: i32) -> bool {
    (MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm)
}

fn weight_in_range(weight_kg: f64) -> bool {
    weight_kg.is_finite() && (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg)
}

/// Range-check an already-typed input
pub fn validate_input(input: &CalculatorInput) -> ValidationErrors {
    ValidationErrors {
        age: (!age_in_range(input.age)).then_some(FieldError::AgeRange),
        height: (!height_in_range(input.height_cm)).then_some(FieldError::HeightRange),
        weight: (!weight_in_range(input.weight_kg)).then_some(FieldError::WeightRange),
    }
}

/// Parse and range-check the raw text fields from the form.
///
/// Missing or unparseable values map to the same per-field error as an
/// out-of-range value, and every failing field is reported.
pub fn parse_fields(age: &str, height: &str, weight: &str) -> Result<(i32, i32, f64), ValidationErrors> {
    let age = age.trim().parse::<i32>().ok().filter(|a| age_in_range(*a));
    let height = height
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|h| height_in_range(*h));
    let weight = weight
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| weight_in_range(*w));

    match (age, height, weight) {
        (Some(age), Some(height), Some(weight)) => Ok((age, height, weight)),
        _ => Err(ValidationErrors {
            age: age.is_none().then_some(FieldError::AgeRange),
            height: height.is_none().then_some(FieldError::HeightRange),
            weight: weight.is_none().then_some(FieldError::WeightRange),
        }),
    }
}

// ============================================================================
// Contact form validation
// ============================================================================

/// Localizable error key for a contact-form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactError {
    PhoneFormat,
    EmailFormat,
}

/// Contact-form validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ContactErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<ContactError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<ContactError>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none()
    }
}

/// Validate a phone number: after stripping `+ - ( )` and spaces it must
/// be 9 to 15 digits, nothing else.
pub fn phone_is_valid(phone: &str) -> bool {
    let mut digits = 0usize;
    for c in phone.chars() {
        match c {
            '0'..='9' => digits += 1,
            '+' | '-' | '(' | ')' | ' ' => {}
            _ => return false,
        }
    }
    (9..=15).contains(&digits)
}

/// Validate an email address against a simple `local@domain.tld` shape
pub fn email_is_valid(email: &str) -> bool {
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    email_regex.is_match(email)
}

/// Validate the contact form fields, reporting all errors at once
pub fn validate_contact(phone: &str, email: &str) -> ContactErrors {
    ContactErrors {
        phone: (!phone_is_valid(phone)).then_some(ContactError::PhoneFormat),
        email: (!email_is_valid(email)).then_some(ContactError::EmailFormat),
    }
}
