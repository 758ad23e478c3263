//! Coach Landing WASM Module
//!
//! WebAssembly bindings over the shared forecast core so the browser runs
//! the calculator locally. The backend never recomputes a forecast; it
//! only receives the composed lead message.
//!
//! Structured values cross the boundary as JSON strings.

use coach_landing_shared::i18n::{self, Language, Translations};
use coach_landing_shared::types::{CalculatorInput, ForecastResult};
use coach_landing_shared::validation;
use wasm_bindgen::prelude::*;

/// Run the forecast calculator on a JSON-encoded [`CalculatorInput`].
///
/// Returns the forecast result as JSON, or throws a JSON object with the
/// per-field validation errors.
#[wasm_bindgen]
pub fn compute_forecast(input_json: &str) -> Result<String, JsValue> {
    forecast_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate the raw calculator text fields.
///
/// Returns a JSON object with a key per failing field, `{}` when valid.
#[wasm_bindgen]
pub fn validate_calculator_fields(age: &str, height: &str, weight: &str) -> String {
    field_errors_json(age, height, weight)
}

/// Validate a contact-form phone number
#[wasm_bindgen]
pub fn validate_phone(phone: &str) -> bool {
    validation::phone_is_valid(phone)
}

/// Validate a contact-form email address
#[wasm_bindgen]
pub fn validate_email(email: &str) -> bool {
    validation::email_is_valid(email)
}

/// Fetch the string table for a language code (`ua` or `pl`) as JSON
#[wasm_bindgen]
pub fn translations(lang: &str) -> Result<String, JsValue> {
    translations_json(lang).map_err(|e| JsValue::from_str(&e))
}

/// Default lead name for submissions coming from the calculator CTA
#[wasm_bindgen]
pub fn calculator_lead_name(lang: &str) -> Result<String, JsValue> {
    let language = parse_language(lang).map_err(|e| JsValue::from_str(&e))?;
    Ok(i18n::calculator_lead_name(language).to_string())
}

/// Compose the localized lead message from a JSON input and forecast pair
#[wasm_bindgen]
pub fn compose_lead_message(
    lang: &str,
    input_json: &str,
    result_json: &str,
) -> Result<String, JsValue> {
    lead_message(lang, input_json, result_json).map_err(|e| JsValue::from_str(&e))
}

fn parse_language(lang: &str) -> Result<Language, String> {
    lang.parse::<Language>().map_err(|e| e.to_string())
}

fn forecast_json(input_json: &str) -> Result<String, String> {
    let input: CalculatorInput =
        serde_json::from_str(input_json).map_err(|e| e.to_string())?;

    match coach_landing_shared::compute_forecast(&input) {
        Ok(result) => serde_json::to_string(&result).map_err(|e| e.to_string()),
        Err(errors) => Err(serde_json::to_string(&errors).map_err(|e| e.to_string())?),
    }
}

fn field_errors_json(age: &str, height: &str, weight: &str) -> String {
    match validation::parse_fields(age, height, weight) {
        Ok(_) => "{}".to_string(),
        Err(errors) => serde_json::to_string(&errors).unwrap_or_else(|_| "{}".to_string()),
    }
}

fn translations_json(lang: &str) -> Result<String, String> {
    let language = parse_language(lang)?;
    serde_json::to_string(Translations::get(language)).map_err(|e| e.to_string())
}

fn lead_message(lang: &str, input_json: &str, result_json: &str) -> Result<String, String> {
    let language = parse_language(lang)?;
    let input: CalculatorInput =
        serde_json::from_str(input_json).map_err(|e| e.to_string())?;
    let result: ForecastResult =
        serde_json::from_str(result_json).map_err(|e| e.to_string())?;

    Ok(i18n::compose_lead_message(language, &input, &result))
}
