//! Coach Landing Shared Library
//!
//! This crate contains the transformation forecast core shared by the
//! backend and the WASM module: the data model, input validation, the
//! body-composition estimator, the goal projection model, the UA/PL
//! localization catalog and the interactive form reducer.

pub mod composition;
pub mod forecast;
pub mod form;
pub mod i18n;
pub mod projection;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use forecast::compute_forecast;
pub use i18n::Language;
pub use types::*;
pub use validation::{ContactErrors, ValidationErrors};
