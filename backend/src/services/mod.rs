//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod analytics;
pub mod lead;
pub mod telegram;

pub use analytics::ConversionTracker;
pub use lead::LeadService;
pub use telegram::TelegramNotifier;
