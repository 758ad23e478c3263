//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod lead;

pub use lead::{CreateLead, LeadRecord, LeadRepository};
