//! Domain logic
//!
//! This module contains domain-specific business logic:
//! - Display slots and triggers
//! - Remote failure classification
//! - Quote and weather response parsing and formatting

pub mod fetch;
pub mod quote;
pub mod ui;
pub mod weather;
