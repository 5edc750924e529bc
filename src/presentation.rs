//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless board components
//! - Reusable widgets
//! - Configuration (keybindings)

pub mod components;
pub mod config;
pub mod widgets;
