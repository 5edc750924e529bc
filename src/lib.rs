//! # boardtui - a small TUI board
//!
//! Three boards driven by key-bound triggers: a greeting that changes when
//! clicked, an inspiring quote fetched from a quote service, and the current
//! weather for a configured city fetched from OpenWeatherMap.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state, one sub-state per board
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): State transitions returning commands
//! - **Command** (`core::cmd`): Side effects (HTTP requests, resize, render)
//! - **View** (`presentation`): Stateless rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use boardtui::{core::msg::quote::QuoteMsg, AppState, Cmd, Msg, update};
//!
//! let state = AppState::default();
//!
//! // Pressing the quote trigger disables it and asks for a fetch
//! let (state, commands) = update(Msg::Quote(QuoteMsg::Load), state);
//!
//! assert_eq!(commands, vec![Cmd::FetchQuote]);
//! assert!(!state.quote.trigger().is_enabled());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Display slots, triggers and response parsing
//! - [`infrastructure`] - Terminal, HTTP clients, CLI and configuration
//! - [`integration`] - Runtime and the event loop
//! - [`presentation`] - Components, widgets and keybindings

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
