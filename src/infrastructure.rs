//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - HTTP clients for the quote and weather services

pub mod cli;
pub mod config;
pub mod http;
pub mod tui;
