//! Reusable UI widgets
//!
//! Widgets are built from plain values and consumed on render.

pub mod slot;
pub mod trigger_button;
