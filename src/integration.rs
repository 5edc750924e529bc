//! Integration layer
//!
//! Wires the Elm core to the terminal and the HTTP services:
//! - Runtime owning the state and the message queues
//! - AppRunner driving the event loop
//! - Renderer drawing the components

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
