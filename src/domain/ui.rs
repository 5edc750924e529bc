use serde::{Deserialize, Serialize};

/// Text shown in a slot while its request is in flight
pub const LOADING_TEXT: &str = "Loading…";

/// Placeholder for a value that could not be obtained
pub const PLACEHOLDER: &str = "—";

/// Which kind of value a slot is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotPhase {
    #[default]
    Default,
    Loading,
    Success,
    Error,
}

/// A named UI text region updated by at most one action at a time
///
/// A slot always shows exactly one of: its default text, a loading
/// indicator, a success value or an error value. The phase records which.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplaySlot {
    text: String,
    phase: SlotPhase,
}

impl DisplaySlot {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            text: default.into(),
            phase: SlotPhase::Default,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> SlotPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SlotPhase::Loading
    }

    /// Show a loading indicator. Some slots (e.g. the quote author) show an
    /// empty string while loading, so the text is a parameter.
    pub fn show_loading(&mut self, text: impl Into<String>) {
        self.set(text, SlotPhase::Loading);
    }

    pub fn show_success(&mut self, text: impl Into<String>) {
        self.set(text, SlotPhase::Success);
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.set(text, SlotPhase::Error);
    }

    /// Reset to the default phase with the given text
    pub fn show_default(&mut self, text: impl Into<String>) {
        self.set(text, SlotPhase::Default);
    }

    fn set(&mut self, text: impl Into<String>, phase: SlotPhase) {
        self.text = text.into();
        self.phase = phase;
    }
}

/// A user-activated control initiating one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    enabled: bool,
}

impl Trigger {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-action lifecycle: `Idle → Loading → {Success, Error} → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionPhase {
    #[default]
    Idle,
    Loading,
}

/// How the last activation of an action settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Error,
}
