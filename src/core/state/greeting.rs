use crate::{
    core::{cmd::Cmd, msg::greeting::GreetingMsg},
    domain::ui::{DisplaySlot, Trigger},
};

/// Slots of the greeting board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingSlots {
    /// Greeting shown from startup
    pub message: DisplaySlot,
    /// Written by the greet trigger
    pub status: DisplaySlot,
}

/// Greeting board state. `slots` is `None` when the board is not bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingState {
    slots: Option<GreetingSlots>,
    /// Greeting is synchronous, so this trigger is never disabled; it only
    /// backs the drawn button
    trigger: Trigger,
    clicked_text: String,
}

impl GreetingState {
    pub fn new(greeting: impl Into<String>, clicked_text: impl Into<String>) -> Self {
        Self {
            slots: Some(GreetingSlots {
                message: DisplaySlot::new(greeting),
                status: DisplaySlot::new(""),
            }),
            trigger: Trigger::new(),
            clicked_text: clicked_text.into(),
        }
    }

    pub fn unbound() -> Self {
        Self {
            slots: None,
            trigger: Trigger::new(),
            clicked_text: String::new(),
        }
    }

    pub fn slots(&self) -> Option<&GreetingSlots> {
        self.slots.as_ref()
    }

    /// Always enabled
    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn update(&mut self, msg: GreetingMsg) -> Vec<Cmd> {
        match msg {
            GreetingMsg::Greet => {
                let Some(slots) = self.slots.as_mut() else {
                    log::debug!("greeting board not bound; ignoring greet");
                    return vec![];
                };
                slots.status.show_success(self.clicked_text.clone());
                vec![]
            }
        }
    }
}
