//! Quote action state
//!
//! `Idle → Loading → {Success, Error} → Idle`. The trigger is disabled for
//! exactly the Loading phase, which is what keeps a second request from
//! being issued while one is outstanding.

use crate::{
    core::{cmd::Cmd, msg::quote::QuoteMsg},
    domain::{
        fetch::FetchFailure,
        quote::{format_author, format_quote, QuoteResponse},
        ui::{ActionPhase, DisplaySlot, Outcome, Trigger, LOADING_TEXT},
    },
};

/// Slots owned by the quote action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSlots {
    pub quote: DisplaySlot,
    pub author: DisplaySlot,
}

impl QuoteSlots {
    fn signature(content: &str, author: &str) -> Self {
        Self {
            quote: DisplaySlot::new(format_quote(content)),
            author: DisplaySlot::new(format_author(author)),
        }
    }
}

/// Quote action state. `slots` is `None` when the board is not bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteState {
    slots: Option<QuoteSlots>,
    trigger: Trigger,
    /// Slot values captured at activation, used by the restore check
    previous: Option<QuoteSlots>,
    last_outcome: Option<Outcome>,
    signature_content: String,
    signature_author: String,
}

impl QuoteState {
    /// Bound quote board showing the signature quote
    pub fn new(signature_content: impl Into<String>, signature_author: impl Into<String>) -> Self {
        let signature_content = signature_content.into();
        let signature_author = signature_author.into();
        Self {
            slots: Some(QuoteSlots::signature(&signature_content, &signature_author)),
            trigger: Trigger::new(),
            previous: None,
            last_outcome: None,
            signature_content,
            signature_author,
        }
    }

    pub fn unbound() -> Self {
        Self {
            slots: None,
            trigger: Trigger::new(),
            previous: None,
            last_outcome: None,
            signature_content: String::new(),
            signature_author: String::new(),
        }
    }

    pub fn slots(&self) -> Option<&QuoteSlots> {
        self.slots.as_ref()
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn phase(&self) -> ActionPhase {
        if self.trigger.is_enabled() {
            ActionPhase::Idle
        } else {
            ActionPhase::Loading
        }
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn update(&mut self, msg: QuoteMsg) -> Vec<Cmd> {
        match msg {
            QuoteMsg::Load => self.load(),
            QuoteMsg::Loaded(response) => self.loaded(&response),
            QuoteMsg::Failed(failure) => self.failed(&failure),
        }
    }

    fn load(&mut self) -> Vec<Cmd> {
        let Some(slots) = self.slots.as_mut() else {
            log::debug!("quote board not bound; ignoring load");
            return vec![];
        };
        if !self.trigger.is_enabled() {
            log::debug!("quote request already in flight; ignoring load");
            return vec![];
        }

        self.trigger.disable();
        self.previous = Some(slots.clone());
        slots.quote.show_loading(LOADING_TEXT);
        slots.author.show_loading("");

        vec![Cmd::FetchQuote]
    }

    fn loaded(&mut self, response: &QuoteResponse) -> Vec<Cmd> {
        if self.phase() != ActionPhase::Loading {
            log::warn!("quote response arrived while idle; ignoring");
            return vec![];
        }
        if let Some(slots) = self.slots.as_mut() {
            slots
                .quote
                .show_success(format_quote(response.content_or_default()));
            slots
                .author
                .show_success(format_author(response.author_or_default()));
        }
        self.settle(Outcome::Success)
    }

    fn failed(&mut self, failure: &FetchFailure) -> Vec<Cmd> {
        if self.phase() != ActionPhase::Loading {
            log::warn!("quote failure arrived while idle; ignoring: {failure}");
            return vec![];
        }
        log::warn!("quote request failed: {failure}");
        if let Some(slots) = self.slots.as_mut() {
            slots
                .quote
                .show_error(format_quote(&self.signature_content));
            slots
                .author
                .show_error(format_author(&self.signature_author));
        }
        self.settle(Outcome::Error)
    }

    /// Final step of every activation: restore the pre-activation values if
    /// the quote slot was left empty or loading, then re-enable the trigger.
    fn settle(&mut self, outcome: Outcome) -> Vec<Cmd> {
        let previous = self.previous.take();
        if let (Some(slots), Some(previous)) = (self.slots.as_mut(), previous) {
            if slots.quote.is_loading() || slots.quote.text().is_empty() {
                log::warn!("quote slot left in an inconsistent state; restoring previous values");
                *slots = previous;
            }
        }
        self.trigger.enable();
        self.last_outcome = Some(outcome);
        vec![]
    }
}
