//! Greeting board
//!
//! Static greeting plus a status line written by the greet trigger.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::{
        config::Action,
        widgets::{slot::SlotWidget, trigger_button::TriggerButtonWidget},
    },
};

/// Number of rows the board needs, borders included
pub const HEIGHT: u16 = 5;

#[derive(Debug, Clone, Default)]
pub struct GreetingComponent;

impl GreetingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(slots) = state.greeting.slots() else {
            return;
        };

        let block = Block::bordered().title(" Greeting ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [message, status, button] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            SlotWidget::new(&slots.message).style(Style::default().bold()),
            message,
        );
        frame.render_widget(SlotWidget::new(&slots.status), status);

        let hint = state.config.config.keybindings.label_for(Action::Greet);
        frame.render_widget(
            TriggerButtonWidget::new("Greet", state.greeting.trigger()).key_hint(hint),
            button,
        );
    }
}
