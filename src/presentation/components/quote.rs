//! Quote board

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::{
        config::Action,
        widgets::{slot::SlotWidget, trigger_button::TriggerButtonWidget},
    },
};

/// Number of rows the board needs, borders included
pub const HEIGHT: u16 = 7;

#[derive(Debug, Clone, Default)]
pub struct QuoteComponent;

impl QuoteComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(slots) = state.quote.slots() else {
            return;
        };

        let block = Block::bordered().title(" Quote ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [quote, author, button] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            SlotWidget::new(&slots.quote).style(Style::default().italic()),
            quote,
        );
        frame.render_widget(
            SlotWidget::new(&slots.author).alignment(Alignment::Right),
            author,
        );

        let hint = state.config.config.keybindings.label_for(Action::LoadQuote);
        frame.render_widget(
            TriggerButtonWidget::new("New quote", state.quote.trigger()).key_hint(hint),
            button,
        );
    }
}
