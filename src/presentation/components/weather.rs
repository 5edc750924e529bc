//! Weather board
//!
//! Three readings, an optional error line and the load trigger.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::ui::DisplaySlot,
    presentation::{
        config::Action,
        widgets::{slot::SlotWidget, trigger_button::TriggerButtonWidget},
    },
};

const LABEL_WIDTH: u16 = 13;

#[derive(Debug, Clone, Default)]
pub struct WeatherComponent;

impl WeatherComponent {
    pub fn new() -> Self {
        Self
    }

    /// Rows the board needs for `state`, borders included
    pub fn height(state: &AppState) -> u16 {
        match state.weather.slots() {
            Some(slots) if slots.error.is_some() => 7,
            Some(_) => 6,
            None => 0,
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(slots) = state.weather.slots() else {
            return;
        };

        let block = Block::bordered().title(format!(" Weather · {} ", state.weather.city()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let row_count = if slots.error.is_some() { 5 } else { 4 };
        let rows = Layout::vertical(vec![Constraint::Length(1); row_count]).split(inner);

        Self::reading(frame, rows[0], "Temperature", &slots.temp);
        Self::reading(frame, rows[1], "Humidity", &slots.humidity);
        Self::reading(frame, rows[2], "Wind", &slots.wind);

        let mut next = 3;
        if let Some(error) = &slots.error {
            frame.render_widget(SlotWidget::new(error), rows[next]);
            next += 1;
        }

        let hint = state.config.config.keybindings.label_for(Action::LoadWeather);
        frame.render_widget(
            TriggerButtonWidget::new("Load weather", state.weather.trigger()).key_hint(hint),
            rows[next],
        );
    }

    fn reading(frame: &mut Frame, area: Rect, label: &str, slot: &DisplaySlot) {
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)]).areas(area);
        frame.render_widget(Paragraph::new(format!("{label}:")).dim(), label_area);
        frame.render_widget(SlotWidget::new(slot), value_area);
    }
}
