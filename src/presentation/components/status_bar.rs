//! Status bar component
//!
//! Bottom two rows: key binding help, then the system status message.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::config::Action};

const HELP_ACTIONS: [(Action, &str); 5] = [
    (Action::Greet, "greet"),
    (Action::LoadQuote, "quote"),
    (Action::LoadWeather, "weather"),
    (Action::Suspend, "suspend"),
    (Action::Quit, "quit"),
];

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [help, message] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(self.help_line(state))
                .style(Style::default().fg(Color::Gray).bg(Color::Black)),
            help,
        );

        let message_text = state.system.status_message().cloned().unwrap_or_default();
        frame.render_widget(Paragraph::new(message_text), message);
    }

    /// `<key> action` pairs for every bound action
    pub fn help_line(&self, state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        HELP_ACTIONS
            .iter()
            .filter_map(|(action, name)| {
                keybindings
                    .label_for(*action)
                    .map(|key| format!("{key} {name}"))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}
