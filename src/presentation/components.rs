//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.
//! Only bound boards are laid out.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod greeting;
pub mod quote;
pub mod status_bar;
pub mod weather;

pub use greeting::GreetingComponent;
pub use quote::QuoteComponent;
pub use status_bar::StatusBarComponent;
pub use weather::WeatherComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub greeting: GreetingComponent,
    pub quote: QuoteComponent,
    pub weather: WeatherComponent,
    pub status_bar: StatusBarComponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Board {
    Greeting,
    Quote,
    Weather,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let [boards_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);

        let boards = Self::bound_boards(state);
        let mut constraints: Vec<Constraint> = boards
            .iter()
            .map(|(_, height)| Constraint::Length(*height))
            .collect();
        constraints.push(Constraint::Min(0));
        let rects = Layout::vertical(constraints).split(boards_area);

        for ((board, _), rect) in boards.iter().zip(rects.iter()) {
            match board {
                Board::Greeting => self.greeting.view(state, frame, *rect),
                Board::Quote => self.quote.view(state, frame, *rect),
                Board::Weather => self.weather.view(state, frame, *rect),
            }
        }

        self.status_bar.view(state, frame, status_area);
    }

    fn bound_boards(state: &AppState) -> Vec<(Board, u16)> {
        let mut boards = Vec::with_capacity(3);
        if state.greeting.slots().is_some() {
            boards.push((Board::Greeting, greeting::HEIGHT));
        }
        if state.quote.slots().is_some() {
            boards.push((Board::Quote, quote::HEIGHT));
        }
        if state.weather.slots().is_some() {
            boards.push((Board::Weather, WeatherComponent::height(state)));
        }
        boards
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;

    use super::*;
    use crate::{
        core::msg::{quote::QuoteMsg, weather::WeatherMsg},
        domain::fetch::FetchFailure,
        infrastructure::{
            config::{BoardConfig, Config},
            tui::{test::TestTui, Frame as TuiFrame, TuiLike},
        },
    };

    fn state_with(board: BoardConfig) -> AppState {
        let config = Config {
            board,
            ..Default::default()
        }
        .with_default_keybindings()
        .unwrap_or_default();
        AppState::new_with_config(config)
    }

    fn render(state: &AppState) -> Result<String> {
        let mut tui = TestTui::new(60, 30)?;
        let components = Components::new();
        tui.draw(&mut |f: &mut TuiFrame<'_>| components.render(f, state))?;
        Ok(tui.screen())
    }

    #[test]
    fn test_render_all_boards() -> Result<()> {
        let state = state_with(BoardConfig::default());

        let screen = render(&state)?;

        assert!(screen.contains("Hello, Everyone!"));
        assert!(screen.contains("Do it now. Sometimes later becomes never."));
        assert!(screen.contains("— Afrah"));
        assert!(screen.contains("Weather · Dammam"));
        assert!(screen.contains("[ New quote <r> ]"));
        assert!(screen.contains("<w> weather"));
        Ok(())
    }

    #[test]
    fn test_unbound_boards_are_not_drawn() -> Result<()> {
        let state = state_with(BoardConfig {
            greeting: false,
            weather: false,
            ..Default::default()
        });

        let screen = render(&state)?;

        assert!(!screen.contains("Greeting"));
        assert!(!screen.contains("Weather"));
        assert!(screen.contains("Quote"));
        Ok(())
    }

    #[test]
    fn test_render_loading_and_error() -> Result<()> {
        let mut state = state_with(BoardConfig::default());
        state.quote.update(QuoteMsg::Load);
        state.weather.update(WeatherMsg::Load);
        state
            .weather
            .update(WeatherMsg::Failed(FetchFailure::Status(404)));

        let screen = render(&state)?;

        assert!(screen.contains("Loading…"));
        assert!(screen.contains("City not found (HTTP 404)."));
        Ok(())
    }
}
