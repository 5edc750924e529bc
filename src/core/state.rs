pub mod greeting;
pub mod quote;
pub mod system;
pub mod weather;

pub use greeting::GreetingState;
pub use quote::QuoteState;
pub use system::SystemState;
pub use weather::WeatherState;

use crate::infrastructure::config::Config;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub greeting: GreetingState,
    pub quote: QuoteState,
    pub weather: WeatherState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new_with_config(Config::default())
    }
}

impl AppState {
    /// Bind the boards enabled in `config` and set every slot to its default
    pub fn new_with_config(config: Config) -> Self {
        let board = &config.board;

        let greeting = if board.greeting {
            GreetingState::new(board.greeting_text.clone(), board.clicked_text.clone())
        } else {
            GreetingState::unbound()
        };

        let quote = if board.quote {
            QuoteState::new(
                config.quote.signature_content.clone(),
                config.quote.signature_author.clone(),
            )
        } else {
            QuoteState::unbound()
        };

        let weather = if board.weather {
            WeatherState::new(config.weather.city.clone(), board.weather_errors)
        } else {
            WeatherState::unbound()
        };

        Self {
            greeting,
            quote,
            weather,
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }

    /// Whether any remote request is outstanding
    pub fn is_loading(&self) -> bool {
        !self.quote.trigger().is_enabled() || !self.weather.trigger().is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::config::BoardConfig;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.greeting.slots().is_some());
        assert!(state.quote.slots().is_some());
        assert!(state.weather.slots().is_some());
        assert!(!state.system.should_quit);
        assert!(!state.is_loading());
        assert_eq!(state.weather.city(), "Dammam");
    }

    #[test]
    fn test_unbound_boards() {
        let config = Config {
            board: BoardConfig {
                greeting: false,
                quote: false,
                weather_errors: false,
                ..Default::default()
            },
            ..Default::default()
        };

        let state = AppState::new_with_config(config);

        assert!(state.greeting.slots().is_none());
        assert!(state.quote.slots().is_none());
        let weather = state.weather.slots().expect("weather bound");
        assert!(weather.error.is_none());
    }

    #[test]
    fn test_city_from_config() {
        let mut config = Config::default();
        config.weather.city = "Riyadh".to_string();

        let state = AppState::new_with_config(config);

        assert_eq!(state.weather.city(), "Riyadh");
    }
}
