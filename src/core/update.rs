use crate::core::{cmd::Cmd, msg::Msg, state::AppState};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        // Greeting board (delegated to GreetingState)
        Msg::Greeting(greeting_msg) => state.greeting.update(greeting_msg),

        // Quote action (delegated to QuoteState)
        Msg::Quote(quote_msg) => state.quote.update(quote_msg),

        // Weather action (delegated to WeatherState)
        Msg::Weather(weather_msg) => state.weather.update(weather_msg),
    };

    (state, commands)
}
