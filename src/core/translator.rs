use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            greeting::GreetingMsg, quote::QuoteMsg, system::SystemMsg, weather::WeatherMsg, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Ctrl-c quits regardless of user bindings
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(*action),
        None => vec![],
    }
}

/// Map a bound action to its message. Trigger state is checked by the
/// owning sub-state, not here.
pub fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Greet => vec![Msg::Greeting(GreetingMsg::Greet)],
        Action::LoadQuote => vec![Msg::Quote(QuoteMsg::Load)],
        Action::LoadWeather => vec![Msg::Weather(WeatherMsg::Load)],
    }
}
