use serde::{Deserialize, Serialize};

pub mod greeting;
pub mod quote;
pub mod system;
pub mod weather;

use greeting::GreetingMsg;
use quote::QuoteMsg;
use system::SystemMsg;
use weather::WeatherMsg;

/// Domain messages representing application intent
/// These are processed by the update function; each board owns its own sub-message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Greeting board (delegated to GreetingState)
    Greeting(GreetingMsg),

    // Quote action (delegated to QuoteState)
    Quote(QuoteMsg),

    // Weather action (delegated to WeatherState)
    Weather(WeatherMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Greeting(_) | Msg::Quote(_) | Msg::Weather(_) => false,
        }
    }
}
