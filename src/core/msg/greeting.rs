use serde::{Deserialize, Serialize};

/// Messages for the greeting board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GreetingMsg {
    /// The greet trigger was activated
    Greet,
}
