use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects; update() only describes them, CmdExecutor runs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Remote requests (one per accepted trigger activation)
    FetchQuote,
    FetchWeather { city: String },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchQuote | Cmd::FetchWeather { .. } => true,

            Cmd::Tui(..)
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Human-readable name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::FetchQuote => "FetchQuote".to_string(),
            Cmd::FetchWeather { .. } => "FetchWeather".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::None => "None".to_string(),
        }
    }
}
