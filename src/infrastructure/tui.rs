pub mod event_source;
pub mod real;
pub mod test;

use std::{future::Future, pin::Pin};

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

pub type Frame<'a> = ratatui::Frame<'a>;

/// Terminal events surfaced to the runner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Terminal abstraction so the runner can be driven by a real terminal or a
/// `TestBackend`
pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    /// Leave the terminal and stop the process until it is continued
    fn suspend(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()>;
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
