use std::{collections::VecDeque, future::Future, pin::Pin};

use color_eyre::eyre::Result;
use futures::future;
use ratatui::{backend::TestBackend, buffer::Buffer, prelude::*};

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Headless terminal backed by `TestBackend`. enter/exit/suspend only count
/// calls; `next()` pops queued events and yields `None` once empty.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    /// Whether `enter()` was called without a matching `exit()`
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last drawn frame
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn frame as text, one line per row
    pub fn screen(&self) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        self.exit()
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_and_screen() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;

        tui.draw(&mut |f: &mut Frame<'_>| {
            f.render_widget(ratatui::widgets::Paragraph::new("hello"), f.area());
        })?;

        assert_eq!(tui.draw_count(), 1);
        assert!(tui.screen().starts_with("hello"));
        Ok(())
    }

    #[tokio::test]
    async fn test_events_drain_in_order() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick, Event::Quit])?;

        assert_eq!(tui.next().await, Some(Event::Tick));
        assert_eq!(tui.next().await, Some(Event::Quit));
        assert_eq!(tui.next().await, None);
        Ok(())
    }
}
