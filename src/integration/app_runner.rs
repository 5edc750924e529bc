use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use reqwest::Client;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, cmd_executor::CmdExecutor, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        http::{HttpQuoteClient, HttpWeatherClient, QuoteSource, WeatherSource},
        tui::{self, event_source::EventSource},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime from terminal events and renders the result
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
}

impl AppRunner {
    /// Create a runner whose actions use the given remote sources
    pub fn new(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        quote_source: Arc<dyn QuoteSource>,
        weather_source: Arc<dyn WeatherSource>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let executor = CmdExecutor::new(quote_source, weather_source);
        let mut runtime = Runtime::new_with_executor(initial_state, executor);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;
        runtime
            .add_render_request_sender(render_req_tx)
            .map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            event_source: EventSource::real(Arc::clone(&tui)),
            tui,
            renderer: Renderer::new(),
            tui_cmd_rx,
            render_req_rx,
        })
    }

    /// Create a runner talking to the HTTP endpoints named in `config`
    pub fn new_with_http(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        client: Client,
    ) -> Result<Self> {
        let quotes = HttpQuoteClient::from_config(client.clone(), &config.quote);
        let weather = HttpWeatherClient::from_config(client, &config.weather);
        Self::new(config, tui, Arc::new(quotes), Arc::new(weather))
    }

    /// Replace where events come from (the TUI is still used for drawing)
    pub fn with_event_source(mut self, event_source: EventSource) -> Self {
        self.event_source = event_source;
        self
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run until quit is requested or the event source is exhausted
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        loop {
            let progressed = self.run_one_cycle().await?;
            if self.runtime.state().system.should_quit || !progressed {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Handle one event and everything it caused.
    /// Returns false once the event source has no more events.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let Some(event) = self.event_source.next().await else {
            return Ok(false);
        };

        let mut saw_render = false;
        match event {
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Render => saw_render = true,
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event stream failed".to_string())),
            tui::Event::Init | tui::Event::FocusGained | tui::Event::FocusLost => {}
        }

        self.update()?;

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
        }

        let mut resizes = vec![];
        while let Ok(TuiCommand::Resize { width, height }) = self.tui_cmd_rx.try_recv() {
            resizes.push((width, height));
        }
        if let Some((width, height)) = Coalescer::decide_resize(&resizes) {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            saw_render = true;
        }

        let mut queued_render_reqs = 0;
        while self.render_req_rx.try_recv().is_ok() {
            queued_render_reqs += 1;
        }
        if Coalescer::decide_render(queued_render_reqs, saw_render) {
            self.render().await?;
        }

        Ok(true)
    }

    pub async fn render(&mut self) -> Result<()> {
        self.renderer
            .render(&self.tui, self.runtime.state())
            .await
    }

    fn update(&mut self) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            // Surface it on the next cycle instead of failing the loop
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }
        Ok(())
    }

    /// Hand the terminal back to the shell, then restore it once resumed
    async fn suspend(&mut self) -> Result<()> {
        log::info!("suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.enter()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.update()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::{
        domain::weather::WeatherResponse,
        infrastructure::tui::test::TestTui,
        test_helpers::{MockReply, StaticQuoteSource, StaticWeatherSource},
    };

    fn create_runner(events: Vec<tui::Event>) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let config = Config::default().with_default_keybindings()?;
        let test_tui = Arc::new(Mutex::new(TestTui::new(80, 30)?));
        let runner = AppRunner::new(
            config,
            Arc::clone(&test_tui) as Arc<Mutex<dyn tui::TuiLike + Send>>,
            Arc::new(StaticQuoteSource::ok("X", "Y")),
            Arc::new(StaticWeatherSource::new(MockReply::Ok(
                WeatherResponse::default(),
            ))),
        )?
        .with_event_source(EventSource::test(events));
        Ok((runner, test_tui))
    }

    #[tokio::test]
    async fn test_quit_event_stops_loop() -> Result<()> {
        let (mut runner, test_tui) = create_runner(vec![tui::Event::Init, tui::Event::Quit])?;

        runner.run().await?;

        assert!(runner.runtime().state().system.should_quit);
        assert!(!test_tui.lock().await.is_entered());
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_is_applied_and_rendered() -> Result<()> {
        let (mut runner, test_tui) = create_runner(vec![tui::Event::Resize(100, 40)])?;

        assert!(runner.run_one_cycle().await?);

        let guard = test_tui.lock().await;
        assert_eq!(guard.buffer().area, Rect::new(0, 0, 100, 40));
        assert_eq!(guard.draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_renders_only_when_requested() -> Result<()> {
        let key = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty());
        let (mut runner, test_tui) =
            create_runner(vec![tui::Event::Key(key), tui::Event::Render])?;

        runner.run_one_cycle().await?;
        assert_eq!(test_tui.lock().await.draw_count(), 0);

        runner.run_one_cycle().await?;
        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(guard.screen().contains("You clicked the button!"));
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_and_resume() -> Result<()> {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        let (mut runner, test_tui) = create_runner(vec![tui::Event::Key(key)])?;

        runner.run_one_cycle().await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.suspend_count(), 1);
        assert!(guard.is_entered());
        // Resume asks for a redraw
        assert_eq!(guard.draw_count(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
        Ok(())
    }

    #[tokio::test]
    async fn test_exhausted_source_ends_run() -> Result<()> {
        let (mut runner, _tui) = create_runner(vec![])?;

        assert!(!runner.run_one_cycle().await?);
        runner.run().await?;
        Ok(())
    }
}
