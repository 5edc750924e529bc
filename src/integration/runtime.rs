use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};

/// Owns the application state and drives the translate → update → execute cycle
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without side effects (commands stay queued)
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose executor delivers results back into it
    pub fn new_with_executor(initial_state: AppState, executor: CmdExecutor) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_executor(executor);
        runtime
    }

    /// Install a command executor, wiring it to this runtime's message channel
    pub fn set_executor(&mut self, mut executor: CmdExecutor) {
        executor.set_msg_sender(self.msg_tx.clone());
        self.cmd_executor = Some(executor);
    }

    /// Sender for domain messages produced outside the update cycle
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Sender for raw terminal events
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Route `TuiCommand`s (resize) to the runner
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        let executor = self.executor_mut()?;
        executor.set_tui_sender(tui_sender);
        Ok(())
    }

    /// Route render requests to the runner, which coalesces them
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::UnboundedSender<()>,
    ) -> Result<(), String> {
        let executor = self.executor_mut()?;
        executor.set_render_request_sender(render_sender);
        Ok(())
    }

    /// Current board state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a domain message for the next cycle
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Queue a raw event; it is translated against the state at processing time
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Drain the commands produced so far without executing them
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute and drain the queued commands; returns the execution log
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        if self.cmd_executor.is_none() {
            return Err(
                "No command executor available. Use set_executor() to configure.".to_string(),
            );
        }

        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        let Some(executor) = self.cmd_executor.as_ref() else {
            return Ok(vec![]);
        };
        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Execute a single command immediately
    pub fn execute_command(&self, cmd: &Cmd) -> Result<(), String> {
        if let Some(executor) = &self.cmd_executor {
            executor
                .execute_command(cmd)
                .map_err(|e| format!("Command execution failed: {e}"))
        } else {
            Err("No command executor available. Use set_executor() to configure.".to_string())
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());

        commands
    }

    /// Translate queued raw events, then apply every queued and delivered message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages first, translated against the current state
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Process domain messages in internal queue. A message may be
        // dropped by its sub-state depending on the state left by the
        // previous one (e.g. a second load while loading).
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        // Results delivered by spawned requests
        while let Ok(msg) = self.msg_rx.try_recv() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// One full cycle: apply messages, then run the resulting side effects
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            is_loading: self.state.is_loading(),
            has_executor: self.cmd_executor.is_some(),
        }
    }

    fn executor_mut(&mut self) -> Result<&mut CmdExecutor, String> {
        self.cmd_executor
            .as_mut()
            .ok_or_else(|| "No executor available. Use set_executor() first.".to_string())
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub is_loading: bool,
    pub has_executor: bool,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::{quote::QuoteMsg, system::SystemMsg, weather::WeatherMsg},
        domain::{
            quote::SIGNATURE_CONTENT,
            ui::Outcome,
            weather::{WeatherResponse, GENERIC_MESSAGE},
        },
        infrastructure::config::Config,
        test_helpers::{MockReply, StaticQuoteSource, StaticWeatherSource},
    };

    fn create_test_runtime() -> Runtime {
        let config = Config::default()
            .with_default_keybindings()
            .unwrap_or_default();
        Runtime::new(AppState::new_with_config(config))
    }

    fn create_executor(quotes: Arc<StaticQuoteSource>) -> CmdExecutor {
        CmdExecutor::new(
            quotes,
            Arc::new(StaticWeatherSource::new(MockReply::Ok(
                WeatherResponse::default(),
            ))),
        )
    }

    #[test]
    fn test_runtime_creation() {
        let runtime = create_test_runtime();
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert!(!stats.is_loading);
        assert!(!stats.has_executor);
    }

    #[test]
    fn test_send_message() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Quote(QuoteMsg::Load));
        assert_eq!(runtime.get_stats().queued_messages, 1);

        let commands = runtime.process_all_messages();

        assert_eq!(commands, vec![Cmd::FetchQuote]);
        assert_eq!(runtime.get_stats().queued_messages, 0);
        assert!(runtime.get_stats().is_loading);
    }

    #[test]
    fn test_process_message() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_double_press_issues_one_request() {
        let mut runtime = create_test_runtime();
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::empty());

        runtime.send_raw_msg(RawMsg::Key(key));
        runtime.send_raw_msg(RawMsg::Key(key));
        let commands = runtime.process_all_messages();

        assert_eq!(commands, vec![Cmd::FetchQuote]);
    }

    #[test]
    fn test_external_message_channel() -> color_eyre::Result<()> {
        let mut runtime = create_test_runtime();
        let sender = runtime.get_sender();
        runtime.process_message(Msg::Quote(QuoteMsg::Load));

        sender.send(Msg::Quote(QuoteMsg::Loaded(Default::default())))?;
        assert!(runtime.state().is_loading());

        runtime.process_all_messages();
        assert!(!runtime.state().is_loading());

        Ok(())
    }

    #[test]
    fn test_pending_commands() {
        let mut runtime = create_test_runtime();

        runtime.process_message(Msg::Quote(QuoteMsg::Load));
        runtime.process_message(Msg::System(SystemMsg::Resize(80, 24)));

        assert_eq!(runtime.pending_commands().len(), 2);
        assert!(runtime.pending_commands().is_empty());
    }

    #[test]
    fn test_execute_without_executor() {
        let mut runtime = create_test_runtime();

        let result = runtime.execute_command(&Cmd::None);
        assert!(result.is_err_and(|e| e.contains("No command executor available")));
        assert!(runtime.add_tui_sender(mpsc::unbounded_channel().0).is_err());
    }

    #[test]
    fn test_request_that_cannot_start_settles() -> color_eyre::Result<()> {
        // No tokio runtime here, so spawning the fetches fails
        let mut runtime = Runtime::new_with_executor(
            create_test_runtime().state().clone(),
            create_executor(Arc::new(StaticQuoteSource::ok("X", "Y"))),
        );

        runtime.send_msg(Msg::Quote(QuoteMsg::Load));
        runtime.send_msg(Msg::Weather(WeatherMsg::Load));
        let log = runtime.run_update_cycle().map_err(color_eyre::eyre::Report::msg)?;
        assert!(log.iter().all(|line| line.starts_with("✗ Failed")));
        assert!(runtime.state().is_loading());

        runtime.run_update_cycle().map_err(color_eyre::eyre::Report::msg)?;

        let state = runtime.state();
        assert!(!state.is_loading());
        assert!(state.quote.trigger().is_enabled());
        assert_eq!(state.quote.last_outcome(), Some(Outcome::Error));
        assert!(state
            .quote
            .slots()
            .is_some_and(|s| s.quote.text().contains(SIGNATURE_CONTENT)));
        assert!(state.weather.trigger().is_enabled());
        assert_eq!(state.weather.last_outcome(), Some(Outcome::Error));
        assert_eq!(
            state
                .weather
                .slots()
                .and_then(|s| s.error.as_ref())
                .map(|e| e.text()),
            Some(GENERIC_MESSAGE)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_cycle_round_trip() -> color_eyre::Result<()> {
        let quotes = Arc::new(StaticQuoteSource::ok("Be kind.", "Anon"));
        let mut runtime = Runtime::new_with_executor(
            create_test_runtime().state().clone(),
            create_executor(Arc::clone(&quotes)),
        );

        runtime.send_msg(Msg::Quote(QuoteMsg::Load));
        let log = runtime.run_update_cycle().map_err(color_eyre::eyre::Report::msg)?;
        assert_eq!(log, vec!["✓ Executed: FetchQuote".to_string()]);

        // Wait for the spawned request to report back
        for _ in 0..100 {
            runtime.run_update_cycle().map_err(color_eyre::eyre::Report::msg)?;
            if !runtime.state().is_loading() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        assert_eq!(quotes.calls(), 1);
        assert_eq!(
            runtime.state().quote.slots().map(|s| s.quote.text()),
            Some("“Be kind.”")
        );

        Ok(())
    }
}
