use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use tokio::{
    runtime::{Handle, TryCurrentError},
    sync::mpsc,
};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{quote::QuoteMsg, weather::WeatherMsg, Msg},
    },
    domain::fetch::FetchFailure,
    infrastructure::http::{QuoteSource, WeatherSource},
};

/// Command executor: runs the side effects described by `update()`.
/// Remote requests are spawned on the tokio runtime and report back as `Msg`s.
#[derive(Clone)]
pub struct CmdExecutor {
    quote_source: Arc<dyn QuoteSource>,
    weather_source: Arc<dyn WeatherSource>,
    msg_sender: Option<mpsc::UnboundedSender<Msg>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new(quote_source: Arc<dyn QuoteSource>, weather_source: Arc<dyn WeatherSource>) -> Self {
        Self {
            quote_source,
            weather_source,
            msg_sender: None,
            tui_sender: None,
            render_req_sender: None,
        }
    }

    /// Inject the channel that request results are delivered on
    pub fn set_msg_sender(&mut self, sender: mpsc::UnboundedSender<Msg>) {
        self.msg_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::FetchQuote => {
                let sender = self.result_sender()?;
                let source = Arc::clone(&self.quote_source);
                let handle = Handle::try_current().inspect_err(|e| {
                    Self::settle(&sender, Msg::Quote(QuoteMsg::Failed(spawn_failure(e))));
                })?;
                handle.spawn(async move {
                    let result = source.fetch_quote().await;
                    if let Err(e) = &result {
                        log::warn!("quote request failed: {e}");
                    }
                    if sender.send(Msg::Quote(QuoteMsg::from_result(result))).is_err() {
                        log::debug!("quote result dropped: runtime is gone");
                    }
                });
            }

            Cmd::FetchWeather { city } => {
                let sender = self.result_sender()?;
                let source = Arc::clone(&self.weather_source);
                let city = city.clone();
                let handle = Handle::try_current().inspect_err(|e| {
                    Self::settle(&sender, Msg::Weather(WeatherMsg::Failed(spawn_failure(e))));
                })?;
                handle.spawn(async move {
                    let result = source.fetch_weather(&city).await;
                    if let Err(e) = &result {
                        log::warn!("weather request for {city} failed: {e}");
                    }
                    if sender
                        .send(Msg::Weather(WeatherMsg::from_result(result)))
                        .is_err()
                    {
                        log::debug!("weather result dropped: runtime is gone");
                    }
                });
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_msg_sender: self.msg_sender.is_some(),
            is_msg_sender_closed: self.msg_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }

    /// A request that never starts still has to reach a terminal outcome,
    /// otherwise its trigger stays disabled
    fn settle(sender: &mpsc::UnboundedSender<Msg>, msg: Msg) {
        if sender.send(msg).is_err() {
            log::debug!("failure dropped: runtime is gone");
        }
    }

    fn result_sender(&self) -> Result<mpsc::UnboundedSender<Msg>> {
        self.msg_sender
            .clone()
            .ok_or_else(|| eyre!("no message channel to deliver the result on"))
    }
}

fn spawn_failure(e: &TryCurrentError) -> FetchFailure {
    FetchFailure::Transport(format!("request could not be started: {e}"))
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_msg_sender: bool,
    pub is_msg_sender_closed: Option<bool>,
}
