use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::Notify;

use crate::{
    core::{
        cmd::Cmd,
        msg::{quote::QuoteMsg, weather::WeatherMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    domain::{fetch::FetchFailure, quote::QuoteResponse, weather::WeatherResponse},
    infrastructure::{
        config::Config,
        http::{FetchError, QuoteSource, WeatherSource},
    },
};

/// Test helper driving `AppState` through key presses and remote results
/// Provides a fluent API for common test patterns and reduces boilerplate
pub struct BoardTestHelper {
    state: AppState,
    commands: Vec<Cmd>,
}

impl BoardTestHelper {
    /// Default boards with the embedded key bindings
    pub fn new() -> Self {
        let config = Config::default()
            .with_default_keybindings()
            .unwrap_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            state: AppState::new_with_config(config),
            commands: vec![],
        }
    }

    /// Press a plain character key
    pub fn press_char(&mut self, ch: char) -> &mut Self {
        self.press_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::empty()))
    }

    pub fn press_key(&mut self, key: KeyEvent) -> &mut Self {
        for msg in translate_raw_to_domain(RawMsg::Key(key), &self.state) {
            self.send_message(msg);
        }
        self
    }

    pub fn send_message(&mut self, msg: Msg) -> &mut Self {
        let (state, cmds) = update(msg, self.state.clone());
        self.state = state;
        self.commands.extend(cmds);
        self
    }

    pub fn deliver_quote(&mut self, content: Option<&str>, author: Option<&str>) -> &mut Self {
        self.send_message(Msg::Quote(QuoteMsg::Loaded(QuoteResponse {
            content: content.map(str::to_string),
            author: author.map(str::to_string),
        })))
    }

    pub fn fail_quote(&mut self, failure: FetchFailure) -> &mut Self {
        self.send_message(Msg::Quote(QuoteMsg::Failed(failure)))
    }

    pub fn deliver_weather(&mut self, response: WeatherResponse) -> &mut Self {
        self.send_message(Msg::Weather(WeatherMsg::Loaded(response)))
    }

    pub fn fail_weather(&mut self, failure: FetchFailure) -> &mut Self {
        self.send_message(Msg::Weather(WeatherMsg::Failed(failure)))
    }

    /// Commands produced since the last call
    pub fn take_commands(&mut self) -> Vec<Cmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn quote_text(&self) -> Option<&str> {
        self.state.quote.slots().map(|s| s.quote.text())
    }

    pub fn author_text(&self) -> Option<&str> {
        self.state.quote.slots().map(|s| s.author.text())
    }

    /// Temperature, humidity and wind texts, in that order
    pub fn weather_texts(&self) -> Option<[&str; 3]> {
        self.state
            .weather
            .slots()
            .map(|s| [s.temp.text(), s.humidity.text(), s.wind.text()])
    }

    pub fn weather_error_text(&self) -> Option<&str> {
        self.state
            .weather
            .slots()
            .and_then(|s| s.error.as_ref())
            .map(|e| e.text())
    }

    pub fn assert_quote(&self, quote: &str, author: &str) {
        assert_eq!(self.quote_text(), Some(quote), "quote slot mismatch");
        assert_eq!(self.author_text(), Some(author), "author slot mismatch");
    }

    pub fn assert_weather(&self, expected: [&str; 3]) {
        assert_eq!(self.weather_texts(), Some(expected), "weather slots mismatch");
    }

    pub fn assert_weather_error(&self, expected: &str) {
        assert_eq!(
            self.weather_error_text(),
            Some(expected),
            "weather error slot mismatch"
        );
    }

    pub fn assert_quote_trigger_enabled(&self, enabled: bool) {
        assert_eq!(self.state.quote.trigger().is_enabled(), enabled);
    }

    pub fn assert_weather_trigger_enabled(&self, enabled: bool) {
        assert_eq!(self.state.weather.trigger().is_enabled(), enabled);
    }
}

impl Default for BoardTestHelper {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned reply for the mock sources. Only HTTP statuses can be produced
/// without a live transport.
#[derive(Debug, Clone)]
pub enum MockReply<T> {
    Ok(T),
    Status(u16),
}

impl<T: Clone> MockReply<T> {
    fn to_result(&self) -> Result<T, FetchError> {
        match self {
            MockReply::Ok(value) => Ok(value.clone()),
            MockReply::Status(code) => Err(FetchError::Status(*code)),
        }
    }
}

/// Quote source answering every request with the same reply
pub struct StaticQuoteSource {
    reply: MockReply<QuoteResponse>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl StaticQuoteSource {
    pub fn new(reply: MockReply<QuoteResponse>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn ok(content: &str, author: &str) -> Self {
        Self::new(MockReply::Ok(QuoteResponse {
            content: Some(content.to_string()),
            author: Some(author.to_string()),
        }))
    }

    /// Hold every reply until the returned gate is notified
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteSource for StaticQuoteSource {
    async fn fetch_quote(&self) -> Result<QuoteResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.reply.to_result()
    }
}

/// Weather source answering every request with the same reply and
/// recording the requested cities
pub struct StaticWeatherSource {
    reply: MockReply<WeatherResponse>,
    cities: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
}

impl StaticWeatherSource {
    pub fn new(reply: MockReply<WeatherResponse>) -> Self {
        Self {
            reply,
            cities: Mutex::new(vec![]),
            gate: None,
        }
    }

    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn cities(&self) -> Vec<String> {
        self.cities
            .lock()
            .map(|cities| cities.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.cities().len()
    }
}

#[async_trait]
impl WeatherSource for StaticWeatherSource {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponse, FetchError> {
        if let Ok(mut cities) = self.cities.lock() {
            cities.push(city.to_string());
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.reply.to_result()
    }
}
