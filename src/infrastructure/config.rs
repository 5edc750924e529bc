use std::path::PathBuf;

use config::ConfigError;
use secrecy::SecretString;
use serde::Deserialize;

use crate::{
    domain::quote::{SIGNATURE_AUTHOR, SIGNATURE_CONTENT},
    presentation::config::keybindings,
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_GREETING: &str = "Hello, Everyone!";
pub const DEFAULT_CLICKED: &str = "You clicked the button!";
pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://api.quotable.io/random";
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_CITY: &str = "Dammam";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Which boards are bound, and the static text of the greeting board.
/// An unbound board short-circuits its action.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub greeting: bool,
    pub quote: bool,
    pub weather: bool,
    /// Whether the weather board has a slot for error messages
    pub weather_errors: bool,
    pub greeting_text: String,
    pub clicked_text: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            greeting: true,
            quote: true,
            weather: true,
            weather_errors: true,
            greeting_text: DEFAULT_GREETING.to_string(),
            clicked_text: DEFAULT_CLICKED.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub endpoint: String,
    /// Shown on startup and whenever a request fails
    pub signature_content: String,
    pub signature_author: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_QUOTE_ENDPOINT.to_string(),
            signature_content: SIGNATURE_CONTENT.to_string(),
            signature_author: SIGNATURE_AUTHOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub endpoint: String,
    pub city: String,
    pub api_key: Option<SecretString>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            city: DEFAULT_CITY.to_string(),
            api_key: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub quote: QuoteConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl Config {
    /// Load the user configuration from the config directory, layered over
    /// the embedded defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::error!("No configuration file found in {}", config_dir.display());
            return Err(ConfigError::Message(String::from(
                "No configuration file found",
            )));
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        let cfg = cfg.with_default_keybindings()?;
        cfg.validate()?;

        Ok(cfg)
    }

    /// The configuration embedded in the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Merge embedded default keybindings under the user's bindings
    pub fn with_default_keybindings(mut self) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        Ok(self)
    }

    /// Check settings that have no usable default
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.weather && self.weather.api_key.is_none() {
            return Err(ConfigError::NotFound(String::from("weather.api_key")));
        }
        if self.weather.city.trim().is_empty() {
            return Err(ConfigError::Message(String::from(
                "weather.city must not be empty",
            )));
        }
        Ok(())
    }
}
