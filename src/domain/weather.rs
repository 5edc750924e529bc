//! Weather response parsing, formatting and error messages

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{fetch::FetchFailure, ui::PLACEHOLDER};

/// The weather endpoint is always queried in metric units; the formatting
/// below assumes °C and m/s.
pub const UNITS: &str = "metric";

pub const INVALID_KEY_MESSAGE: &str = "Invalid API key (HTTP 401). Please check your key.";
pub const NOT_FOUND_MESSAGE: &str = "City not found (HTTP 404).";
pub const GENERIC_MESSAGE: &str = "Could not load weather. Please try again.";

/// Fields consumed from a current-weather response
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
}

impl WeatherResponse {
    /// Extract `main.temp`, `main.humidity` and `wind.speed` from an
    /// arbitrary JSON body. Non-numeric values count as missing.
    pub fn from_value(value: &Value) -> Self {
        Self {
            temp: number_at(value, "/main/temp"),
            humidity: number_at(value, "/main/humidity"),
            wind_speed: number_at(value, "/wind/speed"),
        }
    }
}

fn number_at(value: &Value, pointer: &str) -> Option<f64> {
    value
        .pointer(pointer)
        .and_then(Value::as_f64)
        .filter(|n| !n.is_nan())
}

/// Rounds to one decimal with ties away from zero; `{:.1}` alone rounds ties to even
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn format_temp(temp: Option<f64>) -> String {
    temp.map_or_else(
        || PLACEHOLDER.to_string(),
        |t| format!("{:.1} °C", round_tenth(t)),
    )
}

/// Humidity is reported as-is: whole numbers print without a decimal point
pub fn format_humidity(humidity: Option<f64>) -> String {
    humidity.map_or_else(|| PLACEHOLDER.to_string(), |h| format!("{h} %"))
}

pub fn format_wind(speed: Option<f64>) -> String {
    speed.map_or_else(
        || PLACEHOLDER.to_string(),
        |s| format!("{:.1} m/s", round_tenth(s)),
    )
}

/// Human-readable message for a failed weather request
pub fn error_message(failure: &FetchFailure) -> &'static str {
    match failure.status() {
        Some(401) => INVALID_KEY_MESSAGE,
        Some(404) => NOT_FOUND_MESSAGE,
        _ => GENERIC_MESSAGE,
    }
}
