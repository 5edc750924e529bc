use serde::{Deserialize, Serialize};

use crate::domain::{fetch::FetchFailure, weather::WeatherResponse};

/// Messages driving the weather action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeatherMsg {
    /// The weather trigger was activated
    Load,
    /// The request finished with a 2xx JSON body
    Loaded(WeatherResponse),
    /// The request failed
    Failed(FetchFailure),
}

impl WeatherMsg {
    pub fn from_result<E: Into<FetchFailure>>(result: Result<WeatherResponse, E>) -> Self {
        match result {
            Ok(response) => WeatherMsg::Loaded(response),
            Err(e) => WeatherMsg::Failed(e.into()),
        }
    }
}
