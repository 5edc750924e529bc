//! Weather action state

use crate::{
    core::{cmd::Cmd, msg::weather::WeatherMsg},
    domain::{
        fetch::FetchFailure,
        ui::{ActionPhase, DisplaySlot, Outcome, Trigger, LOADING_TEXT, PLACEHOLDER},
        weather::{error_message, format_humidity, format_temp, format_wind, WeatherResponse},
    },
};

/// Slots owned by the weather action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSlots {
    pub temp: DisplaySlot,
    pub humidity: DisplaySlot,
    pub wind: DisplaySlot,
    /// Optional: the action works without a place to show errors
    pub error: Option<DisplaySlot>,
}

impl WeatherSlots {
    fn new(with_error: bool) -> Self {
        Self {
            temp: DisplaySlot::new(PLACEHOLDER),
            humidity: DisplaySlot::new(PLACEHOLDER),
            wind: DisplaySlot::new(PLACEHOLDER),
            error: with_error.then(|| DisplaySlot::new("")),
        }
    }

    fn readings_mut(&mut self) -> [&mut DisplaySlot; 3] {
        [&mut self.temp, &mut self.humidity, &mut self.wind]
    }
}

/// Weather action state. `slots` is `None` when the board is not bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherState {
    slots: Option<WeatherSlots>,
    trigger: Trigger,
    city: String,
    last_outcome: Option<Outcome>,
}

impl WeatherState {
    pub fn new(city: impl Into<String>, with_error_slot: bool) -> Self {
        Self {
            slots: Some(WeatherSlots::new(with_error_slot)),
            trigger: Trigger::new(),
            city: city.into(),
            last_outcome: None,
        }
    }

    pub fn unbound() -> Self {
        Self {
            slots: None,
            trigger: Trigger::new(),
            city: String::new(),
            last_outcome: None,
        }
    }

    pub fn slots(&self) -> Option<&WeatherSlots> {
        self.slots.as_ref()
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn phase(&self) -> ActionPhase {
        if self.trigger.is_enabled() {
            ActionPhase::Idle
        } else {
            ActionPhase::Loading
        }
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn update(&mut self, msg: WeatherMsg) -> Vec<Cmd> {
        match msg {
            WeatherMsg::Load => self.load(),
            WeatherMsg::Loaded(response) => self.loaded(&response),
            WeatherMsg::Failed(failure) => self.failed(&failure),
        }
    }

    fn load(&mut self) -> Vec<Cmd> {
        let Some(slots) = self.slots.as_mut() else {
            log::debug!("weather board not bound; ignoring load");
            return vec![];
        };
        if !self.trigger.is_enabled() {
            log::debug!("weather request already in flight; ignoring load");
            return vec![];
        }

        if let Some(error) = slots.error.as_mut() {
            error.show_default("");
        }
        self.trigger.disable();
        for slot in slots.readings_mut() {
            slot.show_loading(LOADING_TEXT);
        }

        vec![Cmd::FetchWeather {
            city: self.city.clone(),
        }]
    }

    fn loaded(&mut self, response: &WeatherResponse) -> Vec<Cmd> {
        if self.phase() != ActionPhase::Loading {
            log::warn!("weather response arrived while idle; ignoring");
            return vec![];
        }
        if let Some(slots) = self.slots.as_mut() {
            slots.temp.show_success(format_temp(response.temp));
            slots.humidity.show_success(format_humidity(response.humidity));
            slots.wind.show_success(format_wind(response.wind_speed));
        }
        self.settle(Outcome::Success)
    }

    fn failed(&mut self, failure: &FetchFailure) -> Vec<Cmd> {
        if self.phase() != ActionPhase::Loading {
            log::warn!("weather failure arrived while idle; ignoring: {failure}");
            return vec![];
        }
        log::warn!("weather request for {} failed: {failure}", self.city);
        if let Some(slots) = self.slots.as_mut() {
            for slot in slots.readings_mut() {
                slot.show_error(PLACEHOLDER);
            }
            if let Some(error) = slots.error.as_mut() {
                error.show_error(error_message(failure));
            }
        }
        self.settle(Outcome::Error)
    }

    fn settle(&mut self, outcome: Outcome) -> Vec<Cmd> {
        self.trigger.enable();
        self.last_outcome = Some(outcome);
        vec![]
    }
}
