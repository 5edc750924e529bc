use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::ui::Trigger;

/// A trigger drawn as `[ label <key> ]`, dimmed while disabled
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerButtonWidget {
    label: String,
    key_hint: Option<String>,
    trigger: Trigger,
}

impl TriggerButtonWidget {
    pub fn new(label: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            label: label.into(),
            key_hint: None,
            trigger,
        }
    }

    pub fn key_hint(mut self, key_hint: Option<String>) -> Self {
        self.key_hint = key_hint;
        self
    }

    pub fn text(&self) -> String {
        match &self.key_hint {
            Some(key) => format!("[ {} {key} ]", self.label),
            None => format!("[ {} ]", self.label),
        }
    }
}

impl Widget for TriggerButtonWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = if self.trigger.is_enabled() {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        Paragraph::new(self.text()).style(style).render(area, buf);
    }
}
