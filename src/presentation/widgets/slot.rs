use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::domain::ui::{DisplaySlot, SlotPhase};

/// Renders a display slot, styled by the phase it was last written in
#[derive(Debug, Clone, PartialEq)]
pub struct SlotWidget<'a> {
    slot: &'a DisplaySlot,
    style: Style,
    alignment: Alignment,
}

impl<'a> SlotWidget<'a> {
    pub fn new(slot: &'a DisplaySlot) -> Self {
        Self {
            slot,
            style: Style::default(),
            alignment: Alignment::Left,
        }
    }

    /// Base style, patched by the phase style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn phase_style(phase: SlotPhase) -> Style {
        match phase {
            SlotPhase::Default => Style::default(),
            SlotPhase::Loading => Style::default().fg(Color::DarkGray).italic(),
            SlotPhase::Success => Style::default().fg(Color::Green),
            SlotPhase::Error => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for SlotWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = self.style.patch(Self::phase_style(self.slot.phase()));
        Paragraph::new(self.slot.text())
            .style(style)
            .alignment(self.alignment)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
