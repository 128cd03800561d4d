use color_eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::{components::Component, tui::Frame};

pub const HEADER_TITLE: &str = "Contact Form";

/// Static title line above the form.
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for HeaderComponent {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(1)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let title = Paragraph::new(HEADER_TITLE)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, area);
        Ok(())
    }
}
