use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{components::Component, tui::Frame};

/// Bottom key-hint line.
pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }

    fn hints(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("Tab/Down", Style::default().fg(Color::White)),
            Span::raw(": Next   "),
            Span::styled("Shift+Tab/Up", Style::default().fg(Color::White)),
            Span::raw(": Previous   "),
            Span::styled("Enter", Style::default().fg(Color::White)),
            Span::raw(": Next / Submit   "),
            Span::styled("Esc", Style::default().fg(Color::White)),
            Span::raw(": Quit"),
        ])
        .fg(Color::DarkGray)
    }
}

impl Component for FooterComponent {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(1)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        f.render_widget(Paragraph::new(self.hints()), area);
        Ok(())
    }
}
