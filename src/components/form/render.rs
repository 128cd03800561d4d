use color_eyre::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::Frame;

use super::{widget::SUBMIT_ROW, ContactForm, FieldId, FieldValues};

/// Marker prefixed to every surfaced error line. Fixed so tests (and
/// scripts scraping the screen) can count indicators.
pub const ERROR_MARKER: &str = "✗";

/// Diagnostic data produced while assembling the form view.
#[derive(Debug, Clone)]
pub struct FormRenderMetrics {
    pub total_fields: usize,
    pub error_indicators: usize,
    pub focused_row: usize,
    pub submitted: bool,
}

/// Build the editable-form lines: one label/value row per field, an error
/// line beneath each invalid touched field, and the submit row.
pub fn form_lines(form: &ContactForm) -> (Vec<Line<'static>>, FormRenderMetrics) {
    let state = form.state();
    let mut lines: Vec<Line> = Vec::new();
    let mut error_indicators = 0;

    for (idx, id) in FieldId::ALL.iter().enumerate() {
        let focused = idx == form.focused_index();

        let mut row = vec![Span::styled(
            format!(
                "{}{}:",
                id.label(),
                if id.is_required() { "*" } else { "" }
            ),
            Style::default().fg(Color::White).add_modifier(if focused {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
        )];
        row.push(Span::raw(" "));
        let value_style = if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::Cyan)
        };
        row.push(Span::styled(state.value(*id).to_string(), value_style));
        lines.push(Line::from(row));

        if let Some(help) = id.help() {
            lines.push(Line::from(Span::styled(
                help,
                Style::default().fg(Color::DarkGray),
            )));
        }

        if let Some(err) = state.error_for(*id) {
            lines.push(Line::from(Span::styled(
                format!("{ERROR_MARKER} {err}"),
                Style::default().fg(Color::Red),
            )));
            error_indicators += 1;
        }

        lines.push(Line::raw(""));
    }

    let submit_focused = form.focused_index() == SUBMIT_ROW;
    let submit_style = if submit_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::from(Span::styled("[ Submit ]", submit_style)));

    let metrics = FormRenderMetrics {
        total_fields: FieldId::ALL.len(),
        error_indicators,
        focused_row: form.focused_index(),
        submitted: state.is_submitted(),
    };
    (lines, metrics)
}

/// Build the read-only summary shown after a successful submit. The message
/// row is dropped entirely when no message was provided.
pub fn summary_lines(values: &FieldValues) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "You submitted:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    for id in FieldId::ALL {
        let value = values.get(id);
        if id == FieldId::Message && value.is_empty() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", id.label()), Style::default().fg(Color::White)),
            Span::styled(value.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }

    lines
}

pub fn draw_form(form: &ContactForm, f: &mut Frame<'_>, area: Rect) -> Result<FormRenderMetrics> {
    let (lines, metrics) = form_lines(form);
    let para = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(symbols::border::ROUNDED),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
    Ok(metrics)
}

pub fn draw_summary(values: &FieldValues, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let para = Paragraph::new(Text::from(summary_lines(values)))
        .block(
            Block::default()
                .title(" Submission ")
                .borders(Borders::ALL)
                .border_set(symbols::border::ROUNDED),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
    Ok(())
}
