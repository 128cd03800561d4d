use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Rect};
use tracing::{debug, info};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    action::Action,
    components::Component,
    tui::{EventResponse, Frame},
};

use super::{render, FieldId, FormState, SubmitOutcome};

/// Focus position of the submit row, one past the last field.
pub(super) const SUBMIT_ROW: usize = FieldId::ALL.len();

/// Interactive contact form.
///
/// Every field is always "live": keystrokes go straight into the focused
/// field's editor and are mirrored into `FormState`, which re-validates on
/// each change. Tab/Down/Up walk the focus ring (fields plus submit row);
/// Enter advances, or submits when the submit row is focused. After an
/// accepted submit the component renders the read-only summary and stops
/// taking edits.
pub struct ContactForm {
    state: FormState,
    inputs: [Input; FieldId::ALL.len()],
    focused: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
            inputs: std::array::from_fn(|_| Input::default()),
            focused: 0,
        }
    }

    pub(super) fn state(&self) -> &FormState {
        &self.state
    }

    pub(super) fn focused_index(&self) -> usize {
        self.focused
    }

    fn focused_field(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.focused).copied()
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % (SUBMIT_ROW + 1);
    }

    fn focus_prev(&mut self) {
        if self.focused == 0 {
            self.focused = SUBMIT_ROW;
        } else {
            self.focused -= 1;
        }
    }

    fn edit_focused(&mut self, key: KeyEvent) -> bool {
        let Some(id) = self.focused_field() else {
            return false;
        };
        let editor = &mut self.inputs[self.focused];
        if editor
            .handle_event(&crossterm::event::Event::Key(key))
            .is_none()
        {
            return false;
        }
        self.state.set_value(id, self.inputs[self.focused].value());
        true
    }

    fn submit(&mut self) -> Option<Action> {
        match self.state.submit() {
            SubmitOutcome::Accepted => {
                if let Some(snapshot) = self.state.submitted_values() {
                    if let Ok(payload) = serde_json::to_string(snapshot) {
                        info!(%payload, "accepted contact submission");
                    }
                }
                Some(Action::Update)
            }
            SubmitOutcome::Rejected => {
                debug!(
                    errors = self.state.visible_error_count(),
                    "submission rejected"
                );
                Some(Action::Update)
            }
            SubmitOutcome::AlreadySubmitted => None,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactForm {
    fn height_constraint(&self) -> Constraint {
        Constraint::Fill(1)
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<EventResponse<Action>>> {
        if self.state.is_submitted() {
            // Terminal state: only the global keys (quit) remain relevant.
            return Ok(None);
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Ok(None);
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                Ok(Some(EventResponse::Stop(Action::FocusNext)))
            }
            KeyCode::BackTab | KeyCode::Up => {
                Ok(Some(EventResponse::Stop(Action::FocusPrev)))
            }
            KeyCode::Enter => {
                if self.focused == SUBMIT_ROW {
                    Ok(Some(EventResponse::Stop(Action::Submit)))
                } else {
                    Ok(Some(EventResponse::Stop(Action::FocusNext)))
                }
            }
            KeyCode::Esc => {
                // Repaint, but let the key reach the global quit handler.
                Ok(Some(EventResponse::Continue(Action::Update)))
            }
            _ => {
                if self.edit_focused(key) {
                    Ok(Some(EventResponse::Stop(Action::Update)))
                } else {
                    Ok(None)
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => {
                self.focus_next();
                Ok(None)
            }
            Action::FocusPrev => {
                self.focus_prev();
                Ok(None)
            }
            Action::Submit => Ok(self.submit()),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if let Some(snapshot) = self.state.submitted_values() {
            render::draw_summary(snapshot, f, area)?;
        } else {
            let metrics = render::draw_form(self, f, area)?;
            tracing::trace!(?metrics, "form drawn");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn press(form: &mut ContactForm, code: KeyCode) -> Option<EventResponse<Action>> {
        let response = form.handle_key_events(key(code)).unwrap();
        // Apply the resulting action like the app loop would.
        if let Some(EventResponse::Continue(action) | EventResponse::Stop(action)) =
            response.clone()
        {
            form.update(action).unwrap();
        }
        response
    }

    fn type_str(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = ContactForm::new();
        type_str(&mut form, "tafiqul");
        assert_eq!(form.state().value(FieldId::FirstName), "tafiqul");
        assert_eq!(form.state().value(FieldId::LastName), "");
    }

    #[test]
    fn typing_revalidates_on_every_keystroke() {
        let mut form = ContactForm::new();
        type_str(&mut form, "123");
        assert_eq!(form.state().visible_error_count(), 1);
        type_str(&mut form, "45");
        assert_eq!(form.state().visible_error_count(), 0);
    }

    #[test]
    fn focus_ring_wraps_both_ways() {
        let mut form = ContactForm::new();
        for _ in 0..FieldId::ALL.len() {
            press(&mut form, KeyCode::Tab);
        }
        assert_eq!(form.focused_index(), SUBMIT_ROW);
        press(&mut form, KeyCode::Tab);
        assert_eq!(form.focused_index(), 0);
        press(&mut form, KeyCode::BackTab);
        assert_eq!(form.focused_index(), SUBMIT_ROW);
    }

    #[test]
    fn enter_advances_until_the_submit_row() {
        let mut form = ContactForm::new();
        press(&mut form, KeyCode::Enter);
        assert_eq!(form.focused_index(), 1);

        for _ in 0..FieldId::ALL.len() - 1 {
            press(&mut form, KeyCode::Enter);
        }
        assert_eq!(form.focused_index(), SUBMIT_ROW);
        let response = form.handle_key_events(key(KeyCode::Enter)).unwrap();
        assert_eq!(response, Some(EventResponse::Stop(Action::Submit)));
    }

    #[test]
    fn submit_with_valid_values_transitions_to_submitted() {
        let mut form = ContactForm::new();
        type_str(&mut form, "tafiqul");
        press(&mut form, KeyCode::Tab);
        type_str(&mut form, "tosuak");
        press(&mut form, KeyCode::Tab);
        type_str(&mut form, "tosuak@gmail.com");
        press(&mut form, KeyCode::Tab); // message
        press(&mut form, KeyCode::Tab); // submit row
        press(&mut form, KeyCode::Enter);

        assert!(form.state().is_submitted());
        let snapshot = form.state().submitted_values().unwrap();
        assert_eq!(snapshot.first_name, "tafiqul");
        assert_eq!(snapshot.last_name, "tosuak");
        assert_eq!(snapshot.email, "tosuak@gmail.com");
    }

    #[test]
    fn rejected_submit_keeps_editing() {
        let mut form = ContactForm::new();
        press(&mut form, KeyCode::BackTab); // straight to submit row
        press(&mut form, KeyCode::Enter);
        assert!(!form.state().is_submitted());
        assert_eq!(form.state().visible_error_count(), 3);
    }

    #[test]
    fn no_edits_after_submit() {
        let mut form = ContactForm::new();
        type_str(&mut form, "tafiqul");
        press(&mut form, KeyCode::Tab);
        type_str(&mut form, "tosuak");
        press(&mut form, KeyCode::Tab);
        type_str(&mut form, "tosuak@gmail.com");
        press(&mut form, KeyCode::BackTab);
        press(&mut form, KeyCode::BackTab);
        press(&mut form, KeyCode::BackTab); // wrap back to submit row
        assert_eq!(form.focused_index(), SUBMIT_ROW);
        press(&mut form, KeyCode::Enter);
        assert!(form.state().is_submitted());

        assert_eq!(form.handle_key_events(key(KeyCode::Char('x'))).unwrap(), None);
        assert_eq!(form.state().value(FieldId::FirstName), "tafiqul");
    }

    #[test]
    fn control_keys_bubble_up() {
        let mut form = ContactForm::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(form.handle_key_events(ctrl_c).unwrap(), None);
    }

    #[test]
    fn escape_propagates_past_the_form() {
        let mut form = ContactForm::new();
        assert_eq!(
            form.handle_key_events(key(KeyCode::Esc)).unwrap(),
            Some(EventResponse::Continue(Action::Update))
        );
    }
}
