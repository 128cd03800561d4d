//! Contact form widget.
//!
//! Module split, mirroring responsibilities:
//!   - `field.rs`  : field identities and presentation metadata
//!   - `rules.rs`  : pure validation (values in, per-field errors out)
//!   - `state.rs`  : the editing/submitted state machine
//!   - `widget.rs` : interactive component (focus, editing, key handling)
//!   - `render.rs` : line assembly and drawing for form and summary views

mod field;
mod render;
mod rules;
mod state;
mod widget;

pub use field::FieldId;
pub use render::{FormRenderMetrics, ERROR_MARKER};
pub use rules::{validate, ValidationErrors};
pub use state::{FieldValues, FormState, SubmitOutcome};
pub use widget::ContactForm;
