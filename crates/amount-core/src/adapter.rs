//! Field adapter — the consumer contract between a host UI field and the core
//!
//! The normalizer itself is a pure function; this module specifies how a host
//! attaches it to an editable amount field. There is no global registry and
//! no framework dependency: a host implements [`AmountField`] for its own
//! widget and calls [`process_event`] from its own lifecycle hooks, or uses
//! the pure [`plan_update`] planner directly.
//!
//! Event policy:
//!
//! - [`FieldEvent::Input`] (a keystroke) only normalizes when
//!   [`needs_sanitization`](crate::needs_sanitization) says the text
//!   plausibly needs it, so clean typing is never disturbed.
//! - [`FieldEvent::Paste`] and [`FieldEvent::Blur`] always normalize; these
//!   are commit points where correctness outweighs caret stability. Hosts
//!   that need to wait for a paste to land in the field first schedule the
//!   call themselves.
//!
//! Caret positions are counted in characters; hosts with a different index
//! space (UTF-16 DOM offsets, byte offsets) translate at the boundary.

use serde::{Deserialize, Serialize};

use crate::normalizer::{needs_sanitization, normalize};

/// Field lifecycle events that can trigger normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldEvent {
    /// Keystroke-driven change; normalization is gated by the heuristic
    Input,
    /// Paste completed; always normalize
    Paste,
    /// Field lost focus; always normalize
    Blur,
}

/// Snapshot of an editable field: its text and caret offset in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub text: String,
    pub caret: usize,
}

/// A write-back the host must apply: replacement text and the adjusted
/// caret. Emitting this implies the host also emits its change notification
/// so other observers of the field see the update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub text: String,
    pub caret: usize,
}

/// Decide what, if anything, to write back to the field for `event`.
///
/// Returns `None` when the displayed text should stay as it is — either the
/// heuristic vetoed an `Input` event, or normalization left the text
/// unchanged. Otherwise the caret moves by the character-length delta
/// between old and new text, clamped to the new text's bounds; a failed
/// normalization still produces an update that blanks the field.
pub fn plan_update(event: FieldEvent, state: &FieldState) -> Option<FieldUpdate> {
    if event == FieldEvent::Input && !needs_sanitization(&state.text) {
        return None;
    }

    let normalized = normalize(&state.text);
    if normalized == state.text {
        return None;
    }

    let old_len = state.text.chars().count() as isize;
    let new_len = normalized.chars().count() as isize;
    let caret = (state.caret as isize + (new_len - old_len)).max(0) as usize;
    let caret = caret.min(new_len as usize);

    Some(FieldUpdate {
        text: normalized,
        caret,
    })
}

/// The surface a host widget exposes to the adapter.
pub trait AmountField {
    fn text(&self) -> String;
    fn caret(&self) -> usize;
    fn set_text(&mut self, text: &str);
    fn set_caret(&mut self, caret: usize);
    /// Called after a write-back so other observers of the field see it.
    fn notify_changed(&mut self);
}

/// Run the event policy against a live field, writing back and notifying
/// when the text changes. Returns true if the field was updated.
pub fn process_event(field: &mut dyn AmountField, event: FieldEvent) -> bool {
    let state = FieldState {
        text: field.text(),
        caret: field.caret(),
    };
    match plan_update(event, &state) {
        Some(update) => {
            field.set_text(&update.text);
            field.set_caret(update.caret);
            field.notify_changed();
            true
        }
        None => false,
    }
}
