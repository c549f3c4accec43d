//! JavaScript/TypeScript bindings for the amount normalizer
//!
//! Thin wrapper around `amount-core` compiled to WebAssembly, for browser
//! hosts that attach the normalizer to amount input fields.
//! ZERO logic here — all behavior from the canonical Rust implementation.

use wasm_bindgen::prelude::*;

use amount_core::{plan_update, FieldEvent, FieldState};

/// Normalize free-form amount text to canonical form.
///
/// @param text - Raw amount text ("1.234,56", "€ 10,50", "1 234,56", ...)
/// @returns Canonical dot-separated decimal string, or "" when the input
///          cannot be confidently resolved to a number
#[wasm_bindgen]
pub fn sanitize(text: &str) -> String {
    amount_core::normalize(text)
}

/// Check whether amount text would be rewritten by sanitization.
///
/// Advisory pre-check for input-event handlers; paste and blur handlers
/// should always sanitize regardless.
///
/// @param text - Raw amount text
/// @returns true if the text plausibly needs sanitization
#[wasm_bindgen(js_name = "needsSanitization")]
pub fn needs_sanitization(text: &str) -> bool {
    amount_core::needs_sanitization(text)
}

/// Plan a field write-back for a UI event.
///
/// Event policy: "input" is gated by the sanitization heuristic; "paste"
/// and "blur" always normalize. The caret offset is in characters and is
/// shifted by the length delta, clamped to the new text's bounds.
///
/// @param event - "input", "paste", or "blur"
/// @param text - Current field text
/// @param caret - Current caret offset in characters
/// @returns JSON string: {"text": "...", "caret": n} when the host must
///          write back and re-dispatch its change event, or "null" when
///          the field should be left untouched
/// @throws Error if the event name is unknown
#[wasm_bindgen(js_name = "planFieldUpdate")]
pub fn plan_field_update(event: &str, text: &str, caret: usize) -> Result<String, JsError> {
    let event = match event {
        "input" => FieldEvent::Input,
        "paste" => FieldEvent::Paste,
        "blur" => FieldEvent::Blur,
        other => return Err(JsError::new(&format!("unknown field event: {:?}", other))),
    };

    let state = FieldState {
        text: text.to_string(),
        caret,
    };
    let update = plan_update(event, &state);

    serde_json::to_string(&update)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
