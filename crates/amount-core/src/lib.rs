//! Amount Core - canonical normalization of free-form currency amount text
//!
//! This is the single source of truth for the normalization semantics.
//! The CLI and the language bindings (Python, JavaScript) wrap this same core.
//!
//! # Architecture
//!
//! ```text
//! Raw Text → Normalizer → Canonical Form ("1234.56" | "" on failure)
//!               ↑
//!           Heuristic → "does this text plausibly need normalizing?"
//!               ↑
//!        Field Adapter → event policy + caret arithmetic for host UI fields
//! ```
//!
//! # Guarantees
//!
//! - **Locale-agnostic**: "1.234,56", "1,234.56", and "1 234,56" resolve to
//!   the same canonical string with no locale configuration
//! - **Deterministic**: same input always produces identical output
//! - **Fail-safe**: ambiguous or malformed input yields the empty string,
//!   never a wrong number and never a panic
//! - **Stateless**: every function is pure; safe to call from anywhere

pub mod adapter;
pub mod currency;
pub mod error;
pub mod normalizer;

pub use adapter::{plan_update, process_event, AmountField, FieldEvent, FieldState, FieldUpdate};
pub use error::{Error, Result};
pub use normalizer::{needs_sanitization, normalize, normalize_json, try_normalize};

/// A validated canonical amount: `('-')? digit+ ('.' digit{1,2})?`.
///
/// The empty string — the normalizer's failure sentinel — is not a canonical
/// amount; constructing one from it fails. Leading zeros are allowed: the
/// canonical form normalizes separators and symbols, not magnitude.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalAmount(String);

impl CanonicalAmount {
    /// Normalize raw text and wrap the result.
    ///
    /// # Errors
    /// [`Error::NotAnAmount`] when normalization fails (including for empty
    /// input, which has no canonical form), [`Error::NotCanonical`] when the
    /// normalizer's output falls outside the grammar (possible only for
    /// adversarial shapes such as `",50"`, which normalizes to `".50"`).
    pub fn normalize(raw: &str) -> Result<Self> {
        let canonical = normalize(raw);
        if canonical.is_empty() {
            return Err(Error::NotAnAmount(raw.to_string()));
        }
        Self::try_from(canonical.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the amount.
    pub fn value(&self) -> f64 {
        // The grammar admits only valid finite float literals.
        self.0.parse().unwrap_or(f64::NAN)
    }

    fn is_canonical(s: &str) -> bool {
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };
        if integer.is_empty() || !integer.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        match fraction {
            None => true,
            Some(f) => (1..=2).contains(&f.len()) && f.chars().all(|c| c.is_ascii_digit()),
        }
    }
}

impl TryFrom<&str> for CanonicalAmount {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        if Self::is_canonical(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::NotCanonical(s.to_string()))
        }
    }
}

impl TryFrom<String> for CanonicalAmount {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::try_from(s.as_str())
    }
}

impl std::str::FromStr for CanonicalAmount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl From<CanonicalAmount> for String {
    fn from(amount: CanonicalAmount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for CanonicalAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
