//! Amount normalizer — converts free-form numeric text to canonical form
//!
//! The normalizer takes locale-ambiguous input ("1.234,56", "1,234.56",
//! "€ 10,50", "1 234,56") and resolves it to a single dot-separated decimal
//! string without knowing the user's locale.
//!
//! # Pipeline
//!
//! `raw text → trim → strip currency → collapse whitespace → decimal-separator
//! detection → sign restoration → residual strip → validation gate`
//!
//! # Guarantees
//!
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)` for any input
//!   that normalizes successfully
//! - **Deterministic**: same input always produces same output
//! - **Total**: never panics; unresolvable input yields the empty string
//!
//! # Separator heuristic
//!
//! The decisive rule: the LAST `,` or `.` followed by a run of exactly one or
//! two digits is the decimal separator; a separator followed by three or more
//! digits is a thousands group. Currency amounts carry at most two fractional
//! digits, so a short trailing group is strong evidence of a decimal point,
//! while "1.234" almost certainly means one thousand two hundred thirty-four.
//! An input like "12,3" is genuinely ambiguous without locale knowledge; it
//! resolves to "12.3" as an accepted trade-off.

use serde_json::Value;

use crate::currency;
use crate::error::{Error, Result};

// ── Public API ─────────────────────────────────────────────

/// Normalize free-form amount text to canonical form.
///
/// Returns a string matching `('-')? digit+ ('.' digit{1,2})?` on success
/// (leading zeros preserved), or the empty string when the input cannot be
/// confidently resolved to a number. Empty and whitespace-only input also
/// yields the empty string. Never panics.
///
/// ```
/// use amount_core::normalize;
///
/// assert_eq!(normalize("1.234,56"), "1234.56");
/// assert_eq!(normalize("$ 1,234.56"), "1234.56");
/// assert_eq!(normalize("1 234,56"), "1234.56");
/// assert_eq!(normalize("10 zł"), "10");
/// assert_eq!(normalize("abc"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let stripped = currency::strip(trimmed);
    let collapsed = collapse_whitespace(&stripped);
    let negative = collapsed.starts_with('-');

    let mut candidate = match find_decimal_split(&collapsed) {
        Some(split) => {
            // Everything left of the separator is the integer part; commas,
            // dots, and spaces in it are thousands grouping.
            let integer: String = collapsed[..split.sep_index]
                .chars()
                .filter(|c| !matches!(c, ',' | '.') && !c.is_whitespace())
                .collect();
            format!("{}.{}", integer, split.fraction)
        }
        None => collapsed.chars().filter(char::is_ascii_digit).collect(),
    };

    if negative && !candidate.starts_with('-') {
        candidate.insert(0, '-');
    }

    let candidate = strip_residue(&candidate);
    let candidate = collapse_extra_dots(&candidate);
    validate(candidate)
}

/// Like [`normalize`], but reports failure as a typed error.
///
/// Empty or whitespace-only input is not an error; it passes through as
/// `Ok("")` the same way the untyped surface leaves a blank field blank.
///
/// # Errors
/// Returns [`Error::NotAnAmount`] when non-empty input cannot be resolved.
pub fn try_normalize(raw: &str) -> Result<String> {
    let normalized = normalize(raw);
    if normalized.is_empty() && !raw.trim().is_empty() {
        return Err(Error::NotAnAmount(raw.to_string()));
    }
    Ok(normalized)
}

/// Normalize a JSON value: strings are normalized, every other type passes
/// through unchanged. This is the typed rendition of the "non-string input
/// is returned as-is" contract at the host boundary.
pub fn normalize_json(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(normalize(s)),
        other => other.clone(),
    }
}

/// Cheap pre-check: does `value` plausibly need normalization?
///
/// Used by live-typing hosts to leave clean keystrokes (and the caret) alone.
/// Advisory only — commit events (paste, blur) always normalize regardless.
///
/// True when any of:
/// - a recognized currency marker is present
/// - two digits are separated only by whitespace
/// - a digit-comma-digit pattern exists
/// - a digit, a grouping separator (`,`, `.`, or whitespace), and three
///   digits appear in sequence
pub fn needs_sanitization(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if currency::contains_symbol(value) {
        return true;
    }
    let chars: Vec<char> = value.chars().collect();
    has_spaced_digits(&chars) || has_comma_decimal(&chars) || has_grouping_run(&chars)
}

// ── Pipeline stages ────────────────────────────────────────

/// A candidate decimal separator: its byte offset and the 1–2 digit
/// fractional run that follows it.
struct DecimalSplit {
    sep_index: usize,
    fraction: String,
}

/// Collapse every whitespace run to a single space and trim the ends.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Find the last `,` or `.` whose following digit run has length 1 or 2.
///
/// A run of three or more digits disqualifies the separator (thousands
/// group); a run of zero digits is not a separator at all. The rightmost
/// qualifying separator wins: the decimal point of a well-formed amount is
/// always the final one.
fn find_decimal_split(s: &str) -> Option<DecimalSplit> {
    let mut found = None;
    for (i, c) in s.char_indices() {
        if c != ',' && c != '.' {
            continue;
        }
        let run: String = s[i + 1..]
            .chars()
            .take_while(|d| d.is_ascii_digit())
            .collect();
        if run.len() == 1 || run.len() == 2 {
            found = Some(DecimalSplit {
                sep_index: i,
                fraction: run,
            });
        }
    }
    found
}

/// Drop everything that is not a digit or a dot; a minus survives only at
/// the very start. A minus anywhere else is noise, not a sign.
fn strip_residue(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        match c {
            '0'..='9' | '.' => out.push(c),
            '-' if i == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Defensive collapse for malformed leftovers: with more than one dot, all
/// but the last are treated as grouping separators.
fn collapse_extra_dots(s: &str) -> String {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() <= 2 {
        return s.to_string();
    }
    let (fraction, integer) = parts.split_last().unwrap_or((&"", &[]));
    format!("{}.{}", integer.concat(), fraction)
}

/// Final gate: reject degenerate shapes and anything that is not a finite
/// number, signaling failure as the empty string.
fn validate(candidate: String) -> String {
    if matches!(candidate.as_str(), "" | "-" | "." | "-.") {
        return String::new();
    }
    match candidate.parse::<f64>() {
        Ok(v) if v.is_finite() => candidate,
        _ => String::new(),
    }
}

// ── Heuristic patterns ─────────────────────────────────────

/// digit, one or more whitespace, digit
fn has_spaced_digits(chars: &[char]) -> bool {
    for (i, c) in chars.iter().enumerate() {
        if !c.is_ascii_digit() {
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        if j > i + 1 && j < chars.len() && chars[j].is_ascii_digit() {
            return true;
        }
    }
    false
}

/// digit, comma, digit
fn has_comma_decimal(chars: &[char]) -> bool {
    chars
        .windows(3)
        .any(|w| w[0].is_ascii_digit() && w[1] == ',' && w[2].is_ascii_digit())
}

/// digit, grouping separator, three digits
fn has_grouping_run(chars: &[char]) -> bool {
    chars.windows(5).any(|w| {
        w[0].is_ascii_digit()
            && (w[1] == ',' || w[1] == '.' || w[1].is_whitespace())
            && w[2..].iter().all(char::is_ascii_digit)
    })
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Symbol stripping ───────────────────────────────

    #[test]
    fn test_strips_currency_symbols() {
        assert_eq!(normalize("€10,50"), "10.50");
        assert_eq!(normalize("$ 1,234.56"), "1234.56");
        assert_eq!(normalize("10 zł"), "10");
        assert_eq!(normalize("12,34 zł"), "12.34");
        assert_eq!(normalize("12,34 zl"), "12.34");
        assert_eq!(normalize("100 zl"), "100");
        assert_eq!(normalize("1 234,56 €"), "1234.56");
        assert_eq!(normalize("  $  100.50  "), "100.50");
    }

    // ── Separator disambiguation ───────────────────────

    #[test]
    fn test_european_format() {
        assert_eq!(normalize("1.234,56"), "1234.56");
        assert_eq!(normalize("€ 1 234,56"), "1234.56");
    }

    #[test]
    fn test_us_format() {
        assert_eq!(normalize("1,234.56"), "1234.56");
        assert_eq!(normalize("12,345.67"), "12345.67");
        assert_eq!(normalize("123,456.78"), "123456.78");
        assert_eq!(normalize("10,000.00"), "10000.00");
    }

    #[test]
    fn test_space_grouped_format() {
        assert_eq!(normalize("1 234,56"), "1234.56");
        assert_eq!(normalize("1 234.56"), "1234.56");
        assert_eq!(normalize("12 345,67 zł"), "12345.67");
    }

    #[test]
    fn test_simple_decimals() {
        assert_eq!(normalize("10.50"), "10.50");
        assert_eq!(normalize("10,50"), "10.50");
        assert_eq!(normalize("0.01"), "0.01");
        assert_eq!(normalize("0,01"), "0.01");
        assert_eq!(normalize("100,00"), "100.00");
        assert_eq!(normalize("10.5"), "10.5");
    }

    #[test]
    fn test_three_trailing_digits_is_grouping() {
        assert_eq!(normalize("1.234"), "1234");
        assert_eq!(normalize("1,000"), "1000");
        assert_eq!(normalize("0.123"), "0123", "three fraction digits read as a group");
    }

    #[test]
    fn test_last_qualifying_separator_wins() {
        // Both "," and "." qualify here; the rightmost is the decimal point.
        assert_eq!(normalize("1,23 4.56"), "1234.56");
        assert_eq!(normalize("1.2.3"), "12.3");
    }

    #[test]
    fn test_ambiguous_short_group_reads_as_decimal() {
        // "12,3" has no ground truth without a locale; the 1–2 digit rule
        // deliberately reads it as a decimal.
        assert_eq!(normalize("12,3"), "12.3");
    }

    // ── Integer-only input ─────────────────────────────

    #[test]
    fn test_plain_integers() {
        assert_eq!(normalize("1234"), "1234");
        assert_eq!(normalize("100"), "100");
        assert_eq!(normalize("0"), "0");
    }

    #[test]
    fn test_trailing_separator_is_dropped() {
        assert_eq!(normalize("10,"), "10");
        assert_eq!(normalize("10."), "10");
    }

    #[test]
    fn test_leading_zeros_preserved() {
        assert_eq!(normalize("007"), "007");
        assert_eq!(normalize("00.50"), "00.50");
    }

    // ── Negative numbers ───────────────────────────────

    #[test]
    fn test_negative_numbers() {
        assert_eq!(normalize("-10.50"), "-10.50");
        assert_eq!(normalize("-10,50"), "-10.50");
        assert_eq!(normalize("-1 234,56"), "-1234.56");
        assert_eq!(normalize("- $10.50"), "-10.50");
        assert_eq!(normalize("-€ 100,25"), "-100.25");
        assert_eq!(normalize("- 1,234.56"), "-1234.56");
    }

    #[test]
    fn test_interior_minus_is_noise() {
        assert_eq!(normalize("10-5"), "105");
        assert_eq!(normalize("1-2,50"), "12.50");
    }

    // ── Degenerate input ───────────────────────────────

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\t\n"), "");
    }

    #[test]
    fn test_degenerate_shapes_fail_safe() {
        assert_eq!(normalize("-"), "");
        assert_eq!(normalize("."), "");
        assert_eq!(normalize("-."), "");
        assert_eq!(normalize(".."), "");
        assert_eq!(normalize(",,"), "");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize("€ zł"), "");
        assert_eq!(normalize("--"), "");
    }

    #[test]
    fn test_letters_mixed_with_digits() {
        assert_eq!(normalize("about 100"), "100");
        assert_eq!(normalize("12abc"), "12");
    }

    // ── Idempotence ────────────────────────────────────

    #[test]
    fn test_idempotence_on_canonical_input() {
        for s in ["1234.56", "1234", "-10.50", "0.5", "007", "-5", "100.00"] {
            assert_eq!(normalize(s), s, "canonical input must round-trip");
        }
    }

    #[test]
    fn test_idempotence_after_normalization() {
        for raw in ["1.234,56", "€ 10,50", "1 234,56", "$-1,234.56", "abc"] {
            let once = normalize(raw);
            let twice = normalize(&once);
            assert_eq!(once, twice, "normalize(normalize({:?}))", raw);
        }
    }

    // ── try_normalize ──────────────────────────────────

    #[test]
    fn test_try_normalize_success() {
        assert_eq!(try_normalize("€ 10,50").unwrap(), "10.50");
    }

    #[test]
    fn test_try_normalize_blank_passes_through() {
        assert_eq!(try_normalize("").unwrap(), "");
        assert_eq!(try_normalize("   ").unwrap(), "");
    }

    #[test]
    fn test_try_normalize_garbage_is_an_error() {
        let err = try_normalize("abc").unwrap_err();
        assert_eq!(err, Error::NotAnAmount("abc".to_string()));
        assert!(err.to_string().contains("abc"));
    }

    // ── JSON pass-through ──────────────────────────────

    #[test]
    fn test_normalize_json_strings() {
        assert_eq!(
            normalize_json(&Value::String("1.234,56".into())),
            Value::String("1234.56".into())
        );
    }

    #[test]
    fn test_normalize_json_non_strings_pass_through() {
        assert_eq!(normalize_json(&Value::Null), Value::Null);
        assert_eq!(normalize_json(&serde_json::json!(42)), serde_json::json!(42));
        assert_eq!(normalize_json(&serde_json::json!(true)), serde_json::json!(true));
        let arr = serde_json::json!(["1,50"]);
        assert_eq!(normalize_json(&arr), arr, "containers pass through whole");
    }

    // ── needs_sanitization ─────────────────────────────

    #[test]
    fn test_heuristic_false_for_clean_input() {
        assert!(!needs_sanitization(""));
        assert!(!needs_sanitization("1234.56"));
        assert!(!needs_sanitization("10.50"));
        assert!(!needs_sanitization("-10.50"));
        assert!(!needs_sanitization("100"));
    }

    #[test]
    fn test_heuristic_detects_currency_symbols() {
        assert!(needs_sanitization("$10"));
        assert!(needs_sanitization("10,50 zł"));
        assert!(needs_sanitization("€5"));
    }

    #[test]
    fn test_heuristic_detects_spaced_digits() {
        assert!(needs_sanitization("1 234,56"));
        assert!(needs_sanitization("1 234"));
        assert!(needs_sanitization("1  2"));
    }

    #[test]
    fn test_heuristic_detects_comma_decimal() {
        assert!(needs_sanitization("10,50"));
        assert!(needs_sanitization("12,3"));
    }

    #[test]
    fn test_heuristic_detects_thousands_grouping() {
        assert!(needs_sanitization("1.234"));
        assert!(needs_sanitization("1,000"));
    }
}
