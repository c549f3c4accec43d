//! Currency marker set — the symbols stripped before numeric interpretation
//!
//! The set is fixed and case-insensitive: `$`, `€`, and the Polish złoty
//! abbreviation in both its cased forms (`zł`, `zl`). Symbol localization
//! beyond this set is out of scope; unknown markers simply fall through to
//! the normalizer's residual cleanup.

/// Single-character currency markers.
const SYMBOL_CHARS: [char; 2] = ['$', '€'];

/// Returns true if `input` contains any recognized currency marker,
/// case-insensitively, anywhere in the string.
pub fn contains_symbol(input: &str) -> bool {
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if SYMBOL_CHARS.contains(&c) {
            return true;
        }
        if is_zloty_prefix(c) {
            if let Some(&next) = chars.peek() {
                if is_zloty_suffix(next) {
                    return true;
                }
            }
        }
    }
    false
}

/// Removes every occurrence of a recognized currency marker from `input`,
/// case-insensitively, anywhere in the string. All other characters pass
/// through untouched.
pub fn strip(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if SYMBOL_CHARS.contains(&c) {
            continue;
        }
        if is_zloty_prefix(c) {
            if let Some(&next) = chars.peek() {
                if is_zloty_suffix(next) {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

fn is_zloty_prefix(c: char) -> bool {
    matches!(c, 'z' | 'Z')
}

fn is_zloty_suffix(c: char) -> bool {
    matches!(c, 'l' | 'L' | 'ł' | 'Ł')
}
