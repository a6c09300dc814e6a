//! Group key sanitization
//!
//! A group's destination sheet is named after the group's raw cell value, run
//! through the same constraints Excel puts on sheet names: at most 31
//! characters and none of `: \ / ? * [ ]`. Two raw values that sanitize to
//! the same key land in the same group; that merging is intended.

use crate::MAX_SHEET_NAME_LEN;

/// The key used for empty or whitespace-only cell values
pub const EMPTY_KEY: &str = "EMPTY";

/// Characters that may not appear in a sheet name
const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// Sanitize a raw cell value into a group key / sheet name.
///
/// The value is trimmed, truncated to 31 characters, stripped of the invalid
/// characters (truncation happens first, so a value with invalid characters
/// near the 31-character boundary loses them *after* the cut), and its first
/// character is upper-cased. Empty input, or input that stripping reduces to
/// nothing, maps to [`EMPTY_KEY`].
///
/// The function is idempotent: sanitizing an already-sanitized key returns it
/// unchanged.
pub fn sanitize_key(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return EMPTY_KEY.to_string();
    }

    // Truncate to the sheet-name limit, then strip invalid characters.
    let mut chars = trimmed
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .filter(|c| !INVALID_CHARS.contains(c));

    let mut key = String::with_capacity(MAX_SHEET_NAME_LEN);
    if let Some(first) = chars.next() {
        // Some mappings expand (e.g. 'ß' -> "SS"); the bound is re-applied below.
        key.extend(first.to_uppercase());
    }
    key.extend(chars);

    // Truncation can expose trailing whitespace that the initial trim could
    // not see; drop it so the key stays stable under re-sanitization.
    let key: String = key.chars().take(MAX_SHEET_NAME_LEN).collect();
    let key = key.trim_end();

    if key.is_empty() {
        EMPTY_KEY.to_string()
    } else {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_basic() {
        assert_eq!(sanitize_key("east"), "East");
        assert_eq!(sanitize_key("East"), "East");
        assert_eq!(sanitize_key("north west"), "North west");
        assert_eq!(sanitize_key("2023"), "2023");
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(sanitize_key(""), EMPTY_KEY);
        assert_eq!(sanitize_key("   "), EMPTY_KEY);
        assert_eq!(sanitize_key("\t\n"), EMPTY_KEY);
        // Stripping can empty the value too
        assert_eq!(sanitize_key("***"), EMPTY_KEY);
        assert_eq!(sanitize_key(":/?"), EMPTY_KEY);
    }

    #[test]
    fn test_trim() {
        assert_eq!(sanitize_key("  sales  "), "Sales");
        // Collision with the already-clean spelling is intended
        assert_eq!(sanitize_key("  sales  "), sanitize_key("Sales"));
    }

    #[test]
    fn test_invalid_chars_stripped() {
        assert_eq!(sanitize_key("a:b"), "Ab");
        assert_eq!(sanitize_key("a\\b/c"), "Abc");
        assert_eq!(sanitize_key("[total]"), "Total");
        assert_eq!(sanitize_key("what?*"), "What");
    }

    #[test]
    fn test_truncation() {
        let long = "x".repeat(40);
        let key = sanitize_key(&long);
        assert_eq!(key.chars().count(), MAX_SHEET_NAME_LEN);
        assert_eq!(key, format!("X{}", "x".repeat(30)));
    }

    #[test]
    fn test_truncate_before_strip() {
        // 30 plain chars, a colon at position 31, more text after. The cut
        // keeps the colon inside the window and stripping then removes it, so
        // the key ends up 30 characters; strip-then-truncate would give 31.
        let raw = format!("{}:{}", "a".repeat(30), "b".repeat(10));
        let key = sanitize_key(&raw);
        assert_eq!(key, format!("A{}", "a".repeat(29)));
        assert_eq!(key.chars().count(), 30);
    }

    #[test]
    fn test_idempotent_examples() {
        for raw in [
            "east",
            "  sales  ",
            "a:b[c]",
            "***",
            "",
            "y".repeat(64).as_str(),
            format!("{} z", "w".repeat(30)).as_str(),
        ] {
            let once = sanitize_key(raw);
            assert_eq!(sanitize_key(&once), once, "not idempotent for {raw:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_length_bound(raw in "[ -~]{0,80}") {
            prop_assert!(sanitize_key(&raw).chars().count() <= MAX_SHEET_NAME_LEN);
        }

        #[test]
        fn prop_idempotent(raw in "[ -~]{0,80}") {
            let once = sanitize_key(&raw);
            prop_assert_eq!(sanitize_key(&once), once);
        }

        #[test]
        fn prop_never_empty_or_invalid(raw in "[ -~]{0,80}") {
            let key = sanitize_key(&raw);
            prop_assert!(!key.is_empty());
            prop_assert!(!key.contains(INVALID_CHARS));
        }
    }
}
