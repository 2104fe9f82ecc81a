//! # Locale Normalization
//!
//! Callers hand composition a locale string from whatever negotiation
//! layer they use (`Accept-Language`, a URL prefix, a user setting).
//! Content lookup only cares about the primary language subtag, so
//! `fi-FI`, `fi_FI`, and `FI` all normalize to `fi`. Locale *detection*
//! is out of scope — the string is an external input.

/// Fallback language when a locale is empty or has no matching content.
pub const DEFAULT_LOCALE: &str = "en";

/// Normalize a locale string to its lowercase primary language subtag.
///
/// Empty or whitespace-only input normalizes to [`DEFAULT_LOCALE`].
pub fn normalize_locale(locale: &str) -> String {
    let primary = locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if primary.is_empty() {
        DEFAULT_LOCALE.to_string()
    } else {
        primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_region_subtags() {
        assert_eq!(normalize_locale("fi-FI"), "fi");
        assert_eq!(normalize_locale("fi_FI"), "fi");
        assert_eq!(normalize_locale("en-US"), "en");
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize_locale("FI"), "fi");
        assert_eq!(normalize_locale("Sv-SE"), "sv");
    }

    #[test]
    fn empty_falls_back_to_default() {
        assert_eq!(normalize_locale(""), DEFAULT_LOCALE);
        assert_eq!(normalize_locale("   "), DEFAULT_LOCALE);
    }
}
