//! Swiss canton code validation.
//!
//! Camp applications are filed with the cantonal authority, so the canton
//! field must carry one of the 26 official two-letter codes (lowercase, as
//! stored by the federation's systems).

/// Check whether `code` is a known Swiss canton code.
pub fn is_known_canton_code(code: &str) -> bool {
    CANTON_CODES.binary_search(&code).is_ok()
}

/// The 26 Swiss canton codes. Sorted for binary search.
static CANTON_CODES: &[&str] = &[
    "ag", "ai", "ar", "be", "bl", "bs", "fr", "ge", "gl", "gr", "ju", "lu", "ne", "nw", "ow", "sg",
    "sh", "so", "sz", "tg", "ti", "ur", "vd", "vs", "zg", "zh",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cantons() {
        assert!(is_known_canton_code("be"));
        assert!(is_known_canton_code("zh"));
        assert!(is_known_canton_code("ti"));
        assert!(is_known_canton_code("ju"));
    }

    #[test]
    fn unknown_cantons() {
        assert!(!is_known_canton_code("xx"));
        assert!(!is_known_canton_code(""));
        assert!(!is_known_canton_code("BE"));
        assert!(!is_known_canton_code("bern"));
    }

    #[test]
    fn list_is_sorted() {
        for window in CANTON_CODES.windows(2) {
            assert!(
                window[0] < window[1],
                "canton codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn list_count() {
        assert_eq!(CANTON_CODES.len(), 26);
    }
}
