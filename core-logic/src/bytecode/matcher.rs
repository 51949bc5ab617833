/// Returns every selector not found in `bytecode`, in input order.
///
/// Matching is plain substring containment on the hex text, so casing must
/// agree between `bytecode` and `selectors`.
pub fn find_missing<S: AsRef<str>>(bytecode: &str, selectors: &[S]) -> Vec<String> {
    selectors
        .iter()
        .map(AsRef::as_ref)
        .filter(|selector| !has_selector(bytecode, selector))
        .map(str::to_string)
        .collect()
}

/// Whether `selector` appears anywhere in `bytecode`.
pub fn has_selector(bytecode: &str, selector: &str) -> bool {
    bytecode.contains(selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_missing_reports_absent_selector() {
        let bytecode = "6080604052a9059cbb00095ea7b3ff";
        let missing = find_missing(bytecode, &["a9059cbb", "095ea7b3", "dd62ed3e"]);
        assert_eq!(missing, vec!["dd62ed3e".to_string()]);
    }

    #[test]
    fn test_find_missing_preserves_input_order() {
        let missing = find_missing("00", &["cc", "aa", "bb"]);
        assert_eq!(missing, vec!["cc", "aa", "bb"]);
    }

    #[test]
    fn test_find_missing_empty_list() {
        let missing = find_missing::<&str>("6080", &[]);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_find_missing_accepts_owned_strings() {
        let selectors = vec!["6080".to_string(), "ffff".to_string()];
        assert_eq!(find_missing("60806040", &selectors), vec!["ffff"]);
    }

    #[test]
    fn test_has_selector() {
        assert!(has_selector("63_40c10f19_14", "40c10f19"));
        assert!(!has_selector("6080604052", "8456cb59"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!has_selector("a9059cbb", "A9059CBB"));
    }

    #[test]
    fn test_empty_bytecode_misses_everything() {
        assert_eq!(find_missing("", &["a9059cbb", "18160ddd"]).len(), 2);
    }
}
