//! Input normalization

/// Normalize raw transcript text
///
/// Per line: collapse internal whitespace runs to a single space and trim;
/// lines that become empty are dropped; remaining lines are rejoined with
/// `\n`. Pure, total, and idempotent.
pub fn normalize_input(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(normalize_input("a   b\t\tc"), "a b c");
    }

    #[test]
    fn test_drops_blank_lines() {
        assert_eq!(normalize_input("first\n\n\n  \t \nsecond"), "first\nsecond");
    }

    #[test]
    fn test_trims_line_edges() {
        assert_eq!(normalize_input("   урок по пайплайну   "), "урок по пайплайну");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_input(""), "");
        assert_eq!(normalize_input("  \n \t \n"), "");
    }

    #[test]
    fn test_idempotent() {
        let raw = "Сегодня  разберём \n\n чанкирование   контента\nи дедупликацию ";
        let once = normalize_input(raw);
        assert_eq!(normalize_input(&once), once);
    }

    proptest::proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "\\PC{0,200}") {
            let once = normalize_input(&raw);
            proptest::prop_assert_eq!(normalize_input(&once), once);
        }

        #[test]
        fn prop_no_blank_lines_or_double_spaces(raw in "\\PC{0,200}") {
            let normalized = normalize_input(&raw);
            for line in normalized.lines() {
                proptest::prop_assert!(!line.is_empty());
                proptest::prop_assert!(!line.contains("  "));
                proptest::prop_assert_eq!(line, line.trim());
            }
        }
    }
}
