//! String utilities for the domain layer.

/// Replace every character of a file name segment that is not an ASCII
/// letter, digit, Cyrillic letter or underscore with `_`.
///
/// The Cyrillic range is the Russian alphabet (`А-Я`, `а-я`, `Ё`, `ё`);
/// other scripts are replaced as well.
pub fn sanitize_file_segment(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || is_russian_letter(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn is_russian_letter(c: char) -> bool {
    matches!(c, 'А'..='Я' | 'а'..='я' | 'Ё' | 'ё')
}

/// Format a square-metre value with two decimals
pub fn format_area(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a percentage with two decimals
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_mixed_address() {
        let sanitized = sanitize_file_segment("ул. Foo #5/A");
        assert_eq!(sanitized, "ул__Foo__5_A");
        assert!(
            sanitized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || is_russian_letter(c))
        );
    }

    #[test]
    fn test_sanitize_keeps_yo() {
        assert_eq!(sanitize_file_segment("Ёлкин пр-т"), "Ёлкин_пр_т");
    }

    #[test]
    fn test_sanitize_replaces_other_scripts() {
        // Kazakh-specific letters fall outside the kept range
        assert_eq!(sanitize_file_segment("Әуезов 12"), "_уезов_12");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_file_segment(""), "");
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(format_area(600.0), "600.00");
        assert_eq!(format_area(12.346), "12.35");
        assert_eq!(format_percent(60.0), "60.00%");
        assert_eq!(format_percent(33.333), "33.33%");
    }
}
