/// Removes `\n` and `\r`, turning a multi-line rhythm block into one logical line.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
pub fn assert_eq_formatted(input: &str, expected: &str) {
    let formatted = crate::format_maidata(input).expect("Failed to format input");
    pretty_assertions::assert_eq!(
        formatted.lines().collect::<Vec<_>>(),
        expected.lines().collect::<Vec<_>>(),
    );
    assert_eq!(formatted, expected);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tests() {
        assert_eq!(strip_line_breaks("{4}1,2,\n3,4,\r\n"), "{4}1,2,3,4,");
        assert_eq!(strip_line_breaks("1-5[4:1], 2"), "1-5[4:1], 2");
        assert_eq!(strip_line_breaks(""), "");
        assert!(is_blank(" \t"));
        assert!(is_blank(""));
        assert!(!is_blank(" E "));
    }
}
