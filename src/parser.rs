use crate::file::MaidataFile;

pub struct MaidataParser {}

/// Parses `key=value` pairs whose values may span several lines.
///
/// Never fails: text that defines no keys produces an empty file.
pub fn parse_maidata(content: &str) -> MaidataFile {
    let mut parser = MaidataParser::new();
    parser.parse(content)
}

impl Default for MaidataParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MaidataParser {
    pub fn new() -> Self {
        Self {}
    }

    pub fn parse(&mut self, content: &str) -> MaidataFile {
        let mut maidata_file = MaidataFile::new();
        let mut current: Option<(&str, Vec<&str>)> = None;

        for line in content.split('\n') {
            match split_key_line(line) {
                Some((key, rest)) => {
                    if let Some((key, lines)) = current.take() {
                        maidata_file.insert(key.trim(), lines.join("\n").trim());
                    }
                    current = Some((key, vec![rest]));
                }
                None => {
                    // continuation of a multi-line value; anything before the first key is dropped
                    if let Some((_, lines)) = current.as_mut() {
                        lines.push(line);
                    }
                }
            }
        }

        if let Some((key, lines)) = current {
            maidata_file.insert(key.trim(), lines.join("\n").trim());
        }

        maidata_file
    }
}

/// Splits `key=rest` when `line` opens a new pair.
///
/// The key must start at column 0 and hold no whitespace.
fn split_key_line(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once('=')?;
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        return None;
    }
    Some((key, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(file: &MaidataFile) -> Vec<(&str, &str)> {
        file.entries
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
            .collect()
    }

    #[test]
    fn test_parse_simple() {
        let file = parse_maidata("&title=Test\n&artist= Someone \n&lv_5=13+\n");
        assert_eq!(
            pairs(&file),
            vec![("&title", "Test"), ("&artist", "Someone"), ("&lv_5", "13+")]
        );
    }

    #[test]
    fn test_parse_multiline() {
        let content = r#"&title=Test
&inote_5=(120){4}1,2,
3,4,
{8}5,6,7,8,
E
&lv_5=13
"#;
        let file = parse_maidata(content);
        assert_eq!(
            pairs(&file),
            vec![
                ("&title", "Test"),
                ("&inote_5", "(120){4}1,2,\n3,4,\n{8}5,6,7,8,\nE"),
                ("&lv_5", "13"),
            ]
        );
    }

    #[test]
    fn test_key_must_start_line() {
        // indented or spaced keys do not open a new pair
        let file = parse_maidata("&a=1\n  &b=2\n&c d=3\n&e=4");
        assert_eq!(pairs(&file), vec![("&a", "1\n  &b=2\n&c d=3"), ("&e", "4")]);
    }

    #[test]
    fn test_empty_values() {
        let file = parse_maidata("&first=\n&second=x\n&third=");
        assert_eq!(pairs(&file), vec![("&first", ""), ("&second", "x"), ("&third", "")]);
    }

    #[test]
    fn test_no_keys() {
        assert!(parse_maidata("").is_empty());
        assert!(parse_maidata("just some text\nwithout pairs").is_empty());
        assert!(parse_maidata("=no key").is_empty());
    }

    #[test]
    fn test_text_before_first_key() {
        let file = parse_maidata("garbage\n&title=Test");
        assert_eq!(pairs(&file), vec![("&title", "Test")]);
    }

    #[test]
    fn test_repeated_key() {
        let file = parse_maidata("&a=1\n&b=2\n&a=3");
        assert_eq!(pairs(&file), vec![("&a", "3"), ("&b", "2")]);
    }

    #[test]
    fn test_value_with_equals() {
        let file = parse_maidata("&des=a=b\n&x=1");
        assert_eq!(pairs(&file), vec![("&des", "a=b"), ("&x", "1")]);
    }
}
