//! Flow direction on the header line (`graph TD` ⇄ `graph LR`)

use crate::parser::header_line;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_VERTICAL: Regex = Regex::new(r"\b(?:TD|TB)\b").unwrap();
    // Checked in order; the first direction present on the header wins.
    static ref TOGGLES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\bTD\b").unwrap(), "LR"),
        (Regex::new(r"\bLR\b").unwrap(), "TD"),
        (Regex::new(r"\bTB\b").unwrap(), "LR"),
        (Regex::new(r"\bRL\b").unwrap(), "TD"),
        (Regex::new(r"\bBT\b").unwrap(), "LR"),
    ];
}

/// Byte range of the first non-blank line, without its line break
fn header_span(text: &str) -> Option<(usize, usize)> {
    let mut start = 0;
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if !content.trim().is_empty() {
            return Some((start, start + content.len()));
        }
        start += line.len();
    }
    None
}

/// Whether the header declares a top-down layout
pub fn is_vertical(text: &str) -> bool {
    RE_VERTICAL.is_match(header_line(text))
}

/// Flip the header between vertical and horizontal layouts. Only the first
/// non-blank line is touched; a header without a direction is returned unchanged.
pub fn toggle_direction(text: &str) -> String {
    let (start, end) = match header_span(text) {
        Some(span) => span,
        None => return text.to_string(),
    };
    let header = &text[start..end];

    match TOGGLES.iter().find(|(re, _)| re.is_match(header)) {
        Some((re, to)) => format!("{}{}{}", &text[..start], re.replace(header, *to), &text[end..]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let text = "flowchart TD\n    TD[Top] --> LR[Left]\n";
        let flipped = toggle_direction(text);
        assert_eq!(flipped, "flowchart LR\n    TD[Top] --> LR[Left]\n");
        assert_eq!(toggle_direction(&flipped), text);
    }

    #[test]
    fn test_toggle_other_directions() {
        assert_eq!(toggle_direction("graph TB"), "graph LR");
        assert_eq!(toggle_direction("graph RL\n  A"), "graph TD\n  A");
        assert_eq!(toggle_direction("graph BT"), "graph LR");
        assert_eq!(toggle_direction("sequenceDiagram\n  A->>B: x"), "sequenceDiagram\n  A->>B: x");
    }

    #[test]
    fn test_is_vertical() {
        assert!(is_vertical("graph TD\n  A"));
        assert!(is_vertical("flowchart TB"));
        assert!(!is_vertical("flowchart LR\n  TD"));
    }

    #[test]
    fn test_header_after_blank_lines() {
        let text = "\n   \n  graph TD\n    A --> B\n";
        assert!(is_vertical(text));
        assert_eq!(toggle_direction(text), "\n   \n  graph LR\n    A --> B\n");
        assert!(!is_vertical(&toggle_direction(text)));
        assert_eq!(toggle_direction("\n\n"), "\n\n");
    }
}
