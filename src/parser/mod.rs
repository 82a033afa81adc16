//! Lightweight, line-oriented parsing of Mermaid source text

pub mod flowchart;

use crate::types::Dialect;
use flowchart::bounded_id;
use regex::Regex;

/// First line of the trimmed source, trimmed again. Empty for blank input.
pub fn header_line(text: &str) -> &str {
    text.trim().lines().next().map(str::trim).unwrap_or_default()
}

/// Detect the dialect from the first non-blank line of the source text.
///
/// Total: anything unrecognised (including empty text) is a flowchart.
pub fn detect(text: &str) -> Dialect {
    let first_line = header_line(text).to_lowercase();

    if first_line.starts_with("flowchart") || first_line.starts_with("graph") {
        Dialect::Flowchart
    } else if first_line.starts_with("sequencediagram") {
        Dialect::Sequence
    } else if first_line.starts_with("classdiagram") {
        Dialect::Class
    } else if first_line.starts_with("erdiagram") {
        Dialect::EntityRelationship
    } else if first_line.starts_with("statediagram") {
        Dialect::State
    } else if first_line.starts_with("pie") {
        Dialect::Pie
    } else if first_line.starts_with("mindmap") {
        Dialect::Mindmap
    } else if first_line.starts_with("gantt") {
        Dialect::Gantt
    } else {
        Dialect::Flowchart
    }
}

/// Whether the source is a flowchart (`flowchart` or `graph` header)
pub fn is_flowchart(text: &str) -> bool {
    let first_line = header_line(text).to_lowercase();
    first_line.starts_with("flowchart") || first_line.starts_with("graph")
}

/// Description from `state "<label>" as <id>`, if the source declares one
pub fn state_description(text: &str, id: &str) -> Option<String> {
    let re = Regex::new(&format!(r#"state\s+"([^"]+)"\s+as\s+{}"#, bounded_id(id))).ok()?;
    re.captures(text).map(|caps| caps[1].to_string())
}

/// Alias from `participant <id> as <alias>` (or `actor`), if the source declares one
pub fn participant_alias(text: &str, id: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r"(?m)^[ \t]*(?:participant|actor)\s+{}\s+as\s+(.+?)[ \t]*$",
        bounded_id(id)
    ))
    .ok()?;
    re.captures(text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_headers() {
        assert_eq!(detect("flowchart TD\n  A --> B"), Dialect::Flowchart);
        assert_eq!(detect("graph LR\n  A --> B"), Dialect::Flowchart);
        assert_eq!(detect("sequenceDiagram\n  A->>B: hi"), Dialect::Sequence);
        assert_eq!(detect("classDiagram\n  class A"), Dialect::Class);
        assert_eq!(detect("erDiagram\n  A ||--o{ B : has"), Dialect::EntityRelationship);
        assert_eq!(detect("stateDiagram-v2\n  [*] --> A"), Dialect::State);
        assert_eq!(detect("pie title Pets\n  \"Dogs\" : 3"), Dialect::Pie);
        assert_eq!(detect("mindmap\n  root"), Dialect::Mindmap);
        assert_eq!(detect("gantt\n  title T"), Dialect::Gantt);
    }

    #[test]
    fn test_detect_skips_leading_blank_lines_and_ignores_case() {
        assert_eq!(detect("\n\n   SEQUENCEDIAGRAM\n"), Dialect::Sequence);
        assert_eq!(detect("  \t stateDiagram\n"), Dialect::State);
    }

    #[test]
    fn test_detect_defaults_to_flowchart() {
        assert_eq!(detect(""), Dialect::Flowchart);
        assert_eq!(detect("   \n\t\n"), Dialect::Flowchart);
        assert_eq!(detect("journey\n  title x"), Dialect::Flowchart);
        assert_eq!(detect("---\ntitle: x\n---\n"), Dialect::Flowchart);
    }

    #[test]
    fn test_is_flowchart_requires_explicit_header() {
        assert!(is_flowchart("graph TD\n A"));
        assert!(is_flowchart("  flowchart LR"));
        assert!(!is_flowchart("journey"));
        assert!(!is_flowchart(""));
        assert!(!is_flowchart("pie"));
    }

    #[test]
    fn test_declared_labels() {
        let state = "stateDiagram-v2\n    state \"Waiting\" as W\n    W --> WX\n";
        assert_eq!(state_description(state, "W").as_deref(), Some("Waiting"));
        assert!(state_description(state, "WX").is_none());

        let seq = "sequenceDiagram\n    participant U as User\n    actor A as Admin  \n";
        assert_eq!(participant_alias(seq, "U").as_deref(), Some("User"));
        assert_eq!(participant_alias(seq, "A").as_deref(), Some("Admin"));
        assert!(participant_alias(seq, "User").is_none());
    }
}
