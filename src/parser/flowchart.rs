//! Flowchart node-definition locator.
//!
//! Best-effort pattern matching over the raw source: a node definition is an
//! identifier token followed by one of the shape delimiter pairs around a label.
//! Each shape has its own pattern so individual rules can be replaced without
//! touching the public functions.

use crate::types::{NodeDefinition, ShapeKind};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref RE_NODE_ID: Regex = Regex::new(r"\b([A-Za-z_]\w*)\s*(?:\[|\(|\{|>)").unwrap();
}

/// Words that look like identifiers in front of a bracket but are statements
const RESERVED_WORDS: [&str; 10] = [
    "flowchart",
    "graph",
    "subgraph",
    "end",
    "style",
    "classdef",
    "click",
    "class",
    "direction",
    "linkstyle",
];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escaped identifier preceded by a word boundary, so `A` never matches the tail of `XA`.
/// `\b` only holds next to a word character, so it is omitted for ids starting with punctuation.
pub(crate) fn anchored_id(id: &str) -> String {
    let escaped = regex::escape(id);
    match id.chars().next() {
        Some(c) if is_word_char(c) => format!(r"\b{}", escaped),
        _ => escaped,
    }
}

/// Escaped identifier bounded on both sides, so `N1` never matches inside `N10`.
pub(crate) fn bounded_id(id: &str) -> String {
    let anchored = anchored_id(id);
    match id.chars().last() {
        Some(c) if is_word_char(c) => format!(r"{}\b", anchored),
        _ => anchored,
    }
}

/// Regex matching `id` as a whole word anywhere in a line
pub(crate) fn whole_word_regex(id: &str) -> Option<Regex> {
    Regex::new(&bounded_id(id)).ok()
}

/// Label capture for each shape. Single-character delimiters exclude their own
/// brackets from the label so `A[x] --> B[y]` never yields `x] --> B[y`.
fn label_pattern(shape: ShapeKind) -> &'static str {
    match shape {
        ShapeKind::Circle => r"\(\((.+?)\)\)",
        ShapeKind::Hexagon => r"\{\{(.+?)\}\}",
        ShapeKind::Stadium => r"\(\[(.+?)\]\)",
        ShapeKind::Subroutine => r"\[\[(.+?)\]\]",
        ShapeKind::Cylinder => r"\[\((.+?)\)\]",
        ShapeKind::Rect => r"\[([^\[\]]*?)\]",
        ShapeKind::Round => r"\(([^()]*?)\)",
        ShapeKind::Diamond => r"\{([^{}]*?)\}",
    }
}

/// Pattern for "`id`, optional whitespace, `shape` delimiters around a label"
pub(crate) fn definition_regex(id: &str, shape: ShapeKind) -> Option<Regex> {
    Regex::new(&format!(r"{}\s*{}", anchored_id(id), label_pattern(shape))).ok()
}

/// Find the bracketed definition of `id`, probing shapes most-specific first.
///
/// Returns `None` when the node is only referenced implicitly (e.g. as a bare
/// edge endpoint); callers treat that as "label = id, shape = rect".
pub fn find_definition(text: &str, id: &str) -> Option<NodeDefinition> {
    if id.is_empty() {
        return None;
    }

    for shape in ShapeKind::SPECIFICITY {
        let re = match definition_regex(id, shape) {
            Some(re) => re,
            None => continue,
        };
        if let Some(caps) = re.captures(text) {
            let label = caps[1].to_string();
            trace!("found definition of {} as {} [{}]", id, shape, label);
            return Some(NodeDefinition {
                id: id.to_string(),
                label,
                shape,
            });
        }
    }

    None
}

/// Label and shape of `id`, falling back to the id itself as a rectangle
pub fn definition_or_default(text: &str, id: &str) -> NodeDefinition {
    find_definition(text, id).unwrap_or_else(|| NodeDefinition {
        id: id.to_string(),
        label: id.to_string(),
        shape: ShapeKind::Rect,
    })
}

/// Identifiers written directly in front of a shape-opening delimiter, in
/// order of first appearance. Statement keywords are skipped.
///
/// Only used to avoid collisions when synthesizing ids; it is not a full
/// reference graph (bare edge endpoints are not collected).
pub fn get_all_node_ids(text: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ids = Vec::new();

    for caps in RE_NODE_ID.captures_iter(text) {
        let id = match caps.get(1) {
            Some(m) => m.as_str(),
            None => continue,
        };
        if RESERVED_WORDS.contains(&id.to_lowercase().as_str()) {
            continue;
        }
        if seen.insert(id) {
            ids.push(id.to_string());
        }
    }

    ids
}

/// Whether `id` appears as a whole word anywhere below the header line
pub fn references_node(text: &str, id: &str) -> bool {
    if id.is_empty() {
        return false;
    }
    match whole_word_regex(id) {
        Some(re) => text.split('\n').skip(1).any(|line| re.is_match(line)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "flowchart TD\n    A[Start] --> B{Check}\n    B -->|Yes| C((Done))\n    B -->|No| D([Retry])\n    D --> E[(Store)]\n    E --> F[[Call]]\n    F --> G{{Prepare}}\n    G --> H(Soft)\n";

    #[test]
    fn test_find_each_shape() {
        let cases = [
            ("A", ShapeKind::Rect, "Start"),
            ("B", ShapeKind::Diamond, "Check"),
            ("C", ShapeKind::Circle, "Done"),
            ("D", ShapeKind::Stadium, "Retry"),
            ("E", ShapeKind::Cylinder, "Store"),
            ("F", ShapeKind::Subroutine, "Call"),
            ("G", ShapeKind::Hexagon, "Prepare"),
            ("H", ShapeKind::Round, "Soft"),
        ];
        for (id, shape, label) in cases {
            let def = find_definition(SAMPLE, id).unwrap_or_else(|| panic!("{} not found", id));
            assert_eq!(def.shape, shape, "shape of {}", id);
            assert_eq!(def.label, label, "label of {}", id);
        }
    }

    #[test]
    fn test_identifier_is_word_bounded() {
        let text = "graph TD\n    N10[Ten] --> XN1[Other]\n    N1[One]\n";
        assert_eq!(find_definition(text, "N1").unwrap().label, "One");
        assert_eq!(find_definition(text, "N10").unwrap().label, "Ten");
        assert!(find_definition("graph TD\n    N10[Ten]", "N1").is_none());
    }

    #[test]
    fn test_whitespace_between_id_and_bracket() {
        let def = find_definition("graph TD\n    A   [Spaced out]", "A").unwrap();
        assert_eq!(def.label, "Spaced out");
        assert_eq!(def.shape, ShapeKind::Rect);
    }

    #[test]
    fn test_implicit_node_is_not_found() {
        let text = "graph TD\n    A --> B\n";
        assert!(find_definition(text, "B").is_none());
        let fallback = definition_or_default(text, "B");
        assert_eq!(fallback.label, "B");
        assert_eq!(fallback.shape, ShapeKind::Rect);
    }

    #[test]
    fn test_regex_metacharacters_in_id_are_escaped() {
        let text = "graph TD\n    a.b[Dotted]\n    axb[Other]\n";
        assert_eq!(find_definition(text, "a.b").unwrap().label, "Dotted");
        assert!(find_definition(text, "a+").is_none());
    }

    #[test]
    fn test_get_all_node_ids_skips_keywords() {
        let text = "flowchart TD\n    subgraph S1[Group]\n    A[One] --> B(Two)\n    end\n    click A callback\n    C{Three}\n    A --> D\n";
        assert_eq!(get_all_node_ids(text), vec!["S1", "A", "B", "C"]);
    }

    #[test]
    fn test_references_node_ignores_header() {
        assert!(references_node("graph TD\n    A --> B", "B"));
        assert!(!references_node("graph TD\n    AB --> C", "B"));
        assert!(!references_node("graph TD", "TD"));
    }
}
