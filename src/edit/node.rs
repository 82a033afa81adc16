//! Flowchart node edits: label, shape, insertion, deletion and edges

use super::append_line;
use crate::parser::flowchart::{
    anchored_id, find_definition, get_all_node_ids, references_node, whole_word_regex,
};
use crate::types::{AddedNode, ShapeKind};
use log::debug;
use regex::{Captures, Regex};

const NEW_NODE_LABEL: &str = "New Node";
const INDENT: &str = "    ";

/// Bracket characters a bare label may not contain: any of them could close the
/// definition early or make it look like a different shape.
const BRACKETS: [char; 6] = ['[', ']', '(', ')', '{', '}'];

/// Whether `label` can sit between shape delimiters and still be found again.
/// Blank labels are refused: `A([])` or `C(())` would read back as another shape.
fn label_fits(label: &str) -> bool {
    !label.trim().is_empty()
        && !label
            .chars()
            .any(|c| c == '\n' || c == '\r' || BRACKETS.contains(&c))
}

/// Replace the first match of `re` in `text` with the output of `rewrite`
fn replace_first(text: &str, re: &Regex, rewrite: impl Fn(&Captures) -> String) -> Option<String> {
    if !re.is_match(text) {
        return None;
    }
    Some(re.replace(text, |caps: &Captures| rewrite(caps)).into_owned())
}

/// Set the label of flowchart node `id`, keeping its shape and formatting.
///
/// Tries the exact `id<open>label<close>` text first, then tolerates
/// whitespace between the id and its bracket. Idempotent.
pub fn update_label(text: &str, id: &str, new_label: &str) -> String {
    let def = match find_definition(text, id) {
        Some(def) => def,
        None => {
            debug!("update_label: no definition for {}, leaving source unchanged", id);
            return text.to_string();
        }
    };
    if def.label == new_label {
        return text.to_string();
    }
    if !label_fits(new_label) {
        debug!("update_label: {:?} does not fit inside a {} node", new_label, def.shape);
        return text.to_string();
    }

    let old_wrapped = regex::escape(&def.shape.wrap(&def.label));
    let new_wrapped = def.shape.wrap(new_label);

    let exact = Regex::new(&format!("({}){}", anchored_id(id), old_wrapped)).ok();
    if let Some(re) = exact {
        if let Some(updated) = replace_first(text, &re, |caps| format!("{}{}", &caps[1], new_wrapped)) {
            return updated;
        }
    }

    let spaced = Regex::new(&format!(r"({})(\s*){}", anchored_id(id), old_wrapped)).ok();
    if let Some(re) = spaced {
        if let Some(updated) =
            replace_first(text, &re, |caps| format!("{}{}{}", &caps[1], &caps[2], new_wrapped))
        {
            return updated;
        }
    }

    debug!("update_label: definition of {} could not be rewritten", id);
    text.to_string()
}

/// Change the delimiters around node `id` to those of `new_shape`.
///
/// Only the exact `id<open>label<close>` text is rewritten; formatting the
/// locator tolerates but this does not (e.g. `A [x]`) leaves the source as is.
pub fn update_shape(text: &str, id: &str, new_shape: ShapeKind) -> String {
    let def = match find_definition(text, id) {
        Some(def) => def,
        None => {
            debug!("update_shape: no definition for {}, leaving source unchanged", id);
            return text.to_string();
        }
    };
    if def.shape == new_shape {
        return text.to_string();
    }
    if !label_fits(&def.label) {
        debug!("update_shape: label of {} cannot be wrapped as {}", id, new_shape);
        return text.to_string();
    }

    let pattern = format!("({}){}", anchored_id(id), regex::escape(&def.shape.wrap(&def.label)));
    let new_wrapped = new_shape.wrap(&def.label);
    let updated = Regex::new(&pattern)
        .ok()
        .and_then(|re| replace_first(text, &re, |caps| format!("{}{}", &caps[1], new_wrapped)));

    match updated {
        Some(updated) => updated,
        None => {
            debug!("update_shape: {} is not written verbatim, leaving source unchanged", id);
            text.to_string()
        }
    }
}

/// Append a rectangle node with a fresh `N<k>` id that is not used anywhere.
pub fn add_node(text: &str) -> AddedNode {
    let existing = get_all_node_ids(text);
    let mut counter = 1usize;
    let id = loop {
        let candidate = format!("N{}", counter);
        if !existing.contains(&candidate) && !references_node(text, &candidate) {
            break candidate;
        }
        counter += 1;
    };

    let line = format!("{}{}{}", INDENT, id, ShapeKind::Rect.wrap(NEW_NODE_LABEL));
    AddedNode {
        text: append_line(text, &line),
        id,
    }
}

/// Remove every line below the header that mentions `id` as a whole word:
/// the node's definition, its edges and its style directives.
pub fn delete_node(text: &str, id: &str) -> String {
    if id.trim().is_empty() {
        return text.to_string();
    }
    let re = match whole_word_regex(id) {
        Some(re) => re,
        None => return text.to_string(),
    };

    text.split('\n')
        .enumerate()
        .filter(|(index, line)| *index == 0 || !re.is_match(line))
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append an edge `from --> to`. Endpoints are not checked for existence;
/// the renderer accepts forward references.
pub fn add_edge(text: &str, from: &str, to: &str) -> String {
    let valid = |id: &str| !id.trim().is_empty() && !id.contains(['\n', '\r']);
    if !valid(from) || !valid(to) {
        debug!("add_edge: refusing blank or multi-line endpoint");
        return text.to_string();
    }
    append_line(text, &format!("{}{} --> {}", INDENT, from.trim(), to.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "flowchart TD\n    A[Start] --> B{Check}\n";

    #[test]
    fn test_update_label_replaces_inside_brackets() {
        let out = update_label(TEXT, "A", "Begin");
        assert_eq!(out, "flowchart TD\n    A[Begin] --> B{Check}\n");
    }

    #[test]
    fn test_update_label_is_idempotent() {
        let once = update_label(TEXT, "B", "Valid?");
        let twice = update_label(&once, "B", "Valid?");
        assert_eq!(once, twice);
        assert!(once.contains("B{Valid?}"));
    }

    #[test]
    fn test_update_label_tolerates_spacing() {
        let text = "graph LR\n    A  (Soft edges) --> B\n";
        assert_eq!(update_label(text, "A", "Hard"), "graph LR\n    A  (Hard) --> B\n");
    }

    #[test]
    fn test_update_label_leaves_replacement_tokens_literal() {
        let out = update_label(TEXT, "A", "Cost $1 $0 $$");
        assert!(out.contains("A[Cost $1 $0 $$]"));
    }

    #[test]
    fn test_update_label_does_not_touch_longer_ids() {
        let text = "graph TD\n    XA[Start]\n    A[Start]\n";
        assert_eq!(update_label(text, "A", "Go"), "graph TD\n    XA[Start]\n    A[Go]\n");
    }

    #[test]
    fn test_update_label_missing_or_unfit_is_noop() {
        assert_eq!(update_label(TEXT, "Z", "Nope"), TEXT);
        assert_eq!(update_label("graph TD\n    A --> B", "B", "x"), "graph TD\n    A --> B");
        assert_eq!(update_label(TEXT, "A", "broken]label"), TEXT);
        assert_eq!(update_label(TEXT, "A", "two\nlines"), TEXT);
        assert_eq!(update_label(TEXT, "A", "call(x)"), TEXT);
        assert!(update_label(TEXT, "A", "\"Hello, world\"").contains("A[\"Hello, world\"]"));
    }

    #[test]
    fn test_update_label_refuses_blank_label() {
        for (id, wrapped, shape) in [
            ("A", "A([Retry])", ShapeKind::Stadium),
            ("D", "D[(Store)]", ShapeKind::Cylinder),
            ("C", "C((Hub))", ShapeKind::Circle),
        ] {
            let text = format!("flowchart TD\n    {} --> B\n", wrapped);
            assert_eq!(update_label(&text, id, ""), text, "{}", wrapped);
            assert_eq!(update_label(&text, id, "   "), text, "{}", wrapped);
            let def = find_definition(&update_label(&text, id, ""), id).unwrap();
            assert_eq!(def.shape, shape);
        }
    }

    #[test]
    fn test_update_shape_keeps_empty_rect() {
        let text = "graph TD\n    A[] --> B\n";
        assert_eq!(update_shape(text, "A", ShapeKind::Circle), text);
    }

    #[test]
    fn test_update_shape_same_shape_is_noop() {
        assert_eq!(update_shape(TEXT, "B", ShapeKind::Diamond), TEXT);
    }

    #[test]
    fn test_update_shape_rewrites_delimiters() {
        let out = update_shape(TEXT, "A", ShapeKind::Stadium);
        assert_eq!(out, "flowchart TD\n    A([Start]) --> B{Check}\n");
    }

    #[test]
    fn test_update_shape_every_kind_round_trips() {
        for from in ShapeKind::ALL {
            for to in ShapeKind::ALL {
                let text = format!("flowchart TD\n    A{} --> Z[End]\n", from.wrap("Label"));
                let out = update_shape(&text, "A", to);
                let def = find_definition(&out, "A").unwrap();
                assert_eq!(def.shape, to, "{} -> {}", from, to);
                assert_eq!(def.label, "Label", "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_update_shape_spaced_definition_is_noop() {
        let text = "graph TD\n    A [Start]\n";
        assert_eq!(update_shape(text, "A", ShapeKind::Circle), text);
    }

    #[test]
    fn test_add_node_skips_used_ids() {
        let text = "flowchart TD\n    N1[One] --> N2[Two]\n    N3 --> N1\n";
        let added = add_node(text);
        assert_eq!(added.id, "N4");
        assert!(added.text.ends_with("    N4[New Node]\n"));
        assert!(!get_all_node_ids(text).contains(&added.id));
    }

    #[test]
    fn test_add_node_on_empty_chart() {
        let added = add_node("flowchart TD");
        assert_eq!(added.id, "N1");
        assert_eq!(added.text, "flowchart TD\n    N1[New Node]");
    }

    #[test]
    fn test_delete_node_cascades_to_edges_and_styles() {
        let text = "flowchart TD\n    A[Start] --> B{Check}\n    B --> C[End]\n    AB[Keep]\n    style B fill:#f00\n";
        let out = delete_node(text, "B");
        assert_eq!(out, "flowchart TD\n    AB[Keep]\n");
    }

    #[test]
    fn test_delete_node_keeps_header() {
        let text = "graph TD\n    TD[Top] --> X\n    X --> Y\n";
        assert_eq!(delete_node(text, "TD"), "graph TD\n    X --> Y\n");
    }

    #[test]
    fn test_add_edge_appends_one_line() {
        let out = add_edge(TEXT, "A", "B");
        assert_eq!(out, "flowchart TD\n    A[Start] --> B{Check}\n    A --> B\n");
        assert_eq!(add_edge(TEXT, "A", " "), TEXT);
    }
}
