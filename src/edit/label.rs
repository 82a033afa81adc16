//! Label edits routed by dialect

use super::node::update_label;
use crate::parser::flowchart::{bounded_id, definition_or_default};
use crate::parser::{participant_alias, state_description};
use crate::types::Dialect;
use log::debug;
use regex::{Captures, Regex};

/// Rewrite `participant X as <old>` (or `actor X as <old>`) to the new alias
fn rewrite_participant_alias(text: &str, old_label: &str, new_label: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r"(?m)^([ \t]*(?:participant|actor)\s+\S+\s+as\s+){}([ \t]*)$",
        regex::escape(old_label)
    ))
    .ok()?;
    if !re.is_match(text) {
        return None;
    }
    Some(
        re.replace(text, |caps: &Captures| format!("{}{}{}", &caps[1], new_label, &caps[2]))
            .into_owned(),
    )
}

/// Rewrite `state "<old>" as X` or a `X : <old>` description of state `id`
fn rewrite_state_description(text: &str, id: &str, old_label: &str, new_label: &str) -> Option<String> {
    let old = regex::escape(old_label);
    let patterns = [
        format!(r#"(?m)^([ \t]*state\s+"){}("\s+as\s+{})"#, old, bounded_id(id)),
        format!(r"(?m)^([ \t]*{}[ \t]*:[ \t]*){}([ \t]*)$", bounded_id(id), old),
    ];
    for pattern in &patterns {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        if re.is_match(text) {
            return Some(
                re.replace(text, |caps: &Captures| format!("{}{}{}", &caps[1], new_label, &caps[2]))
                    .into_owned(),
            );
        }
    }
    None
}

/// Label currently shown for element `id`: the flowchart definition, a state
/// description or a participant alias when declared, else the id itself.
pub fn current_label(text: &str, dialect: Dialect, id: &str) -> String {
    let declared = match dialect {
        Dialect::Flowchart => return definition_or_default(text, id).label,
        Dialect::State => state_description(text, id),
        Dialect::Sequence => participant_alias(text, id),
        _ => None,
    };
    declared.unwrap_or_else(|| id.to_string())
}

/// Apply a label edit for an element of any dialect.
///
/// Flowcharts go through [`update_label`], anchored on the node id. Sequence
/// diagrams rewrite a participant alias and state diagrams a state
/// description when one exists. Everything else, and those two when no
/// declaration matches, falls back to replacing every literal occurrence of
/// `old_label`; that can also rename unrelated text carrying the same label.
pub fn apply_label_edit(
    text: &str,
    dialect: Dialect,
    id: &str,
    old_label: &str,
    new_label: &str,
) -> String {
    if old_label == new_label {
        return text.to_string();
    }
    if new_label.contains(['\n', '\r']) {
        debug!("apply_label_edit: refusing multi-line label {:?}", new_label);
        return text.to_string();
    }

    let scoped = match dialect {
        Dialect::Flowchart => return update_label(text, id, new_label),
        Dialect::Sequence => rewrite_participant_alias(text, old_label, new_label),
        Dialect::State => rewrite_state_description(text, id, old_label, new_label),
        _ => None,
    };
    if let Some(updated) = scoped {
        return updated;
    }

    if old_label.is_empty() {
        debug!("apply_label_edit: nothing to replace for {}", id);
        return text.to_string();
    }
    text.replace(old_label, new_label)
}
