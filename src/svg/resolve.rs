//! Click resolution: from a clicked SVG node to the element it belongs to

use super::strategy::strategy_for;
use super::{first_descendant, is_tag, SHAPE_TAGS};
use crate::types::{Dialect, ElementInfo};
use log::trace;
use roxmltree::Node;

/// Nearest `<g>` ancestor (or `target` itself) below the `<svg>` root that
/// contains both a `<text>` and a drawn shape.
pub fn resolve_generic<'a, 'input>(target: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    let mut current = if target.is_element() {
        Some(target)
    } else {
        target.parent_element()
    };

    while let Some(node) = current {
        if is_tag(node, "svg") {
            break;
        }
        if is_tag(node, "g")
            && first_descendant(node, "text").is_some()
            && SHAPE_TAGS
                .iter()
                .any(|tag| first_descendant(node, tag).is_some())
        {
            return Some(node);
        }
        current = node.parent_element();
    }

    None
}

/// Find the interactive element a click on `target` belongs to.
///
/// The dialect's selectors are tried in order, each returning the closest
/// matching ancestor. When none match, the generic structural fallback applies.
pub fn resolve_click_target<'a, 'input>(
    target: Node<'a, 'input>,
    dialect: Dialect,
) -> Option<Node<'a, 'input>> {
    for selector in strategy_for(dialect).selectors() {
        if let Some(found) = selector.closest(target) {
            trace!("click resolved through {}", selector);
            return Some(found);
        }
    }
    resolve_generic(target)
}

/// Derive `{id, label, dialect}` for a resolved graphical element
pub fn extract_info(element: Node<'_, '_>, dialect: Dialect, source: &str) -> Option<ElementInfo> {
    strategy_for(dialect).identify(element, source)
}
