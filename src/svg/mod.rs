//! Mapping clicks on rendered SVG back to diagram elements.
//!
//! The rendered output is read with roxmltree; a clicked graphical node is a
//! `roxmltree::Node`. Per-dialect knowledge of the renderer's structure lives
//! in [`strategy`], so swapping the renderer only means swapping strategies.
//!
//! ```rust
//! use mermaid_patch::{svg, Dialect};
//!
//! let rendered = r#"<svg xmlns="http://www.w3.org/2000/svg">
//!   <g class="node default" id="flowchart-A-0"><rect/><text id="t">Start</text></g>
//! </svg>"#;
//! let doc = roxmltree::Document::parse(rendered).unwrap();
//! let clicked = svg::find_element_by_id(&doc, "t").unwrap();
//! let element = svg::resolve_click_target(clicked, Dialect::Flowchart).unwrap();
//! let info = svg::extract_info(element, Dialect::Flowchart, "flowchart TD\n  A[Start]").unwrap();
//! assert_eq!(info.id, "A");
//! ```

mod resolve;
pub mod strategy;

pub use resolve::{extract_info, resolve_click_target, resolve_generic};
pub use strategy::{selectable_selector, strategy_for, ElementStrategy, Selector};

use roxmltree::{Document, Node};

/// Tags counted as a drawn shape by the generic fallback
pub(crate) const SHAPE_TAGS: [&str; 5] = ["rect", "polygon", "circle", "path", "ellipse"];

/// Whether the `class` attribute of `node` contains `class` as a token
pub fn has_class(node: Node<'_, '_>, class: &str) -> bool {
    node.attribute("class")
        .map(|classes| classes.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

pub(crate) fn is_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().name() == tag
}

/// Concatenated text of every descendant text node, like DOM `textContent`
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// First strict descendant element with the given tag name
pub(crate) fn first_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants().skip(1).find(|n| is_tag(*n, tag))
}

/// Element whose `id` attribute equals `id`
pub fn find_element_by_id<'a, 'input>(
    doc: &'a Document<'input>,
    id: &str,
) -> Option<Node<'a, 'input>> {
    doc.descendants()
        .find(|n| n.is_element() && n.attribute("id") == Some(id))
}
