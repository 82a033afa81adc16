//! mermaid-patch - Locate and surgically edit elements of Mermaid diagram source
//!
//! This library is the text engine behind a visual Mermaid editor. It finds
//! named elements in loosely formatted source, rewrites labels, shapes and
//! colors in place, inserts and removes nodes and edges, and maps clicks on
//! the rendered SVG back to the element they belong to. Everything it does not
//! mean to change is left byte-for-byte intact.
//!
//! # Example
//!
//! ```rust
//! use mermaid_patch::{update_label, update_shape, ShapeKind};
//!
//! let text = "flowchart TD\n    A[Start] --> B{Check}\n";
//! let text = update_label(text, "A", "Begin");
//! let text = update_shape(&text, "A", ShapeKind::Stadium);
//! assert_eq!(text, "flowchart TD\n    A([Begin]) --> B{Check}\n");
//! ```
//!
//! # Supported Dialects
//!
//! - Flowcharts (graph TD / flowchart LR): every edit
//! - Sequence, class, state, ER diagrams and mindmaps: label edits
//! - Pie and gantt charts: detection only
//!
//! All text operations are pure: the source is passed in and a new string is
//! returned. When a target cannot be found the input is returned unchanged.

pub mod capabilities;
pub mod edit;
pub mod error;
pub mod parser;
pub mod presets;
pub mod render;
pub mod svg;
pub mod types;

pub use capabilities::{capabilities_of, is_interactive};
pub use edit::{
    add_edge, add_node, apply_label_edit, current_label, delete_node, is_vertical, set_fill_color,
    set_stroke_color, toggle_direction, update_label, update_shape,
};
pub use error::{Error, RenderError, Result};
pub use parser::detect;
pub use parser::flowchart::{definition_or_default, find_definition, get_all_node_ids};
pub use render::{DiagramRenderer, RenderOptions, RenderOutcome, RenderSession};
pub use svg::{extract_info, resolve_click_target};
pub use types::*;

/// Resolve a click on `target` straight to the element info, detecting the
/// dialect from `source`.
///
/// # Example
/// ```rust
/// let svg = r#"<svg><g class="node" id="flowchart-X1-12"><rect/><text id="t">Go</text></g></svg>"#;
/// let doc = roxmltree::Document::parse(svg).unwrap();
/// let clicked = mermaid_patch::svg::find_element_by_id(&doc, "t").unwrap();
/// let info = mermaid_patch::pick(clicked, "graph TD\n  X1[Go]").unwrap();
/// assert_eq!(info.id, "X1");
/// ```
pub fn pick(target: roxmltree::Node<'_, '_>, source: &str) -> Option<ElementInfo> {
    let dialect = detect(source);
    let element = resolve_click_target(target, dialect)?;
    extract_info(element, dialect, source)
}
