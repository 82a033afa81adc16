//! Surgical text edits on Mermaid source.
//!
//! Every function takes the source by reference and returns a new string.
//! When the target cannot be found, or the edit would not change anything,
//! the input comes back unchanged; nothing is ever partially applied.

mod direction;
mod label;
mod node;
mod style;

pub use direction::{is_vertical, toggle_direction};
pub use label::{apply_label_edit, current_label};
pub use node::{add_edge, add_node, delete_node, update_label, update_shape};
pub use style::{set_fill_color, set_stroke_color};

/// Append `line` after the last non-blank content, keeping a trailing newline if
/// the source had one.
pub(crate) fn append_line(text: &str, line: &str) -> String {
    let body = text.trim_end();
    let mut out = String::with_capacity(body.len() + line.len() + 2);
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
    out.push_str(line);
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_line() {
        assert_eq!(append_line("graph TD\n    A", "    B"), "graph TD\n    A\n    B");
        assert_eq!(append_line("graph TD\n    A\n\n\n", "    B"), "graph TD\n    A\n    B\n");
        assert_eq!(append_line("", "    B"), "    B");
    }
}
