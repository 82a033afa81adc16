//! Which edit operations each dialect supports

use crate::types::{Capabilities, Dialect};

/// Capability table. Only flowcharts support structural edits; the other
/// interactive dialects allow label edits; pie and gantt charts allow nothing.
pub fn capabilities_of(dialect: Dialect) -> Capabilities {
    match dialect {
        Dialect::Flowchart => Capabilities::FULL,
        Dialect::Sequence
        | Dialect::Class
        | Dialect::State
        | Dialect::EntityRelationship
        | Dialect::Mindmap => Capabilities::LABEL_ONLY,
        Dialect::Pie | Dialect::Gantt => Capabilities::NONE,
    }
}

/// Whether clicking the rendered diagram can select an element at all
pub fn is_interactive(dialect: Dialect) -> bool {
    capabilities_of(dialect) != Capabilities::NONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flowchart_has_every_capability() {
        let caps = capabilities_of(Dialect::Flowchart);
        assert!(caps.can_edit_label && caps.can_edit_shape && caps.can_edit_fill);
        assert!(caps.can_connect && caps.can_delete && caps.can_add);
    }

    #[test]
    fn test_other_interactive_dialects_edit_labels_only() {
        for dialect in [
            Dialect::Sequence,
            Dialect::Class,
            Dialect::State,
            Dialect::EntityRelationship,
            Dialect::Mindmap,
        ] {
            assert_eq!(capabilities_of(dialect), Capabilities::LABEL_ONLY, "{}", dialect);
            assert!(is_interactive(dialect));
        }
    }

    #[test]
    fn test_pie_and_gantt_are_static() {
        assert_eq!(capabilities_of(Dialect::Pie), Capabilities::NONE);
        assert_eq!(capabilities_of(Dialect::Gantt), Capabilities::NONE);
        assert!(!is_interactive(Dialect::Gantt));
    }
}
