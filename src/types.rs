//! Type definitions shared by the locator, the patcher and the SVG resolver

use serde::{Deserialize, Serialize};
use std::fmt;

/// The diagram sub-language of a piece of Mermaid source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    #[serde(rename = "flowchart")]
    Flowchart,
    #[serde(rename = "sequence")]
    Sequence,
    #[serde(rename = "classDiagram")]
    Class,
    #[serde(rename = "stateDiagram")]
    State,
    #[serde(rename = "erDiagram")]
    EntityRelationship,
    #[serde(rename = "mindmap")]
    Mindmap,
    #[serde(rename = "pie")]
    Pie,
    #[serde(rename = "gantt")]
    Gantt,
}

impl Dialect {
    pub const ALL: [Dialect; 8] = [
        Dialect::Flowchart,
        Dialect::Sequence,
        Dialect::Class,
        Dialect::State,
        Dialect::EntityRelationship,
        Dialect::Mindmap,
        Dialect::Pie,
        Dialect::Gantt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Flowchart => "flowchart",
            Dialect::Sequence => "sequence",
            Dialect::Class => "classDiagram",
            Dialect::State => "stateDiagram",
            Dialect::EntityRelationship => "erDiagram",
            Dialect::Mindmap => "mindmap",
            Dialect::Pie => "pie",
            Dialect::Gantt => "gantt",
        }
    }

    /// Case-insensitive lookup by the names `as_str` produces
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Dialect::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().to_lowercase() == lower)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a flowchart node, encoded in source by the brackets around its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,       // [text]
    Round,      // (text)
    Stadium,    // ([text])
    Subroutine, // [[text]]
    Cylinder,   // [(text)]
    Circle,     // ((text))
    Diamond,    // {text}
    Hexagon,    // {{text}}
}

impl ShapeKind {
    /// Declaration order, used for pickers
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Rect,
        ShapeKind::Round,
        ShapeKind::Stadium,
        ShapeKind::Subroutine,
        ShapeKind::Cylinder,
        ShapeKind::Circle,
        ShapeKind::Diamond,
        ShapeKind::Hexagon,
    ];

    /// Probe order for the locator. Multi-character delimiters come before
    /// the single-character delimiters they start with.
    pub const SPECIFICITY: [ShapeKind; 8] = [
        ShapeKind::Circle,
        ShapeKind::Hexagon,
        ShapeKind::Stadium,
        ShapeKind::Subroutine,
        ShapeKind::Cylinder,
        ShapeKind::Rect,
        ShapeKind::Round,
        ShapeKind::Diamond,
    ];

    /// The `(open, close)` delimiter pair wrapping the label
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            ShapeKind::Rect => ("[", "]"),
            ShapeKind::Round => ("(", ")"),
            ShapeKind::Stadium => ("([", "])"),
            ShapeKind::Subroutine => ("[[", "]]"),
            ShapeKind::Cylinder => ("[(", ")]"),
            ShapeKind::Circle => ("((", "))"),
            ShapeKind::Diamond => ("{", "}"),
            ShapeKind::Hexagon => ("{{", "}}"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Round => "round",
            ShapeKind::Stadium => "stadium",
            ShapeKind::Subroutine => "subroutine",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Circle => "circle",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Hexagon => "hexagon",
        }
    }

    /// Human-facing name shown in shape pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Rect => "Rectangle",
            ShapeKind::Round => "Rounded",
            ShapeKind::Stadium => "Stadium",
            ShapeKind::Subroutine => "Subroutine",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Circle => "Circle",
            ShapeKind::Diamond => "Diamond",
            ShapeKind::Hexagon => "Hexagon",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        ShapeKind::ALL.iter().copied().find(|k| k.as_str() == lower)
    }

    /// Wrap `label` in this shape's delimiters
    pub fn wrap(&self, label: &str) -> String {
        let (open, close) = self.delimiters();
        format!("{}{}{}", open, label, close)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bracketed flowchart node definition found in source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDefinition {
    pub id: String,
    pub label: String,
    pub shape: ShapeKind,
}

/// Which edit operations a dialect supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub can_edit_label: bool,
    pub can_edit_shape: bool,
    pub can_edit_fill: bool,
    pub can_connect: bool,
    pub can_delete: bool,
    pub can_add: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        can_edit_label: false,
        can_edit_shape: false,
        can_edit_fill: false,
        can_connect: false,
        can_delete: false,
        can_add: false,
    };

    pub const LABEL_ONLY: Capabilities = Capabilities {
        can_edit_label: true,
        ..Capabilities::NONE
    };

    pub const FULL: Capabilities = Capabilities {
        can_edit_label: true,
        can_edit_shape: true,
        can_edit_fill: true,
        can_connect: true,
        can_delete: true,
        can_add: true,
    };
}

/// The logical element behind a clicked graphical element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementInfo {
    pub id: String,
    pub label: String,
    pub dialect: Dialect,
}

/// Result of inserting a fresh node into a flowchart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedNode {
    pub text: String,
    pub id: String,
}
