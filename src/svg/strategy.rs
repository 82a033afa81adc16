//! Per-dialect knowledge of how the renderer structures its output

use super::{first_descendant, has_class, is_tag, text_content};
use crate::parser::flowchart::definition_or_default;
use crate::parser::state_description;
use crate::types::{Dialect, ElementInfo};
use lazy_static::lazy_static;
use regex::Regex;
use roxmltree::Node;
use std::fmt;

lazy_static! {
    static ref RE_FLOWCHART_ID: Regex = Regex::new(r"^flowchart-(.+?)-\d+$").unwrap();
    static ref RE_CLASS_ID: Regex = Regex::new(r"^classId-(.+?)-\d+$").unwrap();
    static ref RE_STATE_ID: Regex = Regex::new(r"^state-(.+?)-\d+$").unwrap();
    static ref RE_STATE_ID_LOOSE: Regex = Regex::new(r"^state-(.+?)[-_]").unwrap();
}

/// A structural test on a rendered element, written like the CSS selector it mirrors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `.name`
    Class(&'static str),
    /// `[id^="prefix"]`
    IdPrefix(&'static str),
}

impl Selector {
    pub fn matches(&self, node: Node<'_, '_>) -> bool {
        if !node.is_element() {
            return false;
        }
        match self {
            Selector::Class(class) => has_class(node, class),
            Selector::IdPrefix(prefix) => node
                .attribute("id")
                .map(|id| id.starts_with(prefix))
                .unwrap_or(false),
        }
    }

    /// Nearest element, starting at `node` itself, that matches
    pub fn closest<'a, 'input>(&self, node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
        node.ancestors().find(|n| self.matches(*n))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Class(class) => write!(f, ".{}", class),
            Selector::IdPrefix(prefix) => write!(f, "[id^=\"{}\"]", prefix),
        }
    }
}

/// How one dialect's rendered elements are found and identified
pub trait ElementStrategy: Sync {
    fn dialect(&self) -> Dialect;

    /// Selectors for clickable elements, tried in order
    fn selectors(&self) -> &'static [Selector];

    /// Recover the logical element behind a resolved graphical element
    fn identify(&self, element: Node<'_, '_>, _source: &str) -> Option<ElementInfo> {
        info_from_text(element, self.dialect())
    }
}

fn label_node<'a, 'input>(element: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    if is_tag(element, "text") {
        return Some(element);
    }
    first_descendant(element, "text").or_else(|| first_descendant(element, "foreignObject"))
}

/// Visible label used as both id and label.
///
/// A bare shape (a sequence actor's `<rect>`) takes the label of its group.
pub fn info_from_text(element: Node<'_, '_>, dialect: Dialect) -> Option<ElementInfo> {
    let label_node = label_node(element).or_else(|| {
        element
            .parent_element()
            .filter(|parent| is_tag(*parent, "g"))
            .and_then(label_node)
    })?;
    let label = text_content(label_node).trim().to_string();
    if label.is_empty() {
        return None;
    }
    Some(ElementInfo {
        id: label.clone(),
        label,
        dialect,
    })
}

fn capture_id(re: &Regex, element: Node<'_, '_>) -> Option<String> {
    let id = element.attribute("id")?;
    re.captures(id).map(|caps| caps[1].to_string())
}

pub struct FlowchartStrategy;

impl ElementStrategy for FlowchartStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::Flowchart
    }

    fn selectors(&self) -> &'static [Selector] {
        &[Selector::Class("node"), Selector::Class("rough-node")]
    }

    fn identify(&self, element: Node<'_, '_>, source: &str) -> Option<ElementInfo> {
        let id = capture_id(&RE_FLOWCHART_ID, element)
            .or_else(|| element.attribute("data-id").map(str::to_string))
            .filter(|id| !id.is_empty())?;
        let label = definition_or_default(source, &id).label;
        Some(ElementInfo {
            id,
            label,
            dialect: Dialect::Flowchart,
        })
    }
}

pub struct SequenceStrategy;

impl ElementStrategy for SequenceStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::Sequence
    }

    fn selectors(&self) -> &'static [Selector] {
        &[Selector::Class("actor")]
    }
}

pub struct ClassStrategy;

impl ElementStrategy for ClassStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::Class
    }

    fn selectors(&self) -> &'static [Selector] {
        &[Selector::Class("classGroup")]
    }

    fn identify(&self, element: Node<'_, '_>, _source: &str) -> Option<ElementInfo> {
        match capture_id(&RE_CLASS_ID, element) {
            Some(name) => Some(ElementInfo {
                id: name.clone(),
                label: name,
                dialect: Dialect::Class,
            }),
            None => info_from_text(element, Dialect::Class),
        }
    }
}

pub struct StateStrategy;

impl ElementStrategy for StateStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::State
    }

    fn selectors(&self) -> &'static [Selector] {
        &[Selector::Class("statediagram-state"), Selector::Class("stateGroup")]
    }

    fn identify(&self, element: Node<'_, '_>, source: &str) -> Option<ElementInfo> {
        let id = capture_id(&RE_STATE_ID, element).or_else(|| capture_id(&RE_STATE_ID_LOOSE, element));
        match id {
            Some(id) => Some(ElementInfo {
                label: state_description(source, &id).unwrap_or_else(|| id.clone()),
                id,
                dialect: Dialect::State,
            }),
            None => info_from_text(element, Dialect::State),
        }
    }
}

pub struct EntityStrategy;

impl ElementStrategy for EntityStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::EntityRelationship
    }

    fn selectors(&self) -> &'static [Selector] {
        &[Selector::IdPrefix("entity-")]
    }
}

pub struct MindmapStrategy;

impl ElementStrategy for MindmapStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::Mindmap
    }

    fn selectors(&self) -> &'static [Selector] {
        &[Selector::Class("mindmap-node")]
    }
}

/// Charts without selectable elements; only the generic fallback applies
pub struct StaticStrategy(pub Dialect);

impl ElementStrategy for StaticStrategy {
    fn dialect(&self) -> Dialect {
        self.0
    }

    fn selectors(&self) -> &'static [Selector] {
        &[]
    }
}

static PIE: StaticStrategy = StaticStrategy(Dialect::Pie);
static GANTT: StaticStrategy = StaticStrategy(Dialect::Gantt);

pub fn strategy_for(dialect: Dialect) -> &'static dyn ElementStrategy {
    match dialect {
        Dialect::Flowchart => &FlowchartStrategy,
        Dialect::Sequence => &SequenceStrategy,
        Dialect::Class => &ClassStrategy,
        Dialect::State => &StateStrategy,
        Dialect::EntityRelationship => &EntityStrategy,
        Dialect::Mindmap => &MindmapStrategy,
        Dialect::Pie => &PIE,
        Dialect::Gantt => &GANTT,
    }
}

/// The dialect's selectors as one CSS selector group, e.g. `.node, .rough-node`
pub fn selectable_selector(dialect: Dialect) -> String {
    strategy_for(dialect)
        .selectors()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_selectable_selector() {
        assert_eq!(selectable_selector(Dialect::Flowchart), ".node, .rough-node");
        assert_eq!(selectable_selector(Dialect::EntityRelationship), "[id^=\"entity-\"]");
        assert_eq!(selectable_selector(Dialect::Pie), "");
    }

    #[test]
    fn test_strategy_dialects_line_up() {
        for dialect in Dialect::ALL {
            assert_eq!(strategy_for(dialect).dialect(), dialect);
        }
    }

    #[test]
    fn test_flowchart_id_decoding() {
        let doc = Document::parse(r#"<g id="flowchart-my-node-12"/>"#).unwrap();
        let info = FlowchartStrategy
            .identify(doc.root_element(), "graph TD\n  my-node((Hub))")
            .unwrap();
        assert_eq!(info.id, "my-node");
        assert_eq!(info.label, "Hub");
    }

    #[test]
    fn test_flowchart_data_id_fallback() {
        let doc = Document::parse(r#"<g class="node" data-id="Q"/>"#).unwrap();
        let info = FlowchartStrategy.identify(doc.root_element(), "graph TD\n  P --> Q").unwrap();
        assert_eq!(info.id, "Q");
        assert_eq!(info.label, "Q");
        let bare = Document::parse(r#"<g class="node"/>"#).unwrap();
        assert!(FlowchartStrategy.identify(bare.root_element(), "").is_none());
    }

    #[test]
    fn test_state_label_comes_from_description() {
        let doc = Document::parse(r#"<g id="state-W-4"><text>Waiting</text></g>"#).unwrap();
        let info = StateStrategy
            .identify(doc.root_element(), "stateDiagram-v2\n  state \"Waiting\" as W\n")
            .unwrap();
        assert_eq!((info.id.as_str(), info.label.as_str()), ("W", "Waiting"));
    }
}
