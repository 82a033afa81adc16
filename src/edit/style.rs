//! `style <id> fill:…,stroke:…` directives

use super::append_line;
use crate::parser::flowchart::{bounded_id, references_node};
use log::debug;
use regex::Regex;

const FILL: &str = "fill";
const STROKE: &str = "stroke";

/// A parsed single-node style directive line
struct StyleLine {
    indent: String,
    id: String,
    props: Vec<(String, String)>,
    terminated: bool,
}

impl StyleLine {
    fn parse(line: &str, re: &Regex) -> Option<Self> {
        let caps = re.captures(line)?;
        let mut body = caps[3].trim();
        let terminated = body.ends_with(';');
        if terminated {
            body = body[..body.len() - 1].trim_end();
        }

        let props = body
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| match p.split_once(':') {
                Some((k, v)) => (k.trim().to_string(), v.trim().to_string()),
                None => (p.to_string(), String::new()),
            })
            .collect();

        Some(Self {
            indent: caps[1].to_string(),
            id: caps[2].to_string(),
            props,
            terminated,
        })
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        let pos = self.props.iter().position(|(k, _)| k.eq_ignore_ascii_case(key));
        match (pos, value) {
            (Some(i), Some(v)) => self.props[i].1 = v.to_string(),
            (Some(i), None) => {
                self.props.remove(i);
            }
            (None, Some(v)) => self.props.push((key.to_string(), v.to_string())),
            (None, None) => {}
        }
    }

    fn render(&self) -> Option<String> {
        if self.props.is_empty() {
            return None;
        }
        let body = self
            .props
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}:{}", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join(",");
        let semi = if self.terminated { ";" } else { "" };
        Some(format!("{}style {} {}{}", self.indent, self.id, body, semi))
    }
}

fn valid_color(color: &str) -> bool {
    !color.trim().is_empty() && !color.contains([',', ';', '\n', '\r'])
}

/// Set (`Some`) or remove (`None`) one style property of node `id`.
fn set_style_property(text: &str, id: &str, key: &str, color: Option<&str>) -> String {
    if !references_node(text, id) {
        debug!("set {}: {} is not referenced, leaving source unchanged", key, id);
        return text.to_string();
    }
    if let Some(c) = color {
        if !valid_color(c) {
            debug!("set {}: rejecting color {:?}", key, c);
            return text.to_string();
        }
    }
    let color = color.map(str::trim);

    // Only directives naming exactly this id; `style A,B …` is left alone.
    let re = match Regex::new(&format!(r"^(\s*)style\s+({})\s+(.*)$", bounded_id(id))) {
        Ok(re) => re,
        Err(_) => return text.to_string(),
    };

    let lines: Vec<&str> = text.split('\n').collect();
    let found = lines
        .iter()
        .enumerate()
        .skip(1)
        .find_map(|(i, line)| StyleLine::parse(line, &re).map(|s| (i, s)));

    match (found, color) {
        (Some((index, mut style)), _) => {
            let before = style.render();
            style.set(key, color);
            let after = style.render();
            if before == after {
                return text.to_string();
            }
            let mut out: Vec<String> = Vec::with_capacity(lines.len());
            for (i, line) in lines.iter().enumerate() {
                if i != index {
                    out.push((*line).to_string());
                } else if let Some(rendered) = &after {
                    out.push(rendered.clone());
                }
            }
            out.join("\n")
        }
        (None, Some(c)) => append_line(text, &format!("    style {} {}:{}", id, key, c)),
        (None, None) => text.to_string(),
    }
}

/// Set or clear the fill color of node `id`. Other style properties are kept;
/// a directive left without properties is removed.
pub fn set_fill_color(text: &str, id: &str, color: Option<&str>) -> String {
    set_style_property(text, id, FILL, color)
}

/// Set or clear the border color of node `id`, independently of its fill.
pub fn set_stroke_color(text: &str, id: &str, color: Option<&str>) -> String {
    set_style_property(text, id, STROKE, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "flowchart TD\n    A[Start] --> B{Check}\n";

    #[test]
    fn test_fill_appends_directive() {
        let out = set_fill_color(TEXT, "A", Some("#6366f1"));
        assert_eq!(out, "flowchart TD\n    A[Start] --> B{Check}\n    style A fill:#6366f1\n");
    }

    #[test]
    fn test_stroke_merges_into_existing_directive() {
        let text = "graph TD\n    A[Start]\n    style A fill:#6366f1,color:#fff";
        let out = set_stroke_color(text, "A", Some("#4f46e5"));
        assert_eq!(out, "graph TD\n    A[Start]\n    style A fill:#6366f1,color:#fff,stroke:#4f46e5");
    }

    #[test]
    fn test_fill_replaces_value_in_place() {
        let text = "graph TD\n    A[Start]\n  style A fill:#000,stroke:#111;\n";
        let out = set_fill_color(text, "A", Some("red"));
        assert_eq!(out, "graph TD\n    A[Start]\n  style A fill:red,stroke:#111;\n");
    }

    #[test]
    fn test_clearing_last_property_removes_line() {
        let text = "graph TD\n    A[Start]\n    style A fill:#000\n    A --> B\n";
        let out = set_fill_color(text, "A", None);
        assert_eq!(out, "graph TD\n    A[Start]\n    A --> B\n");
    }

    #[test]
    fn test_clearing_fill_keeps_stroke() {
        let text = "graph TD\n    A[Start]\n    style A fill:#000,stroke:#fff";
        assert_eq!(set_fill_color(text, "A", None), "graph TD\n    A[Start]\n    style A stroke:#fff");
    }

    #[test]
    fn test_noops() {
        assert_eq!(set_fill_color(TEXT, "Z", Some("#fff")), TEXT);
        assert_eq!(set_fill_color(TEXT, "A", None), TEXT);
        assert_eq!(set_fill_color(TEXT, "A", Some("#fff,stroke:#000")), TEXT);
        assert_eq!(set_stroke_color(TEXT, "A", Some("  ")), TEXT);
    }

    #[test]
    fn test_multi_id_directive_is_not_edited() {
        let text = "graph TD\n    A --> B\n    style A,B fill:#000";
        let out = set_fill_color(text, "A", Some("#fff"));
        assert_eq!(out, "graph TD\n    A --> B\n    style A,B fill:#000\n    style A fill:#fff");
    }
}
