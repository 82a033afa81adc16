//! Adapter around the external diagram renderer.
//!
//! The renderer itself is a black box (text in, SVG out, or an error). This
//! module owns what the editor needs around it: the options handed to
//! `configure`, a request counter so only the newest render is shown, and the
//! last good SVG kept on screen while the source is temporarily invalid.

use crate::error::{RenderError, Result};
use crate::presets::{font_value, AccentColors, ColorPreset};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Longest renderer message shown to the user before it is cut
pub const MAX_MESSAGE_CHARS: usize = 120;

/// Visual options for subsequent renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub dark: bool,
    pub hand_drawn: bool,
    pub font_family: String,
    pub accent: AccentColors,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dark: false,
            hand_drawn: false,
            font_family: font_value("", false).to_string(),
            accent: AccentColors::default(),
        }
    }
}

impl RenderOptions {
    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply a color preset for the current light/dark mode
    pub fn with_preset(mut self, preset: &ColorPreset) -> Self {
        self.accent = preset.accent(self.dark);
        self
    }

    /// Theme variables for the renderer: a light or dark base palette with
    /// the accent triple laid over it.
    pub fn theme_variables(&self) -> Value {
        let mut vars = if self.dark {
            json!({
                "background": "#0f1219",
                "primaryTextColor": "#e2e8f0",
                "secondaryColor": "#1e293b",
                "secondaryTextColor": "#cbd5e1",
                "secondaryBorderColor": "#334155",
                "lineColor": "#64748b",
                "textColor": "#e2e8f0",
                "mainBkg": "#1e293b",
                "clusterBkg": "#1e293b",
                "clusterBorder": "#334155",
                "titleColor": "#e2e8f0",
                "edgeLabelBackground": "#1e293b",
                "nodeTextColor": "#e2e8f0",
            })
        } else {
            json!({
                "background": "#f8fafc",
                "primaryTextColor": "#1e293b",
                "secondaryColor": "#f1f5f9",
                "secondaryTextColor": "#475569",
                "secondaryBorderColor": "#cbd5e1",
                "lineColor": "#94a3b8",
                "textColor": "#1e293b",
                "mainBkg": "#f1f5f9",
                "clusterBkg": "#f1f5f9",
                "clusterBorder": "#cbd5e1",
                "titleColor": "#1e293b",
                "edgeLabelBackground": "#f1f5f9",
                "nodeTextColor": "#1e293b",
            })
        };
        if let Some(map) = vars.as_object_mut() {
            map.insert("primaryColor".into(), json!(self.accent.primary));
            map.insert("primaryBorderColor".into(), json!(self.accent.border));
            map.insert("nodeBorder".into(), json!(self.accent.border));
            map.insert("tertiaryColor".into(), json!(self.accent.tertiary));
        }
        vars
    }

    /// Full initialization object for the renderer
    pub fn to_config(&self) -> Value {
        json!({
            "startOnLoad": false,
            "theme": if self.dark { "dark" } else { "default" },
            "look": if self.hand_drawn { "handDrawn" } else { "classic" },
            "themeVariables": self.theme_variables(),
            "fontFamily": self.font_family,
            "flowchart": { "htmlLabels": true, "curve": "basis" },
            "sequence": { "mirrorActors": false },
        })
    }
}

/// The external renderer
pub trait DiagramRenderer {
    /// Affects only the visual styling of subsequent renders
    fn configure(&mut self, options: &RenderOptions);

    /// Render `source` into an SVG document, or fail with a readable message
    fn render(&mut self, id: &str, source: &str) -> std::result::Result<String, RenderError>;
}

/// Handle for one render request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTicket {
    pub seq: u64,
    /// Element id handed to the renderer, `mermaid-render-<seq>`
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Blank source; nothing was requested
    Skipped,
    Rendered,
    /// The renderer rejected the source. The previous SVG stays on screen.
    Failed { message: String, stale_svg_kept: bool },
    /// A newer request was issued meanwhile; the result was dropped
    Superseded,
}

/// Sequences render requests and keeps the last good output
pub struct RenderSession<R> {
    renderer: R,
    options: RenderOptions,
    needs_configure: bool,
    latest: u64,
    svg: String,
    error: Option<String>,
    rendering: bool,
}

impl<R: DiagramRenderer> RenderSession<R> {
    pub fn new(renderer: R, options: RenderOptions) -> Self {
        Self {
            renderer,
            options,
            needs_configure: true,
            latest: 0,
            svg: String::new(),
            error: None,
            rendering: false,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Replace the options; the renderer is reconfigured before the next render
    pub fn set_options(&mut self, options: RenderOptions) {
        if options != self.options {
            self.options = options;
            self.needs_configure = true;
        }
    }

    /// Start a render request for `source`. Returns `None` for blank source.
    pub fn begin(&mut self, source: &str) -> Option<RenderTicket> {
        if source.trim().is_empty() {
            return None;
        }
        if self.needs_configure {
            self.renderer.configure(&self.options);
            self.needs_configure = false;
        }
        self.latest += 1;
        self.rendering = true;
        Some(RenderTicket {
            seq: self.latest,
            id: format!("mermaid-render-{}", self.latest),
        })
    }

    /// Record the result of a request. Results of superseded requests are
    /// discarded; failures keep the previous SVG.
    pub fn complete(
        &mut self,
        ticket: &RenderTicket,
        result: std::result::Result<String, RenderError>,
    ) -> RenderOutcome {
        if ticket.seq != self.latest {
            debug!("dropping render {} superseded by {}", ticket.seq, self.latest);
            return RenderOutcome::Superseded;
        }
        self.rendering = false;

        match result {
            Ok(svg) => {
                self.svg = svg;
                self.error = None;
                RenderOutcome::Rendered
            }
            Err(err) => {
                let stale_svg_kept = !self.svg.is_empty();
                warn!("render {} failed: {}", ticket.seq, err);
                self.error = Some(err.message.clone());
                RenderOutcome::Failed {
                    message: err.message,
                    stale_svg_kept,
                }
            }
        }
    }

    /// Begin, render and complete in one call, for synchronous hosts
    pub fn render_now(&mut self, source: &str) -> RenderOutcome {
        let ticket = match self.begin(source) {
            Some(ticket) => ticket,
            None => return RenderOutcome::Skipped,
        };
        let result = self.renderer.render(&ticket.id, source);
        self.complete(&ticket, result)
    }

    /// Last successfully rendered SVG (empty before the first success)
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Message of the most recent failure, cleared by the next success
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Failure message cut down for display
    pub fn display_error(&self) -> Option<String> {
        self.error.as_deref().map(truncate_message)
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

/// Cut `message` to [`MAX_MESSAGE_CHARS`] characters, marking the cut with `…`
pub fn truncate_message(message: &str) -> String {
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message.to_string();
    }
    let mut out: String = message.chars().take(MAX_MESSAGE_CHARS).collect();
    out.push('…');
    out
}
