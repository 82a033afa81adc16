//! Starter templates, font choices and accent color presets

use crate::types::Dialect;
use serde::{Deserialize, Serialize};

/// A named CSS font stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOption {
    pub name: &'static str,
    pub value: &'static str,
}

pub const CLASSIC_FONTS: [FontOption; 6] = [
    FontOption { name: "Inter", value: "\"Inter\", ui-sans-serif, system-ui, sans-serif" },
    FontOption { name: "Roboto", value: "\"Roboto\", sans-serif" },
    FontOption { name: "Open Sans", value: "\"Open Sans\", sans-serif" },
    FontOption { name: "Nunito", value: "\"Nunito\", sans-serif" },
    FontOption { name: "Poppins", value: "\"Poppins\", sans-serif" },
    FontOption { name: "Fira Sans", value: "\"Fira Sans\", sans-serif" },
];

pub const SKETCH_FONTS: [FontOption; 6] = [
    FontOption { name: "Caveat", value: "\"Caveat\", cursive" },
    FontOption { name: "Architects Daughter", value: "\"Architects Daughter\", cursive" },
    FontOption { name: "Comic Neue", value: "\"Comic Neue\", cursive" },
    FontOption { name: "Patrick Hand", value: "\"Patrick Hand\", cursive" },
    FontOption { name: "Indie Flower", value: "\"Indie Flower\", cursive" },
    FontOption { name: "Kalam", value: "\"Kalam\", cursive" },
];

/// Font stack for `name` in the classic or sketch list, defaulting to the list's first entry
pub fn font_value(name: &str, hand_drawn: bool) -> &'static str {
    let fonts: &[FontOption] = if hand_drawn { &SKETCH_FONTS } else { &CLASSIC_FONTS };
    fonts
        .iter()
        .find(|f| f.name == name)
        .unwrap_or(&fonts[0])
        .value
}

/// Primary / border / tertiary accent triple handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentColors {
    pub primary: String,
    pub border: String,
    pub tertiary: String,
}

impl AccentColors {
    pub fn new(primary: &str, border: &str, tertiary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            border: border.to_string(),
            tertiary: tertiary.to_string(),
        }
    }
}

impl Default for AccentColors {
    fn default() -> Self {
        COLOR_PRESETS[0].accent(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub swatch: &'static str,
    /// primary, border, tertiary
    pub dark: [&'static str; 3],
    pub light: [&'static str; 3],
}

impl ColorPreset {
    pub fn accent(&self, dark: bool) -> AccentColors {
        let [primary, border, tertiary] = if dark { self.dark } else { self.light };
        AccentColors::new(primary, border, tertiary)
    }
}

pub static COLOR_PRESETS: [ColorPreset; 8] = [
    ColorPreset {
        name: "Indigo",
        swatch: "#6366f1",
        dark: ["#6366f1", "#4f46e5", "#1e1b4b"],
        light: ["#818cf8", "#6366f1", "#eef2ff"],
    },
    ColorPreset {
        name: "Violet",
        swatch: "#8b5cf6",
        dark: ["#8b5cf6", "#7c3aed", "#2e1065"],
        light: ["#a78bfa", "#8b5cf6", "#f5f3ff"],
    },
    ColorPreset {
        name: "Rose",
        swatch: "#f43f5e",
        dark: ["#f43f5e", "#e11d48", "#4c0519"],
        light: ["#fb7185", "#f43f5e", "#fff1f2"],
    },
    ColorPreset {
        name: "Amber",
        swatch: "#f59e0b",
        dark: ["#f59e0b", "#d97706", "#451a03"],
        light: ["#fbbf24", "#f59e0b", "#fffbeb"],
    },
    ColorPreset {
        name: "Emerald",
        swatch: "#10b981",
        dark: ["#10b981", "#059669", "#022c22"],
        light: ["#34d399", "#10b981", "#ecfdf5"],
    },
    ColorPreset {
        name: "Cyan",
        swatch: "#06b6d4",
        dark: ["#06b6d4", "#0891b2", "#083344"],
        light: ["#22d3ee", "#06b6d4", "#ecfeff"],
    },
    ColorPreset {
        name: "Slate",
        swatch: "#64748b",
        dark: ["#64748b", "#475569", "#0f172a"],
        light: ["#94a3b8", "#64748b", "#f8fafc"],
    },
    ColorPreset {
        name: "Orange",
        swatch: "#f97316",
        dark: ["#f97316", "#ea580c", "#431407"],
        light: ["#fb923c", "#f97316", "#fff7ed"],
    },
];

pub fn color_preset(name: &str) -> Option<&'static ColorPreset> {
    COLOR_PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

const FLOWCHART_TEMPLATE: &str = "flowchart TD
    A[Start] --> B{Decision?}
    B -->|Yes| C[Process A]
    B -->|No| D[Process B]
    C --> E[Result 1]
    D --> E
    E --> F[End]

    style A fill:#6366f1,stroke:#4f46e5,color:#fff
    style F fill:#10b981,stroke:#059669,color:#fff
    style B fill:#f59e0b,stroke:#d97706,color:#fff";

const SEQUENCE_TEMPLATE: &str = "sequenceDiagram
    participant U as User
    participant C as Client
    participant S as Server
    participant D as Database

    U->>C: Click Login
    C->>S: POST /auth/login
    S->>D: Query user
    D-->>S: User data
    S-->>C: JWT Token
    C-->>U: Welcome!

    Note over C,S: Encrypted connection";

const CLASS_TEMPLATE: &str = "classDiagram
    class Animal {
        +String name
        +int age
        +makeSound() void
    }
    class Dog {
        +String breed
        +fetch() void
    }
    class Cat {
        +bool isIndoor
        +purr() void
    }
    Animal <|-- Dog
    Animal <|-- Cat";

const STATE_TEMPLATE: &str = "stateDiagram-v2
    [*] --> Idle
    Idle --> Processing : Submit
    Processing --> Success : Valid
    Processing --> Error : Invalid
    Error --> Idle : Retry
    Success --> [*]

    state Processing {
        [*] --> Validating
        Validating --> Saving
        Saving --> [*]
    }";

const ER_TEMPLATE: &str = "erDiagram
    CUSTOMER ||--o{ ORDER : places
    ORDER ||--|{ LINE-ITEM : contains
    PRODUCT ||--o{ LINE-ITEM : \"is in\"
    CUSTOMER {
        int id PK
        string name
        string email
    }
    ORDER {
        int id PK
        date created
        string status
    }";

const MINDMAP_TEMPLATE: &str = "mindmap
  root((Project))
    Planning
      Requirements
      Timeline
    Design
      UI/UX
      Architecture
    Development
      Frontend
      Backend
    Testing
      Unit Tests
      Integration";

const PIE_TEMPLATE: &str = "pie title Browser Market Share
    \"Chrome\" : 65
    \"Safari\" : 19
    \"Firefox\" : 4
    \"Edge\" : 4
    \"Other\" : 8";

const GANTT_TEMPLATE: &str = "gantt
    title Project Timeline
    dateFormat YYYY-MM-DD
    section Planning
        Requirements    :a1, 2024-01-01, 14d
        Design          :a2, after a1, 10d
    section Development
        Backend API     :b1, after a2, 21d
        Frontend UI     :b2, after a2, 28d
    section Testing
        Integration     :c1, after b1, 14d
        UAT             :c2, after c1, 7d";

pub const DEFAULT_TEMPLATE: &str = FLOWCHART_TEMPLATE;

/// Starter source for a dialect
pub fn template_for(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Flowchart => FLOWCHART_TEMPLATE,
        Dialect::Sequence => SEQUENCE_TEMPLATE,
        Dialect::Class => CLASS_TEMPLATE,
        Dialect::State => STATE_TEMPLATE,
        Dialect::EntityRelationship => ER_TEMPLATE,
        Dialect::Mindmap => MINDMAP_TEMPLATE,
        Dialect::Pie => PIE_TEMPLATE,
        Dialect::Gantt => GANTT_TEMPLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::detect;

    #[test]
    fn test_templates_detect_as_their_dialect() {
        for dialect in Dialect::ALL {
            assert_eq!(detect(template_for(dialect)), dialect, "{}", dialect);
        }
    }

    #[test]
    fn test_font_value_falls_back_to_first() {
        assert_eq!(font_value("Kalam", true), "\"Kalam\", cursive");
        assert_eq!(font_value("Kalam", false), CLASSIC_FONTS[0].value);
    }

    #[test]
    fn test_color_preset_lookup() {
        let rose = color_preset("rose").unwrap();
        assert_eq!(rose.accent(true), AccentColors::new("#f43f5e", "#e11d48", "#4c0519"));
        assert!(color_preset("plaid").is_none());
    }
}
