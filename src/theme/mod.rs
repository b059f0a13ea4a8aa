//! Brand themes and style resolution.
//!
//! A [`Theme`] is an immutable bundle of palette, typography and fonts. The
//! renderer never reads colors or sizes directly; it asks the theme to
//! [`resolve`](Theme::resolve) a [`StyleIntent`]. Swapping the theme (for
//! instance [`Theme::statement_of_work`]) changes every styled element
//! without touching the parser or renderer.
//!
//! # Example
//!
//! ```
//! use brandoc::theme::{StyleIntent, Theme};
//!
//! let theme = Theme::corporate();
//! let style = theme.resolve(StyleIntent::HeadingLevel(1));
//! assert_eq!(style.size_points, 24.0);
//! assert!(style.bold);
//! ```

mod color;
mod phase;
mod style;

pub use color::{ColorRole, Palette, Rgb};
pub use phase::{find_phase, phase_from_path, Phase, CONTRACT_PHASE, PHASES};
pub use style::{ResolvedStyle, StyleIntent};

use crate::error::Result;
use crate::model::InlineRun;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Typography scale in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
    pub h4: f32,
    pub body: f32,
    /// Footer and caption text
    pub small: f32,
    pub code: f32,
    pub table_header: f32,
    pub table_body: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            h1: 24.0,
            h2: 20.0,
            h3: 16.0,
            h4: 14.0,
            body: 11.0,
            small: 9.0,
            code: 10.0,
            table_header: 10.0,
            table_body: 10.0,
        }
    }
}

/// Font families used by the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub primary: String,
    pub secondary: String,
    pub monospace: String,
    /// Generic family appended to CSS font stacks
    pub fallback: String,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            primary: "Arial".to_string(),
            secondary: "Helvetica".to_string(),
            monospace: "Courier New".to_string(),
            fallback: "sans-serif".to_string(),
        }
    }
}

/// Palette roles for the three heading tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingColors {
    pub h1: ColorRole,
    pub h2: ColorRole,
    pub h3: ColorRole,
}

impl Default for HeadingColors {
    fn default() -> Self {
        Self {
            h1: ColorRole::Primary,
            h2: ColorRole::Dark,
            h3: ColorRole::Text,
        }
    }
}

/// A complete brand theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name (e.g. "corporate", "sow")
    pub name: String,

    /// Organization named in footers and default authorship
    pub organization: String,

    /// Brand palette
    #[serde(default)]
    pub palette: Palette,

    /// Point sizes
    #[serde(default)]
    pub typography: Typography,

    /// Font families
    #[serde(default)]
    pub fonts: FontSet,

    /// Heading color roles
    #[serde(default)]
    pub heading_colors: HeadingColors,
}

impl Theme {
    /// The general-purpose corporate theme.
    pub fn corporate() -> Self {
        Self {
            name: "corporate".to_string(),
            organization: "Capgemini".to_string(),
            palette: Palette::default(),
            typography: Typography::default(),
            fonts: FontSet::default(),
            heading_colors: HeadingColors::default(),
        }
    }

    /// Theme for Statement-of-Work documents: gray section headers and
    /// denser table bodies.
    pub fn statement_of_work() -> Self {
        Self::corporate().to_statement_of_work()
    }

    /// Derive the Statement-of-Work variant of this theme.
    pub fn to_statement_of_work(&self) -> Self {
        Self {
            name: "sow".to_string(),
            typography: Typography {
                table_body: 9.0,
                ..self.typography.clone()
            },
            heading_colors: HeadingColors {
                h2: ColorRole::HeaderGray,
                ..self.heading_colors
            },
            ..self.clone()
        }
    }

    /// Parse a theme from JSON. Missing palette, typography, font or
    /// heading sections fall back to the corporate defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a theme from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up a palette color.
    pub fn color(&self, role: ColorRole) -> Rgb {
        self.palette.get(role)
    }

    /// Accent color of a phase; unknown phases use the primary color.
    pub fn phase_color(&self, key: &str) -> Rgb {
        find_phase(key)
            .map(|phase| self.color(phase.accent))
            .unwrap_or(self.palette.primary)
    }

    /// Resolve an abstract style intent to concrete attributes.
    pub fn resolve(&self, intent: StyleIntent) -> ResolvedStyle {
        let p = &self.palette;
        let t = &self.typography;
        let base = ResolvedStyle {
            font_family: self.fonts.primary.clone(),
            size_points: t.body,
            color: p.text,
            bold: false,
            italic: false,
            background: None,
        };

        match intent {
            StyleIntent::HeadingLevel(level) => {
                let (size, role) = match level {
                    0 | 1 => (t.h1, self.heading_colors.h1),
                    2 => (t.h2, self.heading_colors.h2),
                    _ => (t.h3, self.heading_colors.h3),
                };
                ResolvedStyle {
                    size_points: size,
                    color: self.color(role),
                    bold: true,
                    ..base
                }
            }
            StyleIntent::TableHeaderCell => ResolvedStyle {
                size_points: t.table_header,
                color: p.white,
                bold: true,
                background: Some(p.primary),
                ..base
            },
            StyleIntent::TableBodyCellEven => ResolvedStyle {
                size_points: t.table_body,
                ..base
            },
            StyleIntent::TableBodyCellOdd => ResolvedStyle {
                size_points: t.table_body,
                background: Some(p.light),
                ..base
            },
            StyleIntent::CodeSpan | StyleIntent::CodeBlock => ResolvedStyle {
                font_family: self.fonts.monospace.clone(),
                size_points: t.code,
                background: Some(p.light),
                ..base
            },
            StyleIntent::Blockquote => ResolvedStyle {
                italic: true,
                ..base
            },
            StyleIntent::Caption => ResolvedStyle {
                size_points: t.small,
                ..base
            },
            StyleIntent::TocEntry => ResolvedStyle {
                color: p.medium,
                ..base
            },
            StyleIntent::Default => base,
        }
    }

    /// Resolve the style of one inline run inside a block of the given
    /// intent. Run emphasis is added on top of the block style; monospace
    /// runs take the code-span font, size and shading.
    pub fn resolve_run(&self, intent: StyleIntent, run: &InlineRun) -> ResolvedStyle {
        let mut style = self.resolve(intent);
        if run.monospace {
            let code = self.resolve(StyleIntent::CodeSpan);
            style.font_family = code.font_family;
            style.size_points = code.size_points;
            style.background = code.background;
        }
        style.bold |= run.bold;
        style.italic |= run.italic;
        style
    }

    /// CSS font stack for the primary font.
    pub fn font_stack(&self) -> String {
        format!("\"{}\", {}", self.fonts.primary, self.fonts.fallback)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::corporate()
    }
}
