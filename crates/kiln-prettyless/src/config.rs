//! Layout options for rendered source.

/// Where the opening brace of a class or method body goes.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BraceStyle {
    /// `class Car {`
    #[default]
    SameLine,
    /// The brace starts its own line, aligned with the declaration.
    NextLine,
}

/// Layout options for rendered source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Spaces per nesting level of a class or block body.
    pub tab_spaces: usize,
    /// Column the renderer tries to stay within.
    pub max_width: usize,
    pub brace_style: BraceStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_spaces: 4,
            max_width: 100,
            brace_style: BraceStyle::SameLine,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    pub fn with_tab_spaces(mut self, spaces: usize) -> Self {
        self.tab_spaces = spaces;
        self
    }

    pub fn with_brace_style(mut self, style: BraceStyle) -> Self {
        self.brace_style = style;
        self
    }
}
