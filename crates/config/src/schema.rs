use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `lab.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Identifiers used by the singleton panel.
    pub singleton: SingletonConfig,
    /// Default inputs for the iterator panel.
    pub sequence: SequenceConfig,
    /// Default inputs for the builder panel.
    pub style: StyleConfig,
    /// Terminal output settings.
    pub output: OutputConfig,
}

/// Identifiers passed to the instance slot by the singleton panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingletonConfig {
    /// Identifier for the first request of the create demo.
    pub primary: String,
    /// Identifier for the second request; ignored by the slot.
    pub secondary: String,
    /// One request per entry in the check demo.
    pub checks: Vec<String>,
}

impl Default for SingletonConfig {
    fn default() -> Self {
        Self {
            primary:   "Primary Instance".to_string(),
            secondary: "Secondary Instance".to_string(),
            checks:    vec![
                "Check 1".to_string(),
                "Check 2".to_string(),
                "Check 3".to_string(),
            ],
        }
    }
}

/// Iterator panel defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub start: i64,
    /// Inclusive bound.
    pub end: i64,
    pub step: i64,
    /// Maximum number of values pulled per run.
    pub safety_limit: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            start:        1,
            end:          10,
            step:         2,
            safety_limit: 100,
        }
    }
}

/// Builder panel defaults. Setting a layout key to an empty string leaves
/// that property out of the built style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub text_size:  String,
    pub text_color: String,
    pub bg_color:   String,
    pub spacing:       String,
    pub margins:       String,
    pub outline:       String,
    pub corner_radius: String,
    /// Text displayed with the built style.
    pub message: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text_size:     "16px".to_string(),
            text_color:    "#ffffff".to_string(),
            bg_color:      "#1a1a1a".to_string(),
            spacing:       "15px".to_string(),
            margins:       "10px".to_string(),
            outline:       "2px solid #6366f1".to_string(),
            corner_radius: "8px".to_string(),
            message:       "Styled Message with Builder Pattern".to_string(),
        }
    }
}

/// Terminal output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorChoice,
}

/// Whether ANSI colours are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal that supports it.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve to a concrete on/off decision. `detected` is what terminal
    /// detection reported and only matters for `Auto`.
    #[must_use]
    pub fn resolve(self, detected: bool) -> bool {
        match self {
            ColorChoice::Auto   => detected,
            ColorChoice::Always => true,
            ColorChoice::Never  => false,
        }
    }
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto"   => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never"  => Ok(ColorChoice::Never),
            other    => Err(format!("unknown color mode '{other}' (expected auto, always or never)")),
        }
    }
}
