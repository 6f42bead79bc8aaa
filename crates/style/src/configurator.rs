use crate::render::{StyleProperty, StyleRender};

// ── Property names ────────────────────────────────────────────────────────────

pub const FONT_SIZE:        &str = "font-size";
pub const COLOR:            &str = "color";
pub const BACKGROUND_COLOR: &str = "background-color";
pub const PADDING:          &str = "padding";
pub const MARGIN:           &str = "margin";
pub const BORDER:           &str = "border";
pub const BORDER_RADIUS:    &str = "border-radius";

/// Emission order of every property a built style can contain.
pub const PROPERTY_ORDER: [&str; 7] = [
    FONT_SIZE,
    COLOR,
    BACKGROUND_COLOR,
    PADDING,
    MARGIN,
    BORDER,
    BORDER_RADIUS,
];

/// Fluent builder for a message style.
///
/// Text size and colours always have a value; the layout settings are
/// optional and only appear in the built style once set to something
/// non-empty. Every setter overwrites the previous value.
///
/// # Example
///
/// ```rust
/// use lab_style::StyleConfigurator;
///
/// let style = StyleConfigurator::new()
///     .text_size("18px")
///     .text_color("black")
///     .bg_color("yellow")
///     .corner_radius("8px")
///     .build();
///
/// assert_eq!(
///     style.css(),
///     "font-size: 18px; color: black; background-color: yellow; border-radius: 8px"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfigurator {
    text_size:  String,
    text_color: String,
    bg_color:   String,
    spacing:       Option<String>,
    margins:       Option<String>,
    outline:       Option<String>,
    corner_radius: Option<String>,
}

impl StyleConfigurator {
    /// Creates a configurator with `12px` white-on-black text and no layout.
    pub fn new() -> Self {
        Self {
            text_size:  "12px".to_string(),
            text_color: "#fff".to_string(),
            bg_color:   "#000".to_string(),
            spacing:       None,
            margins:       None,
            outline:       None,
            corner_radius: None,
        }
    }

    // ── Text ──────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn text_size(mut self, size: impl Into<String>) -> Self {
        self.text_size = size.into();
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    #[must_use]
    pub fn bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = color.into();
        self
    }

    // ── Layout ────────────────────────────────────────────────────────────────

    /// Inner spacing, emitted as `padding`.
    #[must_use]
    pub fn spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    /// Emitted as `margin`.
    #[must_use]
    pub fn margins(mut self, margins: impl Into<String>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Emitted as `border`.
    #[must_use]
    pub fn outline(mut self, outline: impl Into<String>) -> Self {
        self.outline = Some(outline.into());
        self
    }

    /// Emitted as `border-radius`.
    #[must_use]
    pub fn corner_radius(mut self, radius: impl Into<String>) -> Self {
        self.corner_radius = Some(radius.into());
        self
    }

    // ── Build ─────────────────────────────────────────────────────────────────

    /// Snapshot the current settings into a [`StyleRender`].
    ///
    /// The configurator is left untouched and can keep being adjusted or
    /// built again; earlier renders are unaffected.
    pub fn build(&self) -> StyleRender {
        let mut properties = vec![
            StyleProperty::new(FONT_SIZE, self.text_size.as_str()),
            StyleProperty::new(COLOR, self.text_color.as_str()),
            StyleProperty::new(BACKGROUND_COLOR, self.bg_color.as_str()),
        ];

        let layout = [
            (PADDING, &self.spacing),
            (MARGIN, &self.margins),
            (BORDER, &self.outline),
            (BORDER_RADIUS, &self.corner_radius),
        ];
        properties.extend(layout.into_iter().filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| StyleProperty::new(name, v))
        }));

        StyleRender::new(properties)
    }
}

impl Default for StyleConfigurator {
    fn default() -> Self {
        Self::new()
    }
}
