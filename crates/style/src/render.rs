use crate::colors::Color;
use console::Style;
use std::fmt;
use std::io::{self, Write};

/// One `name: value` pair of a built style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProperty {
    pub name:  &'static str,
    pub value: String,
}

impl StyleProperty {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// The finished product of [`StyleConfigurator::build`](crate::StyleConfigurator::build).
///
/// Holds a snapshot of the configured properties; nothing done to the
/// configurator afterwards reaches it. Its one job is to
/// [`display`](Self::display) messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRender {
    properties: Vec<StyleProperty>,
    css:        String,
    colors:     bool,
}

impl StyleRender {
    pub(crate) fn new(properties: Vec<StyleProperty>) -> Self {
        let css = properties
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            properties,
            css,
            colors: console::colors_enabled(),
        }
    }

    /// Force ANSI tinting on or off instead of following terminal detection.
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn properties(&self) -> &[StyleProperty] {
        &self.properties
    }

    /// Value of the named property, if it was emitted.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// All properties joined as `name: value; name: value`.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// The exact text [`display`](Self::display) prints for `message`.
    ///
    /// The message is tinted when colours are on and `color` /
    /// `background-color` hold hex colours; the style string follows in
    /// brackets either way.
    pub fn render(&self, message: &str) -> String {
        let text = if self.colors {
            self.terminal_style().apply_to(message).to_string()
        } else {
            message.to_string()
        };
        format!("{text}  [{}]", self.css)
    }

    /// Print `message` with this style to stdout.
    pub fn display(&self, message: &str) {
        let term = console::Term::stdout();
        if let Err(e) = term.write_line(&self.render(message)) {
            tracing::warn!("Failed to display styled message: {e}");
        }
    }

    /// Write `message` with this style to `out`, followed by a newline.
    pub fn display_to<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.render(message))
    }

    fn terminal_style(&self) -> Style {
        let mut style = Style::new().force_styling(true);
        if let Some(fg) = self.get("color").and_then(Color::from_hex) {
            style = style.fg(fg.to_console());
        }
        if let Some(bg) = self.get("background-color").and_then(Color::from_hex) {
            style = style.bg(bg.to_console());
        }
        style
    }
}
