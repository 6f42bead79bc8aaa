//! Terminal output for panel results.
//!
//! Panels describe their output as [`PanelOutput`] lines; this crate turns
//! those into text:
//! - a bold title followed by a rule
//! - plain text as-is, success lines in green
//! - numbers as a row of cyan `[ n ]` badges
//! - pre-styled lines verbatim

use console::Style;
use lab_core::{Line, PanelOutput};
use std::io::{self, Write};

/// Width of the rule drawn under each panel title.
const RULE_WIDTH: usize = 40;

/// Writes [`PanelOutput`]s to any `Write` sink.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    title:   Style,
    success: Style,
    badge:   Style,
}

impl TerminalRenderer {
    /// `colors` forces ANSI styling on or off regardless of the sink.
    pub fn new(colors: bool) -> Self {
        Self {
            title:   Style::new().bold().force_styling(colors),
            success: Style::new().green().force_styling(colors),
            badge:   Style::new().cyan().bold().force_styling(colors),
        }
    }

    /// Render one panel, followed by a blank line.
    pub fn render<W: Write>(&self, out: &mut W, output: &PanelOutput) -> io::Result<()> {
        writeln!(out, "{}", self.title.apply_to(&output.title))?;
        writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;

        for line in &output.lines {
            match line {
                Line::Text(text)    => writeln!(out, "{text}")?,
                Line::Success(text) => writeln!(out, "{}", self.success.apply_to(text))?,
                Line::Badges(values) => writeln!(out, "{}", self.badges(values))?,
                Line::Styled(text)  => writeln!(out, "{text}")?,
            }
        }

        writeln!(out)
    }

    /// Render several panels in order.
    pub fn render_all<W: Write>(&self, out: &mut W, outputs: &[PanelOutput]) -> io::Result<()> {
        for output in outputs {
            self.render(out, output)?;
        }
        out.flush()
    }

    fn badges(&self, values: &[i64]) -> String {
        values
            .iter()
            .map(|v| self.badge.apply_to(format!("[ {v} ]")).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
