/// Everything a panel produced in response to one message.
///
/// Panels never write to the terminal themselves; they describe their output
/// and the `lab-renderer` crate decides how it looks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelOutput {
    /// Heading shown above the panel's lines.
    pub title: String,
    pub lines: Vec<Line>,
}

/// A single line of panel output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Plain informational text.
    Text(String),
    /// Positive outcome (rendered highlighted).
    Success(String),
    /// Numbers drawn as a row of badges.
    Badges(Vec<i64>),
    /// Pre-styled text; printed verbatim.
    Styled(String),
}

impl PanelOutput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn text(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Text(line.into()));
        self
    }

    pub fn success(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Success(line.into()));
        self
    }

    pub fn badges(&mut self, values: Vec<i64>) -> &mut Self {
        self.lines.push(Line::Badges(values));
        self
    }

    pub fn styled(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Styled(line.into()));
        self
    }

    /// All textual lines, in order. Badges are skipped.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            Line::Text(s) | Line::Success(s) | Line::Styled(s) => Some(s.as_str()),
            Line::Badges(_) => None,
        })
    }

    /// `true` if any textual line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.texts().any(|s| s.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods_append_in_order() {
        let mut out = PanelOutput::new("Iterator");
        out.text("first").success("done").badges(vec![1, 2]).styled("fancy");

        assert_eq!(out.title, "Iterator");
        assert_eq!(
            out.lines,
            vec![
                Line::Text("first".into()),
                Line::Success("done".into()),
                Line::Badges(vec![1, 2]),
                Line::Styled("fancy".into()),
            ]
        );
    }

    #[test]
    fn texts_skip_badges() {
        let mut out = PanelOutput::new("t");
        out.badges(vec![3]).text("a").success("b");
        assert_eq!(out.texts().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(out.contains("b"));
        assert!(!out.contains("3"));
    }
}
