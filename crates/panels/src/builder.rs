use lab_config::StyleConfig;
use lab_core::{Message, Panel, PanelOutput, Result, StyleRequest};
use lab_style::StyleConfigurator;

/// Builds a style step by step and displays a message with it.
///
/// Text size and colours come from the request (falling back to `[style]`
/// in `lab.toml`); the layout settings always come from config.
#[derive(Debug)]
pub struct BuilderPanel {
    config: StyleConfig,
    /// Tint the styled message with ANSI colours.
    colors: bool,
}

impl BuilderPanel {
    pub fn new(config: StyleConfig, colors: bool) -> Self {
        Self { config, colors }
    }

    fn apply(&self, request: &StyleRequest) -> PanelOutput {
        let cfg = &self.config;
        let text_size  = request.text_size.as_deref().unwrap_or(cfg.text_size.as_str());
        let text_color = request.text_color.as_deref().unwrap_or(cfg.text_color.as_str());
        let bg_color   = request.bg_color.as_deref().unwrap_or(cfg.bg_color.as_str());
        let message    = request.message.as_deref().unwrap_or(cfg.message.as_str());

        let mut out = PanelOutput::new(self.title());
        out.text("Building style configuration...");
        out.text(format!("Text Size: {text_size}"));
        out.text(format!("Text Color: {text_color}"));
        out.text(format!("Background: {bg_color}"));

        let style = StyleConfigurator::new()
            .text_size(text_size)
            .text_color(text_color)
            .bg_color(bg_color)
            .spacing(cfg.spacing.as_str())
            .margins(cfg.margins.as_str())
            .outline(cfg.outline.as_str())
            .corner_radius(cfg.corner_radius.as_str())
            .build()
            .with_colors(self.colors);

        out.success("Style configuration built successfully!");
        for property in style.properties() {
            out.text(format!("  {property}"));
        }
        out.styled(style.render(message));

        tracing::debug!(css = style.css(), "Built style");
        out
    }
}

impl Panel for BuilderPanel {
    fn id(&self) -> &str {
        "builder"
    }

    fn title(&self) -> &str {
        "Builder Pattern"
    }

    fn handle(&mut self, message: &Message) -> Result<Option<PanelOutput>> {
        Ok(match message {
            Message::ApplyStyle(request) => Some(self.apply(request)),
            _ => None,
        })
    }
}
