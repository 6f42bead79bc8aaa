//! Root scope of the patterns lab.
//!
//! Owns everything that outlives a single action:
//! - the loaded configuration
//! - the instance slot shared with the singleton panel
//! - the three demo panels
//!
//! and routes each [`Message`] to the panels, handing their output to the
//! terminal renderer.

use lab_config::{load as load_config, LabConfig};
use lab_core::{Message, Panel, PanelOutput, Result};
use lab_instance::InstanceSlot;
use lab_panels::{BuilderPanel, IteratorPanel, SingletonPanel};
use lab_renderer::TerminalRenderer;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, info};

pub use lab_config::{default_path as default_config_path, ColorChoice};

// ── Lab ───────────────────────────────────────────────────────────────────────

pub struct Lab {
    config: LabConfig,
    slot:   Rc<InstanceSlot>,
    panels: Vec<Box<dyn Panel>>,
    colors: bool,
}

impl Lab {
    /// Build the lab from a loaded config. `colors` decides whether styled
    /// output carries ANSI codes.
    pub fn new(config: LabConfig, colors: bool) -> Self {
        let slot = Rc::new(InstanceSlot::new());

        let panels: Vec<Box<dyn Panel>> = vec![
            Box::new(SingletonPanel::new(Rc::clone(&slot), config.singleton.clone())),
            Box::new(IteratorPanel::new(config.sequence.clone())),
            Box::new(BuilderPanel::new(config.style.clone(), colors)),
        ];

        Self {
            config,
            slot,
            panels,
            colors,
        }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// The slot behind the singleton panel.
    pub fn slot(&self) -> &Rc<InstanceSlot> {
        &self.slot
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Ids of the registered panels, in dispatch order.
    pub fn panel_ids(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.id()).collect()
    }

    /// Hand `message` to every panel and collect what they produced.
    ///
    /// # Errors
    ///
    /// Returns the first panel error, e.g. an invalid sequence step.
    pub fn dispatch(&mut self, message: &Message) -> Result<Vec<PanelOutput>> {
        let mut outputs = Vec::new();

        for panel in &mut self.panels {
            if let Some(output) = panel.handle(message)? {
                debug!(panel = panel.id(), "Handled {message:?}");
                outputs.push(output);
            }
        }

        if outputs.is_empty() {
            debug!("No panel handled {message:?}");
        }
        Ok(outputs)
    }
}

impl std::fmt::Debug for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lab")
            .field("panels", &self.panel_ids())
            .field("instance", &self.slot.current())
            .field("colors", &self.colors)
            .finish()
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// What the front-end asked for.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_path: PathBuf,
    /// Overrides `[output] color` from the config file.
    pub color:       Option<ColorChoice>,
    /// Actions to perform, in order.
    pub messages:    Vec<Message>,
}

/// Load config, run every requested action and print the results to stdout.
pub fn run(options: RunOptions) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(options, &mut out, console::colors_enabled())
}

/// Like [`run`], writing to `out`. `detected` is the terminal colour support
/// used when the colour choice is `auto`.
pub fn run_to<W: Write>(options: RunOptions, out: &mut W, detected: bool) -> Result<()> {
    let config = load_config(&options.config_path)?;
    let choice = options.color.unwrap_or(config.output.color);
    let colors = choice.resolve(detected);

    let mut lab = Lab::new(config, colors);
    let renderer = TerminalRenderer::new(colors);
    info!(panels = ?lab.panel_ids(), colors, "Patterns lab ready");

    for message in &options.messages {
        let outputs = lab.dispatch(message)?;
        renderer.render_all(out, &outputs)?;
    }

    Ok(())
}
