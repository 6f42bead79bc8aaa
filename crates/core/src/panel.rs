use crate::{event::Message, output::PanelOutput, Result};

/// Every demo panel implements this trait.
///
/// Panels are purely reactive: they receive a `Message` and describe what
/// should be shown. All drawing is handled by the `lab-renderer` crate.
pub trait Panel: std::fmt::Debug {
    /// Unique string identifier, e.g. `"singleton"` or `"iterator"`.
    fn id(&self) -> &str;

    /// Heading shown above the panel's output.
    fn title(&self) -> &str;

    /// Handle a message. Returns `Ok(None)` if the message belongs to
    /// another panel.
    fn handle(&mut self, message: &Message) -> Result<Option<PanelOutput>>;
}
