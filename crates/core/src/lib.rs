pub mod error;
pub mod event;
pub mod output;
pub mod panel;

pub use error::{LabError, Result};
pub use event::{Message, SequenceRequest, StyleRequest};
pub use output::{Line, PanelOutput};
pub use panel::Panel;
