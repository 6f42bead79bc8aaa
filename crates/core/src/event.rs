/// All messages (events) that can flow from the front-end to the panels.
///
/// Each variant corresponds to one button in the lab: the CLI turns a
/// subcommand into a `Message` and the application root hands it to every
/// panel until one claims it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ── Singleton panel ───────────────────────────────────────────────────────
    /// Request the shared instance twice and compare the handles.
    CreateInstance,
    /// Request the shared instance once per configured check identifier.
    CheckInstance,

    // ── Iterator panel ────────────────────────────────────────────────────────
    /// Generate an arithmetic sequence. `None` fields fall back to config.
    GenerateSequence(SequenceRequest),

    // ── Builder panel ─────────────────────────────────────────────────────────
    /// Build a style configuration and display a message with it.
    /// `None` fields fall back to config.
    ApplyStyle(StyleRequest),
}

impl Message {
    /// Every panel action in the order the lab presents them.
    pub fn all() -> Vec<Message> {
        vec![
            Message::CreateInstance,
            Message::CheckInstance,
            Message::GenerateSequence(SequenceRequest::default()),
            Message::ApplyStyle(StyleRequest::default()),
        ]
    }
}

/// User-supplied inputs for the iterator panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceRequest {
    pub start: Option<i64>,
    pub end:   Option<i64>,
    pub step:  Option<i64>,
    /// Override for the polling safety bound.
    pub limit: Option<usize>,
}

/// User-supplied inputs for the builder panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRequest {
    pub text_size:  Option<String>,
    pub text_color: Option<String>,
    pub bg_color:   Option<String>,
    /// Message rendered with the built style.
    pub message:    Option<String>,
}
