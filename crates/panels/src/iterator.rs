use lab_config::SequenceConfig;
use lab_core::{Message, Panel, PanelOutput, Result, SequenceRequest};
use lab_sequence::NumberSequence;

/// Generates an arithmetic sequence and lists what it produced.
///
/// Inputs missing from the request fall back to `[sequence]` in `lab.toml`.
/// The generator is polled at most `safety_limit` times per run.
#[derive(Debug)]
pub struct IteratorPanel {
    config: SequenceConfig,
}

impl IteratorPanel {
    pub fn new(config: SequenceConfig) -> Self {
        Self { config }
    }

    fn generate(&self, request: &SequenceRequest) -> Result<PanelOutput> {
        let start = request.start.unwrap_or(self.config.start);
        let end   = request.end.unwrap_or(self.config.end);
        let step  = request.step.unwrap_or(self.config.step);
        let limit = request.limit.unwrap_or(self.config.safety_limit);

        let mut out = PanelOutput::new(self.title());
        out.text(format!("Creating sequence: {start} to {end} with step {step}"));

        let mut sequence = NumberSequence::new(start, end, step)?;
        let run = sequence.take_bounded(limit);

        let listed = run
            .values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        out.text(format!("Generated {} numbers:", run.values.len()));
        out.text(format!("[{listed}]"));

        if run.completed {
            out.success("Sequence completed successfully");
        } else {
            out.text(format!("Stopped at the safety limit of {limit} values"));
        }

        if !run.values.is_empty() {
            out.badges(run.values);
        }

        Ok(out)
    }
}

impl Panel for IteratorPanel {
    fn id(&self) -> &str {
        "iterator"
    }

    fn title(&self) -> &str {
        "Iterator Pattern"
    }

    fn handle(&mut self, message: &Message) -> Result<Option<PanelOutput>> {
        match message {
            Message::GenerateSequence(request) => self.generate(request).map(Some),
            _ => Ok(None),
        }
    }
}
