use crate::generator::{NumberSequence, SequenceResult};

/// Values collected by [`NumberSequence::take_bounded`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedRun {
    pub values: Vec<i64>,
    /// `true` if the sequence was exhausted when the run stopped.
    pub completed: bool,
}

impl NumberSequence {
    /// Pull values until the sequence completes or `limit` values have been
    /// collected, whichever comes first.
    ///
    /// Hitting the limit does not consume anything beyond it: the remaining
    /// values are still available to later pulls.
    pub fn take_bounded(&mut self, limit: usize) -> BoundedRun {
        let capacity = usize::try_from(self.remaining()).unwrap_or(usize::MAX).min(limit);
        let mut values = Vec::with_capacity(capacity);

        while values.len() < limit {
            match self.advance() {
                SequenceResult::Value(v) => values.push(v),
                SequenceResult::Completed => break,
            }
        }

        let completed = self.is_exhausted();
        if !completed {
            tracing::warn!(
                limit,
                remaining = %self.remaining(),
                "sequence stopped at safety limit before completing"
            );
        }

        BoundedRun { values, completed }
    }
}
