use lab_core::{LabError, Result};
use std::iter::FusedIterator;

/// Step used by [`NumberSequence::ascending`].
pub const DEFAULT_STEP: i64 = 1;

/// Outcome of a single [`NumberSequence::advance`] call.
///
/// `Completed` carries no value: callers must check for it before reading one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceResult {
    Value(i64),
    Completed,
}

impl SequenceResult {
    /// The produced value, or `None` once the sequence is exhausted.
    #[must_use]
    pub fn value(self) -> Option<i64> {
        match self {
            SequenceResult::Value(v) => Some(v),
            SequenceResult::Completed => None,
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, SequenceResult::Completed)
    }
}

/// A bounded arithmetic progression produced one value at a time.
///
/// Values run from `start` towards `end` (inclusive) in increments of `step`.
/// The cursor only ever moves in the direction of `step`, and once it has
/// crossed `end` every further [`advance`](Self::advance) reports
/// [`SequenceResult::Completed`] without touching it.
///
/// # Example
///
/// ```rust
/// use lab_sequence::NumberSequence;
///
/// let odds: Vec<i64> = NumberSequence::new(1, 10, 2).unwrap().collect();
/// assert_eq!(odds, [1, 3, 5, 7, 9]);
///
/// let down: Vec<i64> = NumberSequence::new(10, 0, -3).unwrap().collect();
/// assert_eq!(down, [10, 7, 4, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSequence {
    start: i64,
    end:   i64,
    step:  i64,
    /// `None` once stepping would have left the `i64` range; that position
    /// is past `end` by construction.
    current: Option<i64>,
}

impl NumberSequence {
    /// Create a sequence from `start` to `end` (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`LabError::InvalidArgument`] if `step` is zero.
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(LabError::InvalidArgument(
                "sequence step must be non-zero".into(),
            ));
        }

        Ok(Self {
            start,
            end,
            step,
            current: Some(start),
        })
    }

    /// Create a sequence counting up by [`DEFAULT_STEP`].
    pub fn ascending(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            step: DEFAULT_STEP,
            current: Some(start),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Position of the cursor, or `None` if it stepped beyond the `i64` range.
    pub fn current(&self) -> Option<i64> {
        self.current
    }

    /// Produce the next value, or report completion.
    ///
    /// Safe to call any number of times after exhaustion.
    pub fn advance(&mut self) -> SequenceResult {
        match self.current {
            Some(value) if self.within_bound(value) => {
                self.current = value.checked_add(self.step);
                SequenceResult::Value(value)
            }
            _ => SequenceResult::Completed,
        }
    }

    /// `true` if the next [`advance`](Self::advance) will report completion.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !self.current.is_some_and(|value| self.within_bound(value))
    }

    /// Number of values still to be produced.
    #[must_use]
    pub fn remaining(&self) -> u128 {
        match self.current {
            Some(value) if self.within_bound(value) => {
                let span = (i128::from(self.end) - i128::from(value)).unsigned_abs();
                span / u128::from(self.step.unsigned_abs()) + 1
            }
            _ => 0,
        }
    }

    fn within_bound(&self, value: i64) -> bool {
        if self.step > 0 {
            value <= self.end
        } else {
            value >= self.end
        }
    }
}

impl Iterator for NumberSequence {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.advance().value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for NumberSequence {}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(seq: &mut NumberSequence) -> Vec<i64> {
        let mut values = Vec::new();
        loop {
            match seq.advance() {
                SequenceResult::Value(v) => values.push(v),
                SequenceResult::Completed => return values,
            }
        }
    }

    #[test]
    fn ascending_by_two() {
        let mut seq = NumberSequence::new(1, 10, 2).unwrap();
        assert_eq!(drain(&mut seq), vec![1, 3, 5, 7, 9]);
        assert!(seq.advance().is_completed());
    }

    #[test]
    fn descending_by_three() {
        let mut seq = NumberSequence::new(10, 0, -3).unwrap();
        assert_eq!(drain(&mut seq), vec![10, 7, 4, 1]);
    }

    #[test]
    fn start_equals_end_yields_once() {
        let mut seq = NumberSequence::new(5, 5, 1).unwrap();
        assert_eq!(seq.advance(), SequenceResult::Value(5));
        assert_eq!(seq.advance(), SequenceResult::Completed);
    }

    #[test]
    fn start_past_end_yields_nothing() {
        let mut seq = NumberSequence::new(5, 1, 1).unwrap();
        assert!(seq.is_exhausted());
        assert_eq!(seq.advance(), SequenceResult::Completed);
        assert_eq!(seq.current(), Some(5));
    }

    #[test]
    fn zero_step_is_rejected() {
        let err = NumberSequence::new(1, 10, 0).unwrap_err();
        assert!(matches!(err, LabError::InvalidArgument(_)));
    }

    #[test]
    fn completion_is_idempotent_and_freezes_cursor() {
        let mut seq = NumberSequence::new(0, 2, 2).unwrap();
        assert_eq!(drain(&mut seq), vec![0, 2]);
        let parked = seq.current();
        for _ in 0..5 {
            assert_eq!(seq.advance(), SequenceResult::Completed);
        }
        assert_eq!(seq.current(), parked);
    }

    #[test]
    fn ascending_uses_default_step() {
        let seq = NumberSequence::ascending(3, 6);
        assert_eq!(seq.step(), DEFAULT_STEP);
        assert_eq!(seq.collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn overflow_ends_the_sequence() {
        let mut seq = NumberSequence::new(i64::MAX - 1, i64::MAX, 5).unwrap();
        assert_eq!(seq.advance(), SequenceResult::Value(i64::MAX - 1));
        assert_eq!(seq.current(), None);
        assert!(seq.is_exhausted());
        assert_eq!(seq.advance(), SequenceResult::Completed);
    }

    #[test]
    fn reaches_i64_min_exactly() {
        let seq = NumberSequence::new(i64::MIN + 2, i64::MIN, -1).unwrap();
        assert_eq!(seq.collect::<Vec<_>>(), vec![i64::MIN + 2, i64::MIN + 1, i64::MIN]);
    }

    #[test]
    fn size_hint_is_exact() {
        let mut seq = NumberSequence::new(10, 0, -3).unwrap();
        assert_eq!(seq.size_hint(), (4, Some(4)));
        seq.next();
        assert_eq!(seq.size_hint(), (3, Some(3)));
        assert_eq!(seq.by_ref().count(), 3);
        assert_eq!(seq.size_hint(), (0, Some(0)));
    }

    #[test]
    fn remaining_spans_full_range() {
        let seq = NumberSequence::new(i64::MIN, i64::MAX, 1).unwrap();
        assert_eq!(seq.remaining(), 1u128 << 64);
    }

    #[test]
    fn accessors_report_construction_values() {
        let seq = NumberSequence::new(-4, 8, 3).unwrap();
        assert_eq!((seq.start(), seq.end(), seq.step()), (-4, 8, 3));
        assert_eq!(seq.current(), Some(-4));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Reference progression computed without the generator.
    fn expected(start: i64, end: i64, step: i64) -> Vec<i64> {
        let mut out = Vec::new();
        let mut v = start;
        while (step > 0 && v <= end) || (step < 0 && v >= end) {
            out.push(v);
            v += step;
        }
        out
    }

    proptest! {
        #[test]
        fn ascending_matches_progression(
            start in -1_000i64..1_000,
            end in -1_000i64..1_000,
            step in 1i64..50,
        ) {
            let mut seq = NumberSequence::new(start, end, step).unwrap();
            let mut values = Vec::new();
            while let SequenceResult::Value(v) = seq.advance() {
                values.push(v);
            }

            prop_assert_eq!(values, expected(start, end, step));
            for _ in 0..3 {
                prop_assert!(seq.advance().is_completed());
            }
        }

        #[test]
        fn descending_matches_progression(
            start in -1_000i64..1_000,
            end in -1_000i64..1_000,
            step in -50i64..=-1,
        ) {
            let seq = NumberSequence::new(start, end, step).unwrap();
            let hint = seq.size_hint();
            let values: Vec<i64> = seq.collect();

            prop_assert_eq!(hint, (values.len(), Some(values.len())));
            prop_assert_eq!(values, expected(start, end, step));
        }

        #[test]
        fn values_move_monotonically(
            start in any::<i64>(),
            end in any::<i64>(),
            step in prop_oneof![i64::MIN..0, 1..=i64::MAX],
        ) {
            let values: Vec<i64> = NumberSequence::new(start, end, step)
                .unwrap()
                .take(64)
                .collect();

            for pair in values.windows(2) {
                if step > 0 {
                    prop_assert!(pair[1] > pair[0]);
                } else {
                    prop_assert!(pair[1] < pair[0]);
                }
            }
        }
    }
}
