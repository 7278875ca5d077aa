// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Direction, PatternMatch};
use crate::ByteIndex;

/// Matches grouped by where they sit relative to the caret. Each bucket keeps document
/// order (ascending `start`).
///
/// | bucket     | rule                                               |
/// | ---------- | -------------------------------------------------- |
/// | `previous` | starts before the caret, and doesn't contain it    |
/// | `current`  | contains the caret (`start <= caret < end`)        |
/// | `next`     | starts after the caret                             |
///
/// A zero length match that starts exactly at the caret fits none of these, and is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchBuckets {
    pub previous: Vec<PatternMatch>,
    pub current: Vec<PatternMatch>,
    pub next: Vec<PatternMatch>,
}

impl MatchBuckets {
    /// `matches` must be in document order.
    #[must_use]
    pub fn partition(matches: Vec<PatternMatch>, cursor: ByteIndex) -> Self {
        let mut acc = Self::default();
        for it in matches {
            if it.contains(cursor) {
                acc.current.push(it);
            } else if it.start < cursor {
                acc.previous.push(it);
            } else if it.start > cursor {
                acc.next.push(it);
            }
        }
        acc
    }

    #[must_use]
    pub fn len(&self) -> usize { self.previous.len() + self.current.len() + self.next.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Flatten into the order in which repeated jumps visit the matches.
    /// - [`Direction::Next`]: forward from the caret, wrap to the top, and the matches
    ///   under the caret come last.
    /// - [`Direction::Previous`]: backward from the caret (nearest first), wrap to the
    ///   bottom, and the matches under the caret come last.
    #[must_use]
    pub fn into_ordered(self, direction: Direction) -> Vec<PatternMatch> {
        let Self {
            previous,
            current,
            next,
        } = self;
        match direction {
            Direction::Next => next.into_iter().chain(previous).chain(current).collect(),
            Direction::Previous => previous
                .into_iter()
                .rev()
                .chain(next.into_iter().rev())
                .chain(current.into_iter().rev())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, byte_index};

    /// Matches of `ab` in `"ab ab ab ab"`.
    fn fixture() -> Vec<PatternMatch> {
        [0, 3, 6, 9]
            .into_iter()
            .map(|start| PatternMatch::new(byte_index(start), "ab"))
            .collect()
    }

    fn starts(matches: &[PatternMatch]) -> Vec<usize> {
        matches.iter().map(|it| it.start.as_usize()).collect()
    }

    #[test]
    fn test_partition_cursor_between_matches() {
        let buckets = MatchBuckets::partition(fixture(), byte_index(5));
        assert_eq2!(starts(&buckets.previous), vec![0, 3]);
        assert!(buckets.current.is_empty());
        assert_eq2!(starts(&buckets.next), vec![6, 9]);
    }

    #[test]
    fn test_partition_cursor_on_first_char_is_current() {
        let buckets = MatchBuckets::partition(fixture(), byte_index(6));
        assert_eq2!(starts(&buckets.previous), vec![0, 3]);
        assert_eq2!(starts(&buckets.current), vec![6]);
        assert_eq2!(starts(&buckets.next), vec![9]);
    }

    #[test]
    fn test_partition_cursor_on_last_char_is_current() {
        let buckets = MatchBuckets::partition(fixture(), byte_index(7));
        assert_eq2!(starts(&buckets.current), vec![6]);
        assert_eq2!(starts(&buckets.next), vec![9]);
    }

    #[test]
    fn test_zero_length_match_at_cursor_is_dropped() {
        let matches = vec![
            PatternMatch::new(byte_index(0), "a"),
            PatternMatch::new(byte_index(2), ""),
        ];
        let buckets = MatchBuckets::partition(matches, byte_index(2));
        assert_eq2!(buckets.len(), 1);
        assert_eq2!(starts(&buckets.previous), vec![0]);
    }

    #[test]
    fn test_into_ordered_next() {
        let buckets = MatchBuckets::partition(fixture(), byte_index(4));
        assert_eq2!(starts(&buckets.into_ordered(Direction::Next)), vec![6, 9, 0, 3]);
    }

    #[test]
    fn test_into_ordered_previous() {
        let buckets = MatchBuckets::partition(fixture(), byte_index(4));
        assert_eq2!(
            starts(&buckets.into_ordered(Direction::Previous)),
            vec![0, 9, 6, 3]
        );
    }

    #[test]
    fn test_into_ordered_previous_from_between() {
        let buckets = MatchBuckets::partition(fixture(), byte_index(5));
        assert_eq2!(
            starts(&buckets.into_ordered(Direction::Previous)),
            vec![3, 0, 9, 6]
        );
    }
}
