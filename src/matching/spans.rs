//! Interval-occupancy tracking for overlapping alias matches.

use std::collections::BTreeMap;

/// Set of claimed, non-overlapping byte ranges. A longer alias claims its
/// span first; any shorter alias overlapping a claimed span is rejected.
#[derive(Debug, Default)]
pub struct SpanSet {
    // start -> end, intervals are disjoint
    claimed: BTreeMap<usize, usize>,
}

impl SpanSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `[start, end)` if it overlaps no previously claimed range.
    /// Returns false (and claims nothing) on overlap.
    pub fn try_claim(&mut self, start: usize, end: usize) -> bool {
        debug_assert!(start < end);

        // Predecessor interval: the last one starting at or before `start`.
        if let Some((_, &prev_end)) = self.claimed.range(..=start).next_back() {
            if prev_end > start {
                return false;
            }
        }
        // Successor interval: the first one starting after `start`.
        if let Some((&next_start, _)) = self.claimed.range(start + 1..).next() {
            if next_start < end {
                return false;
            }
        }

        self.claimed.insert(start, end);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_claims_succeed() {
        let mut spans = SpanSet::new();
        assert!(spans.try_claim(0, 5));
        assert!(spans.try_claim(5, 10));
        assert!(spans.try_claim(20, 25));
    }

    #[test]
    fn test_overlap_is_rejected() {
        let mut spans = SpanSet::new();
        assert!(spans.try_claim(10, 20));
        assert!(!spans.try_claim(5, 11));
        assert!(!spans.try_claim(19, 30));
        assert!(!spans.try_claim(12, 15));
        assert!(!spans.try_claim(0, 40));
    }

    #[test]
    fn test_rejected_claim_leaves_no_trace() {
        let mut spans = SpanSet::new();
        assert!(spans.try_claim(10, 20));
        assert!(!spans.try_claim(15, 30));
        // 20..30 is still free because the overlapping claim was rolled back
        assert!(spans.try_claim(20, 30));
    }
}
