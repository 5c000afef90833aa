//! Sliding-window minimum tracker.
//!
//! An [`Enumerator`] is fed one item per position, either a key or a skip,
//! and reports the leftmost minimal key among the last `span` positions. It is
//! the same monotonic-deque technique used for plain minimizer extraction,
//! generalized to arbitrary ordered keys and to positions that carry no
//! candidate at all.
//!
//! Invariant: queued keys are non-decreasing from front to back, and queued
//! positions are strictly increasing. A new key only evicts queued keys that
//! are strictly greater, so among equal keys the oldest one stays in front.

use super::ring_buffer::RingBuffer;
use crate::constants::MIN_QUEUE_CAPACITY;

/// Leftmost sliding-window minimum over a trailing span of positions.
#[derive(Clone)]
pub struct Enumerator<K: Ord + Copy> {
    span: usize,
    /// Number of positions consumed since the last reset.
    pos: usize,
    queue: RingBuffer<(usize, K)>,
}

impl<K: Ord + Copy> Enumerator<K> {
    /// Create an enumerator over a trailing span of `span` positions.
    ///
    /// # Panics
    /// Panics if `span` is zero.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Enumerator span must be positive");
        Self {
            span,
            pos: 0,
            // One extra slot: a key is pushed before expired ones are evicted.
            queue: RingBuffer::with_capacity((span + 1).max(MIN_QUEUE_CAPACITY)),
        }
    }

    /// Discard all candidates and restart positions at zero.
    #[inline]
    pub fn clear(&mut self) {
        self.queue.clear();
        self.pos = 0;
    }

    /// Append a candidate at the next position.
    ///
    /// If `reset` is set, this is the first item of a new scan and all prior
    /// state is discarded first.
    #[inline]
    pub fn feed(&mut self, key: K, reset: bool) {
        if reset {
            self.clear();
        }
        while let Some(&(_, v)) = self.queue.back() {
            if v > key {
                self.queue.pop_back();
            } else {
                break;
            }
        }
        self.queue.push_back((self.pos, key));
        self.pos += 1;
        self.evict_expired();
        debug_assert!(self.queue.len() <= self.span);
    }

    /// Advance one position without adding a candidate.
    #[inline]
    pub fn skip(&mut self) {
        self.pos += 1;
        self.evict_expired();
    }

    #[inline]
    fn evict_expired(&mut self) {
        while let Some(&(p, _)) = self.queue.front() {
            if p + self.span < self.pos {
                self.queue.pop_front();
            } else {
                break;
            }
        }
    }

    /// First live position of the trailing span.
    #[inline]
    fn window_start(&self) -> usize {
        self.pos.saturating_sub(self.span)
    }

    /// Offset of the current minimum relative to the oldest live position.
    ///
    /// Returns `None` if nothing was fed since the last reset, or if every
    /// live position was skipped.
    #[inline]
    pub fn query(&self) -> Option<usize> {
        self.query_min().map(|(offset, _)| offset)
    }

    /// Offset and key of the current minimum.
    #[inline]
    pub fn query_min(&self) -> Option<(usize, K)> {
        self.queue.front().map(|&(p, key)| {
            let offset = p - self.window_start();
            debug_assert!(offset < self.span);
            (offset, key)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Leftmost minimum among the trailing `span` items, skipping `None`s.
    fn naive_query(items: &[Option<u8>], span: usize) -> Option<usize> {
        let start = items.len().saturating_sub(span);
        let mut best: Option<(usize, u8)> = None;
        for (i, item) in items[start..].iter().enumerate() {
            if let Some(key) = *item {
                if best.map_or(true, |(_, b)| key < b) {
                    best = Some((i, key));
                }
            }
        }
        best.map(|(i, _)| i)
    }

    #[test]
    fn test_query_before_feed_is_none() {
        let e: Enumerator<u64> = Enumerator::new(4);
        assert_eq!(e.query(), None);
    }

    #[test]
    fn test_tracks_minimum_in_span() {
        let mut e = Enumerator::new(4);
        let hashes = [50u64, 30, 40, 20, 60, 10, 70, 80, 15, 25];
        for (i, &h) in hashes.iter().enumerate() {
            e.feed(h, i == 0);
            if i >= 3 {
                let start = i - 3;
                let (offset, key) = e.query_min().unwrap();
                let expected = *hashes[start..=i].iter().min().unwrap();
                assert_eq!(key, expected);
                assert_eq!(hashes[start + offset], expected);
            }
        }
    }

    #[test]
    fn test_leftmost_on_ties() {
        let mut e = Enumerator::new(3);
        e.feed(5u64, true);
        e.feed(2, false);
        e.feed(2, false);
        assert_eq!(e.query(), Some(1));
        e.feed(2, false);
        // Window is now [2, 2, 2]; the oldest one wins.
        assert_eq!(e.query(), Some(0));
    }

    #[test]
    fn test_skip_advances_window() {
        let mut e = Enumerator::new(2);
        e.feed(1u64, true);
        e.skip();
        assert_eq!(e.query(), Some(0));
        e.skip();
        assert_eq!(e.query(), None);
        e.feed(9, false);
        assert_eq!(e.query(), Some(1));
    }

    #[test]
    fn test_reset_discards_state() {
        let mut e = Enumerator::new(3);
        e.feed(0u64, true);
        e.feed(1, false);
        e.feed(7, true);
        assert_eq!(e.pos, 1);
        assert_eq!(e.query_min(), Some((0, 7)));
    }

    #[test]
    fn test_span_one() {
        let mut e = Enumerator::new(1);
        for (i, h) in [3u64, 1, 2].into_iter().enumerate() {
            e.feed(h, i == 0);
            assert_eq!(e.query_min(), Some((0, h)));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn matches_naive_rescan(
            span in 1usize..12,
            items in proptest::collection::vec(proptest::option::weighted(0.8, 0u8..6), 1..200),
        ) {
            let mut e = Enumerator::new(span);
            let mut seen: Vec<Option<u8>> = Vec::new();
            for item in items {
                match item {
                    Some(key) => e.feed(key, false),
                    None => e.skip(),
                }
                seen.push(item);
                prop_assert_eq!(e.query(), naive_query(&seen, span));
            }
        }
    }
}
