//! Scrolling history of the chain's y-output.

use std::collections::VecDeque;

/// Default number of samples kept in the trace.
pub const DEFAULT_TRACE_CAPACITY: usize = 1450;
/// Largest trace length accepted from settings.
pub const MAX_TRACE_CAPACITY: usize = 100_000;

/// Bounded history of the chain's y-output, newest sample first.
#[derive(Clone, Debug)]
pub struct WaveTraceBuffer {
    values: VecDeque<f64>,
    capacity: usize,
}

impl Default for WaveTraceBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRACE_CAPACITY)
    }
}

impl WaveTraceBuffer {
    /// Create an empty buffer holding at most `capacity` samples (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity.min(DEFAULT_TRACE_CAPACITY)),
            capacity,
        }
    }

    /// Insert `value` at the front, dropping the oldest sample when full.
    pub fn push(&mut self, value: f64) {
        self.values.push_front(value);
        while self.values.len() > self.capacity {
            self.values.pop_back();
        }
    }

    /// Most recently pushed sample.
    pub fn front(&self) -> Option<f64> {
        self.values.front().copied()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Polyline vertices: sample `k` sits at `x = k`, so new samples enter at
    /// the origin and older ones scroll away to the right.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(k, &v)| [k as f64, v])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_still_holds_one_sample() {
        let mut b = WaveTraceBuffer::new(0);
        b.push(1.0);
        b.push(2.0);
        assert_eq!(b.len(), 1);
        assert_eq!(b.front(), Some(2.0));
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let mut b = WaveTraceBuffer::new(usize::MAX);
        b.push(1.0);
        assert_eq!(b.capacity(), usize::MAX);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn points_are_indexed_from_newest() {
        let mut b = WaveTraceBuffer::new(4);
        b.push(10.0);
        b.push(20.0);
        assert_eq!(b.points(), vec![[0.0, 20.0], [1.0, 10.0]]);
    }
}
