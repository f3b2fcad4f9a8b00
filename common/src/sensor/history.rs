use std::collections::VecDeque;

/// Fixed-capacity sliding window of integer chart samples. Appending at
/// capacity evicts the oldest sample.
#[derive(Clone, Debug)]
pub struct TemperatureHistory {
    samples: VecDeque<i32>,
    capacity: usize,
}

impl TemperatureHistory {
    /// Points shown by the dashboard chart.
    pub const CHART_POINTS: usize = 20;

    /// Creates a window pre-filled with `capacity` copies of `initial`, so
    /// the chart starts without an empty lead-in.
    pub fn new(capacity: usize, initial: i32) -> Self {
        Self {
            samples: VecDeque::from(vec![initial; capacity]),
            capacity,
        }
    }

    pub fn push(&mut self, sample: i32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.samples.iter().copied()
    }
}
