use std::fmt;
use std::iter::FromIterator;

use crate::queues::{Queue, VecQueue};

/// FIFO that keeps everything it ever yielded.
///
/// Removal reveals the element under the cursor instead of shrinking the
/// backing sequence, so earlier elements stay addressable through `show`.
#[derive(Clone)]
pub struct HistoryQueue<T> {
    inner: VecQueue<T>,
    cursor: usize,
}

impl<T> Default for HistoryQueue<T> {
    fn default() -> Self {
        Self {
            inner: VecQueue::default(),
            cursor: 0,
        }
    }
}

impl<T: Clone> Queue<T> for HistoryQueue<T> {
    fn add(&mut self, item: T) {
        self.inner.add(item)
    }

    // cursor never exceeds inner.len()
    fn remove(&mut self) -> Option<T> {
        let item = self.inner.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(item)
    }
}

impl<T> HistoryQueue<T> {
    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: fmt::Display> HistoryQueue<T> {
    /// Lists every retained element with its 1-based position, then the
    /// position the next remove will yield.
    pub fn show(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for HistoryQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, item) in (&self.inner).into_iter().enumerate() {
            writeln!(f, "{}: {}", index + 1, item)?;
        }
        if self.cursor < self.len() {
            writeln!(f, "next up: {}", self.cursor + 1)
        } else {
            writeln!(f, "queue is drained")
        }
    }
}

impl<T> FromIterator<T> for HistoryQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
            cursor: 0,
        }
    }
}
