use std::collections::vec_deque::{self, VecDeque};
use std::iter::FromIterator;

use crate::queues::Queue;

/// VecDeque-backed FIFO with constant-time removal from the front.
#[derive(Clone)]
pub struct DequeQueue<T>(VecDeque<T>);

impl<T> Default for DequeQueue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Queue<T> for DequeQueue<T> {
    fn add(&mut self, item: T) {
        self.0.push_back(item)
    }

    fn remove(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> FromIterator<T> for DequeQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a DequeQueue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
