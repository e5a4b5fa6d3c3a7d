//! Ordered queues consumed in insertion order, a history-preserving
//! variant that replays instead of discarding, and a small sampling
//! capability with interchangeable backings.

pub mod error;
pub mod log;
pub mod queues;
pub mod sample;

pub use crate::error::{Error, Result};

use crate::log::{LogItem, QueueLogger};
use crate::queues::Queue;

/// Removing until exhaustion under an observer.
pub trait DrainLogged<T> {
    /// Removes every available element, logging each yield and the final
    /// exhausted remove, and returns the elements in yield order.
    fn drain_logged(&mut self, logger: &mut impl QueueLogger) -> Vec<T>;
}

impl<T, Q: Queue<T>> DrainLogged<T> for Q {
    fn drain_logged(&mut self, logger: &mut impl QueueLogger) -> Vec<T> {
        let mut drained = Vec::new();
        loop {
            match self.remove() {
                Some(item) => {
                    logger.log(LogItem::Yielded {
                        position: drained.len() + 1,
                    });
                    drained.push(item);
                }
                None => {
                    logger.log(LogItem::Exhausted);
                    return drained;
                }
            }
        }
    }
}
