mod deque_queue;
mod history_queue;
mod vec_queue;

pub use self::deque_queue::DequeQueue;
pub use self::history_queue::HistoryQueue;
pub use self::vec_queue::VecQueue;

/// An ordered sequence consumed in insertion order.
///
/// Element count is deliberately absent from this trait; each
/// implementation keeps its size to itself.
pub trait Queue<T> {
    /// Appends `item` at the end of the owned sequence.
    fn add(&mut self, item: T);

    /// Yields the next element in insertion order, or `None` when
    /// nothing is available.
    fn remove(&mut self) -> Option<T>;
}
