use std::fmt;

use smallvec::SmallVec;

/// One observed queue operation.
#[derive(Debug, PartialEq)]
pub enum LogItem {
    /// An element was handed out; `position` is 1-based within the drain.
    Yielded { position: usize },
    /// A remove found nothing left to yield.
    Exhausted,
}

impl fmt::Display for LogItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LogItem::Yielded { position } => write!(f, "Y @{}", position),
            LogItem::Exhausted => write!(f, "X"),
        }
    }
}

pub trait QueueLogger {
    fn log(&mut self, item: LogItem);
}

pub struct DummyLogger;

impl QueueLogger for DummyLogger {
    fn log(&mut self, _item: LogItem) { }
}

pub struct VectorLogger(SmallVec<[LogItem; 32]>);

impl VectorLogger {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    pub fn as_slice(&self) -> &[LogItem] {
        self.0.as_slice()
    }
}

impl QueueLogger for VectorLogger {
    fn log(&mut self, item: LogItem) {
        self.0.push(item);
    }
}
