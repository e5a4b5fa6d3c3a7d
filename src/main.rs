use histq::log::DummyLogger;
use histq::queues::{DequeQueue, HistoryQueue, Queue};
use histq::sample::{Holder, Letters, Numbers};
use histq::{DrainLogged, Result};

fn main() -> Result<()> {
    println!("== FIFO");
    let mut queue = DequeQueue::default();
    queue.add("first");
    queue.add("second");
    queue.add("third");
    while let Some(item) = queue.remove() {
        println!("took {}", item);
    }

    println!("== HISTORY");
    let mut history: HistoryQueue<&str> = ["5", "6", "foo"].iter().copied().collect();
    if let Some(item) = history.remove() {
        println!("took {}", item);
    }
    print!("{}", history.show());
    history.drain_logged(&mut DummyLogger);
    print!("{}", history.show());

    println!("== SAMPLERS");
    let mut holder = Holder::new(Box::new(Letters::new()));
    for token in holder.first(5)? {
        print!("{} ", token);
    }
    println!();
    holder.set(Box::new(Numbers::new()));
    for token in holder.first(5)? {
        print!("{} ", token);
    }
    println!();

    Ok(())
}
