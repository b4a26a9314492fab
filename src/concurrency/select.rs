use crossbeam::channel::{bounded, never, select};
use std::thread;
use std::time::Duration;

pub const SELECT_MESSAGES: [&str; 2] = ["Message from channel 1", "Message from channel 2"];

/// Two producers each deliver one message after their own delay; the
/// receiving loop runs twice and takes whichever channel is ready.
///
/// Messages are returned in the order they were received.
pub fn first_completed(first_delay: Duration, second_delay: Duration) -> Vec<&'static str> {
    let (tx1, rx1) = bounded(0);
    let (tx2, rx2) = bounded(0);

    thread::scope(|scope| {
        scope.spawn(move || {
            thread::sleep(first_delay);
            let _ = tx1.send(SELECT_MESSAGES[0]);
        });
        scope.spawn(move || {
            thread::sleep(second_delay);
            let _ = tx2.send(SELECT_MESSAGES[1]);
        });

        // A drained channel is swapped for `never()`: its producer exits and
        // disconnects, and a disconnected receiver is always ready.
        let mut pending = (Some(rx1), Some(rx2));
        let mut received = Vec::with_capacity(2);
        for _ in 0..2 {
            let first = pending.0.clone().unwrap_or_else(never);
            let second = pending.1.clone().unwrap_or_else(never);
            select! {
                recv(first) -> msg => {
                    match msg {
                        Ok(msg) => received.push(msg),
                        Err(_) => tracing::warn!("channel 1 closed without a message"),
                    }
                    pending.0 = None;
                }
                recv(second) -> msg => {
                    match msg {
                        Ok(msg) => received.push(msg),
                        Err(_) => tracing::warn!("channel 2 closed without a message"),
                    }
                    pending.1 = None;
                }
            }
        }
        received
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faster_producer_arrives_first() {
        let received = first_completed(Duration::from_millis(200), Duration::from_millis(10));
        assert_eq!(received, vec![SELECT_MESSAGES[1], SELECT_MESSAGES[0]]);
    }

    #[test]
    fn order_follows_delays_not_declaration() {
        let received = first_completed(Duration::from_millis(10), Duration::from_millis(200));
        assert_eq!(received, vec![SELECT_MESSAGES[0], SELECT_MESSAGES[1]]);
    }

    #[test]
    fn both_messages_delivered_when_simultaneous() {
        let mut received = first_completed(Duration::ZERO, Duration::ZERO);
        received.sort();
        assert_eq!(received, SELECT_MESSAGES.to_vec());
    }
}
