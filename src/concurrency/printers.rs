use std::sync::Mutex;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterEvent {
    Number(u32),
    Letter(char),
}

impl std::fmt::Display for PrinterEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrinterEvent::Number(n) => write!(f, "{n}"),
            PrinterEvent::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// Two threads print `1..=5` and `'a'..='e'` at their own pace. Returns
/// the merged log; each thread's items stay in order, the interleaving
/// depends on the delays.
pub fn interleave(number_delay: Duration, letter_delay: Duration) -> Vec<PrinterEvent> {
    let log = Mutex::new(Vec::with_capacity(10));

    let record = |event: PrinterEvent| {
        log.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    };

    thread::scope(|scope| {
        scope.spawn(|| {
            for n in 1..=5 {
                thread::sleep(number_delay);
                record(PrinterEvent::Number(n));
            }
        });
        scope.spawn(|| {
            for c in 'a'..='e' {
                thread::sleep(letter_delay);
                record(PrinterEvent::Letter(c));
            }
        });
    });

    log.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
}
