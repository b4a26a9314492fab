use crossbeam::channel::unbounded;
use crossbeam::sync::WaitGroup;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    /// 1-based worker id.
    pub id: usize,
    pub elapsed: Duration,
}

/// Launch `count` workers that each sleep for `delay`, then block until all
/// of them have signalled the wait group.
///
/// Reports come back in completion order.
pub fn run_workers(count: usize, delay: Duration) -> Vec<WorkerReport> {
    let wg = WaitGroup::new();
    let (tx, rx) = unbounded();

    for id in 1..=count {
        let wg = wg.clone();
        let tx = tx.clone();
        thread::spawn(move || {
            tracing::debug!(id, "worker starting");
            let started = Instant::now();
            thread::sleep(delay);
            let report = WorkerReport {
                id,
                elapsed: started.elapsed(),
            };
            tracing::debug!(id, "worker done");
            // The launcher outlives every worker, so the receiver is still here.
            let _ = tx.send(report);
            drop(wg);
        });
    }
    drop(tx);

    wg.wait();
    rx.try_iter().collect()
}
