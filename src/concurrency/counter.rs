use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

/// An integer shared between threads behind a single `Mutex`.
///
/// Cloning hands out another reference to the same counter.
#[derive(Debug, Default, Clone)]
pub struct SharedCounter {
    value: Arc<Mutex<usize>>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking holder cannot leave the integer half-written, so a
    // poisoned lock is still safe to read.
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn increment(&self) {
        *self.lock() += 1;
    }

    pub fn value(&self) -> usize {
        *self.lock()
    }

    /// Run `tasks` threads that each call `increment` `increments_per_task`
    /// times, join them all and return the final value.
    pub fn hammer(&self, tasks: usize, increments_per_task: usize) -> usize {
        thread::scope(|scope| {
            for task in 0..tasks {
                scope.spawn(move || {
                    for _ in 0..increments_per_task {
                        self.increment();
                    }
                    tracing::debug!(task, increments_per_task, "counter task finished");
                });
            }
        });
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(SharedCounter::new().value(), 0);
    }

    #[test]
    fn five_tasks_of_a_thousand() {
        let counter = SharedCounter::new();
        assert_eq!(counter.hammer(5, 1000), 5000);
    }

    #[test]
    fn degenerate_cases_yield_zero() {
        assert_eq!(SharedCounter::new().hammer(0, 1000), 0);
        assert_eq!(SharedCounter::new().hammer(8, 0), 0);
    }

    #[test]
    fn clones_share_state_across_spawned_threads() {
        let counter = SharedCounter::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = counter.clone();
                thread::spawn(move || {
                    for _ in 0..250 {
                        counter.increment();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counter.value(), 1000);
    }

    #[test]
    fn survives_a_poisoned_lock() {
        let counter = SharedCounter::new();
        counter.increment();

        let poisoner = counter.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.value.lock().unwrap();
            panic!("poison the counter");
        })
        .join();

        counter.increment();
        assert_eq!(counter.value(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn no_lost_updates(tasks in 0usize..8, increments in 0usize..200) {
            let counter = SharedCounter::new();
            prop_assert_eq!(counter.hammer(tasks, increments), tasks * increments);
        }
    }
}
