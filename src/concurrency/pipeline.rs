//! Two-stage pipeline over rendezvous channels.
//!
//! `generate` feeds values into a zero-capacity channel, `square` maps them
//! onto a second one, and the caller drains the result. Dropping a sender is
//! the end-of-stream signal. Dropping a receiver early makes the upstream
//! `send` fail, which stops that stage instead of leaving it blocked.

use crossbeam::channel::{bounded, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// What one stage managed to hand downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub stage: &'static str,
    pub forwarded: usize,
    /// `false` when the downstream receiver went away before the input ran out.
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    pub squares: Vec<i64>,
    pub generator: StageReport,
    pub transform: StageReport,
}

/// Send every value downstream, pausing `delay` after each one.
pub fn generate<I>(values: I, out: Sender<i64>, delay: Duration) -> StageReport
where
    I: IntoIterator<Item = i64>,
{
    let mut forwarded = 0;
    for value in values {
        if out.send(value).is_err() {
            tracing::debug!(forwarded, "generator: downstream hung up");
            return StageReport {
                stage: "generate",
                forwarded,
                completed: false,
            };
        }
        forwarded += 1;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    StageReport {
        stage: "generate",
        forwarded,
        completed: true,
    }
}

/// Square each incoming value until the input disconnects.
/// Results saturate at `i64::MAX`.
pub fn square(input: Receiver<i64>, out: Sender<i64>) -> StageReport {
    let mut forwarded = 0;
    for value in input.iter() {
        if out.send(value.saturating_mul(value)).is_err() {
            tracing::debug!(forwarded, "square: downstream hung up");
            return StageReport {
                stage: "square",
                forwarded,
                completed: false,
            };
        }
        forwarded += 1;
    }
    StageReport {
        stage: "square",
        forwarded,
        completed: true,
    }
}

/// Run the pipeline to completion and collect every square, in input order.
pub fn run_pipeline(inputs: &[i64], delay: Duration) -> PipelineRun {
    drive(inputs, delay, None, |_| {})
}

/// Like [`run_pipeline`], but call `on_square` as each value arrives.
pub fn run_pipeline_with<F>(inputs: &[i64], delay: Duration, on_square: F) -> PipelineRun
where
    F: FnMut(i64),
{
    drive(inputs, delay, None, on_square)
}

/// Consume only the first `take` squares, then walk away.
pub fn run_pipeline_take(inputs: &[i64], delay: Duration, take: usize) -> PipelineRun {
    drive(inputs, delay, Some(take), |_| {})
}

fn drive<F>(inputs: &[i64], delay: Duration, take: Option<usize>, mut on_square: F) -> PipelineRun
where
    F: FnMut(i64),
{
    let (numbers_tx, numbers_rx) = bounded(0);
    let (squares_tx, squares_rx) = bounded(0);

    thread::scope(|scope| {
        let generator = scope.spawn(move || generate(inputs.iter().copied(), numbers_tx, delay));
        let transform = scope.spawn(move || square(numbers_rx, squares_tx));

        let limit = take.unwrap_or(usize::MAX);
        let mut squares = Vec::new();
        while squares.len() < limit {
            match squares_rx.recv() {
                Ok(value) => {
                    on_square(value);
                    squares.push(value);
                }
                Err(_) => break,
            }
        }
        drop(squares_rx);

        PipelineRun {
            squares,
            generator: join_stage(generator, "generate"),
            transform: join_stage(transform, "square"),
        }
    })
}

fn join_stage(handle: thread::ScopedJoinHandle<'_, StageReport>, stage: &'static str) -> StageReport {
    handle.join().unwrap_or_else(|_| {
        tracing::error!(stage, "pipeline stage panicked");
        StageReport {
            stage,
            forwarded: 0,
            completed: false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_in_input_order() {
        let run = run_pipeline(&[1, 2, 3, 4, 5], Duration::ZERO);
        assert_eq!(run.squares, vec![1, 4, 9, 16, 25]);
        assert!(run.generator.completed);
        assert!(run.transform.completed);
        assert_eq!(run.generator.forwarded, 5);
        assert_eq!(run.transform.forwarded, 5);
    }

    #[test]
    fn empty_input_closes_cleanly() {
        let run = run_pipeline(&[], Duration::ZERO);
        assert!(run.squares.is_empty());
        assert!(run.transform.completed);
    }

    #[test]
    fn callback_sees_values_as_they_arrive() {
        let mut seen = Vec::new();
        let run = run_pipeline_with(&[3, -4], Duration::from_millis(1), |v| seen.push(v));
        assert_eq!(seen, vec![9, 16]);
        assert_eq!(run.squares, seen);
    }

    #[test]
    fn early_abandonment_stops_upstream_stages() {
        let run = run_pipeline_take(&[1, 2, 3, 4, 5], Duration::ZERO, 2);
        assert_eq!(run.squares, vec![1, 4]);

        // The transform received 3 but could not hand 9 on.
        assert_eq!(run.transform.forwarded, 2);
        assert!(!run.transform.completed);

        // The generator got 1, 2 and 3 across before its receiver vanished.
        assert_eq!(run.generator.forwarded, 3);
        assert!(!run.generator.completed);
    }

    #[test]
    fn stages_work_directly_on_channels() {
        let (tx, rx) = bounded(0);
        let (out_tx, out_rx) = bounded(0);
        let report = thread::scope(|scope| {
            scope.spawn(move || generate(vec![6, 7], tx, Duration::ZERO));
            let transform = scope.spawn(move || square(rx, out_tx));
            let collected: Vec<i64> = out_rx.iter().collect();
            assert_eq!(collected, vec![36, 49]);
            transform.join().unwrap()
        });
        assert_eq!(report.stage, "square");
        assert!(report.completed);
    }

    #[test]
    fn squaring_saturates() {
        let run = run_pipeline(&[i64::MAX], Duration::ZERO);
        assert_eq!(run.squares, vec![i64::MAX]);
    }
}
