//! Chapter 3: functions, multiple results, slices and owned state.

use thiserror::Error;

pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot divide by zero")]
pub struct DivisionError;

/// Two results in one: the quotient or the reason there isn't one.
pub fn divide(a: f64, b: f64) -> Result<f64, DivisionError> {
    if b == 0.0 {
        return Err(DivisionError);
    }
    Ok(a / b)
}

/// Smallest and largest element, or `None` for an empty slice.
pub fn min_max(numbers: &[i32]) -> Option<(i32, i32)> {
    let (&first, rest) = numbers.split_first()?;
    Some(rest.iter().fold((first, first), |(min, max), &n| {
        (min.min(n), max.max(n))
    }))
}

/// Sum of the slice. Overflow wraps around (two's complement) instead of
/// panicking.
pub fn sum(numbers: &[i32]) -> i32 {
    numbers.iter().copied().fold(0i32, i32::wrapping_add)
}

/// Higher-order function: the processor is any callable taking `&str`.
pub fn process_string<F>(s: &str, processor: F) -> String
where
    F: Fn(&str) -> String,
{
    processor(s)
}

/// Counter that owns its state; each call to [`StepCounter::next`] bumps and
/// returns it. The count saturates at `u32::MAX`.
#[derive(Debug, Default, Clone)]
pub struct StepCounter {
    count: u32,
}

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn current(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_formats() {
        assert_eq!(greet("Ferris"), "Hello, Ferris!");
    }

    #[test]
    fn divide_ok_and_by_zero() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
        assert_eq!(divide(1.0, 0.0), Err(DivisionError));
        assert_eq!(DivisionError.to_string(), "cannot divide by zero");
    }

    #[test]
    fn min_max_cases() {
        assert_eq!(min_max(&[3, 1, 4, 1, 5, 9, 2, 6]), Some((1, 9)));
        assert_eq!(min_max(&[-7]), Some((-7, -7)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn sum_of_slice() {
        assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(sum(&[]), 0);
    }

    #[test]
    fn sum_wraps_on_overflow() {
        assert_eq!(sum(&[i32::MAX, 1]), i32::MIN);
        assert_eq!(sum(&[i32::MIN, -1]), i32::MAX);
        assert_eq!(sum(&[i32::MAX, 1, -1]), i32::MAX);
    }

    #[test]
    fn process_with_function_and_closure() {
        assert_eq!(process_string("hello", str::to_uppercase), "HELLO");
        let suffix = "!";
        assert_eq!(process_string("hi", |s| format!("{s}{suffix}")), "hi!");
    }

    #[test]
    fn counters_are_independent() {
        let mut a = StepCounter::new();
        let mut b = StepCounter::new();
        assert_eq!(a.next(), 1);
        assert_eq!(a.next(), 2);
        assert_eq!(a.next(), 3);
        assert_eq!(b.next(), 1);
        assert_eq!(a.current(), 3);
    }

    #[test]
    fn counter_saturates_at_max() {
        let mut counter = StepCounter { count: u32::MAX - 1 };
        assert_eq!(counter.next(), u32::MAX);
        assert_eq!(counter.next(), u32::MAX);
        assert_eq!(counter.current(), u32::MAX);
    }
}
