//! A four-function calculator with a single memory register.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivideByZero,
}

/// Arithmetic is stateless; only `store`, `memory` and `clear` touch the
/// register.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Calculator {
    memory: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds two numbers.
    ///
    /// ```
    /// use fundamentals::Calculator;
    ///
    /// let calc = Calculator::new();
    /// let result = calc.add(2.0, 3.0);
    /// assert_eq!(format!("2 + 3 = {}", result), "2 + 3 = 5");
    /// ```
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtracts `b` from `a`.
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Divides `a` by `b`. Both `0.0` and `-0.0` count as zero.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            return Err(CalcError::DivideByZero);
        }
        Ok(a / b)
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn store(&mut self, value: f64) {
        self.memory = value;
    }

    pub fn clear(&mut self) {
        self.memory = 0.0;
    }
}
