//! Chapter 1: values, constants, arithmetic and conversions.

use thiserror::Error;

/// Five-digit approximation used for printing.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;
pub const STATUS_OK: u16 = 200;
pub const STATUS_ERROR: u16 = 500;

pub fn greeting(name: &str, age: u32) -> String {
    format!("Hello, {}! You are {} years old.", name, age)
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("integer division by zero")]
    DivisionByZero,
    #[error("{op} of {x} and {y} overflows i64")]
    Overflow { op: &'static str, x: i64, y: i64 },
}

/// The four results printed by the basics chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    pub sum: i64,
    pub difference: i64,
    pub product: i64,
    pub quotient: i64,
}

impl Arithmetic {
    /// Checked arithmetic: overflow and division by zero come back as
    /// errors instead of panicking.
    pub fn of(x: i64, y: i64) -> Result<Self, ArithmeticError> {
        let overflow = |op| ArithmeticError::Overflow { op, x, y };

        let sum = x.checked_add(y).ok_or_else(|| overflow("sum"))?;
        let difference = x.checked_sub(y).ok_or_else(|| overflow("difference"))?;
        let product = x.checked_mul(y).ok_or_else(|| overflow("product"))?;
        if y == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        // i64::MIN / -1 is the only remaining failure.
        let quotient = x.checked_div(y).ok_or_else(|| overflow("quotient"))?;

        Ok(Self {
            sum,
            difference,
            product,
            quotient,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub integer: i64,
    pub float: f64,
    pub unsigned: u64,
}

/// `i64 -> f64 -> u64`. Negative floats saturate to 0 on the last step.
pub fn convert_chain(integer: i64) -> Conversion {
    let float = integer as f64;
    let unsigned = float as u64;
    Conversion {
        integer,
        float,
        unsigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_formats_name_and_age() {
        assert_eq!(greeting("Ferris", 25), "Hello, Ferris! You are 25 years old.");
    }

    #[test]
    fn arithmetic_of_ten_and_five() {
        let result = Arithmetic::of(10, 5).unwrap();
        assert_eq!(
            result,
            Arithmetic {
                sum: 15,
                difference: 5,
                product: 50,
                quotient: 2,
            }
        );
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(Arithmetic::of(7, 2).unwrap().quotient, 3);
        assert_eq!(Arithmetic::of(-7, 2).unwrap().quotient, -3);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(Arithmetic::of(10, 0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(matches!(
            Arithmetic::of(i64::MAX, 1),
            Err(ArithmeticError::Overflow { op: "sum", .. })
        ));
        assert!(matches!(
            Arithmetic::of(i64::MIN, -1),
            Err(ArithmeticError::Overflow { .. })
        ));
    }

    #[test]
    fn conversion_chain() {
        let c = convert_chain(42);
        assert_eq!(c.float, 42.0);
        assert_eq!(c.unsigned, 42);

        assert_eq!(convert_chain(-3).unsigned, 0);
    }
}
