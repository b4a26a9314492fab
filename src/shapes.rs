//! Chapter 4: the `Shape` trait and its two implementors.
//!
//! Dimensions are validated at construction, so every `Shape` in hand has a
//! strictly positive, finite area and perimeter.

use std::f64::consts::PI;
use thiserror::Error;

pub trait Shape {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    #[error("{dimension} must be positive and finite, got {value}")]
    NonPositive { dimension: &'static str, value: f64 },
}

fn positive(dimension: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::NonPositive { dimension, value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: positive("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

/// Static dispatch counterpart to [`total_area`].
pub fn describe<S: Shape>(shape: &S) -> String {
    format!(
        "{}: area {:.2}, perimeter {:.2}",
        shape.name(),
        shape.area(),
        shape.perimeter()
    )
}
