//! Shapes.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::prototype::{Object, Prototype};

/// An axis-aligned rectangle. Dimensions are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Operations over a parsed [`CircleData`] record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle;

/// The data half of a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleData {
    /// Radius.
    pub radius: f64,
}

impl Prototype for Circle {
    type Data = CircleData;
}

impl Object<Circle> {
    /// `2r`
    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// `2πr`
    #[must_use]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// `πr²`
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
