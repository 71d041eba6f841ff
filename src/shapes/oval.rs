//! # Oval
//!
//! Composes [`Shape`] and adds the two radii. Overrides `render`; converting
//! an `&Oval` into a `Shape` is the explicit slicing operation: the radii are
//! gone, and so is the override.

use crate::framework::construction;
use crate::framework::dispatch::Render;
use crate::shapes::shape::Shape;
use crate::shapes::PI;
use std::any::Any;

#[derive(Debug, Clone, PartialEq)]
pub struct Oval {
    shape: Shape,
    x_radius: f64,
    y_radius: f64,
}

impl Oval {
    /// Creates an Oval; the Shape portion is initialized first.
    pub fn new(x_radius: f64, y_radius: f64, description: impl Into<String>) -> Self {
        let shape = Shape::new(description);
        let oval = Self {
            shape,
            x_radius,
            y_radius,
        };
        construction::mark("Oval");
        oval
    }

    pub fn x_radius(&self) -> f64 {
        self.x_radius
    }

    pub fn y_radius(&self) -> f64 {
        self.y_radius
    }

    pub fn area(&self) -> f64 {
        PI * self.x_radius * self.y_radius
    }

    pub fn description(&self) -> &str {
        self.shape.description()
    }
}

impl Render for Oval {
    fn render(&self) -> String {
        format!(
            "Oval::render ({}, x: {}, y: {})",
            self.shape.description(),
            self.x_radius,
            self.y_radius
        )
    }

    fn type_label(&self) -> &'static str {
        "Oval"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Explicit slicing: only the base portion survives the copy.
impl From<&Oval> for Shape {
    fn from(oval: &Oval) -> Self {
        oval.shape.clone()
    }
}
