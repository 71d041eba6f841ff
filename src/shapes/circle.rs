//! # Circle
//!
//! A circle is an oval with equal radii, and the composition says so: `Circle`
//! carries an [`Oval`] portion. That is also what lets a `Circle` route
//! through any parameter typed for `&Oval` - an unrelated sibling shape could
//! not.

use crate::framework::construction;
use crate::framework::dispatch::Render;
use crate::shapes::oval::Oval;
use crate::shapes::shape::Shape;
use std::any::Any;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    oval: Oval,
}

impl Circle {
    /// Creates a Circle; initialization runs Shape, then Oval, then this
    /// level.
    pub fn new(radius: f64, description: impl Into<String>) -> Self {
        let oval = Oval::new(radius, radius, description);
        construction::mark("Circle");
        Self { oval }
    }

    pub fn radius(&self) -> f64 {
        self.oval.x_radius()
    }

    pub fn area(&self) -> f64 {
        self.oval.area()
    }

    pub fn description(&self) -> &str {
        self.oval.description()
    }

    /// The Oval portion: a Circle is acceptable wherever an `&Oval` is asked
    /// for.
    pub fn as_oval(&self) -> &Oval {
        &self.oval
    }
}

impl Render for Circle {
    fn render(&self) -> String {
        format!(
            "Circle::render ({}, radius: {})",
            self.oval.description(),
            self.radius()
        )
    }

    fn type_label(&self) -> &'static str {
        "Circle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Explicit slicing through two levels: only the Shape portion survives.
impl From<&Circle> for Shape {
    fn from(circle: &Circle) -> Self {
        Shape::from(circle.as_oval())
    }
}
