//! # Shape
//!
//! The base record of the shape family. Every derived shape carries a `Shape`
//! portion; copying a derived shape *into* a `Shape` value keeps exactly this
//! portion and nothing else (see [`crate::shapes::gallery`]).

use crate::framework::construction;
use crate::framework::dispatch::Render;
use std::any::Any;

/// The base shape record: a description and nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    description: String,
}

impl Shape {
    pub fn new(description: impl Into<String>) -> Self {
        let shape = Self {
            description: description.into(),
        };
        construction::mark("Shape");
        shape
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Render for Shape {
    fn render(&self) -> String {
        format!("Shape::render ({})", self.description)
    }

    fn type_label(&self) -> &'static str {
        "Shape"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
