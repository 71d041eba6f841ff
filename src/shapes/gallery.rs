//! # Galleries
//!
//! The three ways a mixed collection of shapes can be held, and what each one
//! does to dispatch:
//!
//! 1. **Base-typed values** ([`SlicedGallery`]) - every element was copied
//!    into a `Shape` record. The derived fields are gone, `render` is the base
//!    behavior for every element, and every element occupies exactly
//!    `size_of::<Shape>()` bytes. Slicing is total and deterministic.
//! 2. **Borrowed indirections** ([`render_all`](crate::framework::dispatch::render_all)
//!    over `&[&dyn Render]`) - each element keeps its concrete identity and
//!    `render` resolves to the most-derived override.
//! 3. **Shared-ownership indirections** ([`SharedGallery`]) - same dispatch as
//!    borrowed, with shared handles. The handle itself has a constant size
//!    regardless of what it points to.

use crate::framework::dispatch::Render;
use crate::shapes::shape::Shape;
use std::rc::Rc;
use tracing::debug;

/// A fixed base-typed store: adding a shape means copying its base portion in.
#[derive(Debug, Default)]
pub struct SlicedGallery {
    shapes: Vec<Shape>,
}

impl SlicedGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the base portion of `shape` into the gallery. This is the
    /// slicing operation: everything the concrete type added is left behind.
    pub fn add<'a, T>(&mut self, shape: &'a T)
    where
        T: Render,
        Shape: From<&'a T>,
    {
        let sliced = Shape::from(shape);
        debug!(
            from = shape.type_label(),
            description = sliced.description(),
            "sliced into base-typed storage"
        );
        self.shapes.push(sliced);
    }

    /// Renders every element. Always the base behavior: the overrides did not
    /// survive the copy.
    pub fn render_each(&self) -> Vec<String> {
        self.shapes.iter().map(Render::render).collect()
    }

    /// The storage size of every element. Each entry equals
    /// `size_of::<Shape>()` exactly, whatever concrete type was copied in.
    pub fn storage_sizes(&self) -> Vec<usize> {
        self.shapes
            .iter()
            .map(|s| std::mem::size_of_val(s))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// A mixed collection behind shared-ownership handles.
#[derive(Default)]
pub struct SharedGallery {
    shapes: Vec<Rc<dyn Render>>,
}

impl SharedGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: Rc<dyn Render>) {
        self.shapes.push(shape);
    }

    /// Renders every element; dispatch follows the concrete type behind each
    /// handle.
    pub fn render_each(&self) -> Vec<String> {
        self.shapes.iter().map(|s| s.render()).collect()
    }

    /// The size of the handle itself - constant, never the size of the
    /// pointed-to shape.
    pub fn handle_size() -> usize {
        std::mem::size_of::<Rc<dyn Render>>()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
