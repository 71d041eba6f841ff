//! # Dispatch & Checked Downcasts
//!
//! The [`Render`] trait is the overridable operation every shape implements.
//! Held behind an indirection (`&dyn Render`, `Rc<dyn Render>`), invoking
//! [`Render::render`] resolves to the concrete type's override; copied into a
//! base-typed value, the derived behavior is gone (see
//! [`crate::shapes::gallery`] for the slicing side).
//!
//! # Checked downcasts
//! Two recovery styles with different failure semantics:
//!
//! - [`try_downcast`] is the pointer-style cast: mismatch yields `None`,
//!   the caller checks and moves on.
//! - [`downcast`] is the reference-style cast: mismatch yields a [`CastError`]
//!   carrying both type names, to be handled like any other error.

use std::any::Any;
use thiserror::Error;

/// A checked downcast across sibling types did not match the runtime type.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("bad cast: expected {expected}, found {actual}")]
pub struct CastError {
    pub expected: &'static str,
    pub actual: &'static str,
}

/// The overridable "render" operation.
///
/// # Architecture Note
/// `as_any` is the standard escape hatch for runtime type recovery on trait
/// objects: the trait cannot require `Self: Sized`, so each implementor hands
/// out its own `&dyn Any`. `type_label` exists purely for log fields and error
/// messages.
pub trait Render {
    /// Produces one formatted line describing how this shape draws itself.
    fn render(&self) -> String;

    /// Short concrete type name for logs and cast errors.
    fn type_label(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

/// Pointer-style checked downcast: `None` on mismatch, never panics.
pub fn try_downcast<T: Any>(shape: &dyn Render) -> Option<&T> {
    shape.as_any().downcast_ref::<T>()
}

/// Reference-style checked downcast: a [`CastError`] on mismatch.
pub fn downcast<T: Any>(shape: &dyn Render) -> Result<&T, CastError> {
    try_downcast::<T>(shape).ok_or_else(|| CastError {
        expected: short_type_name::<T>(),
        actual: shape.type_label(),
    })
}

/// Invokes `render` on every element through dynamic dispatch.
///
/// Each element resolves to its concrete override regardless of the declared
/// (base) type of the indirection holding it.
pub fn render_all(shapes: &[&dyn Render]) -> Vec<String> {
    shapes.iter().map(|s| s.render()).collect()
}

/// Last path segment of `std::any::type_name`, e.g. `Circle` instead of
/// `inheritance_recipe::shapes::circle::Circle`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
