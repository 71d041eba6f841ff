//! The polymorphic shape family: dynamic dispatch through indirections,
//! deliberate slicing through base-typed copies.

pub mod circle;
pub mod gallery;
pub mod oval;
pub mod shape;

pub use circle::Circle;
pub use gallery::{SharedGallery, SlicedGallery};
pub use oval::Oval;
pub use shape::Shape;

/// Process-wide read-only constant shared by every area computation.
pub const PI: f64 = std::f64::consts::PI;
