//! Generic engine for modeling inheritance semantics.
//!
//! This module provides the building blocks the concrete domains are built on:
//!
//! # Main Components
//!
//! - [`visibility`] - The three-level visibility lattice and the effective-visibility rule
//! - [`hierarchy`] - Hierarchy descriptors, construction-time validation, access checks
//! - [`construction`] - Constructor-order instrumentation
//! - [`dispatch`] - The [`Render`](dispatch::Render) trait and checked downcasts
//! - [`error`] - Common error types

pub mod construction;
pub mod dispatch;
pub mod error;
pub mod hierarchy;
pub mod visibility;

// Re-export core types for convenience
pub use dispatch::{downcast, try_downcast, CastError, Render};
pub use error::HierarchyError;
pub use hierarchy::{AccessSite, Hierarchy, Level, MemberKind, MemberReport};
pub use visibility::{effective, EffectiveVisibility, InheritanceMode, Visibility};
