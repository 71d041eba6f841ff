//! Runtime orchestration and observability setup.
//!
//! # Main Components
//!
//! - [`run_showcase`](showcase::run_showcase) - A synchronous demonstration
//!   pass over every rule the crate models
//! - [`setup_tracing`](tracing::setup_tracing) - Initializes the
//!   tracing/logging infrastructure

pub mod showcase;
pub mod tracing;

pub use showcase::*;
pub use tracing::*;
