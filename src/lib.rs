#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Inheritance Recipe
//!
//! > **A Recipe for Modeling Inheritance Semantics in Rust.**
//!
//! This crate takes the classic object-oriented inheritance rules - member
//! visibility under public/protected/private inheritance, constructor
//! chaining, virtual dispatch, object slicing, checked downcasts - and
//! expresses each one as an explicit, testable Rust construct. Rust has no
//! inheritance keywords, so nothing here is reproduced by the compiler for
//! free: every rule is either carried by composition and module privacy, or
//! stated as plain data the test suite can assert on.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Visibility as data, privacy as enforcement
//! The same rule lives twice:
//! - The **descriptor layer** ([`framework::hierarchy`]) carries visibility as
//!   enums. "What does `closed` inheritance do to an `open` member?" becomes a
//!   pure function you can call with every combination.
//! - The **concrete layer** ([`model`], [`shapes`]) embodies the verdicts with
//!   Rust's own tools: a closed member is a private field, a restrictive
//!   inheritance edge is a private composed field, a re-exposure is an
//!   explicit delegating method.
//!
//! The descriptor layer exists because privacy violations are *compile*
//! errors: a test cannot assert on code that does not build. The concrete
//! layer exists because data alone proves nothing about real types.
//!
//! ### Composition over inheritance, literally
//! Every "derived" type holds its "base" as a private field and delegates.
//! That single decision gives us the construction-order guarantee for free:
//! you cannot finish building an `Engineer` before its `Person` exists.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic machinery, independent of any concrete hierarchy.
//! - **Role**: visibility lattice and propagation rule, validated hierarchy
//!   descriptors, constructor-order instrumentation, the
//!   [`Render`](framework::dispatch::Render) trait and checked downcasts.
//! - **Key items**: [`effective`](framework::visibility::effective),
//!   [`Hierarchy`](framework::hierarchy::Hierarchy),
//!   [`observe`](framework::construction::observe),
//!   [`downcast`](framework::dispatch::downcast).
//!
//! ### 2. The People ([`model`])
//! `Person` -> `Engineer` -> `CivilEngineer`, plus `Nurse` and `Player`:
//! three inheritance modes, selective re-exposure, delegating constructors,
//! and a never-escaping `address` field. [`model::lineages`] states the same
//! chains as descriptors.
//!
//! ### 3. The Shapes ([`shapes`])
//! `Shape` -> `Oval` -> `Circle` behind the
//! [`Render`](framework::dispatch::Render) trait: dispatch through borrowed
//! and shared indirections, and deliberate slicing through base-typed copies
//! in [`shapes::gallery`].
//!
//! ### 4. The Runtime ([`runtime`])
//! [`setup_tracing`](runtime::tracing::setup_tracing) for observability and
//! [`run_showcase`](runtime::showcase::run_showcase), a narrated pass over
//! every scenario.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use inheritance_recipe::framework::hierarchy::AccessSite;
//! use inheritance_recipe::framework::visibility::{
//!     effective, EffectiveVisibility, InheritanceMode, Visibility,
//! };
//! use inheritance_recipe::model::lineages::engineer_lineage;
//!
//! // The propagation rule as a pure function:
//! assert_eq!(
//!     effective(Visibility::Open, InheritanceMode::Internal),
//!     EffectiveVisibility::Visible(Visibility::Internal),
//! );
//!
//! // The same rule resolved over a real chain:
//! let lineage = engineer_lineage();
//! assert!(lineage
//!     .check_access("Engineer", "address", AccessSite::Declaring)
//!     .is_err());
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod framework;
pub mod model;
pub mod runtime;
pub mod shapes;
