//! # Framework Errors
//!
//! This module defines the common error types used throughout the hierarchy
//! framework. By centralizing error definitions, we ensure consistent error
//! handling across the descriptor validation and access-check paths.

use crate::framework::visibility::EffectiveVisibility;
use thiserror::Error;

/// Errors that can occur while building or querying a hierarchy descriptor.
///
/// Everything here surfaces at *construction* of a [`Hierarchy`]
/// (`crate::framework::hierarchy::Hierarchy`) or on an explicit access check -
/// the stand-ins for what a compiler would reject outright in a language with
/// built-in inheritance modes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HierarchyError {
    /// The named type is not a level of this hierarchy.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// The named member is not declared at or above the queried level.
    #[error("member '{member}' is not declared at or above {type_name}")]
    UnknownMember { member: String, type_name: String },

    /// A level declared two members with the same name.
    #[error("duplicate member '{member}' declared on {type_name}")]
    DuplicateMember { member: String, type_name: String },

    /// The level list is structurally invalid (empty, root with a mode,
    /// non-root without one).
    #[error("malformed hierarchy: {0}")]
    Malformed(String),

    /// The member was `closed` in its declaring base; it does not exist at
    /// this level and only the base's own operations may reach it.
    #[error("member '{member}' of {base} is not inherited into {type_name}")]
    NotInherited {
        member: String,
        base: String,
        type_name: String,
    },

    /// The access site is not allowed to touch the member at its effective
    /// visibility.
    #[error("access to '{member}' on {type_name} from {site} is forbidden (effective visibility: {effective})")]
    ForbiddenAccess {
        member: String,
        type_name: String,
        site: &'static str,
        effective: EffectiveVisibility,
    },

    /// A re-exposure tried to restore a member it is not allowed to.
    #[error("cannot re-expose '{member}' on {type_name}: {reason}")]
    InvalidReexposure {
        member: String,
        type_name: String,
        reason: String,
    },

    /// A level's initializer tried to assign a member it does not declare.
    /// Inherited state is only ever initialized by delegating to the level
    /// that declares it.
    #[error("{type_name} may not initialize '{member}' directly; it must delegate to {owner}")]
    ForbiddenInitialization {
        member: String,
        type_name: String,
        owner: String,
    },
}
