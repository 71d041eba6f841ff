//! # Visibility Lattice
//!
//! This module defines the three-level visibility lattice and the rule that
//! computes a member's *effective* visibility after it crosses an inheritance
//! edge.
//!
//! # Architecture Note
//! Why model visibility as data instead of leaning on `pub` / `pub(crate)`?
//! Rust's own privacy applies to the concrete types in [`crate::model`], but it
//! cannot be queried or asserted on at runtime. By carrying the declared
//! visibility and the chosen inheritance mode as plain enums, the propagation
//! rule becomes an ordinary pure function that the test suite can exercise for
//! every (declaration, mode) pair.
//!
//! The rule itself is simple: crossing an edge keeps the **more restrictive**
//! of the member's current visibility and the mode's floor - with one special
//! case. A member that is `Closed` in its declaring type is not inherited at
//! all: it stays reachable only through the declaring type's own operations,
//! no matter which mode the derived level picked.

use serde::{Deserialize, Serialize};

/// How visible a member is at a given level of a hierarchy.
///
/// The derived `Ord` ranks by restrictiveness: `Open < Internal < Closed`.
/// "More restrictive wins" is therefore just `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Callable/readable by anyone.
    Open,
    /// Reachable by the declaring type and its descendants, never by external
    /// callers.
    Internal,
    /// Reachable only by the declaring type's own operations.
    Closed,
}

impl Visibility {
    /// Human-readable label used in error messages and log fields.
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Open => "open",
            Visibility::Internal => "internal",
            Visibility::Closed => "closed",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The composition mode a derived level chooses when it inherits from its
/// parent.
///
/// Mirrors the three classic inheritance modes: open (public), internal
/// (protected), closed (private).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InheritanceMode {
    Open,
    Internal,
    Closed,
}

impl InheritanceMode {
    /// The minimum restrictiveness this mode imposes on everything it inherits.
    pub fn floor(self) -> Visibility {
        match self {
            InheritanceMode::Open => Visibility::Open,
            InheritanceMode::Internal => Visibility::Internal,
            InheritanceMode::Closed => Visibility::Closed,
        }
    }

    pub fn label(self) -> &'static str {
        self.floor().label()
    }
}

impl std::fmt::Display for InheritanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What a derived level actually sees of an inherited member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveVisibility {
    /// The member exists at this level with the given visibility.
    Visible(Visibility),
    /// The member does not exist at this level. It remains reachable only
    /// through operations defined on the declaring base itself.
    NotInherited,
}

impl EffectiveVisibility {
    pub fn is_inherited(self) -> bool {
        matches!(self, EffectiveVisibility::Visible(_))
    }
}

impl std::fmt::Display for EffectiveVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectiveVisibility::Visible(v) => f.write_str(v.label()),
            EffectiveVisibility::NotInherited => f.write_str("not inherited"),
        }
    }
}

/// Computes the visibility a member ends up with after crossing one
/// inheritance edge.
///
/// | declared   | mode     | effective     |
/// |------------|----------|---------------|
/// | open       | open     | open          |
/// | open       | internal | internal      |
/// | open       | closed   | closed        |
/// | internal   | open     | internal      |
/// | internal   | internal | internal      |
/// | internal   | closed   | closed        |
/// | closed     | any      | not inherited |
pub fn effective(declared: Visibility, mode: InheritanceMode) -> EffectiveVisibility {
    match declared {
        Visibility::Closed => EffectiveVisibility::NotInherited,
        v => EffectiveVisibility::Visible(v.max(mode.floor())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_restrictive_wins() {
        assert_eq!(
            effective(Visibility::Open, InheritanceMode::Internal),
            EffectiveVisibility::Visible(Visibility::Internal)
        );
        assert_eq!(
            effective(Visibility::Internal, InheritanceMode::Open),
            EffectiveVisibility::Visible(Visibility::Internal)
        );
    }

    #[test]
    fn closed_members_are_never_inherited() {
        for mode in [
            InheritanceMode::Open,
            InheritanceMode::Internal,
            InheritanceMode::Closed,
        ] {
            assert_eq!(
                effective(Visibility::Closed, mode),
                EffectiveVisibility::NotInherited
            );
        }
    }
}
