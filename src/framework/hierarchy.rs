//! # Hierarchy Descriptor
//!
//! This module defines the data model for describing an inheritance chain -
//! levels, member declarations, inheritance modes, re-exposures - and the
//! engine that resolves every member's effective visibility at every level.
//!
//! # Architecture Note
//! Why do we need this descriptor?
//! The concrete types in [`crate::model`] embody the rules through composition
//! and Rust privacy, but privacy violations are compile errors - a test cannot
//! *assert* on them. The descriptor carries the same facts as plain data, so
//! the whole visibility table becomes something `Hierarchy::new` validates and
//! [`Hierarchy::check_access`] answers at runtime.
//!
//! All structural validation happens in [`Hierarchy::new`]. A descriptor that
//! re-exposes a closed base member, declares a duplicate name, or shadows an
//! inherited member never becomes a usable `Hierarchy` - matching the "caught
//! before the object is usable" contract of the construction rules.

use crate::framework::error::HierarchyError;
use crate::framework::visibility::{
    effective, EffectiveVisibility, InheritanceMode, Visibility,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Whether a member is state or behavior. Purely descriptive; the visibility
/// rules treat both the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Operation,
}

/// A member as declared on the level that owns it.
#[derive(Debug, Clone)]
pub struct MemberDecl {
    pub name: &'static str,
    pub kind: MemberKind,
    pub declared: Visibility,
}

/// An explicit, opt-in restoration of an inherited member's visibility.
///
/// Accidental hiding is not representable: the only way a derived
/// level changes an inherited member's visibility is by naming it here.
#[derive(Debug, Clone)]
pub struct Reexposure {
    pub member: &'static str,
    pub target: Visibility,
}

/// One level of an inheritance chain.
#[derive(Debug, Clone)]
pub struct Level {
    pub type_name: &'static str,
    /// `None` exactly for the root level.
    pub mode: Option<InheritanceMode>,
    pub members: Vec<MemberDecl>,
    pub reexposed: Vec<Reexposure>,
}

impl Level {
    /// Starts a root level (no parent, no inheritance mode).
    pub fn root(type_name: &'static str) -> Self {
        Self {
            type_name,
            mode: None,
            members: Vec::new(),
            reexposed: Vec::new(),
        }
    }

    /// Starts a derived level inheriting from the previous level under `mode`.
    pub fn derived(type_name: &'static str, mode: InheritanceMode) -> Self {
        Self {
            type_name,
            mode: Some(mode),
            members: Vec::new(),
            reexposed: Vec::new(),
        }
    }

    /// Declares a state member on this level.
    pub fn field(mut self, name: &'static str, declared: Visibility) -> Self {
        self.members.push(MemberDecl {
            name,
            kind: MemberKind::Field,
            declared,
        });
        self
    }

    /// Declares a behavior member on this level.
    pub fn operation(mut self, name: &'static str, declared: Visibility) -> Self {
        self.members.push(MemberDecl {
            name,
            kind: MemberKind::Operation,
            declared,
        });
        self
    }

    /// Explicitly restores an inherited member to `target` visibility for this
    /// level's own clients.
    pub fn reexpose(mut self, member: &'static str, target: Visibility) -> Self {
        self.reexposed.push(Reexposure { member, target });
        self
    }
}

/// Where an access attempt originates, relative to the level being queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessSite {
    /// Code outside the hierarchy entirely.
    External,
    /// Code inside a type further derived from the queried level.
    Derived,
    /// Code inside the queried level's own operations.
    Declaring,
}

impl AccessSite {
    pub fn label(self) -> &'static str {
        match self {
            AccessSite::External => "external code",
            AccessSite::Derived => "a derived type",
            AccessSite::Declaring => "the type itself",
        }
    }
}

/// One row of the resolved visibility table. Serializable so callers can
/// export the whole table for inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberReport {
    pub type_name: String,
    pub member: String,
    pub kind: MemberKind,
    pub effective: EffectiveVisibility,
}

/// A member's resolved state at one level.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    effective: EffectiveVisibility,
    kind: MemberKind,
    /// Index of the level that declared the member.
    declared_by: usize,
}

/// A fully validated inheritance chain.
///
/// Construction resolves the effective visibility of every member at every
/// level, outermost base first. All rule violations are reported from
/// [`Hierarchy::new`]; a `Hierarchy` value is always internally consistent.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    levels: Vec<Level>,
    /// One map per level: member name -> resolved state at that level.
    resolved: Vec<HashMap<&'static str, Resolved>>,
}

impl Hierarchy {
    /// Validates the level list and resolves the visibility table.
    ///
    /// # Errors
    ///
    /// * [`HierarchyError::Malformed`] - empty list, root with a mode, or a
    ///   non-root level without one.
    /// * [`HierarchyError::DuplicateMember`] - a name declared twice on one
    ///   level, or shadowing a member visible from a base.
    /// * [`HierarchyError::InvalidReexposure`] - re-exposing an unknown member,
    ///   a member that was closed in its declaring base, or re-exposing to a
    ///   level more restrictive than what the inheritance mode assigned.
    pub fn new(levels: Vec<Level>) -> Result<Self, HierarchyError> {
        let Some(root) = levels.first() else {
            return Err(HierarchyError::Malformed("no levels".into()));
        };
        if root.mode.is_some() {
            return Err(HierarchyError::Malformed(format!(
                "root level '{}' must not declare an inheritance mode",
                root.type_name
            )));
        }

        let mut resolved: Vec<HashMap<&'static str, Resolved>> = Vec::with_capacity(levels.len());

        for (idx, level) in levels.iter().enumerate() {
            let mut table: HashMap<&'static str, Resolved> = HashMap::new();

            // Fold the parent's table through this level's inheritance edge.
            if idx > 0 {
                let Some(mode) = level.mode else {
                    return Err(HierarchyError::Malformed(format!(
                        "derived level '{}' must declare an inheritance mode",
                        level.type_name
                    )));
                };
                for (name, entry) in &resolved[idx - 1] {
                    let folded = match entry.effective {
                        EffectiveVisibility::NotInherited => EffectiveVisibility::NotInherited,
                        EffectiveVisibility::Visible(v) => effective(v, mode),
                    };
                    table.insert(
                        *name,
                        Resolved {
                            effective: folded,
                            ..*entry
                        },
                    );
                }
            }

            // This level's own declarations. Shadowing an inherited name is
            // rejected: re-exposure is the only sanctioned way to change an
            // inherited member.
            for decl in &level.members {
                if table.contains_key(decl.name) {
                    return Err(HierarchyError::DuplicateMember {
                        member: decl.name.into(),
                        type_name: level.type_name.into(),
                    });
                }
                table.insert(
                    decl.name,
                    Resolved {
                        effective: EffectiveVisibility::Visible(decl.declared),
                        kind: decl.kind,
                        declared_by: idx,
                    },
                );
            }

            // Explicit re-exposures.
            for re in &level.reexposed {
                let Some(entry) = table.get(re.member).copied() else {
                    return Err(HierarchyError::InvalidReexposure {
                        member: re.member.into(),
                        type_name: level.type_name.into(),
                        reason: "no such inherited member".into(),
                    });
                };
                if entry.declared_by == idx {
                    return Err(HierarchyError::InvalidReexposure {
                        member: re.member.into(),
                        type_name: level.type_name.into(),
                        reason: "member is declared on this level, not inherited".into(),
                    });
                }
                let assigned = match entry.effective {
                    EffectiveVisibility::Visible(v) => v,
                    EffectiveVisibility::NotInherited => {
                        return Err(HierarchyError::InvalidReexposure {
                            member: re.member.into(),
                            type_name: level.type_name.into(),
                            reason: format!(
                                "member was closed in {} and is not inherited",
                                levels[entry.declared_by].type_name
                            ),
                        });
                    }
                };
                // A re-exposure may only loosen (or keep) what the mode
                // assigned; tightening is not a re-exposure.
                if re.target > assigned {
                    return Err(HierarchyError::InvalidReexposure {
                        member: re.member.into(),
                        type_name: level.type_name.into(),
                        reason: format!(
                            "target '{}' is more restrictive than the assigned '{}'",
                            re.target, assigned
                        ),
                    });
                }
                table.insert(
                    re.member,
                    Resolved {
                        effective: EffectiveVisibility::Visible(re.target),
                        ..entry
                    },
                );
            }

            debug!(
                type_name = level.type_name,
                members = table.len(),
                "level resolved"
            );
            resolved.push(table);
        }

        Ok(Self { levels, resolved })
    }

    /// The root level's type name.
    pub fn root(&self) -> &'static str {
        self.levels[0].type_name
    }

    fn level_index(&self, type_name: &str) -> Result<usize, HierarchyError> {
        self.levels
            .iter()
            .position(|l| l.type_name == type_name)
            .ok_or_else(|| HierarchyError::UnknownType(type_name.into()))
    }

    fn lookup(&self, type_name: &str, member: &str) -> Result<(usize, Resolved), HierarchyError> {
        let idx = self.level_index(type_name)?;
        match self.resolved[idx].get(member) {
            Some(entry) => Ok((idx, *entry)),
            None => Err(HierarchyError::UnknownMember {
                member: member.into(),
                type_name: type_name.into(),
            }),
        }
    }

    /// The effective visibility of `member` at the level named `type_name`.
    pub fn effective(
        &self,
        type_name: &str,
        member: &str,
    ) -> Result<EffectiveVisibility, HierarchyError> {
        Ok(self.lookup(type_name, member)?.1.effective)
    }

    /// Checks whether code at `site` may touch `member` on `type_name`.
    ///
    /// | effective     | declaring | derived | external |
    /// |---------------|-----------|---------|----------|
    /// | open          | yes       | yes     | yes      |
    /// | internal      | yes       | yes     | no       |
    /// | closed        | yes       | no      | no       |
    /// | not inherited | no        | no      | no       |
    pub fn check_access(
        &self,
        type_name: &str,
        member: &str,
        site: AccessSite,
    ) -> Result<(), HierarchyError> {
        let (_, entry) = self.lookup(type_name, member)?;
        let allowed = match entry.effective {
            EffectiveVisibility::Visible(Visibility::Open) => true,
            EffectiveVisibility::Visible(Visibility::Internal) => site != AccessSite::External,
            EffectiveVisibility::Visible(Visibility::Closed) => site == AccessSite::Declaring,
            EffectiveVisibility::NotInherited => {
                return Err(HierarchyError::NotInherited {
                    member: member.into(),
                    base: self.levels[entry.declared_by].type_name.into(),
                    type_name: type_name.into(),
                });
            }
        };
        if allowed {
            debug!(type_name, member, site = site.label(), "access permitted");
            Ok(())
        } else {
            Err(HierarchyError::ForbiddenAccess {
                member: member.into(),
                type_name: type_name.into(),
                site: site.label(),
                effective: entry.effective,
            })
        }
    }

    /// Checks whether `type_name`'s initializer may assign `member` directly.
    ///
    /// Only the declaring level may: everything inherited is initialized by
    /// delegating to the parent's initialization path, never by reaching into
    /// base state.
    pub fn may_initialize(&self, type_name: &str, member: &str) -> Result<(), HierarchyError> {
        let (idx, entry) = self.lookup(type_name, member)?;
        if entry.declared_by == idx {
            Ok(())
        } else {
            Err(HierarchyError::ForbiddenInitialization {
                member: member.into(),
                type_name: type_name.into(),
                owner: self.levels[entry.declared_by].type_name.into(),
            })
        }
    }

    /// The full resolved visibility table, one row per (level, member) pair,
    /// base level first.
    pub fn report(&self) -> Vec<MemberReport> {
        let mut rows = Vec::new();
        for (idx, level) in self.levels.iter().enumerate() {
            let mut names: Vec<&&'static str> = self.resolved[idx].keys().collect();
            names.sort();
            for name in names {
                let entry = self.resolved[idx][*name];
                rows.push(MemberReport {
                    type_name: level.type_name.into(),
                    member: (*name).into(),
                    kind: entry.kind,
                    effective: entry.effective,
                });
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_levels(mode: InheritanceMode) -> Hierarchy {
        Hierarchy::new(vec![
            Level::root("Base")
                .field("open_field", Visibility::Open)
                .field("internal_field", Visibility::Internal)
                .field("closed_field", Visibility::Closed),
            Level::derived("Derived", mode),
        ])
        .unwrap()
    }

    #[test]
    fn root_mode_is_rejected() {
        let err = Hierarchy::new(vec![Level {
            mode: Some(InheritanceMode::Open),
            ..Level::root("Base")
        }])
        .unwrap_err();
        assert!(matches!(err, HierarchyError::Malformed(_)));
    }

    #[test]
    fn closed_members_vanish_from_derived_levels() {
        let h = two_levels(InheritanceMode::Open);
        assert_eq!(
            h.effective("Derived", "closed_field").unwrap(),
            EffectiveVisibility::NotInherited
        );
        // But the declaring level still reaches it.
        h.check_access("Base", "closed_field", AccessSite::Declaring)
            .unwrap();
    }

    #[test]
    fn shadowing_an_inherited_member_is_rejected() {
        let err = Hierarchy::new(vec![
            Level::root("Base").field("name", Visibility::Open),
            Level::derived("Derived", InheritanceMode::Open).field("name", Visibility::Open),
        ])
        .unwrap_err();
        assert!(matches!(err, HierarchyError::DuplicateMember { .. }));
    }

    #[test]
    fn reexposure_cannot_tighten() {
        let err = Hierarchy::new(vec![
            Level::root("Base").operation("op", Visibility::Open),
            Level::derived("Derived", InheritanceMode::Open)
                .reexpose("op", Visibility::Internal),
        ])
        .unwrap_err();
        assert!(matches!(err, HierarchyError::InvalidReexposure { .. }));
    }
}
