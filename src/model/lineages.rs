//! # Lineage Descriptors
//!
//! The abstract counterparts of the concrete types in this module tree: each
//! function builds the [`Hierarchy`] descriptor for one inheritance chain, so
//! the visibility table the concrete types embody through Rust privacy is also
//! assertable data.
//!
//! The descriptors are infallible to build - the level lists below are
//! validated at crate-test time and structurally fixed - so these functions
//! panic only if the module itself is broken.

use crate::framework::hierarchy::{Hierarchy, Level};
use crate::framework::visibility::{InheritanceMode, Visibility};

fn person_level() -> Level {
    Level::root("Person")
        .field("full_name", Visibility::Open)
        .field("age", Visibility::Internal)
        .field("address", Visibility::Closed)
}

/// Person -> Engineer -> CivilEngineer.
///
/// Engineer inherits restrictively (closed mode) and selectively restores
/// `full_name` to open and `age` to internal; CivilEngineer inherits openly.
pub fn engineer_lineage() -> Hierarchy {
    Hierarchy::new(vec![
        person_level(),
        Level::derived("Engineer", InheritanceMode::Closed)
            .field("contract_count", Visibility::Internal)
            .operation("build_something", Visibility::Open)
            .operation("have_birthday", Visibility::Open)
            .reexpose("full_name", Visibility::Open)
            .reexpose("age", Visibility::Internal),
        Level::derived("CivilEngineer", InheritanceMode::Open)
            .field("speciality", Visibility::Closed)
            .operation("build_road", Visibility::Open),
    ])
    .expect("engineer lineage is statically well-formed")
}

/// Person -> Nurse, internal mode: the inherited surface stays usable inside
/// Nurse but none of it is reachable from outside.
pub fn nurse_lineage() -> Hierarchy {
    Hierarchy::new(vec![
        person_level(),
        Level::derived("Nurse", InheritanceMode::Internal)
            .operation("treat_unwell_person", Visibility::Open),
    ])
    .expect("nurse lineage is statically well-formed")
}

/// Person -> Player, open mode: inherited members keep their original
/// visibility.
pub fn player_lineage() -> Hierarchy {
    Hierarchy::new(vec![
        person_level(),
        Level::derived("Player", InheritanceMode::Open)
            .field("game", Visibility::Closed)
            .operation("play", Visibility::Open),
    ])
    .expect("player lineage is statically well-formed")
}

/// Account -> SavingsAccount: the canonical selective re-exposure pair.
///
/// SavingsAccount inherits restrictively, restores `deposit` for its own
/// clients, and leaves `withdraw` at the closed level the mode assigned.
pub fn account_lineage() -> Hierarchy {
    Hierarchy::new(vec![
        Level::root("Account")
            .field("balance", Visibility::Closed)
            .operation("deposit", Visibility::Open)
            .operation("withdraw", Visibility::Open),
        Level::derived("SavingsAccount", InheritanceMode::Closed)
            .reexpose("deposit", Visibility::Open),
    ])
    .expect("account lineage is statically well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lineages_build() {
        engineer_lineage();
        nurse_lineage();
        player_lineage();
        account_lineage();
    }
}
