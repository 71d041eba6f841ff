//! # Engineer
//!
//! Restrictive (closed-mode) composition over [`Person`]: the `person` field
//! is private, so nothing of Person's surface leaks through an `Engineer`
//! unless this module re-exposes it explicitly.
//!
//! What *is* re-exposed - and at which level - matches the
//! [`engineer_lineage`](crate::model::lineages::engineer_lineage) descriptor:
//! `full_name` comes back as open, `age` as crate-internal. The address stays
//! where it always was: inside Person.

use crate::framework::construction;
use crate::model::person::Person;
use tracing::debug;

/// An engineer: a person with a contract book.
#[derive(Debug, Clone, PartialEq)]
pub struct Engineer {
    person: Person,
    contract_count: u32,
}

impl Engineer {
    /// Creates an Engineer with no contracts yet.
    ///
    /// The shorter initialization path: `contract_count` defaults to 0,
    /// everything else is delegated to [`Person::new`].
    pub fn new(full_name: impl Into<String>, age: u32, address: impl Into<String>) -> Self {
        Self::with_contract_count(full_name, age, address, 0)
    }

    /// Creates an Engineer with an existing contract book.
    ///
    /// The Person portion is fully initialized before the Engineer portion:
    /// delegation to [`Person::new`] runs first, always.
    pub fn with_contract_count(
        full_name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
        contract_count: u32,
    ) -> Self {
        let person = Person::new(full_name, age, address);
        let engineer = Self {
            person,
            contract_count,
        };
        construction::mark("Engineer");
        debug!(
            full_name = engineer.person.full_name(),
            contract_count, "Engineer constructed"
        );
        engineer
    }

    /// Uses the Person portion internally: restrictive composition still lets
    /// the composing type call everything Person opens up.
    pub fn build_something(&mut self) -> String {
        self.contract_count += 1;
        let line = format!(
            "{} builds something (contract #{})",
            self.person.full_name(),
            self.contract_count
        );
        debug!(%line, "build_something");
        line
    }

    pub fn contract_count(&self) -> u32 {
        self.contract_count
    }

    /// Internal use of Person's internal surface: the composing type may write
    /// the age even though its own clients may not.
    pub fn have_birthday(&mut self) {
        self.person.set_age(self.person.age() + 1);
    }

    // --- Selective re-exposure of the Person surface ---

    /// Re-exposed as open: Engineer's clients may read the name even though
    /// the Person portion itself is unreachable.
    pub fn full_name(&self) -> &str {
        self.person.full_name()
    }

    /// Re-exposed at the internal level only: this crate's own types (the
    /// deeper lineage levels) may read the age; external callers may not.
    pub(crate) fn age(&self) -> u32 {
        self.person.age()
    }
}

impl std::fmt::Display for Engineer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Engineer [Full name: {}, Age: {}, Contracts: {}]",
            self.person.full_name(),
            self.person.age(),
            self.contract_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_path_defaults_contract_count_to_zero() {
        let eng = Engineer::new("John Snow", 23, "Winterfell 1");
        assert_eq!(eng.contract_count(), 0);
    }

    #[test]
    fn internal_use_of_person_surface_works() {
        let mut eng = Engineer::new("John Snow", 23, "Winterfell 1");
        let line = eng.build_something();
        assert!(line.contains("John Snow"));
        assert_eq!(eng.contract_count(), 1);
    }
}
