//! # Nurse
//!
//! Internal-mode composition over [`Person`]: nothing of Person's surface is
//! re-exposed to Nurse's clients, but Nurse's own operations (and, in the
//! abstract model, its descendants) still use it freely.

use crate::framework::construction;
use crate::model::person::Person;
use tracing::debug;

/// A nurse: adds no fields of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Nurse {
    person: Person,
}

impl Nurse {
    pub fn new(full_name: impl Into<String>, age: u32, address: impl Into<String>) -> Self {
        let person = Person::new(full_name, age, address);
        construction::mark("Nurse");
        Self { person }
    }

    /// Internal use of the inherited surface: the Person portion is fully
    /// usable from inside Nurse even though none of it is reachable through a
    /// `Nurse` from outside.
    pub fn treat_unwell_person(&mut self, patient: &Person) -> String {
        let line = format!(
            "{} treats {} ({} y/o)",
            self.person.full_name(),
            patient.full_name(),
            patient.age()
        );
        debug!(%line, "treat_unwell_person");
        line
    }
}

impl std::fmt::Display for Nurse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nurse [Full name: {}]", self.person.full_name())
    }
}
