//! # CivilEngineer
//!
//! Open composition over [`Engineer`]. Initialization flows strictly through
//! Engineer's own path (which in turn delegates to Person); this module never
//! touches Person state directly - it cannot, the `person` field is private to
//! the engineer module.

use crate::framework::construction;
use crate::model::engineer::Engineer;
use tracing::debug;

/// A civil engineer: an engineer with a speciality.
#[derive(Debug, Clone, PartialEq)]
pub struct CivilEngineer {
    engineer: Engineer,
    speciality: String,
}

impl CivilEngineer {
    /// Creates a fully initialized CivilEngineer.
    ///
    /// Every field above this level is initialized by delegation:
    /// Person first, then Engineer, then this level's own `speciality`.
    pub fn new(
        full_name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
        contract_count: u32,
        speciality: impl Into<String>,
    ) -> Self {
        let engineer = Engineer::with_contract_count(full_name, age, address, contract_count);
        let civil = Self {
            engineer,
            speciality: speciality.into(),
        };
        construction::mark("CivilEngineer");
        debug!(speciality = %civil.speciality, "CivilEngineer constructed");
        civil
    }

    pub fn speciality(&self) -> &str {
        &self.speciality
    }

    /// Uses the re-exposed Engineer surface; `age()` is reachable here because
    /// Engineer restored it at the internal level.
    pub fn build_road(&mut self) -> String {
        let line = format!(
            "{} ({} y/o, {}) builds a road",
            self.engineer.full_name(),
            self.engineer.age(),
            self.speciality
        );
        debug!(%line, "build_road");
        line
    }

    // --- Re-exposure: Engineer's open surface stays open here ---

    pub fn build_something(&mut self) -> String {
        self.engineer.build_something()
    }

    pub fn full_name(&self) -> &str {
        self.engineer.full_name()
    }

    pub fn contract_count(&self) -> u32 {
        self.engineer.contract_count()
    }
}

impl Default for CivilEngineer {
    fn default() -> Self {
        Self::new("Mysterious Person", 0, "Unknown", 0, "None")
    }
}

impl std::fmt::Display for CivilEngineer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CivilEngineer [{}, Speciality: {}]",
            self.engineer, self.speciality
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_speciality_is_none() {
        let ce = CivilEngineer::default();
        assert_eq!(ce.speciality(), "None");
    }

    #[test]
    fn values_flow_through_every_level() {
        let mut ce = CivilEngineer::new(
            "Daniel Gray",
            41,
            "Green Sky Oh Blue 33St#75",
            12,
            "Road Strength",
        );
        assert_eq!(ce.full_name(), "Daniel Gray");
        assert_eq!(ce.contract_count(), 12);
        assert!(ce.build_road().contains("41 y/o"));
    }
}
