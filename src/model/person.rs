//! # Person
//!
//! The root of the people hierarchy. `Person` owns three fields at three
//! visibility levels, and the concrete Rust privacy mirrors the abstract
//! table in [`crate::model::lineages`]:
//!
//! - `full_name` - open: public getter and setter.
//! - `age` - internal: public getter, crate-internal setter (only this crate's
//!   composing types may write it).
//! - `address` - closed: no accessor at all. Only `Person`'s own operations
//!   (its constructor and its `Display` impl) ever read or write it.

use crate::framework::construction;
use tracing::debug;

/// A person record at the root of every people lineage in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    full_name: String,
    age: u32,
    address: String,
}

impl Person {
    /// Creates a fully initialized Person.
    ///
    /// # Arguments
    /// * `full_name` - Display name
    /// * `age` - Age in years
    /// * `address` - Home address; never readable outside Person's own
    ///   operations
    pub fn new(full_name: impl Into<String>, age: u32, address: impl Into<String>) -> Self {
        let person = Self {
            full_name: full_name.into(),
            age,
            address: address.into(),
        };
        construction::mark("Person");
        debug!(full_name = %person.full_name, age, "Person constructed");
        person
    }

    // --- Open surface ---

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    // --- Internal surface: writable by this crate's composing types only ---

    pub(crate) fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    // `address` has no accessor. Display below is the only reader.
}

impl Default for Person {
    fn default() -> Self {
        Self::new("Mysterious Person", 0, "Unknown")
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Person [Full name: {}, Age: {}, Address: {}]",
            self.full_name, self.age, self.address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_only_reader_of_address() {
        let p = Person::new("Daniel Gray", 27, "Blue Sky St 233 #56");
        let line = p.to_string();
        assert!(line.contains("Blue Sky St 233 #56"));
    }

    #[test]
    fn default_person_is_mysterious() {
        let p = Person::default();
        assert_eq!(p.full_name(), "Mysterious Person");
        assert_eq!(p.age(), 0);
    }
}
