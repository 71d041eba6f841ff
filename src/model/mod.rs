//! Concrete people types embodying the visibility and construction rules,
//! plus the [`lineages`] descriptors that state the same rules as data.

pub mod civil_engineer;
pub mod engineer;
pub mod lineages;
pub mod nurse;
pub mod person;
pub mod player;

pub use civil_engineer::CivilEngineer;
pub use engineer::Engineer;
pub use nurse::Nurse;
pub use person::Person;
pub use player::Player;
