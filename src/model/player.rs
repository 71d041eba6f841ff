//! # Player
//!
//! Open composition over [`Person`]: the whole Person surface keeps its
//! original visibility. Instead of duplicating every delegating method, the
//! Person portion is handed out as-is - open inheritance re-exposes
//! everything wholesale.

use crate::framework::construction;
use crate::model::person::Person;
use tracing::debug;

/// A player: a person who plays a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    person: Person,
    game: String,
}

impl Player {
    pub fn new(
        full_name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
        game: impl Into<String>,
    ) -> Self {
        let person = Person::new(full_name, age, address);
        let player = Self {
            person,
            game: game.into(),
        };
        construction::mark("Player");
        player
    }

    /// The inherited surface, at its original visibility.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Mutable access to the inherited surface. Note this still only reaches
    /// what Person opens up - `address` stays closed inside Person.
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn play(&self) -> String {
        let line = format!("{} plays {}", self.person.full_name(), self.game);
        debug!(%line, "play");
        line
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player [Full name: {}, Game: {}]",
            self.person.full_name(),
            self.game
        )
    }
}
