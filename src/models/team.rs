//! Team model.
//!
//! Teams are supplied by the caller and never mutated by the scheduler.
//! Odd team counts are padded with a BYE slot during round-robin pairing;
//! internally that slot is an [`Entrant::Bye`] variant rather than a
//! team carrying a magic id.

use serde::{Deserialize, Serialize};

/// Id reserved for the synthetic rest-round team.
///
/// Exported for collaborators that persist or display the sentinel.
/// Real teams must not use it.
pub const BYE_TEAM_ID: &str = "BYE";

/// A participating team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Team {
    /// Creates a team.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates a team whose name equals its id.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }

    /// Whether this team uses the reserved BYE id.
    pub fn is_bye(&self) -> bool {
        self.id == BYE_TEAM_ID
    }
}

/// A seat in the round-robin rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrant<'a> {
    /// A real team.
    Team(&'a Team),
    /// The rest slot added for odd team counts.
    Bye,
}

impl<'a> Entrant<'a> {
    /// The real team, if any.
    pub fn team(&self) -> Option<&'a Team> {
        match *self {
            Entrant::Team(team) => Some(team),
            Entrant::Bye => None,
        }
    }
}
