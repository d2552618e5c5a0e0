//! Pairing generation.
//!
//! Turns a team list and a [`SchedulingConfig`] into the ordered list of
//! matches that must be played, without any time or pitch information.
//! The output order matters: the slot assigner processes pairings in
//! sequence, so it doubles as the fairness tie-break.
//!
//! # Modes
//!
//! | Mode | Algorithm | Matches (n teams) |
//! |------|-----------|-------------------|
//! | Round-robin | Circle method | n(n-1)/2 |
//! | Limited | Greedy, lowest match count first | ≤ min(cap, ⌊n·k/2⌋) |
//!
//! # Usage
//!
//! ```
//! use u_tournament::models::{SchedulingConfig, Team};
//! use u_tournament::pairing::generate_pairings;
//!
//! let teams = vec![Team::named("A"), Team::named("B"), Team::named("C"), Team::named("D")];
//! let outcome = generate_pairings(&teams, &SchedulingConfig::RoundRobin);
//! assert_eq!(outcome.pairings.len(), 6);
//! assert!(outcome.warnings.is_empty());
//! ```
//!
//! # References
//!
//! - Kirkman (1847), circle construction for round-robin tournaments
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"

mod limited;
mod round_robin;

pub use limited::limited_pairings;
pub use round_robin::round_robin_pairings;

use crate::models::{SchedulingConfig, Team};

/// One required match: two teams, no slot yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Home side.
    pub home: Team,
    /// Away side.
    pub away: Team,
}

/// Pairings plus the warnings raised while producing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingOutcome {
    /// Required matches, in processing order.
    pub pairings: Vec<Pairing>,
    /// Human-readable warnings.
    pub warnings: Vec<String>,
}

impl Pairing {
    /// Creates a pairing.
    pub fn new(home: Team, away: Team) -> Self {
        Self { home, away }
    }

    /// Whether the given team plays in this pairing.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home.id == team_id || self.away.id == team_id
    }

    /// Order-independent key of the two team ids.
    pub fn key(&self) -> (&str, &str) {
        pair_key(&self.home.id, &self.away.id)
    }
}

impl PairingOutcome {
    /// Number of pairings.
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether no pairings were produced.
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }
}

/// Generates pairings for the configured mode.
pub fn generate_pairings(teams: &[Team], config: &SchedulingConfig) -> PairingOutcome {
    match config {
        SchedulingConfig::RoundRobin => round_robin_pairings(teams),
        SchedulingConfig::LimitedMatches {
            max_matches_per_team,
            max_total_matches,
        } => limited_pairings(teams, *max_matches_per_team, *max_total_matches),
    }
}

pub(crate) fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

pub(crate) fn too_few_teams_warning(count: usize) -> String {
    format!("At least two teams are needed to schedule matches ({count} given)")
}
