//! Round-robin pairing via the circle method.
//!
//! # Algorithm
//!
//! 1. Seat the teams; pad odd counts with a BYE seat.
//! 2. For each of the n-1 rounds, seat 0 plays the last seat and seat i
//!    plays seat n-1-i.
//! 3. Rotate every seat except seat 0 by moving the last seat to index 1.
//! 4. Drop pairings against the BYE seat (that team rests).
//!
//! # Complexity
//! O(n²) pairings, O(n) rotation per round.

use tracing::trace;

use super::{too_few_teams_warning, Pairing, PairingOutcome};
use crate::models::{Entrant, Team};

/// Generates every pairing of a single round-robin.
///
/// Each team meets each other team exactly once. Pairings are emitted
/// round by round, so consecutive pairings rarely share a team.
pub fn round_robin_pairings(teams: &[Team]) -> PairingOutcome {
    let mut outcome = PairingOutcome::default();
    if teams.len() < 2 {
        outcome.warnings.push(too_few_teams_warning(teams.len()));
        return outcome;
    }

    let mut seats: Vec<Entrant<'_>> = teams.iter().map(Entrant::Team).collect();
    if seats.len() % 2 == 1 {
        seats.push(Entrant::Bye);
        outcome.warnings.push(format!(
            "Odd number of teams ({}): a BYE was added, so one team rests each round",
            teams.len()
        ));
    }

    let n = seats.len();
    for round in 1..n {
        for i in 0..n / 2 {
            if let (Some(home), Some(away)) = (seats[i].team(), seats[n - 1 - i].team()) {
                outcome
                    .pairings
                    .push(Pairing::new(home.clone(), away.clone()));
            }
        }
        trace!(round, pairings = outcome.pairings.len(), "round-robin round generated");

        if let Some(last) = seats.pop() {
            seats.insert(1, last);
        }
    }

    outcome
}
