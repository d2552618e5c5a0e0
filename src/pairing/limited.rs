//! Limited-matches pairing.
//!
//! # Algorithm
//!
//! Greedy load balancing over a per-team match counter:
//!
//! 1. Target = min(total cap, ⌊teams × per-team cap / 2⌋).
//! 2. Each step, collect teams still below the per-team cap and sort them
//!    by match count (stable, so input order breaks ties).
//! 3. Take the first pair in that order that has not met yet. If every
//!    available pair has met, repeat the two lowest-count teams.
//! 4. Stop at the target, when fewer than two teams remain, or when the
//!    attempt budget (target × 10) runs out.
//!
//! The fallback in step 3 does not look for an unused pair outside the
//! two lowest-count teams; it only fires once every available pair is used.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::{pair_key, too_few_teams_warning, Pairing, PairingOutcome};
use crate::models::Team;

/// Generates at most `max_matches_per_team` matches per team.
///
/// `max_total_matches` additionally caps the number of pairings.
pub fn limited_pairings(
    teams: &[Team],
    max_matches_per_team: u32,
    max_total_matches: Option<u32>,
) -> PairingOutcome {
    let mut outcome = PairingOutcome::default();
    let n = teams.len();
    if n < 2 {
        outcome.warnings.push(too_few_teams_warning(n));
        return outcome;
    }

    let unique_opponents = n - 1;
    if max_matches_per_team as usize > unique_opponents {
        outcome.warnings.push(format!(
            "Each team may play up to {max_matches_per_team} matches but has only \
             {unique_opponents} unique opponents; some matchups will be repeated"
        ));
    }

    let ceiling = n * max_matches_per_team as usize / 2;
    let target = max_total_matches.map_or(ceiling, |cap| ceiling.min(cap as usize));
    let budget = target.saturating_mul(10);

    let mut counts = vec![0u32; n];
    let mut used: HashSet<(&str, &str)> = HashSet::new();
    let mut attempts = 0usize;
    let mut repeats = 0usize;

    while outcome.pairings.len() < target && attempts < budget {
        attempts += 1;

        let mut available: Vec<usize> = (0..n)
            .filter(|&i| counts[i] < max_matches_per_team)
            .collect();
        available.sort_by_key(|&i| counts[i]);
        let [lowest, next, ..] = available[..] else {
            break;
        };

        let (home, away) = match first_unused_pair(teams, &available, &used) {
            Some(pair) => pair,
            None => {
                repeats += 1;
                (lowest, next)
            }
        };

        counts[home] += 1;
        counts[away] += 1;
        used.insert(pair_key(&teams[home].id, &teams[away].id));
        outcome
            .pairings
            .push(Pairing::new(teams[home].clone(), teams[away].clone()));
        trace!(
            home = %teams[home].id,
            away = %teams[away].id,
            "limited pairing chosen"
        );
    }

    if outcome.pairings.len() < target {
        let reason = if attempts >= budget {
            "the pairing attempt budget was exhausted"
        } else {
            "too few teams had match capacity left"
        };
        outcome.warnings.push(format!(
            "Only {} of {target} requested matches could be paired: {reason}",
            outcome.pairings.len()
        ));
    }

    debug!(
        teams = n,
        target,
        pairings = outcome.pairings.len(),
        repeats,
        "limited pairings generated"
    );
    outcome
}

/// First pair, in load-balanced order, that has not been played yet.
fn first_unused_pair(
    teams: &[Team],
    available: &[usize],
    used: &HashSet<(&str, &str)>,
) -> Option<(usize, usize)> {
    for (pos, &a) in available.iter().enumerate() {
        for &b in &available[pos + 1..] {
            if !used.contains(&pair_key(&teams[a].id, &teams[b].id)) {
                return Some((a, b));
            }
        }
    }
    None
}
