//! Double-booking detection.
//!
//! An independent check over a finished match list. Schedules produced
//! by [`SlotAssigner`](crate::scheduler::SlotAssigner) are conflict-free
//! by construction; this catches hand-edited or migrated schedules.
//!
//! - [`detect_conflicts`]: teams with two matches at the *same* start time.
//! - [`find_overlaps`]: any interval overlap on a pitch or for a team.
//!
//! # Complexity
//! `detect_conflicts` is O(m) with hashing. `find_overlaps` is the O(m²)
//! pairwise scan.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{Match, ScheduleConflict, Team};

/// Reports every team booked into more than one match at the same start time.
///
/// Matches are bucketed by `(team id, start time)` with exact timestamp
/// equality. A bucket holding two or more matches yields one conflict for
/// that team, so a double-booking is reported once per affected team, not
/// once per match pair. Output follows the first appearance of each bucket
/// in `matches`.
pub fn detect_conflicts(matches: &[Match]) -> Vec<ScheduleConflict> {
    let mut buckets: Vec<(&Team, Vec<&Match>)> = Vec::new();
    let mut index: HashMap<(&str, NaiveDateTime), usize> = HashMap::new();

    for m in matches {
        let mut sides = vec![&m.home_team];
        if m.away_team.id != m.home_team.id {
            sides.push(&m.away_team);
        }

        for team in sides {
            let slot = *index.entry((team.id.as_str(), m.start_time)).or_insert_with(|| {
                buckets.push((team, Vec::new()));
                buckets.len() - 1
            });
            buckets[slot].1.push(m);
        }
    }

    buckets
        .into_iter()
        .filter(|(_, bucket)| bucket.len() > 1)
        .map(|(team, bucket)| ScheduleConflict {
            team: team.clone(),
            matches: bucket.into_iter().cloned().collect(),
        })
        .collect()
}

/// Whether any team is double-booked.
pub fn has_conflicts(matches: &[Match]) -> bool {
    !detect_conflicts(matches).is_empty()
}

/// What two overlapping matches share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlapKind {
    /// Both run on the same pitch.
    Pitch(u32),
    /// Both involve the same team.
    Team(String),
}

/// Two matches whose `[start, end)` intervals intersect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlap {
    /// Shared pitch or team.
    pub kind: OverlapKind,
    /// Earlier match id (input order).
    pub first: String,
    /// Later match id (input order).
    pub second: String,
}

/// Finds every pitch or team interval overlap.
///
/// Unlike [`detect_conflicts`], partial overlaps count: a match starting
/// while another on the same pitch or with the same team is still running.
pub fn find_overlaps(matches: &[Match]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();

    for (i, a) in matches.iter().enumerate() {
        for b in &matches[i + 1..] {
            if !a.overlaps(b) {
                continue;
            }
            if a.pitch == b.pitch {
                overlaps.push(Overlap {
                    kind: OverlapKind::Pitch(a.pitch),
                    first: a.id.clone(),
                    second: b.id.clone(),
                });
            }
            for team in a.teams() {
                if b.involves(&team.id) {
                    overlaps.push(Overlap {
                        kind: OverlapKind::Team(team.id.clone()),
                        first: a.id.clone(),
                        second: b.id.clone(),
                    });
                }
            }
        }
    }

    overlaps
}
