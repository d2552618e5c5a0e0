//! Greedy earliest-slot assignment across pitches.
//!
//! # Algorithm
//!
//! 1. Process pairings in the order the pairing stage produced them.
//! 2. A match may start once both teams have finished their previous
//!    match (and not before the tournament start).
//! 3. Place it on the pitch where it can start earliest; ties go to the
//!    lowest pitch number.
//! 4. The pitch is blocked until the match ends plus the changeover break.
//! 5. Sort the result by start time (stable).
//!
//! A match whose end would fall past the last representable timestamp is
//! not placed; assignment stops there and the shortfall becomes a warning.
//!
//! Makespan is not minimized; the two no-overlap invariants (per pitch,
//! per team) always hold.
//!
//! # Complexity
//! O(m * p) where m=matches, p=pitches, plus O(m log m) for the final sort.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 5: Parallel Machine Models

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{Match, TournamentSettings};
use crate::pairing::Pairing;

/// Places pairings onto `(pitch, start time)` slots.
///
/// # Example
///
/// ```
/// use u_tournament::models::{Team, TournamentSettings};
/// use u_tournament::pairing::Pairing;
/// use u_tournament::scheduler::SlotAssigner;
///
/// let settings = TournamentSettings::new("2024-06-01", "09:00").with_pitches(2);
/// let assigner = SlotAssigner::from_settings(&settings).unwrap();
///
/// let pairings = vec![
///     Pairing::new(Team::named("A"), Team::named("B")),
///     Pairing::new(Team::named("C"), Team::named("D")),
/// ];
/// let matches = assigner.assign(&pairings).matches;
/// assert_eq!(matches[0].start_time, matches[1].start_time);
/// assert_ne!(matches[0].pitch, matches[1].pitch);
/// ```
#[derive(Debug, Clone)]
pub struct SlotAssigner {
    start: NaiveDateTime,
    pitches: u32,
    match_duration: Duration,
    break_between: Duration,
}

/// Result of slot assignment.
#[derive(Debug, Clone, Default)]
pub struct SlotOutcome {
    /// Placed matches, sorted by start time.
    pub matches: Vec<Match>,
    /// Human-readable warnings.
    pub warnings: Vec<String>,
}

impl SlotAssigner {
    /// Creates an assigner with 30-minute matches and no changeover break.
    ///
    /// A pitch count of 0 is treated as 1.
    pub fn new(start: NaiveDateTime, pitches: u32) -> Self {
        Self {
            start,
            pitches: pitches.max(1),
            match_duration: Duration::minutes(30),
            break_between: Duration::zero(),
        }
    }

    /// Builds an assigner from tournament settings.
    ///
    /// # Errors
    /// Fails if the start date or time does not parse.
    pub fn from_settings(settings: &TournamentSettings) -> Result<Self> {
        Ok(Self::new(settings.start_instant()?, settings.num_pitches)
            .with_match_duration(settings.match_duration())
            .with_break(settings.break_duration()))
    }

    /// Sets the match length.
    pub fn with_match_duration(mut self, duration: Duration) -> Self {
        self.match_duration = duration;
        self
    }

    /// Sets the changeover break between matches on one pitch.
    pub fn with_break(mut self, duration: Duration) -> Self {
        self.break_between = duration;
        self
    }

    /// Tournament start.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Number of pitches in use.
    pub fn pitches(&self) -> u32 {
        self.pitches
    }

    /// Assigns every pairing a pitch and time slot.
    ///
    /// Match ids are `match-{n}` with n the 1-based assignment order, so
    /// identical input yields identical ids. The returned list is sorted
    /// by start time; matches starting together keep assignment order.
    ///
    /// Pairings that cannot end before `NaiveDateTime::MAX` are left out
    /// and reported in [`SlotOutcome::warnings`].
    pub fn assign(&self, pairings: &[Pairing]) -> SlotOutcome {
        // `None` marks a pitch whose next start is past the representable range
        let mut pitch_available = vec![Some(self.start); self.pitches as usize];
        let mut team_free: HashMap<&str, NaiveDateTime> = HashMap::new();
        let mut matches = Vec::with_capacity(pairings.len());
        let mut unplaced = 0;

        for (idx, pairing) in pairings.iter().enumerate() {
            let home = pairing.home.id.as_str();
            let away = pairing.away.id.as_str();

            let earliest = [home, away]
                .iter()
                .filter_map(|id| team_free.get(id))
                .fold(self.start, |acc, &free| acc.max(free));

            // Earliest start per pitch; strict `<` keeps the lowest pitch on ties
            let mut best: Option<(usize, NaiveDateTime)> = None;
            for (pitch_idx, available) in pitch_available.iter().enumerate() {
                let Some(available) = *available else {
                    continue;
                };
                let candidate = available.max(earliest);
                if best.map_or(true, |(_, best_start)| candidate < best_start) {
                    best = Some((pitch_idx, candidate));
                }
            }

            // Stop at the first pairing that cannot end in range
            let Some((pitch_idx, start, end)) = best.and_then(|(pitch_idx, start)| {
                start
                    .checked_add_signed(self.match_duration)
                    .map(|end| (pitch_idx, start, end))
            }) else {
                unplaced = pairings.len() - idx;
                break;
            };

            pitch_available[pitch_idx] = end.checked_add_signed(self.break_between);
            team_free.insert(home, end);
            team_free.insert(away, end);

            matches.push(Match::new(
                format!("match-{}", idx + 1),
                pairing.home.clone(),
                pairing.away.clone(),
                pitch_idx as u32 + 1,
                start,
                end,
            ));
        }

        matches.sort_by_key(|m| m.start_time);

        let mut warnings = Vec::new();
        if unplaced > 0 {
            warn!(unplaced, placed = matches.len(), "timeline exhausted");
            warnings.push(format!(
                "{unplaced} of {} matches could not be scheduled: they would end past the latest supported date",
                pairings.len()
            ));
        }

        debug!(
            matches = matches.len(),
            pitches = self.pitches,
            last_end = ?matches.iter().map(|m| m.end_time).max(),
            "slots assigned"
        );
        SlotOutcome { matches, warnings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn pairing(home: &str, away: &str) -> Pairing {
        Pairing::new(Team::named(home), Team::named(away))
    }

    fn assigner(pitches: u32) -> SlotAssigner {
        SlotAssigner::new(at(9, 0), pitches)
            .with_match_duration(Duration::minutes(30))
            .with_break(Duration::minutes(5))
    }

    #[test]
    fn test_single_match() {
        let matches = assigner(1).assign(&[pairing("A", "B")]).matches;
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.id, "match-1");
        assert_eq!(m.pitch, 1);
        assert_eq!(m.start_time, at(9, 0));
        assert_eq!(m.end_time, at(9, 30));
    }

    #[test]
    fn test_parallel_pitches() {
        let matches = assigner(2).assign(&[pairing("A", "B"), pairing("C", "D")]).matches;
        assert_eq!(matches[0].start_time, at(9, 0));
        assert_eq!(matches[1].start_time, at(9, 0));
        assert_eq!(matches[0].pitch, 1);
        assert_eq!(matches[1].pitch, 2);
    }

    #[test]
    fn test_pitch_break_applied() {
        // One pitch: second match waits for the changeover.
        let matches = assigner(1).assign(&[pairing("A", "B"), pairing("C", "D")]).matches;
        assert_eq!(matches[1].start_time, at(9, 35));
        assert_eq!(matches[1].end_time, at(10, 5));
    }

    #[test]
    fn test_team_waits_for_previous_match() {
        // A plays twice; the free pitch 2 cannot start A's second match early.
        let matches = assigner(3).assign(&[pairing("A", "B"), pairing("A", "C")]).matches;
        let second = matches.iter().find(|m| m.id == "match-2").unwrap();
        assert_eq!(second.start_time, at(9, 30));
        assert_eq!(second.pitch, 2);
    }

    #[test]
    fn test_lowest_pitch_wins_ties() {
        let matches = assigner(3).assign(&[pairing("A", "B")]).matches;
        assert_eq!(matches[0].pitch, 1);
    }

    #[test]
    fn test_sorted_stably_by_start() {
        // match-1 and match-2 share A, so match-2 lands later than match-3.
        let matches = assigner(3).assign(&[
            pairing("A", "B"),
            pairing("A", "C"),
            pairing("D", "E"),
        ])
        .matches;
        let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["match-1", "match-3", "match-2"]);
        assert!(matches.windows(2).all(|w| w[0].start_time <= w[1].start_time));
    }

    #[test]
    fn test_zero_pitches_treated_as_one() {
        let a = SlotAssigner::new(at(9, 0), 0);
        assert_eq!(a.pitches(), 1);
        assert_eq!(a.assign(&[pairing("A", "B")]).matches.len(), 1);
    }

    #[test]
    fn test_from_settings() {
        let settings = TournamentSettings::new("2024-06-01", "10:15")
            .with_pitches(2)
            .with_two_halves(20, 5)
            .with_break_between_matches(10);
        let a = SlotAssigner::from_settings(&settings).unwrap();
        assert_eq!(a.start(), at(10, 15));
        let matches = a.assign(&[pairing("A", "B")]).matches;
        assert_eq!(matches[0].duration(), Duration::minutes(45));
    }

    #[test]
    fn test_from_settings_invalid_date() {
        let settings = TournamentSettings::new("not-a-date", "10:15");
        assert!(SlotAssigner::from_settings(&settings).is_err());
    }

    #[test]
    fn test_empty_input() {
        let outcome = assigner(2).assign(&[]);
        assert!(outcome.matches.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_timeline_overflow_stops_with_warning() {
        // u32::MAX minutes is about 8166 years; a handful of matches on one
        // pitch runs past the last representable date.
        let pairings: Vec<Pairing> = (0..40)
            .map(|i| pairing(&format!("H{i}"), &format!("A{i}")))
            .collect();
        let outcome = SlotAssigner::new(at(9, 0), 1)
            .with_match_duration(Duration::minutes(i64::from(u32::MAX)))
            .assign(&pairings);

        assert!(!outcome.matches.is_empty());
        assert!(outcome.matches.len() < pairings.len());
        assert!(outcome.matches.iter().all(|m| m.end_time > m.start_time));
        assert_eq!(outcome.warnings.len(), 1);
        let unplaced = pairings.len() - outcome.matches.len();
        assert!(outcome.warnings[0].starts_with(&format!("{unplaced} of 40 matches")));
    }

    #[test]
    fn test_break_overflow_closes_pitch() {
        // The first match fits, but its changeover runs off the calendar, so
        // pitch 1 closes and the next match moves to pitch 2.
        let outcome = SlotAssigner::new(at(9, 0), 2)
            .with_break(Duration::days(365 * 300_000))
            .assign(&[pairing("A", "B"), pairing("C", "D"), pairing("E", "F")]);

        let pitches: Vec<u32> = outcome.matches.iter().map(|m| m.pitch).collect();
        assert_eq!(pitches, vec![1, 2]);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].starts_with("1 of 3 matches"));
    }
}
