//! Generated schedule (solution) model.
//!
//! A generated schedule is the complete list of time-stamped matches
//! plus any double-bookings and warnings found while building it.
//! It is created once per generation run and replaced wholesale on
//! regeneration.
//!
//! # Wire Format
//! Field names are camelCase. Timestamps serialize as ISO-8601 strings
//! (`2024-06-01T09:00:00`) and deserialize back into real timestamps.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Team;

/// A match placed on a pitch and time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Identifier, unique within one generation run.
    pub id: String,
    /// Home side.
    pub home_team: Team,
    /// Away side.
    pub away_team: Team,
    /// Pitch number (1-indexed).
    pub pitch: u32,
    /// Kick-off.
    pub start_time: NaiveDateTime,
    /// Final whistle. Always `start_time + match duration`.
    pub end_time: NaiveDateTime,
}

/// A team booked into more than one match at the same start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConflict {
    /// The double-booked team.
    pub team: Team,
    /// Every match sharing the team and start time (at least two).
    pub matches: Vec<Match>,
}

/// The output of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSchedule {
    /// Matches in chronological order.
    pub matches: Vec<Match>,
    /// Double-bookings found after assignment.
    pub conflicts: Vec<ScheduleConflict>,
    /// Human-readable warnings, safe to show verbatim.
    pub warnings: Vec<String>,
}

impl Match {
    /// Creates a match.
    pub fn new(
        id: impl Into<String>,
        home_team: Team,
        away_team: Team,
        pitch: u32,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            home_team,
            away_team,
            pitch,
            start_time,
            end_time,
        }
    }

    /// Playing time (end - start).
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Whether the given team plays in this match.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team.id == team_id || self.away_team.id == team_id
    }

    /// Both sides, home first.
    pub fn teams(&self) -> [&Team; 2] {
        [&self.home_team, &self.away_team]
    }

    /// The other side, if `team_id` plays in this match.
    pub fn opponent_of(&self, team_id: &str) -> Option<&Team> {
        if self.home_team.id == team_id {
            Some(&self.away_team)
        } else if self.away_team.id == team_id {
            Some(&self.home_team)
        } else {
            None
        }
    }

    /// Whether the half-open intervals `[start, end)` of two matches intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

impl GeneratedSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Whether no double-bookings were detected.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Finds a match by id.
    pub fn match_by_id(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// All matches a team plays, in schedule order.
    pub fn matches_for_team(&self, team_id: &str) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.involves(team_id)).collect()
    }

    /// All matches on a pitch, in schedule order.
    pub fn matches_on_pitch(&self, pitch: u32) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.pitch == pitch).collect()
    }

    /// Earliest kick-off.
    pub fn first_start(&self) -> Option<NaiveDateTime> {
        self.matches.iter().map(|m| m.start_time).min()
    }

    /// Latest final whistle.
    pub fn last_end(&self) -> Option<NaiveDateTime> {
        self.matches.iter().map(|m| m.end_time).max()
    }

    /// Span from first kick-off to last final whistle. Zero when empty.
    pub fn makespan(&self) -> Duration {
        match (self.first_start(), self.last_end()) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        }
    }

    /// Matches played per team id.
    pub fn team_match_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for m in &self.matches {
            for team in m.teams() {
                *counts.entry(team.id.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn sample_schedule() -> GeneratedSchedule {
        let a = Team::named("A");
        let b = Team::named("B");
        let c = Team::named("C");
        let mut s = GeneratedSchedule::new();
        s.matches
            .push(Match::new("match-1", a.clone(), b.clone(), 1, at(9, 0), at(9, 30)));
        s.matches
            .push(Match::new("match-2", a, c.clone(), 2, at(9, 35), at(10, 5)));
        s.matches.push(Match::new("match-3", b, c, 1, at(10, 10), at(10, 40)));
        s
    }

    #[test]
    fn test_match_duration() {
        let s = sample_schedule();
        assert_eq!(s.matches[0].duration(), Duration::minutes(30));
    }

    #[test]
    fn test_match_opponent() {
        let s = sample_schedule();
        let m = &s.matches[0];
        assert_eq!(m.opponent_of("A").map(|t| t.id.as_str()), Some("B"));
        assert_eq!(m.opponent_of("B").map(|t| t.id.as_str()), Some("A"));
        assert!(m.opponent_of("C").is_none());
    }

    #[test]
    fn test_match_overlap() {
        let s = sample_schedule();
        assert!(!s.matches[0].overlaps(&s.matches[1]));
        let late = Match::new(
            "x",
            Team::named("X"),
            Team::named("Y"),
            1,
            at(9, 29),
            at(9, 59),
        );
        assert!(s.matches[0].overlaps(&late));
        // Touching intervals do not overlap.
        let touching = Match::new(
            "y",
            Team::named("X"),
            Team::named("Y"),
            1,
            at(9, 30),
            at(10, 0),
        );
        assert!(!s.matches[0].overlaps(&touching));
    }

    #[test]
    fn test_schedule_queries() {
        let s = sample_schedule();
        assert_eq!(s.match_count(), 3);
        assert_eq!(s.matches_for_team("A").len(), 2);
        assert_eq!(s.matches_on_pitch(1).len(), 2);
        assert_eq!(s.match_by_id("match-2").unwrap().pitch, 2);
        assert!(s.match_by_id("match-9").is_none());
        assert!(s.is_conflict_free());
    }

    #[test]
    fn test_schedule_span() {
        let s = sample_schedule();
        assert_eq!(s.first_start(), Some(at(9, 0)));
        assert_eq!(s.last_end(), Some(at(10, 40)));
        assert_eq!(s.makespan(), Duration::minutes(100));
    }

    #[test]
    fn test_team_match_counts() {
        let counts = sample_schedule().team_match_counts();
        assert_eq!(counts["A"], 2);
        assert_eq!(counts["B"], 2);
        assert_eq!(counts["C"], 2);
    }

    #[test]
    fn test_empty_schedule() {
        let s = GeneratedSchedule::new();
        assert_eq!(s.match_count(), 0);
        assert_eq!(s.makespan(), Duration::zero());
        assert!(s.first_start().is_none());
    }

    #[test]
    fn test_timestamps_round_trip_as_iso_strings() {
        let s = sample_schedule();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["matches"][0]["startTime"], "2024-06-01T09:00:00");
        assert_eq!(json["matches"][0]["homeTeam"]["id"], "A");

        let back: GeneratedSchedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.matches[2].end_time, at(10, 40));
    }
}
