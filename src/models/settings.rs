//! Tournament settings and scheduling configuration.
//!
//! # Time Model
//! The start date and time are kept as the caller's form strings and
//! parsed on demand into a wall-clock [`NaiveDateTime`]. No time zone is
//! attached; the caller decides what local time means.
//!
//! # Match Duration
//! | Mode | Duration |
//! |------|----------|
//! | `FullTime` | `match_duration_minutes` |
//! | `TwoHalves` | `2 * half_duration_minutes + halftime_break_minutes` |

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Minimum full-time match length (minutes).
pub const MIN_MATCH_DURATION_MINUTES: u32 = 5;

/// Minimum half length (minutes).
pub const MIN_HALF_DURATION_MINUTES: u32 = 3;

/// Longest match or changeover break accepted by validation (minutes).
pub const MAX_DURATION_MINUTES: u64 = 24 * 60;

/// How a match is timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// One continuous period.
    FullTime,
    /// Two halves separated by a halftime break.
    TwoHalves,
}

/// Tournament-wide timing and venue settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSettings {
    /// First match day, `YYYY-MM-DD`.
    pub start_date: String,
    /// First kick-off, `HH:MM` or `HH:MM:SS`.
    pub start_time: String,
    /// Number of parallel pitches (at least 1).
    pub num_pitches: u32,
    /// Optional display names, index 0 = pitch 1.
    #[serde(default)]
    pub pitch_names: Vec<String>,
    /// Timing mode.
    pub match_mode: MatchMode,
    /// Full-time match length (minutes).
    pub match_duration_minutes: u32,
    /// Half length in two-halves mode (minutes).
    pub half_duration_minutes: u32,
    /// Halftime break in two-halves mode (minutes).
    pub halftime_break_minutes: u32,
    /// Changeover time on a pitch between consecutive matches (minutes).
    pub break_between_matches: u32,
}

/// Which matches to generate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SchedulingConfig {
    /// Every team plays every other team once.
    #[default]
    RoundRobin,
    /// Each team plays at most `max_matches_per_team` matches.
    LimitedMatches {
        /// Per-team cap.
        #[serde(rename = "maxMatchesPerTeam")]
        max_matches_per_team: u32,
        /// Optional cap on the whole tournament.
        #[serde(rename = "maxTotalMatches", default)]
        max_total_matches: Option<u32>,
    },
}

impl SchedulingConfig {
    /// Limited-matches configuration without a total cap.
    pub fn limited(max_matches_per_team: u32) -> Self {
        SchedulingConfig::LimitedMatches {
            max_matches_per_team,
            max_total_matches: None,
        }
    }

    /// Limited-matches configuration with a total cap.
    pub fn limited_with_total(max_matches_per_team: u32, max_total_matches: u32) -> Self {
        SchedulingConfig::LimitedMatches {
            max_matches_per_team,
            max_total_matches: Some(max_total_matches),
        }
    }
}

impl TournamentSettings {
    /// Creates settings starting at the given date and time, with one
    /// pitch, 30-minute full-time matches and 5-minute changeovers.
    pub fn new(start_date: impl Into<String>, start_time: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            start_time: start_time.into(),
            num_pitches: 1,
            pitch_names: Vec::new(),
            match_mode: MatchMode::FullTime,
            match_duration_minutes: 30,
            half_duration_minutes: 15,
            halftime_break_minutes: 5,
            break_between_matches: 5,
        }
    }

    /// Sets the number of pitches.
    pub fn with_pitches(mut self, num_pitches: u32) -> Self {
        self.num_pitches = num_pitches;
        self
    }

    /// Sets pitch display names.
    pub fn with_pitch_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pitch_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Full-time matches of the given length.
    pub fn with_full_time(mut self, minutes: u32) -> Self {
        self.match_mode = MatchMode::FullTime;
        self.match_duration_minutes = minutes;
        self
    }

    /// Two-halves matches.
    pub fn with_two_halves(mut self, half_minutes: u32, halftime_minutes: u32) -> Self {
        self.match_mode = MatchMode::TwoHalves;
        self.half_duration_minutes = half_minutes;
        self.halftime_break_minutes = halftime_minutes;
        self
    }

    /// Sets the changeover time between matches on a pitch.
    pub fn with_break_between_matches(mut self, minutes: u32) -> Self {
        self.break_between_matches = minutes;
        self
    }

    /// Parses the start date.
    pub fn start_day(&self) -> Result<NaiveDate> {
        let raw = self.start_date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ScheduleError::InvalidStartDate(self.start_date.clone()))
    }

    /// Parses the start time of day.
    pub fn start_clock(&self) -> Result<NaiveTime> {
        let raw = self.start_time.trim();
        NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .map_err(|_| ScheduleError::InvalidStartTime(self.start_time.clone()))
    }

    /// The instant the first match may start.
    ///
    /// # Errors
    /// Returns [`ScheduleError`] if either the date or the time does not parse.
    pub fn start_instant(&self) -> Result<NaiveDateTime> {
        Ok(self.start_day()?.and_time(self.start_clock()?))
    }

    /// Effective match length (minutes). See [`match_duration_minutes`].
    pub fn match_minutes(&self) -> u64 {
        match_duration_minutes(self)
    }

    /// Effective match length.
    pub fn match_duration(&self) -> Duration {
        // At most 3 * u32::MAX minutes, well inside i64 milliseconds
        Duration::minutes(self.match_minutes() as i64)
    }

    /// Pitch changeover time.
    pub fn break_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.break_between_matches))
    }

    /// Display name for a 1-indexed pitch. See [`get_pitch_name`].
    pub fn pitch_name(&self, pitch_number: u32) -> String {
        get_pitch_name(pitch_number, self)
    }
}

/// Effective match length in minutes for the configured mode.
///
/// Shared with export and print views so they never recompute it.
/// Widened to `u64` so any `u32` half and break lengths add up exactly.
pub fn match_duration_minutes(settings: &TournamentSettings) -> u64 {
    match settings.match_mode {
        MatchMode::FullTime => u64::from(settings.match_duration_minutes),
        MatchMode::TwoHalves => {
            2 * u64::from(settings.half_duration_minutes)
                + u64::from(settings.halftime_break_minutes)
        }
    }
}

/// Display name for a 1-indexed pitch.
///
/// Returns the configured name when one is set and non-blank,
/// otherwise `"Pitch {n}"`.
pub fn get_pitch_name(pitch_number: u32, settings: &TournamentSettings) -> String {
    pitch_number
        .checked_sub(1)
        .and_then(|idx| settings.pitch_names.get(idx as usize))
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Pitch {pitch_number}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_time_duration() {
        let s = TournamentSettings::new("2024-06-01", "09:00").with_full_time(30);
        assert_eq!(match_duration_minutes(&s), 30);
        assert_eq!(s.match_duration(), Duration::minutes(30));
    }

    #[test]
    fn test_two_halves_duration() {
        let s = TournamentSettings::new("2024-06-01", "09:00").with_two_halves(15, 5);
        assert_eq!(match_duration_minutes(&s), 35);
    }

    #[test]
    fn test_two_halves_duration_does_not_overflow() {
        let s = TournamentSettings::new("2024-06-01", "09:00").with_two_halves(u32::MAX / 2 + 1, 0);
        assert_eq!(match_duration_minutes(&s), 1u64 << 32);

        let s = TournamentSettings::new("2024-06-01", "09:00").with_two_halves(u32::MAX, u32::MAX);
        assert_eq!(match_duration_minutes(&s), 3 * u64::from(u32::MAX));
        assert_eq!(
            s.match_duration(),
            Duration::minutes(3 * i64::from(u32::MAX))
        );
    }

    #[test]
    fn test_mode_ignores_other_fields() {
        // Half settings do not leak into full-time matches.
        let mut s = TournamentSettings::new("2024-06-01", "09:00").with_two_halves(20, 10);
        s.match_mode = MatchMode::FullTime;
        s.match_duration_minutes = 40;
        assert_eq!(s.match_minutes(), 40);
    }

    #[test]
    fn test_start_instant() {
        let s = TournamentSettings::new("2024-06-01", "09:30");
        let start = s.start_instant().unwrap();
        assert_eq!(start.to_string(), "2024-06-01 09:30:00");

        let s = TournamentSettings::new(" 2024-06-01 ", "09:30:15");
        assert_eq!(s.start_instant().unwrap().to_string(), "2024-06-01 09:30:15");
    }

    #[test]
    fn test_invalid_start_date() {
        let s = TournamentSettings::new("not-a-date", "09:00");
        assert_eq!(
            s.start_instant(),
            Err(ScheduleError::InvalidStartDate("not-a-date".into()))
        );

        let s = TournamentSettings::new("2024-02-30", "09:00");
        assert!(matches!(
            s.start_instant(),
            Err(ScheduleError::InvalidStartDate(_))
        ));
    }

    #[test]
    fn test_invalid_start_time() {
        let s = TournamentSettings::new("2024-06-01", "25:00");
        assert_eq!(
            s.start_instant(),
            Err(ScheduleError::InvalidStartTime("25:00".into()))
        );
    }

    #[test]
    fn test_pitch_names() {
        let s = TournamentSettings::new("2024-06-01", "09:00")
            .with_pitches(3)
            .with_pitch_names(["North", "  "]);
        assert_eq!(get_pitch_name(1, &s), "North");
        assert_eq!(get_pitch_name(2, &s), "Pitch 2"); // blank
        assert_eq!(get_pitch_name(3, &s), "Pitch 3"); // missing
        assert_eq!(s.pitch_name(0), "Pitch 0");
    }

    #[test]
    fn test_settings_wire_format() {
        let json = r#"{
            "startDate": "2024-06-01",
            "startTime": "09:00",
            "numPitches": 2,
            "matchMode": "two-halves",
            "matchDurationMinutes": 30,
            "halfDurationMinutes": 15,
            "halftimeBreakMinutes": 5,
            "breakBetweenMatches": 5
        }"#;
        let s: TournamentSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.num_pitches, 2);
        assert!(s.pitch_names.is_empty());
        assert_eq!(s.match_mode, MatchMode::TwoHalves);
        assert_eq!(s.match_minutes(), 35);
    }

    #[test]
    fn test_config_wire_format() {
        let rr: SchedulingConfig = serde_json::from_str(r#"{"mode":"round-robin"}"#).unwrap();
        assert_eq!(rr, SchedulingConfig::RoundRobin);

        let lm: SchedulingConfig =
            serde_json::from_str(r#"{"mode":"limited-matches","maxMatchesPerTeam":3}"#).unwrap();
        assert_eq!(lm, SchedulingConfig::limited(3));

        let json = serde_json::to_value(SchedulingConfig::limited_with_total(2, 5)).unwrap();
        assert_eq!(json["mode"], "limited-matches");
        assert_eq!(json["maxMatchesPerTeam"], 2);
        assert_eq!(json["maxTotalMatches"], 5);
    }
}
