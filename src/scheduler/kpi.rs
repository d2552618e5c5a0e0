//! Schedule quality metrics (KPIs).
//!
//! Summarizes a generated schedule for export and print views.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | First kick-off to last final whistle |
//! | Matches per team | Count of matches each team plays |
//! | Spread | Max minus min matches per team |
//! | Pitch utilization | Busy minutes / makespan, per pitch |
//! | Longest wait | Largest idle gap any team has between two matches |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use crate::models::{GeneratedSchedule, Match};

/// Schedule performance indicators.
///
/// All time values are in minutes.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of scheduled matches.
    pub match_count: usize,
    /// First kick-off to last final whistle.
    pub makespan_minutes: i64,
    /// Matches per team id.
    pub matches_per_team: BTreeMap<String, usize>,
    /// Fewest matches any team plays.
    pub min_matches_per_team: usize,
    /// Most matches any team plays.
    pub max_matches_per_team: usize,
    /// Playing minutes per pitch (1-indexed).
    pub busy_minutes_by_pitch: BTreeMap<u32, i64>,
    /// Busy fraction of the makespan per pitch (0.0..1.0).
    pub utilization_by_pitch: BTreeMap<u32, f64>,
    /// Mean utilization over all pitches.
    pub avg_utilization: f64,
    /// Largest gap between consecutive matches of one team.
    pub longest_team_wait_minutes: i64,
}

impl ScheduleKpi {
    /// Computes KPIs for a schedule played on `num_pitches` pitches.
    ///
    /// Pitches with no matches count as idle.
    pub fn calculate(schedule: &GeneratedSchedule, num_pitches: u32) -> Self {
        let makespan = schedule.makespan().num_minutes();

        let matches_per_team: BTreeMap<String, usize> = schedule.team_match_counts();
        let min_matches_per_team = matches_per_team.values().copied().min().unwrap_or(0);
        let max_matches_per_team = matches_per_team.values().copied().max().unwrap_or(0);

        let mut busy_minutes_by_pitch: BTreeMap<u32, i64> =
            (1..=num_pitches.max(1)).map(|p| (p, 0)).collect();
        for m in &schedule.matches {
            *busy_minutes_by_pitch.entry(m.pitch).or_insert(0) += m.duration().num_minutes();
        }

        let utilization_by_pitch: BTreeMap<u32, f64> = busy_minutes_by_pitch
            .iter()
            .map(|(&pitch, &busy)| {
                let util = if makespan > 0 {
                    busy as f64 / makespan as f64
                } else {
                    0.0
                };
                (pitch, util)
            })
            .collect();

        let avg_utilization = if utilization_by_pitch.is_empty() {
            0.0
        } else {
            utilization_by_pitch.values().sum::<f64>() / utilization_by_pitch.len() as f64
        };

        let longest_team_wait_minutes = matches_per_team
            .keys()
            .map(|team_id| longest_wait(&schedule.matches_for_team(team_id)))
            .max()
            .unwrap_or(0);

        Self {
            match_count: schedule.match_count(),
            makespan_minutes: makespan,
            matches_per_team,
            min_matches_per_team,
            max_matches_per_team,
            busy_minutes_by_pitch,
            utilization_by_pitch,
            avg_utilization,
            longest_team_wait_minutes,
        }
    }

    /// Max minus min matches per team. Zero means perfectly even.
    pub fn match_spread(&self) -> usize {
        self.max_matches_per_team - self.min_matches_per_team
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_wait_minutes: i64, min_utilization: f64) -> bool {
        self.longest_team_wait_minutes <= max_wait_minutes
            && self.avg_utilization >= min_utilization
    }
}

fn longest_wait(matches: &[&Match]) -> i64 {
    let mut ordered: Vec<&Match> = matches.to_vec();
    ordered.sort_by_key(|m| m.start_time);
    ordered
        .windows(2)
        .map(|w| (w[1].start_time - w[0].end_time).num_minutes())
        .max()
        .unwrap_or(0)
        .max(0)
}
