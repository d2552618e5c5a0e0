//! Schedule generation pipeline.
//!
//! Pairing → slot assignment → conflict detection, in one synchronous
//! pass. All bookkeeping (team and pitch availability, pairing counters)
//! is local to one call, so identical inputs always produce identical
//! schedules and concurrent calls need no coordination.

use tracing::debug;

use crate::conflicts::detect_conflicts;
use crate::error::Result;
use crate::models::{
    GeneratedSchedule, ScheduleConflict, SchedulingConfig, Team, TournamentSettings,
};
use crate::pairing::{generate_pairings, PairingOutcome};
use crate::scheduler::{SlotAssigner, SlotOutcome};

/// Match count above which a "consider phasing" warning is added.
pub const LARGE_TOURNAMENT_THRESHOLD: usize = 100;

/// Builds schedules for one tournament configuration.
///
/// # Example
///
/// ```
/// use u_tournament::builder::ScheduleBuilder;
/// use u_tournament::models::{SchedulingConfig, Team, TournamentSettings};
///
/// let settings = TournamentSettings::new("2024-06-01", "09:00").with_pitches(2);
/// let teams = vec![Team::named("A"), Team::named("B"), Team::named("C")];
///
/// let schedule = ScheduleBuilder::new(settings)
///     .with_config(SchedulingConfig::RoundRobin)
///     .build(&teams)
///     .unwrap();
/// assert_eq!(schedule.match_count(), 3);
/// assert!(schedule.warnings[0].contains("BYE"));
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    settings: TournamentSettings,
    config: SchedulingConfig,
}

impl ScheduleBuilder {
    /// Creates a round-robin builder.
    pub fn new(settings: TournamentSettings) -> Self {
        Self {
            settings,
            config: SchedulingConfig::RoundRobin,
        }
    }

    /// Sets the pairing configuration.
    pub fn with_config(mut self, config: SchedulingConfig) -> Self {
        self.config = config;
        self
    }

    /// Tournament settings.
    pub fn settings(&self) -> &TournamentSettings {
        &self.settings
    }

    /// Pairing configuration.
    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    /// Generates a schedule for the given teams.
    ///
    /// Warnings from every stage are collected in order, then arranged
    /// by [`apply_warning_policy`].
    ///
    /// # Errors
    /// Fails before producing any match if the start date or time does
    /// not parse. No other input aborts generation.
    pub fn build(&self, teams: &[Team]) -> Result<GeneratedSchedule> {
        let assigner = SlotAssigner::from_settings(&self.settings)?;

        let PairingOutcome {
            pairings,
            mut warnings,
        } = generate_pairings(teams, &self.config);
        debug!(
            teams = teams.len(),
            pairings = pairings.len(),
            "pairings generated"
        );

        let SlotOutcome {
            matches,
            warnings: slot_warnings,
        } = assigner.assign(&pairings);
        warnings.extend(slot_warnings);

        let conflicts = detect_conflicts(&matches);
        apply_warning_policy(&conflicts, matches.len(), &mut warnings);

        debug!(
            matches = matches.len(),
            conflicts = conflicts.len(),
            warnings = warnings.len(),
            "schedule generated"
        );

        Ok(GeneratedSchedule {
            matches,
            conflicts,
            warnings,
        })
    }
}

/// Adds the run-level warnings around the stage warnings.
///
/// A conflict summary with the conflict count goes first; the
/// large-tournament notice (more than [`LARGE_TOURNAMENT_THRESHOLD`]
/// matches) goes last.
pub fn apply_warning_policy(
    conflicts: &[ScheduleConflict],
    match_count: usize,
    warnings: &mut Vec<String>,
) {
    if !conflicts.is_empty() {
        warnings.insert(
            0,
            format!(
                "{} scheduling conflict(s) found: some teams are booked into \
                 simultaneous matches",
                conflicts.len()
            ),
        );
    }
    if match_count > LARGE_TOURNAMENT_THRESHOLD {
        warnings.push(format!(
            "Large tournament: {match_count} matches scheduled; consider splitting it into phases"
        ));
    }
}

/// Generates a complete schedule.
///
/// Shorthand for [`ScheduleBuilder::build`].
///
/// # Errors
/// Returns [`ScheduleError`](crate::ScheduleError) if the start date or
/// time does not parse.
pub fn generate(
    settings: &TournamentSettings,
    teams: &[Team],
    config: &SchedulingConfig,
) -> Result<GeneratedSchedule> {
    ScheduleBuilder::new(settings.clone())
        .with_config(config.clone())
        .build(teams)
}
