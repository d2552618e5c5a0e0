//! Input validation for tournament scheduling.
//!
//! The upstream check a caller runs before [`generate`](crate::generate).
//! Generation itself never requires it: everything except an unparsable
//! start date or time degrades to a warning. Detects:
//! - Duplicate, empty, or reserved team IDs
//! - Too few teams to play a match
//! - Pitch count and pitch-name mismatches
//! - Match durations below their minimums or above a day
//! - Limited-matches caps below 1
//! - Unparsable start date or time

use std::collections::HashSet;

use crate::models::{
    MatchMode, SchedulingConfig, Team, TournamentSettings, BYE_TEAM_ID, MAX_DURATION_MINUTES,
    MIN_HALF_DURATION_MINUTES, MIN_MATCH_DURATION_MINUTES,
};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two teams share the same ID.
    DuplicateId,
    /// A team has an empty ID.
    EmptyId,
    /// A team uses the ID reserved for the BYE slot.
    ReservedId,
    /// Fewer than two teams.
    TooFewTeams,
    /// Pitch count is zero.
    InvalidPitchCount,
    /// Pitch names given but not one per pitch.
    PitchNameMismatch,
    /// A match or half is shorter than allowed.
    DurationTooShort,
    /// A match or changeover break is longer than allowed.
    DurationTooLong,
    /// A limited-matches cap is below 1.
    InvalidMatchLimit,
    /// Start date or time does not parse.
    InvalidStart,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs for one generation run.
///
/// Checks:
/// 1. Team IDs are non-empty, unique, and not the reserved BYE id
/// 2. At least two teams
/// 3. At least one pitch; pitch names, if given, match the pitch count
/// 4. Match length ≥ 5 min (full-time) or half length ≥ 3 min (two halves);
///    effective match length and pitch break ≤ 24 h
/// 5. Limited-matches caps are ≥ 1
/// 6. Start date and time parse
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    settings: &TournamentSettings,
    teams: &[Team],
    config: &SchedulingConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut team_ids = HashSet::new();
    for team in teams {
        if team.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Team '{}' has an empty ID", team.name),
            ));
            continue;
        }
        if team.is_bye() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedId,
                format!("Team ID '{BYE_TEAM_ID}' is reserved for rest rounds"),
            ));
        }
        if !team_ids.insert(team.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", team.id),
            ));
        }
    }

    if teams.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewTeams,
            format!("At least two teams are required, got {}", teams.len()),
        ));
    }

    if settings.num_pitches < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPitchCount,
            "At least one pitch is required",
        ));
    }
    if !settings.pitch_names.is_empty()
        && settings.pitch_names.len() != settings.num_pitches as usize
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::PitchNameMismatch,
            format!(
                "{} pitch names given for {} pitches",
                settings.pitch_names.len(),
                settings.num_pitches
            ),
        ));
    }

    match settings.match_mode {
        MatchMode::FullTime if settings.match_duration_minutes < MIN_MATCH_DURATION_MINUTES => {
            errors.push(ValidationError::new(
                ValidationErrorKind::DurationTooShort,
                format!(
                    "Match duration must be at least {MIN_MATCH_DURATION_MINUTES} minutes, got {}",
                    settings.match_duration_minutes
                ),
            ));
        }
        MatchMode::TwoHalves if settings.half_duration_minutes < MIN_HALF_DURATION_MINUTES => {
            errors.push(ValidationError::new(
                ValidationErrorKind::DurationTooShort,
                format!(
                    "Half duration must be at least {MIN_HALF_DURATION_MINUTES} minutes, got {}",
                    settings.half_duration_minutes
                ),
            ));
        }
        _ => {}
    }
    let match_minutes = settings.match_minutes();
    if match_minutes > MAX_DURATION_MINUTES {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationTooLong,
            format!(
                "Match duration must be at most {MAX_DURATION_MINUTES} minutes, got {match_minutes}"
            ),
        ));
    }
    if u64::from(settings.break_between_matches) > MAX_DURATION_MINUTES {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationTooLong,
            format!(
                "Break between matches must be at most {MAX_DURATION_MINUTES} minutes, got {}",
                settings.break_between_matches
            ),
        ));
    }

    if let SchedulingConfig::LimitedMatches {
        max_matches_per_team,
        max_total_matches,
    } = config
    {
        if *max_matches_per_team < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMatchLimit,
                "Each team must be allowed at least one match",
            ));
        }
        if matches!(max_total_matches, Some(0)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMatchLimit,
                "The total match limit must be at least one",
            ));
        }
    }

    if let Err(e) = settings.start_instant() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidStart,
            e.to_string(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
