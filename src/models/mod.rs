//! Tournament scheduling domain models.
//!
//! Provides the data contracts shared with the calling wizard and the
//! export views: teams, settings, the pairing configuration, and the
//! generated schedule.
//!
//! # Domain Mappings
//!
//! | u-tournament | Job-shop scheduling |
//! |--------------|---------------------|
//! | Match | Activity |
//! | Team | Precedence chain (one match at a time) |
//! | Pitch | Machine |
//! | GeneratedSchedule | Schedule |

mod fixture;
mod settings;
mod team;

pub use fixture::{GeneratedSchedule, Match, ScheduleConflict};
pub use settings::{
    get_pitch_name, match_duration_minutes, MatchMode, SchedulingConfig, TournamentSettings,
    MAX_DURATION_MINUTES, MIN_HALF_DURATION_MINUTES, MIN_MATCH_DURATION_MINUTES,
};
pub use team::{Entrant, Team, BYE_TEAM_ID};
