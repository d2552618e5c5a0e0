//! Tournament fixture scheduling for the U-Engine ecosystem.
//!
//! Turns a team list and tournament settings into a timed match schedule
//! across parallel pitches, and checks it for double-bookings.
//!
//! # Modules
//!
//! - **`models`**: Data contracts — `Team`, `TournamentSettings`,
//!   `SchedulingConfig`, `Match`, `ScheduleConflict`, `GeneratedSchedule`
//! - **`pairing`**: Which matches to play (round-robin circle method,
//!   load-balanced limited matches)
//! - **`scheduler`**: Greedy earliest-slot assignment and KPIs
//! - **`conflicts`**: Double-booking and interval overlap detection
//! - **`validation`**: Upstream input checks
//! - **`builder`**: The `generate` pipeline
//!
//! # Usage
//!
//! ```
//! use u_tournament::generate;
//! use u_tournament::models::{SchedulingConfig, Team, TournamentSettings};
//!
//! let settings = TournamentSettings::new("2024-06-01", "09:00")
//!     .with_pitches(2)
//!     .with_full_time(30)
//!     .with_break_between_matches(5);
//! let teams: Vec<Team> = ["A", "B", "C", "D"].into_iter().map(Team::named).collect();
//!
//! let schedule = generate(&settings, &teams, &SchedulingConfig::RoundRobin).unwrap();
//! assert_eq!(schedule.match_count(), 6);
//! assert!(schedule.is_conflict_free());
//! ```
//!
//! # Architecture
//!
//! A pure, synchronous core: no I/O, no shared state, no randomness.
//! Persistence, export, and presentation belong to the caller.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"

pub mod builder;
pub mod conflicts;
pub mod error;
pub mod models;
pub mod pairing;
pub mod scheduler;
pub mod validation;

pub use builder::{generate, ScheduleBuilder, LARGE_TOURNAMENT_THRESHOLD};
pub use error::ScheduleError;
pub use models::{get_pitch_name, match_duration_minutes};
