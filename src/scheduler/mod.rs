//! Slot assignment and KPI evaluation.
//!
//! # Algorithm
//!
//! `SlotAssigner` uses a greedy, order-driven, earliest-available-pitch
//! heuristic. Each team is a precedence chain (one match at a time) and
//! each pitch a single-capacity machine with a changeover break. It is
//! not makespan-optimal, but fast and deterministic.
//!
//! # KPI
//!
//! `ScheduleKpi` computes summary metrics: makespan, matches per team,
//! pitch utilization, and the longest team wait.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

mod kpi;
mod slots;

pub use kpi::ScheduleKpi;
pub use slots::{SlotAssigner, SlotOutcome};
