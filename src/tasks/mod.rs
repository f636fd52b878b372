//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Stats Reporter: Logs cache occupancy and counters at configured intervals

mod reporter;

pub use reporter::spawn_stats_reporter;
