//! # Callboard
//!
//! Rehearsal scheduling engine for theater companies.
//!
//! This crate implements the scheduling core of a rehearsal planning system:
//! given a company's actors (with per-timeslot availability and scene
//! assignments), its scenes, its weekly timeslot grid, and the rehearsals
//! already on the books, it proposes and ranks rehearsal opportunities and can
//! greedily fill a day with the best of them.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes shared across the crate
//! - [`models`]: Domain data model, clock-time parsing, company file loading
//! - [`scheduler`]: The pure scheduling pipeline (matching, scoring, ranking,
//!   day auto-fill). Stateless and synchronous; operates only on the
//!   collections passed in.
//! - [`db`]: Repository trait and in-memory implementation; the persistence
//!   seam where double-booking protection lives
//! - [`services`]: Orchestration functions that combine a repository snapshot
//!   with the pure scheduler
//!
//! The scheduler itself never touches storage and never locks: two callers
//! ranking stale snapshots can propose the same slot. Exclusivity over a
//! (timeslot, date) pair is enforced only when a rehearsal is stored.

pub mod api;
pub mod db;
pub mod models;
pub mod scheduler;
pub mod services;
