//! Application services bridging storage and the pure scheduling engine.
//!
//! Each service loads a snapshot from a [`crate::db::CompanyRepository`],
//! runs the stateless functions in [`crate::scheduler`], and writes any
//! results back through the same repository.

pub mod scheduling;

pub use scheduling::{day_summary, fill_day, plan_day, DayFillReport};
