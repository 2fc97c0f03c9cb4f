//! Repository implementations module.
//!
//! Currently the only backend is `local`, an in-memory implementation used
//! for unit testing, local development, and embedding the engine without an
//! external store. The trait seam in [`crate::db::repository`] is where a
//! database-backed implementation would slot in.
pub mod local;

pub use local::LocalRepository;
