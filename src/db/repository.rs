//! Repository trait definitions.
//!
//! The scheduler's pure functions never touch storage; everything stateful
//! goes through these traits so backends can be swapped. Traits are split per
//! entity and combined into [`CompanyRepository`], which is what application
//! code should depend on.

use crate::api::{ActorId, RehearsalId, SceneId, TimeslotId};
use crate::models::{Actor, Rehearsal, Scene, Timeslot};
use async_trait::async_trait;
use chrono::Weekday;

pub use super::error::{ErrorContext, RepositoryError, RepositoryResult};

/// Storage operations for actors.
#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn list_actors(&self) -> RepositoryResult<Vec<Actor>>;
    async fn get_actor(&self, id: &ActorId) -> RepositoryResult<Actor>;
    async fn create_actor(&self, actor: Actor) -> RepositoryResult<Actor>;
    async fn update_actor(&self, actor: Actor) -> RepositoryResult<Actor>;
    async fn delete_actor(&self, id: &ActorId) -> RepositoryResult<()>;
}

/// Storage operations for scenes.
#[async_trait]
pub trait SceneRepository: Send + Sync {
    async fn list_scenes(&self) -> RepositoryResult<Vec<Scene>>;
    async fn get_scene(&self, id: &SceneId) -> RepositoryResult<Scene>;
    async fn create_scene(&self, scene: Scene) -> RepositoryResult<Scene>;
    async fn update_scene(&self, scene: Scene) -> RepositoryResult<Scene>;
    async fn delete_scene(&self, id: &SceneId) -> RepositoryResult<()>;
}

/// Storage operations for timeslots.
#[async_trait]
pub trait TimeslotRepository: Send + Sync {
    async fn list_timeslots(&self) -> RepositoryResult<Vec<Timeslot>>;
    /// Timeslots on a given weekday.
    async fn list_timeslots_for_day(&self, day: Weekday) -> RepositoryResult<Vec<Timeslot>>;
    async fn get_timeslot(&self, id: &TimeslotId) -> RepositoryResult<Timeslot>;
    async fn create_timeslot(&self, timeslot: Timeslot) -> RepositoryResult<Timeslot>;
    async fn update_timeslot(&self, timeslot: Timeslot) -> RepositoryResult<Timeslot>;
    async fn delete_timeslot(&self, id: &TimeslotId) -> RepositoryResult<()>;
}

/// Storage operations for rehearsals.
///
/// This is the persistence boundary where double-booking protection lives:
/// `create_rehearsal` must reject, with [`RepositoryError::Conflict`], any
/// rehearsal whose (timeslot, date) pair is already booked. The pure
/// scheduler deliberately carries no such guarantee.
#[async_trait]
pub trait RehearsalRepository: Send + Sync {
    async fn list_rehearsals(&self) -> RepositoryResult<Vec<Rehearsal>>;
    async fn get_rehearsal(&self, id: &RehearsalId) -> RepositoryResult<Rehearsal>;
    async fn create_rehearsal(&self, rehearsal: Rehearsal) -> RepositoryResult<Rehearsal>;
    async fn delete_rehearsal(&self, id: &RehearsalId) -> RepositoryResult<()>;
}

/// Combined repository interface: everything the scheduling services need.
#[async_trait]
pub trait CompanyRepository:
    ActorRepository + SceneRepository + TimeslotRepository + RehearsalRepository
{
    /// Backend liveness check.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
