//! In-memory repository implementation.

use crate::api::{ActorId, RehearsalId, SceneId, TimeslotId};
use crate::db::repository::{
    ActorRepository, CompanyRepository, ErrorContext, RehearsalRepository, RepositoryError,
    RepositoryResult, SceneRepository, TimeslotRepository,
};
use crate::models::{Actor, CompanyData, Rehearsal, Scene, Timeslot};
use async_trait::async_trait;
use chrono::Weekday;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
struct Store {
    actors: HashMap<ActorId, Actor>,
    scenes: HashMap<SceneId, Scene>,
    timeslots: HashMap<TimeslotId, Timeslot>,
    rehearsals: HashMap<RehearsalId, Rehearsal>,
}

/// In-memory repository backed by a [`parking_lot::RwLock`].
///
/// All operations are synchronous under the hood; the async trait surface
/// exists so callers are backend-agnostic. `create_rehearsal` is the one
/// place in the system that enforces timeslot exclusivity: a second
/// rehearsal for the same (timeslot, date) pair is rejected with
/// [`RepositoryError::Conflict`].
pub struct LocalRepository {
    store: RwLock<Store>,
}

impl LocalRepository {
    pub fn new() -> Self {
        LocalRepository {
            store: RwLock::new(Store::default()),
        }
    }

    /// Build a repository pre-populated from a parsed company dataset.
    ///
    /// Seed rehearsals are inserted as-is, without conflict checks: the
    /// exported data is taken as the authoritative booking record.
    pub fn from_company(company: CompanyData) -> Self {
        let repo = Self::new();
        {
            let mut store = repo.store.write();
            for actor in company.actors {
                store.actors.insert(actor.id.clone(), actor);
            }
            for scene in company.scenes {
                store.scenes.insert(scene.id.clone(), scene);
            }
            for timeslot in company.timeslots {
                store.timeslots.insert(timeslot.id.clone(), timeslot);
            }
            for rehearsal in company.rehearsals {
                store.rehearsals.insert(rehearsal.id.clone(), rehearsal);
            }
        }
        tracing::debug!(company = %repo.summary(), "seeded local repository");
        repo
    }

    fn summary(&self) -> String {
        let store = self.store.read();
        format!(
            "{} actors, {} scenes, {} timeslots, {} rehearsals",
            store.actors.len(),
            store.scenes.len(),
            store.timeslots.len(),
            store.rehearsals.len()
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActorRepository for LocalRepository {
    async fn list_actors(&self) -> RepositoryResult<Vec<Actor>> {
        let store = self.store.read();
        let mut actors: Vec<Actor> = store.actors.values().cloned().collect();
        actors.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(actors)
    }

    async fn get_actor(&self, id: &ActorId) -> RepositoryResult<Actor> {
        self.store.read().actors.get(id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "actor does not exist",
                ErrorContext::new("get_actor")
                    .with_entity("actor")
                    .with_entity_id(id),
            )
        })
    }

    async fn create_actor(&self, actor: Actor) -> RepositoryResult<Actor> {
        let mut store = self.store.write();
        if store.actors.contains_key(&actor.id) {
            return Err(RepositoryError::conflict_with_context(
                "actor id already exists",
                ErrorContext::new("create_actor")
                    .with_entity("actor")
                    .with_entity_id(&actor.id),
            ));
        }
        store.actors.insert(actor.id.clone(), actor.clone());
        Ok(actor)
    }

    async fn update_actor(&self, actor: Actor) -> RepositoryResult<Actor> {
        let mut store = self.store.write();
        if !store.actors.contains_key(&actor.id) {
            return Err(RepositoryError::not_found_with_context(
                "actor does not exist",
                ErrorContext::new("update_actor")
                    .with_entity("actor")
                    .with_entity_id(&actor.id),
            ));
        }
        store.actors.insert(actor.id.clone(), actor.clone());
        Ok(actor)
    }

    async fn delete_actor(&self, id: &ActorId) -> RepositoryResult<()> {
        let mut store = self.store.write();
        store.actors.remove(id).map(|_| ()).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "actor does not exist",
                ErrorContext::new("delete_actor")
                    .with_entity("actor")
                    .with_entity_id(id),
            )
        })
    }
}

#[async_trait]
impl SceneRepository for LocalRepository {
    async fn list_scenes(&self) -> RepositoryResult<Vec<Scene>> {
        let store = self.store.read();
        let mut scenes: Vec<Scene> = store.scenes.values().cloned().collect();
        scenes.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(scenes)
    }

    async fn get_scene(&self, id: &SceneId) -> RepositoryResult<Scene> {
        self.store.read().scenes.get(id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "scene does not exist",
                ErrorContext::new("get_scene")
                    .with_entity("scene")
                    .with_entity_id(id),
            )
        })
    }

    async fn create_scene(&self, scene: Scene) -> RepositoryResult<Scene> {
        let mut store = self.store.write();
        if store.scenes.contains_key(&scene.id) {
            return Err(RepositoryError::conflict_with_context(
                "scene id already exists",
                ErrorContext::new("create_scene")
                    .with_entity("scene")
                    .with_entity_id(&scene.id),
            ));
        }
        store.scenes.insert(scene.id.clone(), scene.clone());
        Ok(scene)
    }

    async fn update_scene(&self, scene: Scene) -> RepositoryResult<Scene> {
        let mut store = self.store.write();
        if !store.scenes.contains_key(&scene.id) {
            return Err(RepositoryError::not_found_with_context(
                "scene does not exist",
                ErrorContext::new("update_scene")
                    .with_entity("scene")
                    .with_entity_id(&scene.id),
            ));
        }
        store.scenes.insert(scene.id.clone(), scene.clone());
        Ok(scene)
    }

    async fn delete_scene(&self, id: &SceneId) -> RepositoryResult<()> {
        let mut store = self.store.write();
        store.scenes.remove(id).map(|_| ()).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "scene does not exist",
                ErrorContext::new("delete_scene")
                    .with_entity("scene")
                    .with_entity_id(id),
            )
        })
    }
}

#[async_trait]
impl TimeslotRepository for LocalRepository {
    async fn list_timeslots(&self) -> RepositoryResult<Vec<Timeslot>> {
        let store = self.store.read();
        let mut timeslots: Vec<Timeslot> = store.timeslots.values().cloned().collect();
        timeslots.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(timeslots)
    }

    async fn list_timeslots_for_day(&self, day: Weekday) -> RepositoryResult<Vec<Timeslot>> {
        let mut timeslots = self.list_timeslots().await?;
        timeslots.retain(|slot| slot.day == day);
        Ok(timeslots)
    }

    async fn get_timeslot(&self, id: &TimeslotId) -> RepositoryResult<Timeslot> {
        self.store.read().timeslots.get(id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "timeslot does not exist",
                ErrorContext::new("get_timeslot")
                    .with_entity("timeslot")
                    .with_entity_id(id),
            )
        })
    }

    async fn create_timeslot(&self, timeslot: Timeslot) -> RepositoryResult<Timeslot> {
        let mut store = self.store.write();
        if store.timeslots.contains_key(&timeslot.id) {
            return Err(RepositoryError::conflict_with_context(
                "timeslot id already exists",
                ErrorContext::new("create_timeslot")
                    .with_entity("timeslot")
                    .with_entity_id(&timeslot.id),
            ));
        }
        store.timeslots.insert(timeslot.id.clone(), timeslot.clone());
        Ok(timeslot)
    }

    async fn update_timeslot(&self, timeslot: Timeslot) -> RepositoryResult<Timeslot> {
        let mut store = self.store.write();
        if !store.timeslots.contains_key(&timeslot.id) {
            return Err(RepositoryError::not_found_with_context(
                "timeslot does not exist",
                ErrorContext::new("update_timeslot")
                    .with_entity("timeslot")
                    .with_entity_id(&timeslot.id),
            ));
        }
        store.timeslots.insert(timeslot.id.clone(), timeslot.clone());
        Ok(timeslot)
    }

    async fn delete_timeslot(&self, id: &TimeslotId) -> RepositoryResult<()> {
        let mut store = self.store.write();
        store.timeslots.remove(id).map(|_| ()).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "timeslot does not exist",
                ErrorContext::new("delete_timeslot")
                    .with_entity("timeslot")
                    .with_entity_id(id),
            )
        })
    }
}

#[async_trait]
impl RehearsalRepository for LocalRepository {
    async fn list_rehearsals(&self) -> RepositoryResult<Vec<Rehearsal>> {
        let store = self.store.read();
        let mut rehearsals: Vec<Rehearsal> = store.rehearsals.values().cloned().collect();
        rehearsals.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(rehearsals)
    }

    async fn get_rehearsal(&self, id: &RehearsalId) -> RepositoryResult<Rehearsal> {
        self.store.read().rehearsals.get(id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "rehearsal does not exist",
                ErrorContext::new("get_rehearsal")
                    .with_entity("rehearsal")
                    .with_entity_id(id),
            )
        })
    }

    async fn create_rehearsal(&self, rehearsal: Rehearsal) -> RepositoryResult<Rehearsal> {
        let mut store = self.store.write();
        if store.rehearsals.contains_key(&rehearsal.id) {
            return Err(RepositoryError::conflict_with_context(
                "rehearsal id already exists",
                ErrorContext::new("create_rehearsal")
                    .with_entity("rehearsal")
                    .with_entity_id(&rehearsal.id),
            ));
        }

        // Timeslot exclusivity lives here, not in the scheduler: the same
        // (timeslot, date) pair can only be booked once.
        let double_booked = store.rehearsals.values().any(|existing| {
            existing.timeslot.id == rehearsal.timeslot.id && existing.date == rehearsal.date
        });
        if double_booked {
            return Err(RepositoryError::conflict_with_context(
                "timeslot is already booked for this date",
                ErrorContext::new("create_rehearsal")
                    .with_entity("rehearsal")
                    .with_entity_id(&rehearsal.id)
                    .with_details(format!("timeslot={}", rehearsal.timeslot.id)),
            ));
        }

        tracing::debug!(
            rehearsal = %rehearsal.id,
            timeslot = %rehearsal.timeslot.id,
            "stored rehearsal"
        );
        store.rehearsals.insert(rehearsal.id.clone(), rehearsal.clone());
        Ok(rehearsal)
    }

    async fn delete_rehearsal(&self, id: &RehearsalId) -> RepositoryResult<()> {
        let mut store = self.store.write();
        store.rehearsals.remove(id).map(|_| ()).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "rehearsal does not exist",
                ErrorContext::new("delete_rehearsal")
                    .with_entity("rehearsal")
                    .with_entity_id(id),
            )
        })
    }
}

#[async_trait]
impl CompanyRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
