//! The pure scheduling pipeline.
//!
//! Everything in this module is stateless and synchronous: the functions
//! operate only on the collections passed in and never touch storage. The
//! pipeline, leaves first:
//!
//! 1. clock-time parsing ([`crate::models::clock`])
//! 2. priority scoring ([`calculate_priority`])
//! 3. scene matching ([`find_best_scenes_for_actors`])
//! 4. opportunity ranking ([`find_best_rehearsal_opportunities`])
//! 5. day auto-fill ([`auto_schedule_day`])
//!
//! Empty inputs yield empty outputs, never errors. No exclusivity is
//! enforced here: a timeslot is excluded only when the caller's
//! `existing_rehearsals` snapshot already references it. Two callers ranking
//! stale snapshots can propose the same slot; the persistence boundary
//! ([`crate::db`]) is where that race is lost.

use crate::models::{clock, Actor, Rehearsal, Scene, Timeslot};
use crate::api::RehearsalId;
use chrono::Weekday;
use std::cmp::Ordering;
use std::collections::HashSet;


/// Default cap on rehearsals generated by [`auto_schedule_day`].
pub const DEFAULT_MAX_REHEARSALS: usize = 5;

/// How scene efficiency is computed.
///
/// The application this engine was extracted from divides the matched cast by
/// itself, so every non-empty match scores exactly 1.0. That behavior is kept
/// as the default because existing data and thresholds were tuned against it;
/// [`EfficiencyBasis::FullCast`] is the opt-in corrected ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EfficiencyBasis {
    /// Matched cast over matched cast: 1.0 whenever any actor matches.
    #[default]
    AvailableOnly,
    /// Matched cast over the scene's full assigned cast, counted across all
    /// actors (not just the available ones).
    FullCast,
}

/// A scene paired with the available actors who are cast in it.
#[derive(Debug, Clone)]
pub struct SceneMatch {
    pub scene: Scene,
    pub actors: Vec<Actor>,
    /// Coverage quality in `[0, 1]`; see [`EfficiencyBasis`].
    pub efficiency: f64,
    /// Number of matched actors.
    pub coverage: usize,
}

/// A candidate (timeslot, scene, actor-set) pairing, scored for scheduling
/// value. Transient: opportunities are ranked and consumed, never persisted.
#[derive(Debug, Clone)]
pub struct Opportunity {
    pub timeslot: Timeslot,
    pub scene: Scene,
    pub actors: Vec<Actor>,
    pub efficiency: f64,
    pub priority: i32,
}

/// Day-scoped overview of what the scheduler sees.
#[derive(Debug, Clone)]
pub struct SchedulingSummary {
    /// Timeslots on the target day.
    pub total_timeslots: usize,
    /// Day timeslots not already consumed by an existing rehearsal.
    pub available_timeslots: usize,
    pub total_opportunities: usize,
    pub best_opportunity: Option<Opportunity>,
    /// Mean priority across all opportunities; 0.0 when there are none.
    pub average_priority: f64,
}

/// Composite priority score for an opportunity, in `[0, 100]`.
///
/// `min(actor_count * 10, 50) + efficiency * 30 + min(duration / 30, 20)`,
/// rounded. Monotonic in all three inputs and total: a slot with malformed
/// bounds contributes via the 120-minute duration fallback, never an error.
pub fn calculate_priority(actor_count: usize, efficiency: f64, timeslot: &Timeslot) -> i32 {
    let actor_score = ((actor_count * 10).min(50)) as f64;
    let efficiency_score = efficiency * 30.0;
    let duration_score = (clock::slot_duration_minutes(timeslot) as f64 / 30.0).min(20.0);

    (actor_score + efficiency_score + duration_score).round() as i32
}

/// For a pool of actors known to be available together, find the scenes that
/// can be rehearsed and score each.
///
/// `roster` is the full company; it only feeds the denominator under
/// [`EfficiencyBasis::FullCast`]. Scenes with no matched actor are dropped.
/// Sorted by efficiency descending, then coverage descending, then scene
/// title (deterministic tie-break).
pub fn find_best_scenes_for_actors(
    available_actors: &[Actor],
    roster: &[Actor],
    scenes: &[Scene],
    basis: EfficiencyBasis,
) -> Vec<SceneMatch> {
    let mut matches: Vec<SceneMatch> = Vec::new();

    for scene in scenes {
        let cast: Vec<Actor> = available_actors
            .iter()
            .filter(|actor| actor.is_cast_in(&scene.id))
            .cloned()
            .collect();
        if cast.is_empty() {
            continue;
        }

        let efficiency = match basis {
            // Numerator and denominator are both the matched cast, so any
            // non-empty match scores 1.0. Kept verbatim; see EfficiencyBasis.
            EfficiencyBasis::AvailableOnly => cast.len() as f64 / cast.len() as f64,
            EfficiencyBasis::FullCast => {
                let assigned = roster
                    .iter()
                    .filter(|actor| actor.is_cast_in(&scene.id))
                    .count();
                cast.len() as f64 / assigned.max(cast.len()) as f64
            }
        };

        matches.push(SceneMatch {
            scene: scene.clone(),
            coverage: cast.len(),
            actors: cast,
            efficiency,
        });
    }

    matches.sort_by(|a, b| {
        b.efficiency
            .partial_cmp(&a.efficiency)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.coverage.cmp(&a.coverage))
            .then_with(|| a.scene.title.cmp(&b.scene.title))
    });

    matches
}

/// Rank every schedulable (timeslot, scene) pairing on the target day.
///
/// A timeslot is skipped when its id already appears in
/// `existing_rehearsals[].timeslot.id`, or when no actor is available for it.
/// Sorted by priority descending, then scene title, then timeslot id, so
/// results are reproducible across runs.
pub fn find_best_rehearsal_opportunities(
    actors: &[Actor],
    target_day: Weekday,
    existing_rehearsals: &[Rehearsal],
    timeslots: &[Timeslot],
    scenes: &[Scene],
    basis: EfficiencyBasis,
) -> Vec<Opportunity> {
    let used: HashSet<_> = existing_rehearsals
        .iter()
        .map(|rehearsal| &rehearsal.timeslot.id)
        .collect();

    let mut opportunities: Vec<Opportunity> = Vec::new();

    for slot in timeslots.iter().filter(|slot| slot.day == target_day) {
        if used.contains(&slot.id) {
            continue;
        }

        let available: Vec<Actor> = actors
            .iter()
            .filter(|actor| actor.is_available_for(&slot.id))
            .cloned()
            .collect();
        if available.is_empty() {
            continue;
        }

        for scene_match in find_best_scenes_for_actors(&available, actors, scenes, basis) {
            let priority = calculate_priority(scene_match.actors.len(), scene_match.efficiency, slot);
            opportunities.push(Opportunity {
                timeslot: slot.clone(),
                scene: scene_match.scene,
                actors: scene_match.actors,
                efficiency: scene_match.efficiency,
                priority,
            });
        }
    }

    opportunities.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.scene.title.cmp(&b.scene.title))
            .then_with(|| a.timeslot.id.cmp(&b.timeslot.id))
    });

    tracing::debug!(
        day = %crate::models::weekday_full_name(target_day),
        count = opportunities.len(),
        "ranked rehearsal opportunities"
    );

    opportunities
}

/// Materialize an opportunity as a rehearsal.
///
/// The timeslot and actors are embedded as snapshots; the title defaults to
/// `"<scene title> Rehearsal"`. The rehearsal carries no calendar date yet,
/// only a weekday slot; the persisting caller pins it to a date.
pub fn create_rehearsal_from_opportunity(
    opportunity: &Opportunity,
    custom_title: Option<&str>,
) -> Rehearsal {
    let title = custom_title
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{} Rehearsal", opportunity.scene.title));

    Rehearsal {
        id: RehearsalId::generate(),
        title,
        timeslot: opportunity.timeslot.clone(),
        actors: opportunity.actors.clone(),
        date: None,
        auto_generated: true,
        efficiency: Some(opportunity.efficiency),
        priority: Some(opportunity.priority),
    }
}

/// Greedily fill a day with the best available opportunities.
///
/// Each iteration re-ranks against a growing local copy of
/// `existing_rehearsals`, so a slot consumed by one pick is never proposed
/// again within the same call. Stops after `max_rehearsals` picks or as soon
/// as the ranker comes back empty. Returns only the newly generated
/// rehearsals; the caller merges them with its own state.
pub fn auto_schedule_day(
    actors: &[Actor],
    target_day: Weekday,
    existing_rehearsals: &[Rehearsal],
    timeslots: &[Timeslot],
    scenes: &[Scene],
    max_rehearsals: usize,
    basis: EfficiencyBasis,
) -> Vec<Rehearsal> {
    let mut booked: Vec<Rehearsal> = existing_rehearsals.to_vec();
    let mut generated: Vec<Rehearsal> = Vec::new();

    for _ in 0..max_rehearsals {
        let opportunities =
            find_best_rehearsal_opportunities(actors, target_day, &booked, timeslots, scenes, basis);

        let Some(best) = opportunities.into_iter().next() else {
            break;
        };

        let rehearsal = create_rehearsal_from_opportunity(&best, None);
        tracing::debug!(
            rehearsal = %rehearsal.title,
            timeslot = %rehearsal.timeslot.id,
            priority = best.priority,
            "auto-scheduled rehearsal"
        );
        booked.push(rehearsal.clone());
        generated.push(rehearsal);
    }

    generated
}

/// Day-scoped overview: slot counts, opportunity count, the top opportunity,
/// and the mean priority.
pub fn scheduling_summary(
    actors: &[Actor],
    target_day: Weekday,
    existing_rehearsals: &[Rehearsal],
    timeslots: &[Timeslot],
    scenes: &[Scene],
    basis: EfficiencyBasis,
) -> SchedulingSummary {
    let day_slots: Vec<&Timeslot> = timeslots.iter().filter(|slot| slot.day == target_day).collect();
    let used: HashSet<_> = existing_rehearsals
        .iter()
        .map(|rehearsal| &rehearsal.timeslot.id)
        .collect();
    let available_timeslots = day_slots
        .iter()
        .filter(|slot| !used.contains(&slot.id))
        .count();

    let opportunities = find_best_rehearsal_opportunities(
        actors,
        target_day,
        existing_rehearsals,
        timeslots,
        scenes,
        basis,
    );

    let average_priority = if opportunities.is_empty() {
        0.0
    } else {
        opportunities.iter().map(|o| f64::from(o.priority)).sum::<f64>()
            / opportunities.len() as f64
    };

    SchedulingSummary {
        total_timeslots: day_slots.len(),
        available_timeslots,
        total_opportunities: opportunities.len(),
        average_priority,
        best_opportunity: opportunities.into_iter().next(),
    }
}
