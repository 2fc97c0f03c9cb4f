//! Day-level scheduling services.
//!
//! These functions are the stateful counterpart to [`crate::scheduler`]: they
//! read a consistent-enough snapshot of the company, run the pure pipeline,
//! and persist results through the repository. There is no lock between the
//! snapshot and the writes; the repository's conflict check on
//! `create_rehearsal` is what arbitrates concurrent fills, and a lost race
//! surfaces here as a skipped rehearsal rather than an error.

use chrono::Weekday;

use crate::db::{CompanyRepository, RepositoryResult};
use crate::models::{weekday_full_name, Rehearsal};
use crate::scheduler::{
    self, auto_schedule_day, find_best_rehearsal_opportunities, EfficiencyBasis, Opportunity,
    SchedulingSummary,
};

/// Outcome of [`fill_day`].
#[derive(Debug, Clone, Default)]
pub struct DayFillReport {
    /// Rehearsals persisted by this call.
    pub scheduled: Vec<Rehearsal>,
    /// Rehearsals dropped because their slot was booked between snapshot and
    /// write.
    pub skipped: usize,
}

/// Rank every schedulable opportunity on `day` without persisting anything.
pub async fn plan_day(
    repo: &dyn CompanyRepository,
    day: Weekday,
    basis: EfficiencyBasis,
) -> RepositoryResult<Vec<Opportunity>> {
    let actors = repo.list_actors().await?;
    let rehearsals = repo.list_rehearsals().await?;
    let timeslots = repo.list_timeslots().await?;
    let scenes = repo.list_scenes().await?;

    Ok(find_best_rehearsal_opportunities(
        &actors,
        day,
        &rehearsals,
        &timeslots,
        &scenes,
        basis,
    ))
}

/// Auto-fill `day` with up to `max_rehearsals` rehearsals and persist them.
///
/// The fill itself runs on an in-memory snapshot; each generated rehearsal is
/// then written through `create_rehearsal`. A conflict on write (another
/// caller took the slot first) skips that rehearsal and continues with the
/// rest. Any other repository error aborts the fill, leaving already-written
/// rehearsals in place.
pub async fn fill_day(
    repo: &dyn CompanyRepository,
    day: Weekday,
    max_rehearsals: usize,
    basis: EfficiencyBasis,
) -> RepositoryResult<DayFillReport> {
    let actors = repo.list_actors().await?;
    let rehearsals = repo.list_rehearsals().await?;
    let timeslots = repo.list_timeslots().await?;
    let scenes = repo.list_scenes().await?;

    let generated = auto_schedule_day(
        &actors,
        day,
        &rehearsals,
        &timeslots,
        &scenes,
        max_rehearsals,
        basis,
    );

    let mut report = DayFillReport::default();
    for rehearsal in generated {
        match repo.create_rehearsal(rehearsal).await {
            Ok(saved) => report.scheduled.push(saved),
            Err(err) if err.is_conflict() => {
                tracing::warn!(
                    day = %weekday_full_name(day),
                    error = %err,
                    "slot booked since snapshot, skipping rehearsal"
                );
                report.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        day = %weekday_full_name(day),
        scheduled = report.scheduled.len(),
        skipped = report.skipped,
        "day fill complete"
    );

    Ok(report)
}

/// Day-scoped scheduling overview computed against current repository state.
pub async fn day_summary(
    repo: &dyn CompanyRepository,
    day: Weekday,
    basis: EfficiencyBasis,
) -> RepositoryResult<SchedulingSummary> {
    let actors = repo.list_actors().await?;
    let rehearsals = repo.list_rehearsals().await?;
    let timeslots = repo.list_timeslots().await?;
    let scenes = repo.list_scenes().await?;

    Ok(scheduler::scheduling_summary(
        &actors,
        day,
        &rehearsals,
        &timeslots,
        &scenes,
        basis,
    ))
}
