//! The seven-day chunk scheduler.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use stride_core::entities::{Assignment, DayGroup, PlanChunk, SkippedAssignment, StudyPlan};
use stride_core::ids::ChunkKey;
use stride_core::overrides::OverrideMap;

use crate::chunking::{default_day_offset, split_minutes, total_minutes};
use crate::clock::PlanClock;

/// Number of calendar days covered by a plan, today included.
pub const WINDOW_DAYS: u32 = 7;

/// Assignments due more than this many days before today are left out.
pub const STALE_AFTER_DAYS: u64 = 30;

/// Inclusive range of days a plan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PlanWindow {
    /// The window that opens on `today`.
    #[must_use]
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: today + Days::new(u64::from(WINDOW_DAYS - 1)),
        }
    }

    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        (self.start..=self.end).contains(&day)
    }

    /// Pull `day` onto the nearest window boundary if it lies outside.
    #[must_use]
    pub fn clamp(&self, day: NaiveDate) -> NaiveDate {
        day.clamp(self.start, self.end)
    }

    #[must_use]
    pub fn day(&self, offset: u32) -> NaiveDate {
        self.clamp(self.start + Days::new(u64::from(offset)))
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take_while(|day| *day <= self.end)
    }
}

/// Compute the study plan for `assignments` as seen at `clock.now()`.
///
/// Assignments whose due date cannot be parsed are reported in
/// [`StudyPlan::skipped`] instead of failing the whole plan. The result has
/// one [`DayGroup`] per window day, empty days included.
#[must_use]
pub fn build_plan(
    assignments: &[Assignment],
    overrides: &OverrideMap,
    clock: &PlanClock,
) -> StudyPlan {
    let window = PlanWindow::starting(clock.today());
    let stale_cutoff = window.start - Days::new(STALE_AFTER_DAYS);

    let mut skipped = Vec::new();
    let mut live: Vec<(&Assignment, DateTime<FixedOffset>)> = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        match assignment.due_at() {
            Ok(due) if clock.day_of(&due) < stale_cutoff => {
                tracing::debug!(assignment = %assignment.id, %due, "skipping stale assignment");
            }
            Ok(due) => live.push((assignment, due)),
            Err(error) => {
                tracing::warn!(
                    assignment = %assignment.id,
                    %error,
                    "skipping assignment with unparseable due date"
                );
                skipped.push(SkippedAssignment {
                    assignment_id: assignment.id.clone(),
                    title: assignment.title.clone(),
                    reason: error.to_string(),
                });
            }
        }
    }

    // Stable: equal due instants keep input order.
    live.sort_by_key(|(_, due)| *due);

    let mut chunks: Vec<PlanChunk> = live
        .into_iter()
        .flat_map(|(assignment, due)| chunk_assignment(assignment, due, overrides, clock, &window))
        .collect();
    chunks.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.due.cmp(&b.due)));

    tracing::debug!(
        chunks = chunks.len(),
        skipped = skipped.len(),
        start = %window.start,
        "computed study plan"
    );

    StudyPlan {
        window_start: window.start,
        window_end: window.end,
        timezone: clock.timezone().name().to_string(),
        days: group_by_day(chunks, &window, clock),
        skipped,
    }
}

/// Chunks for one assignment with overrides applied.
fn chunk_assignment(
    assignment: &Assignment,
    due: DateTime<FixedOffset>,
    overrides: &OverrideMap,
    clock: &PlanClock,
    window: &PlanWindow,
) -> Vec<PlanChunk> {
    // Overdue work collapses onto today; far-off work stretches to the window end.
    let last_day = window.clamp(clock.day_of(&due));
    let span_days = u32::try_from(PlanClock::days_between(window.start, last_day)).unwrap_or(0) + 1;

    let minutes = split_minutes(total_minutes(assignment.estimate_minutes));
    let count = u32::try_from(minutes.len()).unwrap_or(u32::MAX);

    (0u32..)
        .zip(minutes)
        .map(|(index, minutes)| {
            let key = ChunkKey::new(assignment.id.clone(), index);
            let stored = overrides.get(&key);
            let pinned = stored.and_then(|o| o.day);
            let day = pinned.map_or_else(
                || window.day(default_day_offset(index, count, span_days)),
                |day| window.clamp(day),
            );

            PlanChunk {
                key,
                assignment_id: assignment.id.clone(),
                index,
                course: assignment.course.clone(),
                title: assignment.title.clone(),
                due,
                day,
                minutes,
                done: stored.and_then(|o| o.done).unwrap_or(false),
                moved: pinned.is_some(),
            }
        })
        .collect()
}

fn group_by_day(chunks: Vec<PlanChunk>, window: &PlanWindow, clock: &PlanClock) -> Vec<DayGroup> {
    let mut by_day: BTreeMap<NaiveDate, Vec<PlanChunk>> = BTreeMap::new();
    for chunk in chunks {
        by_day.entry(chunk.day).or_default().push(chunk);
    }

    window
        .days()
        .map(|date| {
            let chunks = by_day.remove(&date).unwrap_or_default();
            let total_minutes = chunks.iter().map(|c| c.minutes).sum();
            let done_minutes = chunks.iter().filter(|c| c.done).map(|c| c.minutes).sum();
            DayGroup {
                date,
                label: clock.label_for(date),
                total_minutes,
                done_minutes,
                chunks,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use chrono_tz::Tz;
    use pretty_assertions::assert_eq;

    use super::*;

    fn clock() -> PlanClock {
        PlanClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap(), Tz::UTC)
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn assignment(id: &str, due: &str, estimate: Option<u32>) -> Assignment {
        Assignment {
            id: id.into(),
            course: None,
            title: format!("Work {id}"),
            due: due.into(),
            notes: None,
            estimate_minutes: estimate,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn window_spans_seven_days() {
        let window = PlanWindow::starting(date(10, 19));
        assert_eq!(window.end, date(10, 25));
        assert_eq!(window.days().count(), 7);
        assert!(window.contains(date(10, 25)));
        assert!(!window.contains(date(10, 26)));
        assert_eq!(window.clamp(date(9, 1)), date(10, 19));
        assert_eq!(window.clamp(date(12, 1)), date(10, 25));
    }

    #[test]
    fn empty_input_yields_seven_empty_days() {
        let plan = build_plan(&[], &OverrideMap::new(), &clock());
        assert_eq!(plan.days.len(), 7);
        assert!(plan.is_empty());
        assert_eq!(plan.days[0].label, "Today");
        assert_eq!(plan.days[1].label, "Tomorrow");
        assert_eq!(plan.days[2].label, "Wed, Oct 21");
        assert_eq!(plan.timezone, "UTC");
    }

    #[test]
    fn default_estimate_spreads_first_today_last_on_due_day() {
        let plan = build_plan(
            &[assignment("a", "2026-10-22T12:00:00Z", None)],
            &OverrideMap::new(),
            &clock(),
        );
        let chunks: Vec<_> = plan.chunks().collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!((chunks[0].day, chunks[0].minutes), (date(10, 19), 30));
        assert_eq!((chunks[1].day, chunks[1].minutes), (date(10, 22), 30));
    }

    #[test]
    fn chunks_sort_by_day_then_due() {
        let plan = build_plan(
            &[
                assignment("late", "2026-10-24T12:00:00Z", Some(30)),
                assignment("early", "2026-10-20T12:00:00Z", Some(30)),
            ],
            &OverrideMap::new(),
            &clock(),
        );
        let today = &plan.days[0];
        let ids: Vec<_> = today.chunks.iter().map(|c| c.assignment_id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);
        assert_eq!(today.total_minutes, 60);
    }

    #[test]
    fn unparseable_due_is_skipped_not_fatal() {
        let plan = build_plan(
            &[
                assignment("bad", "tomorrow-ish", None),
                assignment("good", "2026-10-20T12:00:00Z", None),
            ],
            &OverrideMap::new(),
            &clock(),
        );
        assert_eq!(plan.skipped.len(), 1);
        assert_eq!(plan.skipped[0].assignment_id, "bad");
        assert_eq!(plan.chunks().count(), 2);
    }

    #[test]
    fn hand_edited_huge_estimate_is_capped() {
        let plan = build_plan(
            &[assignment("huge", "2026-10-25T12:00:00Z", Some(u32::MAX))],
            &OverrideMap::new(),
            &clock(),
        );
        assert_eq!(plan.chunks().count(), 336);
        assert_eq!(plan.total_minutes(), stride_core::entities::MAX_ESTIMATE_MINUTES);
    }

    #[test]
    fn moved_flag_tracks_day_override() {
        let mut overrides = OverrideMap::new();
        overrides.move_to(ChunkKey::new("a", 1), date(10, 21));
        let plan = build_plan(
            &[assignment("a", "2026-10-25T12:00:00Z", Some(90))],
            &overrides,
            &clock(),
        );
        let moved: Vec<_> = plan.chunks().filter(|c| c.moved).collect();
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].day, date(10, 21));
    }
}
