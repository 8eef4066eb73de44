use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use stride_core::entities::Assignment;
use stride_core::enums::{AssignmentSort, DueFilter};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct ListParams<'a> {
    pub course: Option<&'a str>,
    pub search: Option<&'a str>,
    pub sort: Option<&'a str>,
    pub overdue: bool,
    pub upcoming: bool,
    pub limit: Option<u32>,
}

impl ListParams<'_> {
    const fn due_filter(&self) -> DueFilter {
        if self.overdue {
            DueFilter::Overdue
        } else if self.upcoming {
            DueFilter::Upcoming
        } else {
            DueFilter::All
        }
    }
}

pub fn run(params: &ListParams<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(params.limit, flags.limit, ctx.config.general.default_limit);
    let sort = params
        .sort
        .map(|raw| parse_enum::<AssignmentSort>(raw, "sort"))
        .transpose()?
        .unwrap_or_default();

    let mut assignments = ctx.store.list_assignments()?;
    filter_assignments(
        &mut assignments,
        params.course,
        params.search,
        params.due_filter(),
        ctx.clock.now(),
    );
    sort_assignments(&mut assignments, sort);
    assignments.truncate(usize::try_from(limit)?);

    output(&assignments, flags.format)
}

/// Keep assignments matching every given criterion.
///
/// An assignment with an unparseable due date passes only `DueFilter::All`.
pub fn filter_assignments(
    assignments: &mut Vec<Assignment>,
    course: Option<&str>,
    search: Option<&str>,
    due: DueFilter,
    now: DateTime<Utc>,
) {
    if let Some(course) = course.map(str::trim).filter(|c| !c.is_empty()) {
        assignments.retain(|a| {
            a.course
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(course))
        });
    }
    if let Some(query) = search {
        assignments.retain(|a| a.matches_search(query));
    }
    match due {
        DueFilter::All => {}
        DueFilter::Overdue => assignments.retain(|a| a.due_at().is_ok_and(|at| at < now)),
        DueFilter::Upcoming => assignments.retain(|a| a.due_at().is_ok_and(|at| at >= now)),
    }
}

/// Stable sort by the requested key.
pub fn sort_assignments(assignments: &mut [Assignment], sort: AssignmentSort) {
    match sort {
        AssignmentSort::Due => assignments.sort_by(cmp_due),
        AssignmentSort::Course => assignments.sort_by(|a, b| {
            cmp_missing_last(a.course.as_deref(), b.course.as_deref(), |x, y| {
                x.to_lowercase().cmp(&y.to_lowercase())
            })
            .then_with(|| cmp_due(a, b))
        }),
        AssignmentSort::Title => {
            assignments.sort_by_cached_key(|a| a.title.to_lowercase());
        }
        AssignmentSort::Created => assignments.sort_by_key(|a| a.created_at),
    }
}

fn cmp_due(a: &Assignment, b: &Assignment) -> Ordering {
    cmp_missing_last(a.due_at().ok(), b.due_at().ok(), |x, y| x.cmp(&y))
}

fn cmp_missing_last<T, F>(a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: FnOnce(T, T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use stride_core::entities::Assignment;
    use stride_core::enums::{AssignmentSort, DueFilter};

    use super::{filter_assignments, sort_assignments};

    fn assignment(id: &str, course: Option<&str>, title: &str, due: &str, day: u32) -> Assignment {
        let created = Utc
            .with_ymd_and_hms(2026, 10, day, 8, 0, 0)
            .single()
            .expect("valid instant");
        Assignment {
            id: id.to_string(),
            course: course.map(ToString::to_string),
            title: title.to_string(),
            due: due.to_string(),
            notes: None,
            estimate_minutes: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn sample() -> Vec<Assignment> {
        vec![
            assignment("asg-1", Some("CS 201"), "lab report", "2026-10-25T23:59:00Z", 3),
            assignment("asg-2", Some("Math"), "Problem set", "2026-10-18T12:00:00Z", 1),
            assignment("asg-3", None, "Reading", "whenever", 2),
            assignment("asg-4", Some("cs 201"), "Essay draft", "2026-10-21T09:00:00-05:00", 4),
        ]
    }

    fn ids(assignments: &[Assignment]) -> Vec<&str> {
        assignments.iter().map(|a| a.id.as_str()).collect()
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
            .single()
            .expect("valid instant")
    }

    #[test]
    fn due_sort_puts_unparseable_last() {
        let mut list = sample();
        sort_assignments(&mut list, AssignmentSort::Due);
        assert_eq!(ids(&list), vec!["asg-2", "asg-4", "asg-1", "asg-3"]);
    }

    #[test]
    fn course_sort_is_case_insensitive_then_due() {
        let mut list = sample();
        sort_assignments(&mut list, AssignmentSort::Course);
        assert_eq!(ids(&list), vec!["asg-4", "asg-1", "asg-2", "asg-3"]);
    }

    #[test]
    fn title_and_created_sorts() {
        let mut list = sample();
        sort_assignments(&mut list, AssignmentSort::Title);
        assert_eq!(ids(&list), vec!["asg-4", "asg-1", "asg-2", "asg-3"]);

        sort_assignments(&mut list, AssignmentSort::Created);
        assert_eq!(ids(&list), vec!["asg-2", "asg-3", "asg-1", "asg-4"]);
    }

    #[test]
    fn course_filter_ignores_case() {
        let mut list = sample();
        filter_assignments(&mut list, Some("CS 201"), None, DueFilter::All, now());
        assert_eq!(ids(&list), vec!["asg-1", "asg-4"]);
    }

    #[test]
    fn overdue_and_upcoming_skip_unparseable() {
        let mut overdue = sample();
        filter_assignments(&mut overdue, None, None, DueFilter::Overdue, now());
        assert_eq!(ids(&overdue), vec!["asg-2"]);

        let mut upcoming = sample();
        filter_assignments(&mut upcoming, None, None, DueFilter::Upcoming, now());
        assert_eq!(ids(&upcoming), vec!["asg-1", "asg-4"]);
    }

    #[test]
    fn search_combines_with_course() {
        let mut list = sample();
        filter_assignments(&mut list, Some("cs 201"), Some("essay"), DueFilter::All, now());
        assert_eq!(ids(&list), vec!["asg-4"]);
    }
}
