//! Day-by-day text rendering of a [`StudyPlan`].

use std::fmt::Write as _;

use stride_core::entities::{DayGroup, StudyPlan};

use super::table::{TableOptions, render_rows};

const HEADERS: [&str; 6] = ["key", "course", "title", "min", "state", "due"];

/// Render every window day with its chunks, followed by skipped assignments.
#[must_use]
pub fn render_plan(plan: &StudyPlan, options: TableOptions) -> String {
    let mut out = format!(
        "Plan {} to {} ({}): {} min, {} done\n",
        plan.window_start,
        plan.window_end,
        plan.timezone,
        plan.total_minutes(),
        plan.done_minutes()
    );

    for day in &plan.days {
        out.push('\n');
        out.push_str(&day_heading(day));
        out.push('\n');
        if day.chunks.is_empty() {
            out.push_str("  (nothing planned)\n");
            continue;
        }
        let rows = day
            .chunks
            .iter()
            .map(|chunk| {
                let state = if chunk.done {
                    "done"
                } else if chunk.moved {
                    "moved"
                } else {
                    "todo"
                };
                vec![
                    chunk.key.to_string(),
                    chunk.course.clone().unwrap_or_else(|| String::from("-")),
                    chunk.title.clone(),
                    chunk.minutes.to_string(),
                    state.to_string(),
                    chunk.due.format("%a %b %-d %H:%M").to_string(),
                ]
            })
            .collect::<Vec<_>>();
        out.push_str(&render_rows(&HEADERS, &rows, options));
        out.push('\n');
    }

    if !plan.skipped.is_empty() {
        out.push_str("\nSkipped:\n");
        for skipped in &plan.skipped {
            let _ = writeln!(
                out,
                "  {} {}: {}",
                skipped.assignment_id, skipped.title, skipped.reason
            );
        }
    }

    out.trim_end().to_string()
}

fn day_heading(day: &DayGroup) -> String {
    let date = day.date.format("%Y-%m-%d");
    if day.total_minutes == 0 {
        format!("{} ({date})", day.label)
    } else {
        format!(
            "{} ({date}): {} min, {} done",
            day.label, day.total_minutes, day.done_minutes
        )
    }
}
