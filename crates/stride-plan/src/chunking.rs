//! Splitting an estimate into chunks and spreading them over days.

use stride_core::entities::MAX_ESTIMATE_MINUTES;

/// Size of a regular chunk.
pub const CHUNK_MINUTES: u32 = 30;

/// A trailing remainder shorter than this is folded into the previous chunk.
pub const MIN_LAST_CHUNK_MINUTES: u32 = 10;

/// Estimates below this are raised to it.
pub const MIN_TOTAL_MINUTES: u32 = 30;

/// Assumed effort for assignments without an estimate.
pub const DEFAULT_ESTIMATE_MINUTES: u32 = 60;

/// Effective workload for an optional estimate, clamped to
/// `MIN_TOTAL_MINUTES..=MAX_ESTIMATE_MINUTES`.
///
/// Stored records are not trusted to respect the cap, since the data file can
/// be edited by hand.
#[must_use]
pub fn total_minutes(estimate: Option<u32>) -> u32 {
    estimate
        .unwrap_or(DEFAULT_ESTIMATE_MINUTES)
        .clamp(MIN_TOTAL_MINUTES, MAX_ESTIMATE_MINUTES)
}

/// Split `total` into 30-minute chunks. A remainder under 10 minutes is merged
/// into the last full chunk, so the result always sums to `total`.
#[must_use]
pub fn split_minutes(total: u32) -> Vec<u32> {
    let mut chunks = Vec::new();
    let mut remaining = total;
    while remaining > 0 {
        let mut take = remaining.min(CHUNK_MINUTES);
        let left = remaining - take;
        if left > 0 && left < MIN_LAST_CHUNK_MINUTES {
            take = remaining;
        }
        chunks.push(take);
        remaining -= take;
    }
    chunks
}

/// Number of chunks an assignment with this estimate produces.
///
/// Same result as `split_minutes(total_minutes(estimate)).len()` without
/// building the vector.
#[must_use]
pub fn chunk_count(estimate: Option<u32>) -> u32 {
    let total = total_minutes(estimate);
    let short_tail = total % CHUNK_MINUTES >= MIN_LAST_CHUNK_MINUTES;
    (total / CHUNK_MINUTES + u32::from(short_tail)).max(1)
}

/// Day offset for chunk `index` of `count` over `span_days` days.
///
/// Computes `round(index * (span - 1) / (count - 1))` with halves rounding up,
/// so the first chunk lands on day 0 and the last on the final day. A single
/// chunk always lands on day 0.
#[must_use]
pub fn default_day_offset(index: u32, count: u32, span_days: u32) -> u32 {
    if count <= 1 || span_days <= 1 {
        return 0;
    }
    let steps = u64::from(count - 1);
    let last_day = u64::from(span_days - 1);
    let offset = (2 * u64::from(index) * last_day + steps) / (2 * steps);
    u32::try_from(offset.min(last_day)).unwrap_or(0)
}
