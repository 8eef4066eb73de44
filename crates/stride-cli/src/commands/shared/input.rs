//! Parsing of user-typed dates and chunk keys.

use std::str::FromStr;

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use stride_core::ids::ChunkKey;
use stride_plan::PlanClock;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalize a `--due` value for storage.
///
/// RFC 3339 input is kept as typed. A bare `YYYY-MM-DD` means 23:59 on that
/// day in the plan timezone.
pub fn due_input(raw: &str, clock: &PlanClock) -> anyhow::Result<String> {
    let raw = raw.trim();
    if DateTime::parse_from_rfc3339(raw).is_ok() {
        return Ok(raw.to_string());
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).with_context(|| {
        format!("invalid due '{raw}': expected RFC 3339 (2026-10-21T17:00:00Z) or YYYY-MM-DD")
    })?;
    Ok(clock.end_of_day(date)?.to_rfc3339())
}

/// Parse a calendar day given as `YYYY-MM-DD`.
pub fn date_input(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .with_context(|| format!("invalid date '{raw}': expected YYYY-MM-DD"))
}

/// Parse an RFC 3339 instant such as the `--now` override.
pub fn instant_input(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("invalid instant '{raw}': expected RFC 3339"))
}

pub fn chunk_key_input(raw: &str) -> anyhow::Result<ChunkKey> {
    Ok(ChunkKey::from_str(raw.trim())?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::America::Chicago;
    use pretty_assertions::assert_eq;

    use super::*;

    fn clock() -> PlanClock {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 19, 15, 0, 0)
            .single()
            .expect("valid instant");
        PlanClock::new(now, Chicago)
    }

    #[test]
    fn rfc3339_due_is_kept_verbatim() {
        let due = due_input(" 2026-10-21T17:00:00+02:00 ", &clock()).expect("due should parse");
        assert_eq!(due, "2026-10-21T17:00:00+02:00");
    }

    #[test]
    fn bare_date_due_is_end_of_local_day() {
        let due = due_input("2026-10-21", &clock()).expect("due should parse");
        assert_eq!(due, "2026-10-21T23:59:00-05:00");
    }

    #[test]
    fn garbage_due_is_rejected() {
        let err = due_input("next friday", &clock()).expect_err("should fail");
        assert!(err.to_string().contains("invalid due 'next friday'"));
    }

    #[test]
    fn date_input_rejects_timestamps() {
        assert!(date_input("2026-10-21T00:00:00Z").is_err());
        assert_eq!(
            date_input("2026-10-21").expect("date should parse"),
            NaiveDate::from_ymd_opt(2026, 10, 21).expect("valid date")
        );
    }

    #[test]
    fn chunk_key_input_splits_on_last_separator() {
        let key = chunk_key_input("asg-a|b|2").expect("key should parse");
        assert_eq!(key.assignment_id(), "asg-a|b");
        assert_eq!(key.index(), 2);
    }
}
