//! Day-granularity time handling in a fixed IANA timezone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use stride_config::PlannerConfig;

use crate::error::PlanError;

/// An injected "now" plus the zone that defines where days begin and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanClock {
    now: DateTime<Utc>,
    tz: Tz,
}

impl PlanClock {
    #[must_use]
    pub const fn new(now: DateTime<Utc>, tz: Tz) -> Self {
        Self { now, tz }
    }

    /// Clock reading the system time.
    #[must_use]
    pub fn system(tz: Tz) -> Self {
        Self::new(Utc::now(), tz)
    }

    /// System clock in the configured planner timezone.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidTimezone` if the zone name is unknown.
    pub fn from_config(config: &PlannerConfig) -> Result<Self, PlanError> {
        Ok(Self::system(parse_timezone(&config.timezone)?))
    }

    /// Same zone, different instant.
    #[must_use]
    pub const fn at(self, now: DateTime<Utc>) -> Self {
        Self { now, tz: self.tz }
    }

    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// The calendar day containing "now".
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.day_of(&self.now)
    }

    /// The calendar day containing `instant`.
    #[must_use]
    pub fn day_of<T: TimeZone>(&self, instant: &DateTime<T>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Whole days from `from` to `to`; negative when `to` is earlier.
    #[must_use]
    pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
        (to - from).num_days()
    }

    /// `"Today"`, `"Tomorrow"`, or e.g. `"Wed, Oct 21"`.
    #[must_use]
    pub fn label_for(&self, date: NaiveDate) -> String {
        match Self::days_between(self.today(), date) {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => date.format("%a, %b %-d").to_string(),
        }
    }

    /// 23:59 local time on `date`, for due dates entered without a time.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidDate` if that local time does not exist.
    pub fn end_of_day(&self, date: NaiveDate) -> Result<DateTime<FixedOffset>, PlanError> {
        let local = date.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN));
        self.tz
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.fixed_offset())
            .ok_or_else(|| PlanError::InvalidDate(format!("{local} does not exist in {}", self.tz)))
    }
}

/// Parse an IANA zone name such as `America/Chicago`.
///
/// # Errors
///
/// Returns `PlanError::InvalidTimezone` if the name is not in the database.
pub fn parse_timezone(name: &str) -> Result<Tz, PlanError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| PlanError::InvalidTimezone {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use chrono_tz::America::New_York;
    use pretty_assertions::assert_eq;

    use super::*;

    fn utc(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_follows_plan_timezone() {
        // 02:30 UTC is still the previous evening in New York.
        let clock = PlanClock::new(utc("2026-10-20T02:30:00Z"), New_York);
        assert_eq!(clock.today(), date(2026, 10, 19));

        let clock = PlanClock::new(utc("2026-10-20T02:30:00Z"), Tz::UTC);
        assert_eq!(clock.today(), date(2026, 10, 20));
    }

    #[test]
    fn day_of_converts_offsets() {
        let clock = PlanClock::new(utc("2026-10-19T12:00:00Z"), New_York);
        let due = DateTime::parse_from_rfc3339("2026-10-22T01:00:00+00:00").unwrap();
        assert_eq!(clock.day_of(&due), date(2026, 10, 21));
    }

    #[test]
    fn labels() {
        let clock = PlanClock::new(utc("2026-10-19T12:00:00Z"), Tz::UTC);
        assert_eq!(clock.label_for(date(2026, 10, 19)), "Today");
        assert_eq!(clock.label_for(date(2026, 10, 20)), "Tomorrow");
        assert_eq!(clock.label_for(date(2026, 10, 21)), "Wed, Oct 21");
        assert_eq!(clock.label_for(date(2026, 11, 1)), "Sun, Nov 1");
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(PlanClock::days_between(date(2026, 10, 19), date(2026, 10, 25)), 6);
        assert_eq!(PlanClock::days_between(date(2026, 10, 19), date(2026, 9, 19)), -30);
    }

    #[test]
    fn end_of_day_uses_local_offset() {
        let clock = PlanClock::new(utc("2026-10-19T12:00:00Z"), New_York);
        let due = clock.end_of_day(date(2026, 10, 21)).unwrap();
        assert_eq!(due.to_rfc3339(), "2026-10-21T23:59:00-04:00");
        // After the November DST change the offset moves to -05:00.
        let due = clock.end_of_day(date(2026, 11, 3)).unwrap();
        assert_eq!(due.to_rfc3339(), "2026-11-03T23:59:00-05:00");
    }

    #[test]
    fn parse_timezone_accepts_iana_names_only() {
        assert_eq!(parse_timezone("America/New_York").unwrap(), New_York);
        assert_eq!(parse_timezone(" UTC ").unwrap(), Tz::UTC);
        assert!(matches!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(PlanError::InvalidTimezone { .. })
        ));
    }

    #[test]
    fn from_config_validates_zone() {
        let config = PlannerConfig {
            timezone: "Nowhere/Special".into(),
            ..PlannerConfig::default()
        };
        assert!(PlanClock::from_config(&config).is_err());
        assert!(PlanClock::from_config(&PlannerConfig::default()).is_ok());
    }
}
