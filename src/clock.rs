use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Trait for abstracting time operations, enabling testability
pub trait Clock: Send + Sync {
    /// Get the current local datetime
    fn now(&self) -> DateTime<Local>;

    /// Get today's local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// System clock implementation using real time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    /// Freeze the clock at the given instant
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now }
    }

    /// Freeze the clock at noon local time on the given date
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        let now = Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(Local::now);
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_system_clock_now() {
        let clock = SystemClock;
        // Should be a reasonable year
        assert!(clock.now().year() >= 2024);
    }

    #[test]
    fn test_fixed_clock_today() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let clock = FixedClock::at_date(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now(), clock.now());
    }
}
