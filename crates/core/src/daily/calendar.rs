//! Calendar day sources for the daily rotation.
//!
//! The rotation keys picks by calendar day, so the day boundary must come from
//! an explicit timezone rather than the host's local time.

use std::sync::{PoisonError, RwLock};

use chrono::{Days, NaiveDate, Utc};
use chrono_tz::Tz;

/// Source of the current calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock reading the current day in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// Manually driven clock.
#[derive(Debug)]
pub struct FixedClock {
    today: RwLock<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: RwLock::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        *self.today.write().unwrap_or_else(PoisonError::into_inner) = today;
    }

    /// Moves the clock forward by `days` calendar days.
    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(next) = today.checked_add_days(Days::new(days)) {
            *today = next;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances_across_month_end() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        clock.advance_days(1);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        clock.advance_days(1);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        clock.set(NaiveDate::from_ymd_opt(2030, 6, 15).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2030, 6, 15).unwrap());
    }

    #[test]
    fn test_system_clock_stays_within_a_day_of_utc() {
        let utc_today = Utc::now().date_naive();
        for tz in [chrono_tz::Pacific::Kiritimati, chrono_tz::Pacific::Pago_Pago] {
            let today = SystemClock::new(tz).today();
            let delta = (today - utc_today).num_days().abs();
            assert!(delta <= 1, "{} is {} days away from UTC", tz, delta);
        }
    }
}
