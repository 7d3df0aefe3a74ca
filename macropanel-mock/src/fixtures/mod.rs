pub mod fred;
pub mod yahoo;

use chrono::{Datelike, NaiveDate, Weekday};
use macropanel_core::Frequency;

/// Deterministic level of a synthetic series at day `t` since its anchor.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub base: f64,
    /// Linear drift per day.
    pub slope: f64,
    pub amplitude: f64,
    /// Cycle length in days.
    pub period: f64,
}

impl Profile {
    pub const fn new(base: f64, slope: f64, amplitude: f64, period: f64) -> Self {
        Self {
            base,
            slope,
            amplitude,
            period,
        }
    }

    pub fn at(&self, t: f64) -> f64 {
        let phase = std::f64::consts::TAU * t / self.period;
        self.base + self.slope * t + self.amplitude * phase.sin()
    }
}

/// Days since 1970-01-01, so every run yields the same value for the same date.
#[allow(clippy::cast_precision_loss)]
fn days_since_epoch(date: NaiveDate) -> f64 {
    (date - NaiveDate::default()).num_days() as f64
}

/// Whether a series of the given cadence prints on `date`.
///
/// Daily series print on weekdays, weekly series on Saturdays (week-ending),
/// monthly on the first of the month, quarterly on the first of each quarter.
pub fn prints_on(frequency: Frequency, date: NaiveDate) -> bool {
    match frequency {
        Frequency::Daily => !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        Frequency::Weekly => date.weekday() == Weekday::Sat,
        Frequency::Monthly => date.day() == 1,
        Frequency::Quarterly => date.day() == 1 && matches!(date.month(), 1 | 4 | 7 | 10),
    }
}

/// Every print date in `[start, end]` with its synthetic value.
pub fn generate(
    frequency: Frequency,
    profile: Profile,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<(NaiveDate, f64)> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| prints_on(frequency, *d))
        .map(|d| (d, profile.at(days_since_epoch(d))))
        .collect()
}
