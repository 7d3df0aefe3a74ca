use chrono::{Days, NaiveDate};

/// Continuous daily date axis shared by every column of a panel.
///
/// Dates are strictly increasing with a one-day step; there are no gaps and
/// no duplicates. A calendar built from a reversed range is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Calendar {
    dates: Vec<NaiveDate>,
}

impl Calendar {
    /// Every date from `start` to `end` inclusive.
    ///
    /// Length is `(end - start).days + 1`, or zero when `start > end`.
    #[must_use]
    pub fn daily(start: NaiveDate, end: NaiveDate) -> Self {
        let dates = start.iter_days().take_while(|d| *d <= end).collect();
        Self { dates }
    }

    /// The `lookback_days` days before `end`, through `end` inclusive.
    ///
    /// Returns `None` if the lookback reaches before the representable range.
    #[must_use]
    pub fn trailing(end: NaiveDate, lookback_days: u32) -> Option<Self> {
        let start = end.checked_sub_days(Days::new(u64::from(lookback_days)))?;
        Some(Self::daily(start, end))
    }

    /// Number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True for a calendar with no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First date, if any.
    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Last date, if any.
    #[must_use]
    pub fn end(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// All dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Iterate dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Row index of `date`, or `None` when it falls outside the calendar.
    #[must_use]
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let start = self.start()?;
        let offset = usize::try_from((date - start).num_days()).ok()?;
        (offset < self.dates.len()).then_some(offset)
    }

    /// Whether `date` lies on the calendar.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn spans_leap_day() {
        let cal = Calendar::daily(d(2024, 2, 27), d(2024, 3, 2));
        assert_eq!(cal.len(), 5);
        assert!(cal.contains(d(2024, 2, 29)));
        assert_eq!(cal.index_of(d(2024, 3, 1)), Some(3));
        assert_eq!(cal.index_of(d(2024, 3, 3)), None);
        assert_eq!(cal.index_of(d(2024, 2, 26)), None);
    }

    #[test]
    fn reversed_range_is_empty() {
        let cal = Calendar::daily(d(2024, 1, 2), d(2024, 1, 1));
        assert!(cal.is_empty());
        assert_eq!(cal.start(), None);
        assert_eq!(cal.index_of(d(2024, 1, 1)), None);
    }

    #[test]
    fn trailing_includes_both_ends() {
        let cal = Calendar::trailing(d(2024, 1, 11), 10).unwrap();
        assert_eq!(cal.len(), 11);
        assert_eq!(cal.start(), Some(d(2024, 1, 1)));
        assert_eq!(cal.end(), Some(d(2024, 1, 11)));
    }
}
