use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDate;

use crate::panel::Column;
use crate::timeseries::calendar::Calendar;
use crate::timeseries::rolling::rolling_mean;
use crate::{DuplicatePolicy, Observation, PanelError, RawSeries};

/// Collapse observations onto their local calendar dates.
///
/// Each timestamp is stripped of its timezone and truncated to a date. When
/// several observations share a date, `policy` decides which one survives.
/// Non-finite values are kept as missing entries so they still take part in
/// duplicate resolution. The result is ordered by date.
///
/// # Errors
/// Returns `PanelError::Data` under [`DuplicatePolicy::Reject`] when any date
/// occurs more than once.
pub fn collapse_duplicates(
    observations: &[Observation],
    policy: DuplicatePolicy,
) -> Result<BTreeMap<NaiveDate, Option<f64>>, PanelError> {
    let mut by_date: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();
    for obs in observations {
        let date = obs.ts.local_date();
        match by_date.entry(date) {
            Entry::Vacant(v) => {
                v.insert(obs.finite_value());
            }
            Entry::Occupied(mut o) => match policy {
                DuplicatePolicy::KeepFirst => {}
                DuplicatePolicy::Reject => {
                    return Err(PanelError::Data(format!(
                        "duplicate observation date {date}"
                    )));
                }
                // KeepLast and any future policy default to last-wins
                _ => {
                    o.insert(obs.finite_value());
                }
            },
        }
    }
    Ok(by_date)
}

/// Left-join date-keyed values onto the calendar.
fn align(by_date: &BTreeMap<NaiveDate, Option<f64>>, calendar: &Calendar) -> Vec<Option<f64>> {
    let mut values = vec![None; calendar.len()];
    let (Some(start), Some(end)) = (calendar.start(), calendar.end()) else {
        return values;
    };
    for (date, v) in by_date.range(start..=end) {
        if let Some(i) = calendar.index_of(*date) {
            values[i] = *v;
        }
    }
    values
}

/// Normalize one raw series into calendar-aligned columns.
///
/// Produces the series column itself and, when the series declares a raw
/// rolling mean, a companion column holding that mean. The mean runs over the
/// collapsed, date-ordered observations before alignment, so it never sees
/// calendar padding or filled values. Observations outside the calendar are
/// dropped after the mean is taken.
///
/// # Errors
/// Propagates duplicate-date rejection from [`collapse_duplicates`].
pub fn normalize_series(
    series: &RawSeries,
    calendar: &Calendar,
    policy: DuplicatePolicy,
) -> Result<Vec<Column>, PanelError> {
    let by_date = collapse_duplicates(&series.observations, policy)
        .map_err(|e| PanelError::Data(format!("{}: {e}", series.name)))?;

    #[cfg(feature = "tracing")]
    {
        let outside = by_date
            .keys()
            .filter(|d| !calendar.contains(**d))
            .count();
        if outside > 0 {
            tracing::debug!(
                target: "macropanel::normalize",
                series = %series.name,
                outside,
                "dropping observations outside the calendar"
            );
        }
    }

    let mut columns = vec![Column::new(series.name.clone(), align(&by_date, calendar))];

    if let Some(rolling) = series.raw_rolling_mean {
        let raw: Vec<Option<f64>> = by_date.values().copied().collect();
        let means = rolling_mean(&raw, rolling.window);
        let by_date_mean: BTreeMap<NaiveDate, Option<f64>> =
            by_date.keys().copied().zip(means).collect();
        columns.push(Column::new(rolling.column, align(&by_date_mean, calendar)));
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn zoned_timestamps_keep_their_local_date() {
        // 23:30 in New York is already the next day in UTC
        let ny = chrono_tz::America::New_York
            .with_ymd_and_hms(2024, 1, 1, 23, 30, 0)
            .unwrap();
        let obs = [Observation::new(ny, 3.0)];
        let by_date = collapse_duplicates(&obs, DuplicatePolicy::KeepLast).unwrap();
        assert_eq!(by_date.get(&d(2024, 1, 1)), Some(&Some(3.0)));
    }

    #[test]
    fn duplicate_policies() {
        let obs = [
            Observation::new(d(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap(), 1.0),
            Observation::new(d(2024, 1, 1).and_hms_opt(17, 0, 0).unwrap(), 2.0),
        ];
        let last = collapse_duplicates(&obs, DuplicatePolicy::KeepLast).unwrap();
        let first = collapse_duplicates(&obs, DuplicatePolicy::KeepFirst).unwrap();
        assert_eq!(last[&d(2024, 1, 1)], Some(2.0));
        assert_eq!(first[&d(2024, 1, 1)], Some(1.0));
        assert!(matches!(
            collapse_duplicates(&obs, DuplicatePolicy::Reject),
            Err(PanelError::Data(_))
        ));
    }
}
