//! The pure end of the pipeline: raw series in, finished panel out.

use crate::indicators::{Derivation, Derived, apply_derivations, macro_derivations, market_derivations};
use crate::panel::Panel;
use crate::timeseries::calendar::Calendar;
use crate::timeseries::fill::fill_gaps;
use crate::timeseries::normalize::normalize_series;
use crate::{DuplicatePolicy, PanelError, RawSeries};

/// Normalize every input series and left-join it onto `calendar`.
///
/// Columns land in input order, each followed by its raw rolling mean
/// companion when the series declares one. No filling happens here.
///
/// # Errors
/// Returns `PanelError::Data` on a duplicate column name or, under
/// [`DuplicatePolicy::Reject`], on a duplicate observation date.
pub fn assemble(
    calendar: Calendar,
    inputs: &[RawSeries],
    policy: DuplicatePolicy,
) -> Result<Panel, PanelError> {
    let mut panel = Panel::new(calendar);
    for series in inputs {
        for column in normalize_series(series, panel.calendar(), policy)? {
            panel = panel.with_column(column)?;
        }
    }
    Ok(panel)
}

/// Assemble, gap-fill, and derive in one pass.
///
/// # Errors
/// Propagates errors from [`assemble`] and [`apply_derivations`]. Skipped
/// derivations are not errors; they are listed in [`Derived::skipped`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "macropanel_core::build_panel",
        skip(calendar, inputs, steps),
        fields(rows = calendar.len(), series = inputs.len(), steps = steps.len()),
    )
)]
pub fn build_panel(
    calendar: Calendar,
    inputs: &[RawSeries],
    policy: DuplicatePolicy,
    steps: &[Derivation],
) -> Result<Derived, PanelError> {
    let panel = fill_gaps(assemble(calendar, inputs, policy)?);
    apply_derivations(panel, steps)
}

/// Build the macro panel from macro-data series.
///
/// # Errors
/// See [`build_panel`].
pub fn build_macro_panel(
    calendar: Calendar,
    inputs: &[RawSeries],
    policy: DuplicatePolicy,
) -> Result<Derived, PanelError> {
    build_panel(calendar, inputs, policy, &macro_derivations())
}

/// Build the market panel from daily closing prices.
///
/// # Errors
/// See [`build_panel`].
pub fn build_market_panel(
    calendar: Calendar,
    inputs: &[RawSeries],
    policy: DuplicatePolicy,
) -> Result<Derived, PanelError> {
    build_panel(calendar, inputs, policy, &market_derivations())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Observation;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn duplicate_series_names_are_rejected() {
        let cal = Calendar::daily(d(2024, 1, 1), d(2024, 1, 3));
        let a = RawSeries::new("A", vec![Observation::new(d(2024, 1, 1), 1.0)]);
        let err = assemble(cal, &[a.clone(), a], DuplicatePolicy::KeepLast).unwrap_err();
        assert!(matches!(err, PanelError::Data(_)));
    }

    #[test]
    fn empty_market_inputs_skip_every_derivation() {
        let cal = Calendar::daily(d(2024, 1, 1), d(2024, 1, 3));
        let out = build_market_panel(cal, &[], DuplicatePolicy::KeepLast).unwrap();
        assert_eq!(out.panel.width(), 0);
        assert_eq!(out.panel.height(), 3);
        assert_eq!(out.skipped.len(), market_derivations().len());
        assert!(out.skipped.iter().all(|e| !e.is_fatal()));
    }
}
