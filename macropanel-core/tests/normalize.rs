use chrono::{NaiveDate, TimeZone, Utc};
use macropanel_core::catalog::{FRED_SERIES, JOBLESS_CLAIMS_4W_MA, by_id};
use macropanel_core::{
    Calendar, DuplicatePolicy, Observation, PanelError, RawSeries, assemble, build_macro_panel,
    normalize_series,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn single_observation_lands_on_its_date_only() {
    let cal = Calendar::daily(d(2024, 1, 1), d(2024, 1, 10));
    let series = RawSeries::new("X", vec![Observation::new(d(2024, 1, 4), 42.0)]);
    let cols = normalize_series(&series, &cal, DuplicatePolicy::KeepLast).unwrap();
    assert_eq!(cols.len(), 1);
    let values = cols[0].values();
    assert_eq!(values.len(), cal.len());
    for (i, v) in values.iter().enumerate() {
        if i == 3 {
            assert_eq!(*v, Some(42.0));
        } else {
            assert_eq!(*v, None);
        }
    }
}

#[test]
fn observations_outside_the_calendar_are_dropped() {
    let cal = Calendar::daily(d(2024, 1, 2), d(2024, 1, 3));
    let series = RawSeries::new(
        "X",
        vec![
            Observation::new(d(2024, 1, 1), 1.0),
            Observation::new(d(2024, 1, 3), 3.0),
            Observation::new(d(2024, 1, 9), 9.0),
        ],
    );
    let cols = normalize_series(&series, &cal, DuplicatePolicy::KeepLast).unwrap();
    assert_eq!(cols[0].values(), &[None, Some(3.0)]);
}

#[test]
fn utc_timestamps_truncate_to_their_date() {
    let cal = Calendar::daily(d(2024, 3, 1), d(2024, 3, 2));
    let ts = Utc.with_ymd_and_hms(2024, 3, 2, 21, 0, 0).unwrap();
    let series = RawSeries::new("X", vec![Observation::new(ts, 7.5)]);
    let cols = normalize_series(&series, &cal, DuplicatePolicy::KeepLast).unwrap();
    assert_eq!(cols[0].values(), &[None, Some(7.5)]);
}

#[test]
fn non_finite_values_are_missing() {
    let cal = Calendar::daily(d(2024, 3, 1), d(2024, 3, 2));
    let series = RawSeries::new(
        "X",
        vec![
            Observation::new(d(2024, 3, 1), f64::NAN),
            Observation::new(d(2024, 3, 2), f64::INFINITY),
        ],
    );
    let cols = normalize_series(&series, &cal, DuplicatePolicy::KeepLast).unwrap();
    assert_eq!(cols[0].values(), &[None, None]);
}

#[test]
fn reject_policy_names_the_series() {
    let cal = Calendar::daily(d(2024, 3, 1), d(2024, 3, 2));
    let series = RawSeries::new(
        "CPI",
        vec![
            Observation::new(d(2024, 3, 1), 1.0),
            Observation::new(d(2024, 3, 1), 2.0),
        ],
    );
    match assemble(cal, &[series], DuplicatePolicy::Reject) {
        Err(PanelError::Data(msg)) => assert!(msg.starts_with("CPI:"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn jobless_claims_mean_runs_over_delivered_weeks() {
    let spec = by_id(FRED_SERIES, "ICSA").unwrap();
    let weeks = [d(2024, 1, 6), d(2024, 1, 13), d(2024, 1, 20), d(2024, 1, 27), d(2024, 2, 3)];
    let obs = weeks
        .iter()
        .zip([1.0, 2.0, 3.0, 4.0, 5.0])
        .map(|(w, v)| Observation::new(*w, v))
        .collect();
    let series = RawSeries::from_spec(spec, obs);
    let cal = Calendar::daily(d(2024, 1, 1), d(2024, 2, 5));

    let out = build_macro_panel(cal, &[series], DuplicatePolicy::KeepLast).unwrap();
    let panel = &out.panel;
    assert_eq!(
        panel.column_names().take(2).collect::<Vec<_>>(),
        vec!["Jobless_Claims", JOBLESS_CLAIMS_4W_MA]
    );
    assert_eq!(panel.value(JOBLESS_CLAIMS_4W_MA, d(2024, 1, 27)), Some(2.5));
    assert_eq!(panel.value(JOBLESS_CLAIMS_4W_MA, d(2024, 1, 30)), Some(2.5));
    assert_eq!(panel.value(JOBLESS_CLAIMS_4W_MA, d(2024, 2, 3)), Some(3.5));
    // leading rows are back-filled from the first complete window
    assert_eq!(panel.value(JOBLESS_CLAIMS_4W_MA, d(2024, 1, 1)), Some(2.5));
    assert_eq!(panel.value("Jobless_Claims", d(2024, 1, 1)), Some(1.0));
}
