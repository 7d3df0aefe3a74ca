use chrono::NaiveDate;
use macropanel_types::{DEFAULT_LOOKBACK_DAYS, DuplicatePolicy, PanelConfig, PanelError};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn panel_config_roundtrip() {
    let cfg = PanelConfig {
        start: Some(d(2020, 1, 1)),
        end: Some(d(2021, 6, 30)),
        duplicate_policy: DuplicatePolicy::Reject,
        request_timeout: Some(std::time::Duration::from_millis(1500)),
        ..PanelConfig::default()
    };

    let json = serde_json::to_string(&cfg).expect("serialize panel config");
    let de: PanelConfig = serde_json::from_str(&json).expect("deserialize panel config");

    assert_eq!(de.start, Some(d(2020, 1, 1)));
    assert_eq!(de.end, Some(d(2021, 6, 30)));
    assert_eq!(de.duplicate_policy, DuplicatePolicy::Reject);
    assert_eq!(de.lookback_days, DEFAULT_LOOKBACK_DAYS);
    assert_eq!(de.request_timeout.map(|t| t.as_millis()), Some(1500));
}

#[test]
fn window_defaults_to_trailing_lookback() {
    let cfg = PanelConfig {
        lookback_days: 10,
        ..PanelConfig::default()
    };
    let (start, end) = cfg.window(d(2024, 3, 11)).unwrap();
    assert_eq!(end, d(2024, 3, 11));
    assert_eq!(start, d(2024, 3, 1));
}

#[test]
fn explicit_window_wins_over_today() {
    let cfg = PanelConfig {
        start: Some(d(2019, 1, 1)),
        end: Some(d(2019, 12, 31)),
        ..PanelConfig::default()
    };
    assert_eq!(
        cfg.window(d(2030, 1, 1)).unwrap(),
        (d(2019, 1, 1), d(2019, 12, 31))
    );
}

#[test]
fn reversed_window_is_rejected() {
    let cfg = PanelConfig {
        start: Some(d(2022, 1, 2)),
        end: Some(d(2022, 1, 1)),
        ..PanelConfig::default()
    };
    assert!(matches!(
        cfg.window(d(2022, 1, 1)),
        Err(PanelError::InvalidArg(_))
    ));
}
