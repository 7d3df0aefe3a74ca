use chrono::{Days, NaiveDate};
use macropanel_core::catalog::{YAHOO_TICKERS, by_id};
use macropanel_core::indicators::market_panel::{
    COPPER_GOLD_RATIO, GOLD_OIL_RATIO, SP500_BIAS_200, SP500_MA50, SP500_MA200,
};
use macropanel_core::{
    Calendar, Column, DuplicatePolicy, Observation, Panel, PanelError, RawSeries,
    apply_derivations, build_market_panel, market_derivations,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn calendar(rows: usize) -> Calendar {
    let start = d(2023, 1, 1);
    Calendar::daily(start, start + Days::new(rows as u64 - 1))
}

#[test]
fn cross_asset_ratios() {
    let day = d(2024, 5, 1);
    let quote = |ticker: &str, v: f64| {
        RawSeries::from_spec(
            by_id(YAHOO_TICKERS, ticker).unwrap(),
            vec![Observation::new(day, v)],
        )
    };
    let inputs = [quote("CL=F", 80.0), quote("HG=F", 4.5), quote("GC=F", 2000.0)];
    let out = build_market_panel(Calendar::daily(day, day), &inputs, DuplicatePolicy::KeepLast)
        .unwrap();
    assert_eq!(out.panel.value(GOLD_OIL_RATIO, day), Some(25.0));
    assert_eq!(out.panel.value(COPPER_GOLD_RATIO, day), Some(2.25));
}

#[test]
fn zero_denominator_is_missing() {
    let panel = Panel::new(calendar(2))
        .with_column(Column::new("Gold", vec![Some(2000.0), Some(2000.0)]))
        .unwrap()
        .with_column(Column::new("Crude_Oil_WTI", vec![Some(0.0), Some(-40.0)]))
        .unwrap();
    let out = apply_derivations(panel, &market_derivations()).unwrap();
    assert_eq!(
        out.panel.column(GOLD_OIL_RATIO).unwrap().values(),
        &[None, Some(-50.0)]
    );
}

#[test]
fn moving_averages_and_bias() {
    let rows = 250;
    let sp: Vec<Option<f64>> = (0..rows).map(|i| Some(i as f64)).collect();
    let panel = Panel::new(calendar(rows))
        .with_column(Column::new("SP500", sp))
        .unwrap();
    let out = apply_derivations(panel, &market_derivations()).unwrap();
    let p = &out.panel;

    let ma50 = p.column(SP500_MA50).unwrap().values();
    assert_eq!(ma50[48], None);
    assert_eq!(ma50[49], Some(24.5));

    let ma200 = p.column(SP500_MA200).unwrap().values();
    assert_eq!(ma200[198], None);
    assert_eq!(ma200[199], Some(99.5));
    assert_eq!(ma200[249], Some(149.5));

    let bias = p.column(SP500_BIAS_200).unwrap().values();
    assert_eq!(bias[198], None);
    let expected = (249.0 - 149.5) / 149.5 * 100.0;
    assert!((bias[249].unwrap() - expected).abs() < 1e-9);
}

#[test]
fn short_history_keeps_bias_column_empty() {
    let rows = 150;
    let panel = Panel::new(calendar(rows))
        .with_column(Column::new("SP500", vec![Some(100.0); rows]))
        .unwrap();
    let out = apply_derivations(panel, &market_derivations()).unwrap();
    // the 200-day mean never fills, but the column set stays the same
    assert!(!out.panel.is_available(SP500_MA200));
    let bias = out.panel.column(SP500_BIAS_200).expect("bias column present");
    assert!(bias.values().iter().all(Option::is_none));
    assert!(
        !out.skipped
            .iter()
            .any(|e| matches!(e, PanelError::MissingInput { column, .. } if column == SP500_BIAS_200))
    );
    assert!(out.panel.is_available(SP500_MA50));
}
