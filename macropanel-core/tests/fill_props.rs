use chrono::NaiveDate;
use macropanel_core::{Calendar, Column, Panel, backward_fill, fill_gaps, forward_fill};
use proptest::prelude::*;

fn arb_cells() -> impl Strategy<Value = Vec<Option<f64>>> {
    proptest::collection::vec(proptest::option::of(-1.0e6f64..1.0e6f64), 1..120)
}

fn panel_of(values: Vec<Option<f64>>) -> Panel {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let end = start + chrono::Days::new(values.len() as u64 - 1);
    Panel::new(Calendar::daily(start, end))
        .with_column(Column::new("X", values))
        .unwrap()
}

proptest! {
    #[test]
    fn fill_is_idempotent(cells in arb_cells()) {
        let once = fill_gaps(panel_of(cells));
        let twice = fill_gaps(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn any_value_fills_every_cell(cells in arb_cells()) {
        let populated = cells.iter().any(Option::is_some);
        let filled = fill_gaps(panel_of(cells));
        let values = filled.column("X").unwrap().values();
        prop_assert_eq!(values.iter().all(Option::is_some), populated);
        prop_assert_eq!(values.iter().all(Option::is_none), !populated);
    }

    #[test]
    fn present_values_are_untouched(cells in arb_cells()) {
        let filled = fill_gaps(panel_of(cells.clone()));
        for (before, after) in cells.iter().zip(filled.column("X").unwrap().values()) {
            if before.is_some() {
                prop_assert_eq!(before, after);
            }
        }
    }
}

#[test]
fn forward_then_backward() {
    let mut v = vec![None, None, Some(5.0), None, Some(7.0), None];
    forward_fill(&mut v);
    backward_fill(&mut v);
    assert_eq!(
        v,
        vec![Some(5.0), Some(5.0), Some(5.0), Some(5.0), Some(7.0), Some(7.0)]
    );

    let filled = fill_gaps(panel_of(vec![None, None, Some(5.0), None, Some(7.0), None]));
    assert_eq!(
        filled.column("X").unwrap().values(),
        &[Some(5.0), Some(5.0), Some(5.0), Some(5.0), Some(7.0), Some(7.0)]
    );
}

#[test]
fn all_missing_column_stays_missing() {
    let filled = fill_gaps(panel_of(vec![None; 4]));
    assert!(!filled.is_available("X"));
    assert_eq!(filled.column("X").unwrap().len(), 4);
}
