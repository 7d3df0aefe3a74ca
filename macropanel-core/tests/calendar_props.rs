use chrono::{Days, NaiveDate};
use macropanel_core::Calendar;
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // 1950-01-01 .. roughly 2080
    (0u64..47_000u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1950, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn length_matches_span(start in arb_date(), span in 0u64..4_000u64) {
        let end = start.checked_add_days(Days::new(span)).unwrap();
        let cal = Calendar::daily(start, end);
        prop_assert_eq!(cal.len() as i64, (end - start).num_days() + 1);
        prop_assert_eq!(cal.start(), Some(start));
        prop_assert_eq!(cal.end(), Some(end));
    }

    #[test]
    fn strictly_increasing_by_one_day(start in arb_date(), span in 0u64..2_000u64) {
        let end = start.checked_add_days(Days::new(span)).unwrap();
        let cal = Calendar::daily(start, end);
        for pair in cal.dates().windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn index_of_inverts_position(start in arb_date(), span in 0u64..1_000u64, pick in any::<prop::sample::Index>()) {
        let end = start.checked_add_days(Days::new(span)).unwrap();
        let cal = Calendar::daily(start, end);
        let i = pick.index(cal.len());
        prop_assert_eq!(cal.index_of(cal.dates()[i]), Some(i));
    }
}

#[test]
fn single_day_calendar() {
    let d = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let cal = Calendar::daily(d, d);
    assert_eq!(cal.dates(), &[d]);
}
