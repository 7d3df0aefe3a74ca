use super::{Derivation, Formula};

/// Horizon of the year-over-year growth rate, in calendar days.
pub const YOY_PERIODS: usize = 365;
/// Horizon of the month-over-month growth rate, in calendar days.
pub const MOM_PERIODS: usize = 30;
/// Inflation target subtracted from core PCE inflation.
pub const INFLATION_TARGET: f64 = 2.0;
/// Equilibrium real rate in the Taylor rule.
pub const NEUTRAL_REAL_RATE: f64 = 2.0;
/// Weight on each of the inflation and output gaps in the Taylor rule.
pub const TAYLOR_GAP_WEIGHT: f64 = 0.5;

/// Columns that receive a `_YoY` growth rate (and `_MoM` unless quarterly).
pub const GROWTH_COLUMNS: [&str; 11] = [
    "CPI",
    "Core_PCE",
    "M2_Money_Supply",
    "Real_PCE",
    "Real_Retail_Sales",
    "Building_Permits",
    "GDP",
    "Real_GDP",
    "Avg_Weekly_Hours",
    "New_Orders_Consumer_Goods",
    "New_Orders_Cap_Goods",
];

/// Quarterly series: a 30-day change would only ever read fill artifacts.
pub const QUARTERLY_COLUMNS: [&str; 2] = ["GDP", "Real_GDP"];

/// `10Y_Yield - Fed_Rate`.
pub const SPREAD_10Y_FED: &str = "Spread_10Y_Fed";
/// `10Y_Yield - 2Y_Yield`.
pub const YIELD_SPREAD_10Y_2Y: &str = "Yield_Spread_10Y_2Y";
/// 1 when the 10Y-2Y spread is negative, else 0.
pub const INVERSION_FLAG: &str = "Inversion_Flag";
/// `Fed_Rate - Core_PCE_YoY`.
pub const REAL_RATE: &str = "Real_Rate";
/// `Core_PCE_YoY - 2`.
pub const INFLATION_GAP: &str = "Inflation_Gap";
/// Log gap of real GDP to potential, or 0 when potential is unavailable.
pub const OUTPUT_GAP: &str = "Output_Gap";
/// Taylor-rule policy rate.
pub const TAYLOR_RULE_RATE: &str = "Taylor_Rule_Rate";

const CORE_PCE_YOY: &str = "Core_PCE_YoY";

fn yoy(col: &str) -> String {
    format!("{col}_YoY")
}

fn mom(col: &str) -> String {
    format!("{col}_MoM")
}

/// The macro panel's derivation steps, in dependency order.
///
/// Growth rates come first because the policy-rate block reads
/// `Core_PCE_YoY`; `Inflation_Gap` and `Output_Gap` precede the Taylor rule
/// that combines them.
#[must_use]
pub fn macro_derivations() -> Vec<Derivation> {
    let mut steps = Vec::new();

    for col in GROWTH_COLUMNS {
        steps.push(Derivation::new(
            yoy(col),
            Formula::PctChange {
                source: col.to_string(),
                periods: YOY_PERIODS,
            },
        ));
        if !QUARTERLY_COLUMNS.contains(&col) {
            steps.push(Derivation::new(
                mom(col),
                Formula::PctChange {
                    source: col.to_string(),
                    periods: MOM_PERIODS,
                },
            ));
        }
    }

    steps.push(Derivation::new(
        SPREAD_10Y_FED,
        Formula::Difference {
            minuend: "10Y_Yield".into(),
            subtrahend: "Fed_Rate".into(),
        },
    ));
    steps.push(Derivation::new(
        YIELD_SPREAD_10Y_2Y,
        Formula::Difference {
            minuend: "10Y_Yield".into(),
            subtrahend: "2Y_Yield".into(),
        },
    ));
    steps.push(Derivation::new(
        INVERSION_FLAG,
        Formula::NegativeFlag {
            source: YIELD_SPREAD_10Y_2Y.into(),
        },
    ));
    steps.push(Derivation::new(
        REAL_RATE,
        Formula::Difference {
            minuend: "Fed_Rate".into(),
            subtrahend: CORE_PCE_YOY.into(),
        },
    ));
    steps.push(Derivation::new(
        INFLATION_GAP,
        Formula::Offset {
            source: CORE_PCE_YOY.into(),
            delta: -INFLATION_TARGET,
        },
    ));
    steps.push(
        Derivation::new(
            OUTPUT_GAP,
            Formula::LogGap {
                actual: "Real_GDP".into(),
                potential: "Real_Potential_GDP".into(),
            },
        )
        .or_else(Formula::Constant(0.0)),
    );
    steps.push(Derivation::new(
        TAYLOR_RULE_RATE,
        Formula::TaylorRule {
            inflation: CORE_PCE_YOY.into(),
            inflation_gap: INFLATION_GAP.into(),
            output_gap: OUTPUT_GAP.into(),
            neutral_rate: NEUTRAL_REAL_RATE,
            gap_weight: TAYLOR_GAP_WEIGHT,
        },
    ));

    steps
}
