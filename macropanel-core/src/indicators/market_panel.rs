use super::{Derivation, Formula};

/// 50-day simple moving average of the S&P 500 close.
pub const SP500_MA50: &str = "SP500_MA50";
/// 200-day simple moving average of the S&P 500 close.
pub const SP500_MA200: &str = "SP500_MA200";
/// Percent distance of the S&P 500 close from its 200-day average.
pub const SP500_BIAS_200: &str = "SP500_Bias_200";
/// Gold price divided by the WTI crude price.
pub const GOLD_OIL_RATIO: &str = "Gold_Oil_Ratio";
/// Scaled copper price over gold price.
pub const COPPER_GOLD_RATIO: &str = "Copper_Gold_Ratio";

/// Brings copper's per-pound quote to the magnitude of gold's per-ounce quote.
pub const COPPER_UNIT_SCALE: f64 = 1000.0;

/// The market panel's derivation steps, in dependency order.
#[must_use]
pub fn market_derivations() -> Vec<Derivation> {
    vec![
        Derivation::new(
            SP500_MA50,
            Formula::RollingMean {
                source: "SP500".into(),
                window: 50,
            },
        ),
        Derivation::new(
            SP500_MA200,
            Formula::RollingMean {
                source: "SP500".into(),
                window: 200,
            },
        ),
        Derivation::new(
            SP500_BIAS_200,
            Formula::Bias {
                price: "SP500".into(),
                average: SP500_MA200.into(),
            },
        ),
        Derivation::new(
            GOLD_OIL_RATIO,
            Formula::Ratio {
                numerator: "Gold".into(),
                denominator: "Crude_Oil_WTI".into(),
                scale: 1.0,
            },
        ),
        Derivation::new(
            COPPER_GOLD_RATIO,
            Formula::Ratio {
                numerator: "Copper".into(),
                denominator: "Gold".into(),
                scale: COPPER_UNIT_SCALE,
            },
        ),
    ]
}
