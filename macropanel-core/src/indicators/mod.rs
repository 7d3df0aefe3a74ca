//! Derived-column formulas and the engine that applies them in order.
//!
//! A derivation list is an ordered slice of [`Derivation`] steps. Each step
//! names its output and a closed [`Formula`]; the formula's inputs are its
//! declared preconditions. Steps run strictly in list order, so a step may
//! consume any column produced by an earlier step.

/// Macro panel derivations.
pub mod macro_panel;
/// Market panel derivations.
pub mod market_panel;

pub use macro_panel::macro_derivations;
pub use market_panel::market_derivations;

use std::collections::HashSet;

use crate::PanelError;
use crate::panel::{Column, Panel};
use crate::timeseries::rolling::{finite, pct_change, rolling_mean};

/// A fixed column formula. Every variant reads only already-present columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// `(v[t] / v[t - periods] - 1) * 100`.
    PctChange {
        /// Input column.
        source: String,
        /// Horizon in rows (calendar days on a daily panel).
        periods: usize,
    },
    /// `minuend - subtrahend`.
    Difference {
        /// Left operand column.
        minuend: String,
        /// Right operand column.
        subtrahend: String,
    },
    /// `source + delta`.
    Offset {
        /// Input column.
        source: String,
        /// Constant added to every cell.
        delta: f64,
    },
    /// `1` when `source < 0`, else `0`; a missing cell counts as not negative.
    NegativeFlag {
        /// Input column.
        source: String,
    },
    /// `100 * (ln actual - ln potential)`.
    LogGap {
        /// Realized level column.
        actual: String,
        /// Potential/trend level column.
        potential: String,
    },
    /// `inflation + neutral_rate + weight * inflation_gap + weight * output_gap`.
    TaylorRule {
        /// Inflation rate column.
        inflation: String,
        /// Inflation minus target column.
        inflation_gap: String,
        /// Output gap column.
        output_gap: String,
        /// Equilibrium real rate.
        neutral_rate: f64,
        /// Weight applied to each gap.
        gap_weight: f64,
    },
    /// Trailing simple mean over `window` rows.
    RollingMean {
        /// Input column.
        source: String,
        /// Window length in rows.
        window: usize,
    },
    /// `(price - average) / average * 100`.
    Bias {
        /// Price column.
        price: String,
        /// Moving-average column.
        average: String,
    },
    /// `(numerator * scale) / denominator`.
    Ratio {
        /// Numerator column.
        numerator: String,
        /// Denominator column.
        denominator: String,
        /// Unit-scaling constant applied to the numerator.
        scale: f64,
    },
    /// The same value on every row.
    Constant(f64),
}

impl Formula {
    /// Columns the formula reads.
    #[must_use]
    pub fn inputs(&self) -> Vec<&str> {
        match self {
            Self::PctChange { source, .. }
            | Self::Offset { source, .. }
            | Self::NegativeFlag { source }
            | Self::RollingMean { source, .. } => vec![source.as_str()],
            Self::Difference {
                minuend,
                subtrahend,
            } => vec![minuend.as_str(), subtrahend.as_str()],
            Self::LogGap { actual, potential } => vec![actual.as_str(), potential.as_str()],
            Self::TaylorRule {
                inflation,
                inflation_gap,
                output_gap,
                ..
            } => vec![
                inflation.as_str(),
                inflation_gap.as_str(),
                output_gap.as_str(),
            ],
            Self::Bias { price, average } => vec![price.as_str(), average.as_str()],
            Self::Ratio {
                numerator,
                denominator,
                ..
            } => vec![numerator.as_str(), denominator.as_str()],
            Self::Constant(_) => vec![],
        }
    }

    /// Inputs the formula cannot run without.
    ///
    /// A base input must hold at least one value. An input produced by an
    /// earlier step (listed in `derived`) only has to exist; its gaps flow
    /// through as missing cells.
    fn unavailable(&self, panel: &Panel, derived: &HashSet<&str>) -> Vec<String> {
        self.inputs()
            .into_iter()
            .filter(|name| {
                if derived.contains(name) {
                    panel.column(name).is_none()
                } else {
                    !panel.is_available(name)
                }
            })
            .map(str::to_string)
            .collect()
    }

    /// Compute the formula over every row of `panel`.
    ///
    /// Non-finite results become missing cells.
    ///
    /// # Errors
    /// Returns `PanelError::MissingInput` naming `output` if an input column is absent.
    pub fn evaluate(&self, panel: &Panel, output: &str) -> Result<Vec<Option<f64>>, PanelError> {
        let col = |name: &str| column_values(panel, output, name);

        let values = match self {
            Self::PctChange { source, periods } => pct_change(col(source)?, *periods)
                .into_iter()
                .map(|v| v.and_then(|x| finite(x * 100.0)))
                .collect(),
            Self::Difference {
                minuend,
                subtrahend,
            } => zip_with(col(minuend)?, col(subtrahend)?, |a, b| a - b),
            Self::Offset { source, delta } => {
                let delta = *delta;
                col(source)?
                    .iter()
                    .map(|v| v.and_then(|x| finite(x + delta)))
                    .collect()
            }
            Self::NegativeFlag { source } => col(source)?
                .iter()
                .map(|v| Some(if v.is_some_and(|x| x < 0.0) { 1.0 } else { 0.0 }))
                .collect(),
            Self::LogGap { actual, potential } => {
                zip_with(col(actual)?, col(potential)?, |a, p| 100.0 * (a.ln() - p.ln()))
            }
            Self::TaylorRule {
                inflation,
                inflation_gap,
                output_gap,
                neutral_rate,
                gap_weight,
            } => {
                let (r, w) = (*neutral_rate, *gap_weight);
                let (pi, pi_gap, y_gap) = (col(inflation)?, col(inflation_gap)?, col(output_gap)?);
                pi.iter()
                    .zip(pi_gap)
                    .zip(y_gap)
                    .map(|((p, g), y)| finite((*p)? + r + w * (*g)? + w * (*y)?))
                    .collect()
            }
            Self::RollingMean { source, window } => rolling_mean(col(source)?, *window),
            Self::Bias { price, average } => {
                zip_with(col(price)?, col(average)?, |p, a| (p - a) / a * 100.0)
            }
            Self::Ratio {
                numerator,
                denominator,
                scale,
            } => {
                let scale = *scale;
                zip_with(col(numerator)?, col(denominator)?, |n, d| (n * scale) / d)
            }
            Self::Constant(c) => vec![Some(*c); panel.height()],
        };
        Ok(values)
    }
}

fn column_values<'a>(
    panel: &'a Panel,
    output: &str,
    name: &str,
) -> Result<&'a [Option<f64>], PanelError> {
    panel
        .column(name)
        .map(Column::values)
        .ok_or_else(|| PanelError::missing_input(output, vec![name.to_string()]))
}

fn zip_with<F>(a: &[Option<f64>], b: &[Option<f64>], f: F) -> Vec<Option<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    a.iter()
        .zip(b)
        .map(|(x, y)| finite(f((*x)?, (*y)?)))
        .collect()
}

/// One step of a derivation list.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    /// Name of the column this step produces.
    pub output: String,
    /// Formula used when its inputs are available.
    pub formula: Formula,
    /// Formula used when the primary inputs are unavailable.
    pub fallback: Option<Formula>,
}

impl Derivation {
    /// A step with no fallback.
    pub fn new(output: impl Into<String>, formula: Formula) -> Self {
        Self {
            output: output.into(),
            formula,
            fallback: None,
        }
    }

    /// Use `fallback` when the primary formula's inputs are unavailable.
    #[must_use]
    pub fn or_else(mut self, fallback: Formula) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Columns the primary formula requires.
    #[must_use]
    pub fn requires(&self) -> Vec<&str> {
        self.formula.inputs()
    }
}

/// A panel after derivation, plus the steps that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    /// The input panel augmented with every computed column.
    pub panel: Panel,
    /// One `PanelError::MissingInput` per skipped step, in list order.
    pub skipped: Vec<PanelError>,
}

/// Run `steps` in order over a gap-filled panel.
///
/// A step whose inputs are all available appends its column. Otherwise its
/// fallback is tried; if that is unavailable too, the step is skipped and
/// recorded, and its column is absent from the result.
///
/// Base columns count as available once they hold a value. Columns from
/// earlier steps count as soon as they exist, even when every cell is
/// missing, so a short window still yields the full column set.
///
/// # Errors
/// Returns `PanelError::Data` if a step's output name collides with an
/// existing column.
pub fn apply_derivations(mut panel: Panel, steps: &[Derivation]) -> Result<Derived, PanelError> {
    let mut skipped = Vec::new();
    let mut derived: HashSet<&str> = HashSet::new();

    for step in steps {
        let missing = step.formula.unavailable(&panel, &derived);
        let chosen = if missing.is_empty() {
            Some(&step.formula)
        } else {
            step.fallback
                .as_ref()
                .filter(|fb| fb.unavailable(&panel, &derived).is_empty())
        };
        derived.insert(step.output.as_str());

        let Some(formula) = chosen else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "macropanel::indicators",
                column = %step.output,
                missing = ?missing,
                "skipping derived column"
            );
            skipped.push(PanelError::missing_input(step.output.clone(), missing));
            continue;
        };

        let values = formula.evaluate(&panel, &step.output)?;
        panel = panel.with_column(Column::new(step.output.clone(), values))?;
    }

    Ok(Derived { panel, skipped })
}
