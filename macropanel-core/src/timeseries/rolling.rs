/// Keep finite results; NaN and infinities become missing.
#[must_use]
pub fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

/// Fractional change over a fixed number of rows: `v[t] / v[t - periods] - 1`.
///
/// The first `periods` rows are missing, as is any row where either operand
/// is missing or the ratio is non-finite (e.g. a zero base).
#[must_use]
pub fn pct_change(values: &[Option<f64>], periods: usize) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(t, cur)| {
            let base = t.checked_sub(periods).and_then(|b| values[b])?;
            let cur = (*cur)?;
            finite(cur / base - 1.0)
        })
        .collect()
}

/// Trailing simple mean over `window` rows.
///
/// Rows before the first full window are missing; a window containing any
/// missing cell is missing. A zero window yields an all-missing column.
#[must_use]
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    let divisor = window as f64;
    (0..values.len())
        .map(|t| {
            let first = (t + 1).checked_sub(window)?;
            let mut sum = 0.0;
            for v in &values[first..=t] {
                sum += (*v)?;
            }
            finite(sum / divisor)
        })
        .collect()
}
