use crate::panel::Panel;

/// Propagate the most recent value forward over missing cells.
pub fn forward_fill(values: &mut [Option<f64>]) {
    let mut last: Option<f64> = None;
    for v in values.iter_mut() {
        match *v {
            Some(x) => last = Some(x),
            None => *v = last,
        }
    }
}

/// Propagate the next value backward over missing cells.
pub fn backward_fill(values: &mut [Option<f64>]) {
    let mut next: Option<f64> = None;
    for v in values.iter_mut().rev() {
        match *v {
            Some(x) => next = Some(x),
            None => *v = next,
        }
    }
}

/// Forward-fill then backward-fill every column of the panel.
///
/// Forward fill runs first, so backward fill only ever reaches leading gaps
/// before a column's first value. Columns with no value at all stay missing.
/// Applying this twice yields the same panel as applying it once.
#[must_use]
pub fn fill_gaps(panel: Panel) -> Panel {
    panel.map_values(|values| {
        forward_fill(values);
        backward_fill(values);
    })
}
