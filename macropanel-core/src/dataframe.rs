use chrono::NaiveDate;
use polars::prelude::{Column as PlColumn, DataFrame, NamedFrom, PolarsResult, Series};

use crate::export::DATE_HEADER;
use crate::panel::Panel;

/// Extension trait converting panels into `polars` DataFrames.
pub trait ToDataFrame {
    /// Build a DataFrame with a leading `Date` column followed by the panel's columns.
    ///
    /// # Errors
    /// Returns a polars error if the frame cannot be constructed.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for Panel {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let dates: Vec<NaiveDate> = self.calendar().dates().to_vec();
        let mut columns = Vec::with_capacity(self.width() + 1);
        columns.push(PlColumn::from(Series::new(DATE_HEADER.into(), dates)));
        for c in self.columns() {
            columns.push(PlColumn::from(Series::new(c.name().into(), c.values())));
        }
        DataFrame::new(columns)
    }
}
