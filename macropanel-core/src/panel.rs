use chrono::NaiveDate;

use crate::PanelError;
use crate::timeseries::calendar::Calendar;

/// A named, calendar-aligned column; `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

impl Column {
    /// Build a column from its name and one value per calendar row.
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell values in calendar order.
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when at least one cell holds a value.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }
}

/// Daily panel: one row per calendar date, columns in insertion order.
///
/// A panel is an owned value threaded through the pipeline: each stage takes
/// it by value and hands back a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    calendar: Calendar,
    columns: Vec<Column>,
}

impl Panel {
    /// A calendar-only panel with no value columns.
    #[must_use]
    pub const fn new(calendar: Calendar) -> Self {
        Self {
            calendar,
            columns: Vec::new(),
        }
    }

    /// The panel's date axis.
    #[must_use]
    pub const fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Number of rows (calendar dates).
    #[must_use]
    pub fn height(&self) -> usize {
        self.calendar.len()
    }

    /// Number of value columns (the date axis is not counted).
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(Column::name)
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// True when the column exists and holds at least one value.
    #[must_use]
    pub fn is_available(&self, name: &str) -> bool {
        self.column(name).is_some_and(Column::is_populated)
    }

    /// Cell value for `name` on `date`; `None` when missing or off-calendar.
    #[must_use]
    pub fn value(&self, name: &str, date: NaiveDate) -> Option<f64> {
        let i = self.calendar.index_of(date)?;
        self.column(name)?.values[i]
    }

    /// Append a column.
    ///
    /// # Errors
    /// Returns `PanelError::Data` if the column length differs from the
    /// calendar length or a column with the same name already exists.
    pub fn with_column(mut self, column: Column) -> Result<Self, PanelError> {
        if column.len() != self.calendar.len() {
            return Err(PanelError::Data(format!(
                "column {} has {} rows, calendar has {}",
                column.name,
                column.len(),
                self.calendar.len()
            )));
        }
        if self.column(&column.name).is_some() {
            return Err(PanelError::Data(format!(
                "duplicate column {}",
                column.name
            )));
        }
        self.columns.push(column);
        Ok(self)
    }

    /// Apply an in-place transformation to every column's cells.
    #[must_use]
    pub fn map_values<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&mut [Option<f64>]),
    {
        for c in &mut self.columns {
            f(&mut c.values);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cal() -> Calendar {
        Calendar::daily(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        )
    }

    #[test]
    fn rejects_misaligned_and_duplicate_columns() {
        let panel = Panel::new(cal());
        assert!(matches!(
            panel.clone().with_column(Column::new("A", vec![Some(1.0)])),
            Err(PanelError::Data(_))
        ));
        let panel = panel
            .with_column(Column::new("A", vec![Some(1.0), None, None]))
            .unwrap();
        assert!(matches!(
            panel.with_column(Column::new("A", vec![None; 3])),
            Err(PanelError::Data(_))
        ));
    }

    #[test]
    fn availability_requires_a_value() {
        let panel = Panel::new(cal())
            .with_column(Column::new("Empty", vec![None; 3]))
            .unwrap()
            .with_column(Column::new("Full", vec![Some(1.0), Some(2.0), Some(3.0)]))
            .unwrap();
        assert!(!panel.is_available("Empty"));
        assert!(panel.is_available("Full"));
        assert!(!panel.is_available("Absent"));
        assert_eq!(
            panel.value("Full", NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            Some(2.0)
        );
        assert_eq!(panel.column_names().collect::<Vec<_>>(), vec!["Empty", "Full"]);
    }
}
