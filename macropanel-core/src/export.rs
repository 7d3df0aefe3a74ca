use std::io;

use crate::PanelError;
use crate::panel::Panel;

/// Header of the leading date column.
pub const DATE_HEADER: &str = "Date";
const DATE_FORMAT: &str = "%Y-%m-%d";

fn csv_err(e: csv::Error) -> PanelError {
    PanelError::Other(format!("csv: {e}"))
}

/// Write `panel` as CSV: `Date` first, then every column in panel order.
///
/// One row per calendar date, ascending. Missing cells are empty fields.
///
/// # Errors
/// Returns `PanelError::Other` if the underlying writer fails.
pub fn write_csv<W: io::Write>(panel: &Panel, writer: W) -> Result<(), PanelError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![DATE_HEADER];
    header.extend(panel.column_names());
    wtr.write_record(&header).map_err(csv_err)?;

    for (i, date) in panel.calendar().iter().enumerate() {
        let mut record = Vec::with_capacity(panel.width() + 1);
        record.push(date.format(DATE_FORMAT).to_string());
        record.extend(
            panel
                .columns()
                .iter()
                .map(|c| c.values()[i].map(|v| v.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&record).map_err(csv_err)?;
    }

    wtr.flush()
        .map_err(|e| PanelError::Other(format!("csv: {e}")))
}

/// Render `panel` as an in-memory CSV string.
///
/// # Errors
/// Returns `PanelError::Other` if encoding fails.
pub fn to_csv_string(panel: &Panel) -> Result<String, PanelError> {
    let mut buf = Vec::new();
    write_csv(panel, &mut buf)?;
    String::from_utf8(buf).map_err(|e| PanelError::Other(format!("csv: {e}")))
}
