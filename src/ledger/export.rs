//! CSV export of a ledger.

use csv::{Terminator, WriterBuilder};

use crate::ledger::Ledger;

/// The header row of exported CSV files.
const CSV_HEADER: [&str; 5] = ["Date", "Type", "Category", "Amount", "Note"];

impl Ledger {
    /// Serialize every transaction as CSV, most recent date first.
    ///
    /// Dates are written as `YYYY-MM-DD` and amounts with exactly two decimal
    /// places. Fields containing commas, quotes or newlines are quoted and
    /// embedded quotes are doubled.
    ///
    /// # Errors
    /// Returns an error if a record cannot be written to the buffer.
    pub fn export_csv(&self) -> Result<Vec<u8>, csv::Error> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADER)?;

        for transaction in self.list_sorted() {
            writer.write_record([
                transaction.date.to_string(),
                transaction.transaction_type.to_string(),
                transaction.category.clone(),
                format!("{:.2}", transaction.amount),
                transaction.note.clone(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|error| error.into_error().into())
    }
}
