//! Spreadsheet source for the sync job.
//!
//! The sync only needs one capability: read a worksheet by name and get its header row
//! plus data rows. `SheetSource` describes that capability; `google::GoogleSheetsClient`
//! implements it against the Google Sheets v4 API.

pub mod google;

use serenity::async_trait;

use crate::error::sheet::SheetError;

/// Reads worksheets by name.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn read_sheet(&self, name: &str) -> Result<SheetTable, SheetError>;
}

/// Normalizes a header for comparison: surrounding whitespace trimmed, then lowercased.
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// A worksheet's contents with the first row taken as headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Splits raw cell values into a header row and data rows.
    ///
    /// Rows that are entirely blank are dropped.
    pub fn from_values(values: Vec<Vec<String>>) -> Self {
        let mut values = values.into_iter();
        let headers = values.next().unwrap_or_default();
        let rows = values
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .collect();

        Self { headers, rows }
    }

    /// Returns the entries of `expected` that no header matches after normalization.
    pub fn missing_headers(&self, expected: &[&str]) -> Vec<String> {
        let present: Vec<String> = self.headers.iter().map(|h| normalize_header(h)).collect();

        expected
            .iter()
            .filter(|header| !present.contains(&normalize_header(header)))
            .map(|header| header.to_string())
            .collect()
    }

    /// Iterates data rows as header-addressable records.
    pub fn records(&self) -> impl Iterator<Item = SheetRecord<'_>> {
        let columns: Vec<String> = self.headers.iter().map(|h| normalize_header(h)).collect();

        self.rows.iter().map(move |row| SheetRecord {
            columns: columns.clone(),
            row,
        })
    }
}

/// One data row, addressed by header name.
pub struct SheetRecord<'a> {
    columns: Vec<String>,
    row: &'a [String],
}

impl SheetRecord<'_> {
    /// Returns the trimmed cell under `header`, or `None` when the cell is blank or
    /// missing. The Sheets API omits trailing empty cells, so rows can be shorter than
    /// the header row.
    pub fn get(&self, header: &str) -> Option<&str> {
        let wanted = normalize_header(header);
        let index = self.columns.iter().position(|column| *column == wanted)?;

        self.row
            .get(index)
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
    }

    /// Same as [`SheetRecord::get`] but owned, for storing.
    pub fn text(&self, header: &str) -> Option<String> {
        self.get(header).map(str::to_string)
    }
}
