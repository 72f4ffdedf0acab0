use thiserror::Error;

/// Spreadsheet contents rejected before any table was touched.
#[derive(Error, Debug)]
pub enum SyncError {
    /// One or more required column headers are absent from a sheet.
    #[error("Missing headers in sheet '{sheet}': {}", headers.join(", "))]
    MissingHeaders { sheet: String, headers: Vec<String> },
}
