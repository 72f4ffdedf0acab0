use thiserror::Error;

/// Failures while talking to the spreadsheet source.
#[derive(Error, Debug)]
pub enum SheetError {
    /// Service account key file could not be read.
    #[error("Failed to read service account key '{path}': {source}")]
    CredentialsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Service account key file is not valid JSON or lacks required fields.
    #[error("Invalid service account key: {0}")]
    CredentialsParse(#[from] serde_json::Error),

    /// Signing the token request assertion failed.
    #[error("Failed to sign service account assertion: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// HTTP request to Google failed or returned an error status.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Configured API URL cannot be used as a base for sheet requests.
    #[error("Invalid Google Sheets API URL: {0}")]
    InvalidUrl(String),
}
