use std::path::{Path, PathBuf};

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serenity::async_trait;
use url::Url;

use crate::{
    error::sheet::SheetError,
    sheet::{SheetSource, SheetTable},
};

pub static SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
static SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
static JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
/// Lifetime requested for the signed assertion; Google caps it at one hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Fields of a Google service account JSON key used for the token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a key file downloaded from the Google Cloud console.
    pub async fn from_file(path: &Path) -> Result<Self, SheetError> {
        let json =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SheetError::CredentialsIo {
                    path: path.display().to_string(),
                    source,
                })?;

        Self::from_json(&json)
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Where the client gets its service account key.
#[derive(Debug, Clone)]
enum KeySource {
    /// Read from disk on every sync so a rotated or late-provisioned key is picked up.
    File(PathBuf),
    #[cfg(test)]
    Loaded(ServiceAccountKey),
}

/// Read-only Google Sheets v4 client authenticated as a service account.
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    key: KeySource,
    api_url: String,
}

impl GoogleSheetsClient {
    /// Creates a client that reads its key from `credentials_path` when a sync runs.
    pub fn new(http: reqwest::Client, spreadsheet_id: String, credentials_path: PathBuf) -> Self {
        Self {
            http,
            spreadsheet_id,
            key: KeySource::File(credentials_path),
            api_url: SHEETS_API_URL.to_string(),
        }
    }

    /// Creates a client with an already parsed key.
    #[cfg(test)]
    pub fn with_key(http: reqwest::Client, spreadsheet_id: String, key: ServiceAccountKey) -> Self {
        Self {
            http,
            spreadsheet_id,
            key: KeySource::Loaded(key),
            api_url: SHEETS_API_URL.to_string(),
        }
    }

    /// Overrides the Sheets API base URL.
    #[cfg(test)]
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn key(&self) -> Result<ServiceAccountKey, SheetError> {
        match &self.key {
            KeySource::File(path) => ServiceAccountKey::from_file(path).await,
            #[cfg(test)]
            KeySource::Loaded(key) => Ok(key.clone()),
        }
    }

    /// Exchanges a signed RS256 assertion for an OAuth2 access token.
    async fn access_token(&self) -> Result<String, SheetError> {
        let key = self.key().await?;
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &key.client_email,
            scope: SHEETS_READONLY_SCOPE,
            aud: &key.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let assertion = encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &EncodingKey::from_rsa_pem(key.private_key.as_bytes())?,
        )?;

        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", JWT_BEARER_GRANT)
            .append_pair("assertion", &assertion)
            .finish();

        let token = self
            .http
            .post(&key.token_uri)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await?
            .error_for_status()?
            .json::<TokenResponse>()
            .await?;

        Ok(token.access_token)
    }

    /// Builds the `values.get` URL for a whole worksheet.
    ///
    /// The sheet name is quoted as an A1 range so names with spaces or emoji resolve, and
    /// each path segment is percent-encoded.
    fn values_url(&self, sheet: &str) -> Result<Url, SheetError> {
        let range = format!("'{}'", sheet.replace('\'', "''"));
        let mut url =
            Url::parse(&self.api_url).map_err(|e| SheetError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| SheetError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&range);

        url.query_pairs_mut()
            .append_pair("majorDimension", "ROWS")
            .append_pair("valueRenderOption", "FORMATTED_VALUE");

        Ok(url)
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsClient {
    async fn read_sheet(&self, name: &str) -> Result<SheetTable, SheetError> {
        let token = self.access_token().await?;
        let url = self.values_url(name)?;

        let range = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<ValueRange>()
            .await?;

        tracing::debug!("Read {} rows from sheet '{}'", range.values.len(), name);

        Ok(SheetTable::from_values(range.values))
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server, ServerGuard};

    use super::*;

    static TEST_SPREADSHEET_ID: &str = "test-spreadsheet";

    fn test_client(server: &ServerGuard) -> GoogleSheetsClient {
        let key = ServiceAccountKey {
            client_email: "bot@test-project.iam.gserviceaccount.com".to_string(),
            private_key: include_str!("./testdata/private_test_rsa_key.pem").to_string(),
            token_uri: format!("{}/token", server.url()),
        };

        GoogleSheetsClient::with_key(reqwest::Client::new(), TEST_SPREADSHEET_ID.to_string(), key)
            .api_url(format!("{}/v4/spreadsheets", server.url()))
    }

    /// Tests reading a worksheet through the token exchange and `values.get`.
    ///
    /// Expected: Ok with the first row as headers and the rest as data rows
    #[tokio::test]
    async fn reads_headers_and_rows() {
        let mut server = Server::new_async().await;

        let token_endpoint = server
            .mock("POST", "/token")
            .match_body(Matcher::Regex("grant_type=urn".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"test-token","expires_in":3599,"token_type":"Bearer"}"#)
            .create_async()
            .await;

        let values_endpoint = server
            .mock(
                "GET",
                Matcher::Regex(r"^/v4/spreadsheets/test-spreadsheet/values/.+".to_string()),
            )
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "range": "'KVK 2 STATS TOP 600'!A1:J3",
                    "majorDimension": "ROWS",
                    "values": [
                        ["Governor ID", "Governor Name", "Power"],
                        ["50001", "Aethel", "45,000,000"],
                        ["50002", "Brand"]
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(&server);
        let table = client.read_sheet("KVK 2 STATS TOP 600").await.unwrap();

        token_endpoint.assert_async().await;
        values_endpoint.assert_async().await;

        assert_eq!(table.headers, vec!["Governor ID", "Governor Name", "Power"]);
        assert_eq!(table.rows.len(), 2);

        let second = table.records().nth(1).unwrap();
        assert_eq!(second.get("governor name"), Some("Brand"));
        assert_eq!(second.get("Power"), None);
    }

    /// Tests that an empty worksheet yields an empty table.
    ///
    /// The API omits `values` entirely when the range holds no data.
    ///
    /// Expected: Ok with no headers and no rows
    #[tokio::test]
    async fn empty_sheet_has_no_values() {
        let mut server = Server::new_async().await;

        server
            .mock("POST", "/token")
            .with_status(200)
            .with_body(r#"{"access_token":"test-token"}"#)
            .create_async()
            .await;
        server
            .mock("GET", Matcher::Regex(r"^/v4/spreadsheets/.+".to_string()))
            .with_status(200)
            .with_body(r#"{"range": "Sheet1!A1:Z1000", "majorDimension": "ROWS"}"#)
            .create_async()
            .await;

        let table = test_client(&server).read_sheet("Sheet1").await.unwrap();

        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    /// Tests that a rejected token request surfaces as an HTTP error.
    ///
    /// Expected: Err(SheetError::Http)
    #[tokio::test]
    async fn token_rejection_is_http_error() {
        let mut server = Server::new_async().await;

        server
            .mock("POST", "/token")
            .with_status(400)
            .with_body(r#"{"error":"invalid_grant"}"#)
            .create_async()
            .await;

        let result = test_client(&server).read_sheet("Sheet1").await;

        assert!(matches!(result, Err(SheetError::Http(_))));
    }

    /// Tests that sheet names are quoted and percent-encoded in the request path.
    ///
    /// Expected: Ok with spaces and quotes encoded inside one path segment
    #[test]
    fn encodes_sheet_name_in_path() {
        let client = GoogleSheetsClient::with_key(
            reqwest::Client::new(),
            "abc".to_string(),
            ServiceAccountKey {
                client_email: String::new(),
                private_key: String::new(),
                token_uri: String::new(),
            },
        );

        let url = client.values_url("KVK 2 STATS").unwrap();

        assert_eq!(
            url.path(),
            "/v4/spreadsheets/abc/values/'KVK%202%20STATS'"
        );
        assert_eq!(
            url.query(),
            Some("majorDimension=ROWS&valueRenderOption=FORMATTED_VALUE")
        );
    }

    /// Tests that a missing key file is reported with its path.
    ///
    /// Expected: Err(SheetError::CredentialsIo)
    #[tokio::test]
    async fn missing_key_file_is_reported() {
        let client = GoogleSheetsClient::new(
            reqwest::Client::new(),
            "abc".to_string(),
            PathBuf::from("does/not/exist.json"),
        );

        let result = client.read_sheet("Sheet1").await;

        assert!(matches!(result, Err(SheetError::CredentialsIo { .. })));
    }
}
