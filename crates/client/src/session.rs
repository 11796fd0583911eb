//! The remote session capability and its HTTP implementation.
//!
//! `SheetsSession` is the narrow seam between the client and the network:
//! exactly the four remote calls the operations need. Tests substitute a
//! fake; production uses `HttpSession` (blocking reqwest, no Tokio runtime
//! required).

use std::time::Duration;

use gridport_protocol::{
    BatchUpdateRequest, BatchUpdateResponse, Spreadsheet, UpdateValuesResponse, ValueInputOption,
    ValueRange,
};

use crate::error::SheetsError;

/// Production endpoint for the Sheets v4 REST API.
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// The remote calls the client needs, and nothing else.
pub trait SheetsSession {
    /// `GET /v4/spreadsheets/{id}` — spreadsheet metadata (sheet list).
    fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<Spreadsheet, SheetsError>;

    /// `GET /v4/spreadsheets/{id}/values/{range}`.
    fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<ValueRange, SheetsError>;

    /// `PUT /v4/spreadsheets/{id}/values/{range}?valueInputOption=RAW`.
    fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        body: &ValueRange,
    ) -> Result<UpdateValuesResponse, SheetsError>;

    /// `POST /v4/spreadsheets/{id}:batchUpdate`.
    fn batch_update(
        &self,
        spreadsheet_id: &str,
        body: &BatchUpdateRequest,
    ) -> Result<BatchUpdateResponse, SheetsError>;
}

/// Blocking HTTP session holding the bearer token.
#[derive(Clone)]
pub struct HttpSession {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl HttpSession {
    /// Create a session against the production endpoint.
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, SHEETS_API_BASE.to_string())
    }

    /// Create a session against an arbitrary endpoint (tests).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("gridport/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url,
            token,
        }
    }

    // Ranges contain characters that need escaping in a path segment
    // (spaces in quoted sheet titles), so the values URLs are built through
    // url's segment encoder rather than format!.
    fn values_url(&self, spreadsheet_id: &str, range: &str) -> Result<url::Url, SheetsError> {
        let mut url =
            url::Url::parse(&self.base_url).map_err(|e| SheetsError::Parse(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::Parse(format!("bad base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values", range]);
        Ok(url)
    }

    fn check(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, SheetsError> {
        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SheetsError::Http(status, body));
        }
        Ok(response)
    }
}

impl SheetsSession for HttpSession {
    fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<Spreadsheet, SheetsError> {
        let url = format!("{}/v4/spreadsheets/{}", self.base_url, spreadsheet_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| SheetsError::Network(e.to_string()))?;
        self.check(response)?
            .json::<Spreadsheet>()
            .map_err(|e| SheetsError::Parse(e.to_string()))
    }

    fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<ValueRange, SheetsError> {
        let url = self.values_url(spreadsheet_id, range)?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| SheetsError::Network(e.to_string()))?;
        self.check(response)?
            .json::<ValueRange>()
            .map_err(|e| SheetsError::Parse(e.to_string()))
    }

    fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        body: &ValueRange,
    ) -> Result<UpdateValuesResponse, SheetsError> {
        let url = self.values_url(spreadsheet_id, range)?;
        let response = self
            .http
            .put(url)
            .bearer_auth(&self.token)
            .query(&[("valueInputOption", ValueInputOption::Raw.as_str())])
            .json(body)
            .send()
            .map_err(|e| SheetsError::Network(e.to_string()))?;
        self.check(response)?
            .json::<UpdateValuesResponse>()
            .map_err(|e| SheetsError::Parse(e.to_string()))
    }

    fn batch_update(
        &self,
        spreadsheet_id: &str,
        body: &BatchUpdateRequest,
    ) -> Result<BatchUpdateResponse, SheetsError> {
        let url = format!(
            "{}/v4/spreadsheets/{}:batchUpdate",
            self.base_url, spreadsheet_id
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .map_err(|e| SheetsError::Network(e.to_string()))?;
        self.check(response)?
            .json::<BatchUpdateResponse>()
            .map_err(|e| SheetsError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_url_encodes_range() {
        let session = HttpSession::with_base_url("tok".into(), SHEETS_API_BASE.to_string());
        let url = session.values_url("abc123", "'Q1 Results'!A1:B5").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/'Q1%20Results'!A1:B5"
        );
    }

    #[test]
    fn test_values_url_plain_range() {
        let session = HttpSession::with_base_url("tok".into(), SHEETS_API_BASE.to_string());
        let url = session.values_url("abc123", "A1:B5").unwrap();
        assert!(url
            .as_str()
            .ends_with("/v4/spreadsheets/abc123/values/A1:B5"));
    }
}
