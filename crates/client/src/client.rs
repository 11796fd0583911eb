//! The spreadsheet client.
//!
//! Holds the injected session, the spreadsheet id, and the title→id mapping
//! built once at construction. Every operation assembles one request and
//! forwards it; responses come back largely unprocessed.

use std::collections::HashMap;
use std::path::Path;

use gridport_protocol::{
    BatchUpdateRequest, BatchUpdateResponse, CellData, CellFormat, Color, Dimension,
    DimensionProperties, DimensionRange, GridRange, Request, SheetProperties, Spreadsheet,
    ValueRange,
};
use serde_json::Value;

use crate::auth::{ServiceAccountKey, DEFAULT_SCOPE};
use crate::error::SheetsError;
use crate::range::RangeRef;
use crate::session::{HttpSession, SheetsSession};

/// Which sheet (tab) an operation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetRef {
    /// The spreadsheet's first sheet. A real sentinel — sheet id 0 is a
    /// legitimate id and must not double as "default".
    Default,
    /// A sheet title, resolved through the title→id mapping.
    Title(String),
    /// A numeric sheet id used as-is.
    Id(i64),
}

impl From<&str> for SheetRef {
    fn from(title: &str) -> Self {
        SheetRef::Title(title.to_string())
    }
}

impl From<String> for SheetRef {
    fn from(title: String) -> Self {
        SheetRef::Title(title)
    }
}

/// A background color as four 0–255 channels. Converted to the service's
/// 0–1 fractional scale on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

/// Client for one spreadsheet.
pub struct SheetsClient {
    session: Box<dyn SheetsSession>,
    spreadsheet_id: String,
    sheet_ids: HashMap<String, i64>,
    first_sheet_id: i64,
}

// The session is a trait object, so Debug is written by hand and elides it.
impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("sheet_ids", &self.sheet_ids)
            .field("first_sheet_id", &self.first_sheet_id)
            .finish_non_exhaustive()
    }
}

impl SheetsClient {
    /// Authenticate with a service-account key file and open the
    /// spreadsheet. `scopes` defaults to [`DEFAULT_SCOPE`] when `None`.
    ///
    /// Fails if the key file is missing or invalid, the token exchange is
    /// rejected, or the metadata fetch fails. Nothing is retried.
    pub fn connect(
        spreadsheet_id: impl Into<String>,
        key_file: impl AsRef<Path>,
        scopes: Option<Vec<String>>,
    ) -> Result<Self, SheetsError> {
        let key = ServiceAccountKey::from_file(key_file.as_ref())?;
        let scopes = scopes.unwrap_or_else(|| vec![DEFAULT_SCOPE.to_string()]);
        let token = key.fetch_access_token(&reqwest::blocking::Client::new(), &scopes)?;
        Self::with_session(spreadsheet_id, Box::new(HttpSession::new(token.access_token)))
    }

    /// Open the spreadsheet over an injected session. This is the seam
    /// tests use to substitute a fake for the network.
    pub fn with_session(
        spreadsheet_id: impl Into<String>,
        session: Box<dyn SheetsSession>,
    ) -> Result<Self, SheetsError> {
        let spreadsheet_id = spreadsheet_id.into();
        let meta = session.get_spreadsheet(&spreadsheet_id)?;
        let (sheet_ids, first_sheet_id) = index_sheets(&meta)?;
        Ok(Self {
            session,
            spreadsheet_id,
            sheet_ids,
            first_sheet_id,
        })
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Numeric id for a sheet title, if known.
    pub fn sheet_id(&self, title: &str) -> Option<i64> {
        self.sheet_ids.get(title).copied()
    }

    /// Titles currently in the mapping (arbitrary order).
    pub fn sheet_titles(&self) -> Vec<&str> {
        self.sheet_ids.keys().map(String::as_str).collect()
    }

    // ── Values ──────────────────────────────────────────────────────

    /// Read a cell range. Returns the 2-D value matrix, empty when the
    /// range holds no values. No coercion is performed.
    pub fn read(&self, range: impl Into<RangeRef>) -> Result<Vec<Vec<Value>>, SheetsError> {
        let result = self
            .session
            .get_values(&self.spreadsheet_id, &range.into().to_a1())?;
        Ok(result.values)
    }

    /// Overwrite a cell range verbatim (`valueInputOption=RAW`, no formula
    /// interpretation). `data` is a 2-D matrix; a single row must still be
    /// wrapped as one nested row. Returns a human-readable update count.
    pub fn write(
        &self,
        range: impl Into<RangeRef>,
        data: Vec<Vec<Value>>,
    ) -> Result<String, SheetsError> {
        let body = ValueRange {
            values: data,
            ..Default::default()
        };
        let result =
            self.session
                .update_values(&self.spreadsheet_id, &range.into().to_a1(), &body)?;
        Ok(format!("{} cells updated.", result.updated_cells.unwrap_or(0)))
    }

    // ── Formatting ──────────────────────────────────────────────────

    /// Auto-resize columns and/or rows on a sheet. Each supplied half-open
    /// index range becomes one `autoResizeDimensions` sub-request (columns
    /// first). Supplying neither sends an empty batch, which the service
    /// rejects; that rejection propagates like any other remote error.
    pub fn auto_fit(
        &self,
        sheet: SheetRef,
        columns: Option<(i64, i64)>,
        rows: Option<(i64, i64)>,
    ) -> Result<BatchUpdateResponse, SheetsError> {
        let sheet_id = self.resolve(&sheet)?;
        let mut requests = Vec::new();
        if let Some((start_index, end_index)) = columns {
            requests.push(Request::AutoResizeDimensions {
                dimensions: DimensionRange {
                    sheet_id,
                    dimension: Dimension::Columns,
                    start_index,
                    end_index,
                },
            });
        }
        if let Some((start_index, end_index)) = rows {
            requests.push(Request::AutoResizeDimensions {
                dimensions: DimensionRange {
                    sheet_id,
                    dimension: Dimension::Rows,
                    start_index,
                    end_index,
                },
            });
        }
        self.session
            .batch_update(&self.spreadsheet_id, &BatchUpdateRequest { requests })
    }

    /// Paint the background color of a cell rectangle. `columns` and `rows`
    /// are half-open, zero-based index ranges, following the service's
    /// grid-range convention.
    pub fn set_background(
        &self,
        columns: (i64, i64),
        rows: (i64, i64),
        color: Rgba,
        sheet: SheetRef,
    ) -> Result<BatchUpdateResponse, SheetsError> {
        let sheet_id = self.resolve(&sheet)?;
        let request = Request::RepeatCell {
            range: GridRange {
                sheet_id,
                start_row_index: Some(rows.0),
                end_row_index: Some(rows.1),
                start_column_index: Some(columns.0),
                end_column_index: Some(columns.1),
            },
            cell: CellData {
                user_entered_format: Some(CellFormat {
                    background_color: Some(Color::from_rgba8(
                        color.red,
                        color.green,
                        color.blue,
                        color.alpha,
                    )),
                }),
            },
            fields: "userEnteredFormat.backgroundColor".into(),
        };
        self.session.batch_update(
            &self.spreadsheet_id,
            &BatchUpdateRequest {
                requests: vec![request],
            },
        )
    }

    // ── Sheet management ────────────────────────────────────────────

    /// Add a sheet with the given title and return its id. The title→id
    /// mapping is updated from the batch reply; when the service omits the
    /// new sheet's properties, the whole sheet list is re-fetched instead.
    pub fn add_sheet(&mut self, title: &str) -> Result<i64, SheetsError> {
        let request = Request::AddSheet {
            properties: SheetProperties {
                title: title.to_string(),
                ..Default::default()
            },
        };
        let response = self.session.batch_update(
            &self.spreadsheet_id,
            &BatchUpdateRequest {
                requests: vec![request],
            },
        )?;

        let added = response
            .replies
            .iter()
            .find_map(|reply| reply.add_sheet.as_ref())
            .and_then(|reply| reply.properties.sheet_id);

        match added {
            Some(id) => {
                self.sheet_ids.insert(title.to_string(), id);
                Ok(id)
            }
            None => {
                self.refresh_sheet_ids()?;
                self.sheet_ids
                    .get(title)
                    .copied()
                    .ok_or_else(|| SheetsError::UnknownSheet(title.to_string()))
            }
        }
    }

    /// Delete the sheet with the given numeric id. The mapping is left
    /// alone: only sheet creation mutates it.
    pub fn delete_sheet(&self, sheet_id: i64) -> Result<BatchUpdateResponse, SheetsError> {
        self.session.batch_update(
            &self.spreadsheet_id,
            &BatchUpdateRequest {
                requests: vec![Request::DeleteSheet { sheet_id }],
            },
        )
    }

    /// Hide a half-open column index range on a sheet.
    pub fn hide_columns(
        &self,
        sheet: SheetRef,
        columns: (i64, i64),
    ) -> Result<BatchUpdateResponse, SheetsError> {
        let sheet_id = self.resolve(&sheet)?;
        let request = Request::UpdateDimensionProperties {
            range: DimensionRange {
                sheet_id,
                dimension: Dimension::Columns,
                start_index: columns.0,
                end_index: columns.1,
            },
            properties: DimensionProperties {
                hidden_by_user: Some(true),
            },
            fields: "hiddenByUser".into(),
        };
        self.session.batch_update(
            &self.spreadsheet_id,
            &BatchUpdateRequest {
                requests: vec![request],
            },
        )
    }

    // ── Internal helpers ────────────────────────────────────────────

    fn resolve(&self, sheet: &SheetRef) -> Result<i64, SheetsError> {
        match sheet {
            SheetRef::Default => Ok(self.first_sheet_id),
            SheetRef::Id(id) => Ok(*id),
            SheetRef::Title(title) => self
                .sheet_ids
                .get(title)
                .copied()
                .ok_or_else(|| SheetsError::UnknownSheet(title.clone())),
        }
    }

    fn refresh_sheet_ids(&mut self) -> Result<(), SheetsError> {
        let meta = self.session.get_spreadsheet(&self.spreadsheet_id)?;
        let (sheet_ids, first_sheet_id) = index_sheets(&meta)?;
        self.sheet_ids = sheet_ids;
        self.first_sheet_id = first_sheet_id;
        Ok(())
    }
}

/// Build the title→id mapping and pick out the first sheet's id.
fn index_sheets(meta: &Spreadsheet) -> Result<(HashMap<String, i64>, i64), SheetsError> {
    let mut sheet_ids = HashMap::new();
    let mut first_sheet_id = None;
    for sheet in &meta.sheets {
        let id = sheet
            .properties
            .sheet_id
            .ok_or_else(|| SheetsError::Parse("sheet entry missing sheetId".into()))?;
        if first_sheet_id.is_none() {
            first_sheet_id = Some(id);
        }
        sheet_ids.insert(sheet.properties.title.clone(), id);
    }
    let first_sheet_id =
        first_sheet_id.ok_or_else(|| SheetsError::Parse("spreadsheet has no sheets".into()))?;
    Ok((sheet_ids, first_sheet_id))
}
