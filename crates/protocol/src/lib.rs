//! Gridport Sheets Wire Types — Sheets v4 REST Contract
//!
//! This crate defines the request/response types the client exchanges with
//! the Google Sheets v4 API, limited to the surface Gridport actually uses.
//! The wire format is JSON with camelCase field names; enum constants match
//! the service's string values (`ROWS`, `RAW`, ...).
//!
//! The schema is owned by the remote service. Nothing here invents fields —
//! every type mirrors the official REST resource it is named after, and
//! fields the client never touches are simply omitted.
//!
//! # Usage
//!
//! ```ignore
//! use gridport_protocol::{BatchUpdateRequest, Dimension, DimensionRange, Request};
//!
//! let body = BatchUpdateRequest {
//!     requests: vec![Request::AutoResizeDimensions {
//!         dimensions: DimensionRange {
//!             sheet_id: 0,
//!             dimension: Dimension::Columns,
//!             start_index: 0,
//!             end_index: 5,
//!         },
//!     }],
//! };
//! let json = serde_json::to_string(&body)?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Spreadsheet metadata
// =============================================================================

/// A spreadsheet resource, as returned by `GET /v4/spreadsheets/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sheets: Vec<Sheet>,
}

/// One sheet (tab) of a spreadsheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub properties: SheetProperties,
}

/// Sheet properties. All fields are optional on the wire; an `addSheet`
/// request carries only `title`, while responses carry `sheetId` and `title`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

// =============================================================================
// Values (spreadsheets.values.get / update)
// =============================================================================

/// A rectangle of cell values. The service omits `values` entirely for an
/// empty range, so deserialization defaults it to an empty matrix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Vec<Value>>,
}

/// Response to `spreadsheets.values.update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_cells: Option<u32>,
}

/// How written values are interpreted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Stored verbatim, no formula or number parsing.
    Raw,
    /// Parsed as if typed into the UI (formulas, dates, ...).
    UserEntered,
}

impl ValueInputOption {
    /// The query-parameter spelling (`RAW` / `USER_ENTERED`).
    pub fn as_str(self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

// =============================================================================
// batchUpdate request envelope
// =============================================================================

/// Body of `POST /v4/spreadsheets/{id}:batchUpdate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchUpdateRequest {
    pub requests: Vec<Request>,
}

/// One sub-request of a batch update. Serializes to the service's
/// single-key object form, e.g. `{"deleteSheet":{"sheetId":123}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    AutoResizeDimensions {
        dimensions: DimensionRange,
    },
    RepeatCell {
        range: GridRange,
        cell: CellData,
        fields: String,
    },
    AddSheet {
        properties: SheetProperties,
    },
    #[serde(rename_all = "camelCase")]
    DeleteSheet {
        sheet_id: i64,
    },
    UpdateDimensionProperties {
        range: DimensionRange,
        properties: DimensionProperties,
        fields: String,
    },
}

/// Row or column axis of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Rows,
    Columns,
}

/// A half-open, zero-based run of rows or columns on one sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRange {
    pub sheet_id: i64,
    pub dimension: Dimension,
    pub start_index: i64,
    pub end_index: i64,
}

/// Mutable properties of a dimension range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_by_user: Option<bool>,
}

/// A half-open, zero-based cell rectangle on one sheet. An unset bound
/// means "unbounded on that side" and is omitted from the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    #[serde(default)]
    pub sheet_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<i64>,
}

/// Cell payload for `repeatCell`. Only the formatting surface is carried.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_entered_format: Option<CellFormat>,
}

/// Cell format, limited to the background color.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

/// An RGBA color on the service's 0–1 fractional scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Convert 0–255 channel values to the wire's fractional scale.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
            alpha: f64::from(alpha) / 255.0,
        }
    }
}

// =============================================================================
// batchUpdate response envelope
// =============================================================================

/// Response to `POST /v4/spreadsheets/{id}:batchUpdate`. Replies are
/// positional: one entry per sub-request, empty objects for requests that
/// return nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Reply>,
}

/// One batch-update reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_sheet: Option<AddSheetReply>,
}

/// Reply to an `addSheet` request: the properties of the created sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddSheetReply {
    #[serde(default)]
    pub properties: SheetProperties,
}
