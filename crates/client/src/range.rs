//! Range designators.
//!
//! The values API addresses cells in A1 notation. `RangeRef` lets callers
//! hand over either a ready-made A1 string or a structured rectangle that
//! gets rendered to A1, instead of overloading one parameter with both.

/// A cell range for the values API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeRef {
    /// A1 notation passed through untouched, e.g. `"Data!A1:B5"`.
    A1(String),
    /// A structured rectangle, rendered to A1 notation.
    /// Coordinates are zero-based and inclusive on both ends.
    Cells {
        /// Sheet title; `None` targets the spreadsheet's first sheet.
        sheet: Option<String>,
        start_col: u32,
        start_row: u32,
        end_col: u32,
        end_row: u32,
    },
}

impl RangeRef {
    /// Render to the A1 string sent on the wire.
    pub fn to_a1(&self) -> String {
        match self {
            RangeRef::A1(s) => s.clone(),
            RangeRef::Cells {
                sheet,
                start_col,
                start_row,
                end_col,
                end_row,
            } => {
                let body = format!(
                    "{}{}:{}{}",
                    column_letter(*start_col),
                    start_row + 1,
                    column_letter(*end_col),
                    end_row + 1,
                );
                match sheet {
                    Some(title) => format!("{}!{}", sheet_prefix(title), body),
                    None => body,
                }
            }
        }
    }
}

impl From<&str> for RangeRef {
    fn from(s: &str) -> Self {
        RangeRef::A1(s.to_string())
    }
}

impl From<String> for RangeRef {
    fn from(s: String) -> Self {
        RangeRef::A1(s)
    }
}

/// Zero-based column index to A1 letters: 0 → "A", 25 → "Z", 26 → "AA".
pub fn column_letter(mut col: u32) -> String {
    let mut out = String::new();
    loop {
        out.insert(0, (b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    out
}

// Titles that aren't plain identifiers must be single-quoted in A1 notation,
// with embedded quotes doubled.
fn sheet_prefix(title: &str) -> String {
    let plain = !title.is_empty()
        && !title.chars().next().is_some_and(|c| c.is_ascii_digit())
        && title.chars().all(|c| c.is_alphanumeric() || c == '_');
    if plain {
        title.to_string()
    } else {
        format!("'{}'", title.replace('\'', "''"))
    }
}
