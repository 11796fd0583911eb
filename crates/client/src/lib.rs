//! Gridport — Google Sheets v4 client for service accounts.
//!
//! A thin pass-through over the REST API: authenticate with a key file,
//! resolve sheet titles to numeric ids, and issue read / write / formatting
//! requests. Every operation is one network round trip; remote failures
//! surface unchanged as [`SheetsError`]. No retries, no batching across
//! calls, no rate-limit handling.
//!
//! The remote session sits behind the [`SheetsSession`] trait so tests can
//! substitute a fake without a network.

mod auth;
mod client;
mod error;
mod range;
mod session;

pub use auth::{AccessToken, ServiceAccountKey, DEFAULT_SCOPE};
pub use client::{Rgba, SheetRef, SheetsClient};
pub use error::SheetsError;
pub use range::{column_letter, RangeRef};
pub use session::{HttpSession, SheetsSession, SHEETS_API_BASE};
