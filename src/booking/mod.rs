//! Booking inquiries: the record shape, the validation gate, and the table on disk.
//!
//! A visitor fills in the "Book Us" form; [`form::BookingRequest::validate`]
//! turns it into a [`BookingRecord`] or rejects it, and only accepted records
//! reach [`store::BookingStore::append`].
//!
//! ## Table format
//!
//! One CSV file with a header row and one row per submission:
//!
//! ```text
//! timestamp,name,email,phone,wedding_date,location,package,message
//! 2025-01-04 18:22:05,Asha Rao,asha@example.com,98480 00000,2025-03-14,Hyderabad,Premium,"Two days, haldi + wedding"
//! ```
//!
//! Column order is fixed. Fields containing commas, quotes or newlines are
//! quoted the standard CSV way.

pub mod form;
pub mod store;

pub use form::{Accepted, BookingRequest, SubmitError, ValidationError, submit_booking};
pub use store::{BookingError, BookingStore};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Column names of the booking table, in order.
pub const COLUMNS: [&str; 8] = [
    "timestamp",
    "name",
    "email",
    "phone",
    "wedding_date",
    "location",
    "package",
    "message",
];

/// One booking inquiry. Immutable once written.
///
/// Field order matches [`COLUMNS`]; the CSV header is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Submission time, second precision, local clock.
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub wedding_date: NaiveDate,
    pub location: String,
    pub package: Package,
    /// Free text; may be empty.
    pub message: String,
}

/// Coverage packages offered on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Package {
    #[default]
    Basic,
    Premium,
    Deluxe,
    #[serde(rename = "Not Decided")]
    NotDecided,
}

impl Package {
    /// Every package, in the order the form lists them.
    pub const ALL: [Package; 4] = [
        Package::Basic,
        Package::Premium,
        Package::Deluxe,
        Package::NotDecided,
    ];

    /// Label shown on the form and stored in the table.
    pub fn label(self) -> &'static str {
        match self {
            Package::Basic => "Basic",
            Package::Premium => "Premium",
            Package::Deluxe => "Deluxe",
            Package::NotDecided => "Not Decided",
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown package {0:?}, expected one of: Basic, Premium, Deluxe, Not Decided")]
pub struct UnknownPackage(pub String);

impl FromStr for Package {
    type Err = UnknownPackage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "basic" => Ok(Package::Basic),
            "premium" => Ok(Package::Premium),
            "deluxe" => Ok(Package::Deluxe),
            "not decided" | "undecided" => Ok(Package::NotDecided),
            _ => Err(UnknownPackage(s.to_string())),
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS` timestamps.
mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
