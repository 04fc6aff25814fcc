//! The "Book Us" form and its validation gate.
//!
//! Name, email, phone and location are required. A submission missing any of
//! them is rejected before the booking table is touched.

use super::store::{BookingError, BookingStore};
use super::{BookingRecord, Package};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

/// Shown to the visitor after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you! We will contact you shortly.";

/// Fields that must be non-blank, in form order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "phone", "location"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Lists every blank required field, in form order.
    #[error("Please fill all required fields.")]
    MissingFields(Vec<&'static str>),
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Could not save booking: {0}")]
    Store(#[from] BookingError),
}

/// Raw form input, as typed by the visitor.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Defaults to the submission date when not picked.
    pub wedding_date: Option<NaiveDate>,
    pub location: String,
    pub package: Package,
    pub message: String,
}

impl BookingRequest {
    /// Required fields that are empty or whitespace only.
    ///
    /// Stricter than a plain emptiness check: `"   "` counts as missing, so a
    /// name of only spaces is rejected rather than stored.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [&self.name, &self.email, &self.phone, &self.location];
        REQUIRED_FIELDS
            .into_iter()
            .zip(values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Accept the submission as a record stamped with `now` (to the second).
    ///
    /// Values are stored as typed; only presence is checked.
    pub fn validate(self, now: NaiveDateTime) -> Result<BookingRecord, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        Ok(BookingRecord {
            timestamp,
            name: self.name,
            email: self.email,
            phone: self.phone,
            wedding_date: self.wedding_date.unwrap_or(timestamp.date()),
            location: self.location,
            package: self.package,
            message: self.message,
        })
    }
}

/// A booking that made it into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub record: BookingRecord,
    /// Rows in the table after this one was added.
    pub rows: usize,
}

/// Validate a submission and, only if it passes, append it to the store.
pub fn submit_booking(
    store: &BookingStore,
    request: BookingRequest,
    now: NaiveDateTime,
) -> Result<Accepted, SubmitError> {
    let record = request.validate(now).inspect_err(|e| {
        tracing::info!(error = %e, "booking rejected");
    })?;
    let rows = store.append(&record)?;
    Ok(Accepted { record, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn complete_request_validates() {
        let record = sample_request().validate(fixed_now()).unwrap();
        assert_eq!(record.name, "Asha Rao");
        assert_eq!(record.timestamp, fixed_now());
        assert_eq!(record.wedding_date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(record.package, Package::Premium);
    }

    #[test]
    fn each_required_field_is_checked() {
        for field in REQUIRED_FIELDS {
            let mut request = sample_request();
            match field {
                "name" => request.name.clear(),
                "email" => request.email.clear(),
                "phone" => request.phone.clear(),
                "location" => request.location.clear(),
                _ => unreachable!(),
            }
            assert_eq!(
                request.validate(fixed_now()),
                Err(ValidationError::MissingFields(vec![field]))
            );
        }
    }

    #[test]
    fn all_missing_fields_listed_in_form_order() {
        let request = BookingRequest {
            phone: "98480 00000".to_string(),
            ..BookingRequest::default()
        };
        assert_eq!(request.missing_fields(), vec!["name", "email", "location"]);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut request = sample_request();
        request.email = "   ".to_string();
        assert_eq!(request.missing_fields(), vec!["email"]);
    }

    #[test]
    fn message_is_optional() {
        let mut request = sample_request();
        request.message.clear();
        assert_eq!(request.validate(fixed_now()).unwrap().message, "");
    }

    #[test]
    fn values_stored_as_typed() {
        let mut request = sample_request();
        request.name = "  Asha  ".to_string();
        assert_eq!(request.validate(fixed_now()).unwrap().name, "  Asha  ");
    }

    #[test]
    fn wedding_date_defaults_to_submission_day() {
        let mut request = sample_request();
        request.wedding_date = None;
        let record = request.validate(fixed_now()).unwrap();
        assert_eq!(record.wedding_date, fixed_now().date());
    }

    #[test]
    fn timestamp_truncated_to_seconds() {
        let now = fixed_now().with_nanosecond(750_000_000).unwrap();
        let record = sample_request().validate(now).unwrap();
        assert_eq!(record.timestamp, fixed_now());
    }

    #[test]
    fn validation_message_matches_form() {
        let err = ValidationError::MissingFields(vec!["name"]);
        assert_eq!(err.to_string(), "Please fill all required fields.");
    }

    #[test]
    fn rejected_submission_never_touches_store() {
        let tmp = TempDir::new().unwrap();
        let store = BookingStore::new(tmp.path().join("bookings.csv"));
        let mut request = sample_request();
        request.location.clear();

        let err = submit_booking(&store, request, fixed_now()).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert!(!store.path().exists());
    }

    #[test]
    fn accepted_submission_is_appended() {
        let tmp = TempDir::new().unwrap();
        let store = BookingStore::new(tmp.path().join("bookings.csv"));

        let accepted = submit_booking(&store, sample_request(), fixed_now()).unwrap();
        assert_eq!(accepted.rows, 1);
        assert_eq!(store.load().unwrap(), vec![accepted.record]);
    }

    #[test]
    fn accepted_submission_reports_row_count() {
        let tmp = TempDir::new().unwrap();
        let store = BookingStore::new(tmp.path().join("bookings.csv"));
        store.append(&sample_record("Ravi Kumar")).unwrap();
        store.append(&sample_record("Meera Iyer")).unwrap();

        let accepted = submit_booking(&store, sample_request(), fixed_now()).unwrap();
        assert_eq!(accepted.rows, 3);
        assert_eq!(store.load().unwrap().len(), accepted.rows);
    }

    #[test]
    fn store_failure_surfaces_as_store_error() {
        let tmp = TempDir::new().unwrap();
        let store = BookingStore::new(tmp.path().join("bookings.csv"));
        std::fs::write(store.path(), "not,the,right,header\n").unwrap();

        let err = submit_booking(&store, sample_request(), fixed_now()).unwrap_err();
        assert!(matches!(err, SubmitError::Store(BookingError::Schema { .. })));
    }
}
