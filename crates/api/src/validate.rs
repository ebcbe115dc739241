//! Request payload validation.
//!
//! Each write endpoint owns a payload struct describing its raw JSON body
//! (every field optional at the serde level) and a `validate()` method that
//! checks required fields and formats, returning either the fully parsed
//! `New*` insert struct or the complete list of per-field violations.
//! Validation never touches the store and never partially applies a write.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use iron_haven_core::{Email, MembershipTierId, ServiceId, StorageUnitId};

use crate::models::{NewInquiry, NewMembershipSignup, NewServiceBooking, NewStorageBooking};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    /// Create a new violation for a field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Deserialize a JSON body into a payload struct.
///
/// Structural mismatches (non-object body, wrong primitive types) are
/// reported as a single violation on `body` so that every client error
/// surfaces as a 400 with the same shape.
///
/// # Errors
///
/// Returns a one-element violation list if deserialization fails.
pub fn parse_body<T: DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, Vec<FieldViolation>> {
    serde_json::from_value(value).map_err(|e| vec![FieldViolation::new("body", e.to_string())])
}

/// Require a non-empty trimmed string.
fn required_text(
    field: &str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_owned()),
        _ => {
            violations.push(FieldViolation::new(field, "is required"));
            None
        }
    }
}

/// Trim an optional string; empty strings collapse to `None`.
fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Require a well-formed email address. Input is trimmed and lowercased
/// before parsing.
fn required_email(
    field: &str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<Email> {
    let raw = required_text(field, value, violations)?;
    match Email::parse(&raw.to_lowercase()) {
        Ok(email) => Some(email),
        Err(e) => {
            violations.push(FieldViolation::new(field, e.to_string()));
            None
        }
    }
}

/// Require an ISO-8601 date.
///
/// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date (taken as
/// midnight UTC), the two shapes the booking forms submit.
fn required_date(
    field: &str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<DateTime<Utc>> {
    let raw = required_text(field, value, violations)?;

    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }

    violations.push(FieldViolation::new(field, "must be an ISO-8601 date"));
    None
}

/// Require a well-formed entity id (UUID).
///
/// Whether the id actually references a row is checked against the store by
/// the handler, which maps absence to a 404.
fn required_id<T: std::str::FromStr>(
    field: &str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    let raw = required_text(field, value, violations)?;
    match raw.parse::<T>() {
        Ok(id) => Some(id),
        Err(_) => {
            violations.push(FieldViolation::new(field, "must be a valid id"));
            None
        }
    }
}

/// Raw body of `POST /api/storage-bookings`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageBookingPayload {
    #[serde(default)]
    pub storage_unit_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub bike_info: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
}

impl StorageBookingPayload {
    /// Validate the payload into an insertable booking.
    ///
    /// # Errors
    ///
    /// Returns every field violation found, never just the first.
    pub fn validate(&self) -> Result<NewStorageBooking, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let storage_unit_id = required_id::<StorageUnitId>(
            "storageUnitId",
            self.storage_unit_id.as_deref(),
            &mut violations,
        );
        let customer_name =
            required_text("customerName", self.customer_name.as_deref(), &mut violations);
        let customer_email =
            required_email("customerEmail", self.customer_email.as_deref(), &mut violations);
        let start_date = required_date("startDate", self.start_date.as_deref(), &mut violations);

        match (storage_unit_id, customer_name, customer_email, start_date) {
            (Some(storage_unit_id), Some(customer_name), Some(customer_email), Some(start_date))
                if violations.is_empty() =>
            {
                Ok(NewStorageBooking {
                    storage_unit_id,
                    customer_name,
                    customer_email,
                    customer_phone: optional_text(self.customer_phone.as_deref()),
                    bike_info: optional_text(self.bike_info.as_deref()),
                    start_date,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Raw body of `POST /api/service-bookings`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBookingPayload {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub bike_info: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ServiceBookingPayload {
    /// Validate the payload into an insertable service booking.
    ///
    /// # Errors
    ///
    /// Returns every field violation found, never just the first.
    pub fn validate(&self) -> Result<NewServiceBooking, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let service_id =
            required_id::<ServiceId>("serviceId", self.service_id.as_deref(), &mut violations);
        let customer_name =
            required_text("customerName", self.customer_name.as_deref(), &mut violations);
        let customer_email =
            required_email("customerEmail", self.customer_email.as_deref(), &mut violations);
        let preferred_date =
            required_date("preferredDate", self.preferred_date.as_deref(), &mut violations);

        match (service_id, customer_name, customer_email, preferred_date) {
            (Some(service_id), Some(customer_name), Some(customer_email), Some(preferred_date))
                if violations.is_empty() =>
            {
                Ok(NewServiceBooking {
                    service_id,
                    customer_name,
                    customer_email,
                    customer_phone: optional_text(self.customer_phone.as_deref()),
                    bike_info: optional_text(self.bike_info.as_deref()),
                    preferred_date,
                    preferred_time: optional_text(self.preferred_time.as_deref()),
                    notes: optional_text(self.notes.as_deref()),
                })
            }
            _ => Err(violations),
        }
    }
}

/// Raw body of `POST /api/membership-signups`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipSignupPayload {
    #[serde(default)]
    pub tier_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub bike_info: Option<String>,
}

impl MembershipSignupPayload {
    /// Validate the payload into an insertable membership signup.
    ///
    /// # Errors
    ///
    /// Returns every field violation found, never just the first.
    pub fn validate(&self) -> Result<NewMembershipSignup, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let tier_id =
            required_id::<MembershipTierId>("tierId", self.tier_id.as_deref(), &mut violations);
        let customer_name =
            required_text("customerName", self.customer_name.as_deref(), &mut violations);
        let customer_email =
            required_email("customerEmail", self.customer_email.as_deref(), &mut violations);

        match (tier_id, customer_name, customer_email) {
            (Some(tier_id), Some(customer_name), Some(customer_email))
                if violations.is_empty() =>
            {
                Ok(NewMembershipSignup {
                    tier_id,
                    customer_name,
                    customer_email,
                    customer_phone: optional_text(self.customer_phone.as_deref()),
                    bike_info: optional_text(self.bike_info.as_deref()),
                })
            }
            _ => Err(violations),
        }
    }
}

/// Raw body of `POST /api/inquiries`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl InquiryPayload {
    /// Validate the payload into an insertable inquiry.
    ///
    /// # Errors
    ///
    /// Returns every field violation found, never just the first.
    pub fn validate(&self) -> Result<NewInquiry, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let name = required_text("name", self.name.as_deref(), &mut violations);
        let email = required_email("email", self.email.as_deref(), &mut violations);
        let message = required_text("message", self.message.as_deref(), &mut violations);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if violations.is_empty() => Ok(NewInquiry {
                name,
                email,
                phone: optional_text(self.phone.as_deref()),
                interest: optional_text(self.interest.as_deref()),
                message,
            }),
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    #[test]
    fn test_storage_booking_valid() {
        let payload = StorageBookingPayload {
            storage_unit_id: Some(unit_id()),
            customer_name: Some("  Ada Rider  ".to_owned()),
            customer_email: Some("Ada@Example.COM".to_owned()),
            customer_phone: Some("".to_owned()),
            bike_info: Some("1996 Ducati 916".to_owned()),
            start_date: Some("2026-10-01".to_owned()),
        };

        let booking = payload.validate().unwrap();
        assert_eq!(booking.customer_name, "Ada Rider");
        assert_eq!(booking.customer_email.as_str(), "ada@example.com");
        assert_eq!(booking.customer_phone, None);
        assert_eq!(booking.bike_info.as_deref(), Some("1996 Ducati 916"));
        assert_eq!(booking.start_date.to_rfc3339(), "2026-10-01T00:00:00+00:00");
    }

    #[test]
    fn test_storage_booking_accepts_rfc3339_date() {
        let payload = StorageBookingPayload {
            storage_unit_id: Some(unit_id()),
            customer_name: Some("Ada".to_owned()),
            customer_email: Some("ada@example.com".to_owned()),
            start_date: Some("2026-10-01T09:30:00-05:00".to_owned()),
            ..Default::default()
        };

        let booking = payload.validate().unwrap();
        assert_eq!(booking.start_date.to_rfc3339(), "2026-10-01T14:30:00+00:00");
    }

    #[test]
    fn test_storage_booking_collects_all_violations() {
        let payload = StorageBookingPayload::default();
        let violations = payload.validate().unwrap_err();

        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["storageUnitId", "customerName", "customerEmail", "startDate"]
        );
    }

    #[test]
    fn test_storage_booking_rejects_malformed_unit_id() {
        let payload = StorageBookingPayload {
            storage_unit_id: Some("unit-1".to_owned()),
            customer_name: Some("Ada".to_owned()),
            customer_email: Some("ada@example.com".to_owned()),
            start_date: Some("2026-10-01".to_owned()),
            ..Default::default()
        };

        let violations = payload.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "storageUnitId");
    }

    #[test]
    fn test_storage_booking_rejects_bad_date() {
        let payload = StorageBookingPayload {
            storage_unit_id: Some(unit_id()),
            customer_name: Some("Ada".to_owned()),
            customer_email: Some("ada@example.com".to_owned()),
            start_date: Some("next tuesday".to_owned()),
            ..Default::default()
        };

        let violations = payload.validate().unwrap_err();
        assert_eq!(violations[0].field, "startDate");
        assert_eq!(violations[0].message, "must be an ISO-8601 date");
    }

    #[test]
    fn test_service_booking_valid_with_optionals() {
        let payload = ServiceBookingPayload {
            service_id: Some(unit_id()),
            customer_name: Some("Ada".to_owned()),
            customer_email: Some("ada@example.com".to_owned()),
            preferred_date: Some("2026-04-12".to_owned()),
            preferred_time: Some("morning".to_owned()),
            notes: Some("  chain is loose ".to_owned()),
            ..Default::default()
        };

        let booking = payload.validate().unwrap();
        assert_eq!(booking.preferred_time.as_deref(), Some("morning"));
        assert_eq!(booking.notes.as_deref(), Some("chain is loose"));
    }

    #[test]
    fn test_membership_signup_rejects_malformed_email() {
        let payload = MembershipSignupPayload {
            tier_id: Some(unit_id()),
            customer_name: Some("Ada".to_owned()),
            customer_email: Some("not-an-email".to_owned()),
            ..Default::default()
        };

        let violations = payload.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "customerEmail");
    }

    #[test]
    fn test_inquiry_valid_minimal() {
        let payload = InquiryPayload {
            name: Some("A".to_owned()),
            email: Some("a@b.com".to_owned()),
            message: Some("hi".to_owned()),
            ..Default::default()
        };

        let inquiry = payload.validate().unwrap();
        assert_eq!(inquiry.name, "A");
        assert_eq!(inquiry.email.as_str(), "a@b.com");
        assert_eq!(inquiry.message, "hi");
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.interest, None);
    }

    #[test]
    fn test_inquiry_whitespace_only_fields_are_missing() {
        let payload = InquiryPayload {
            name: Some("   ".to_owned()),
            email: Some("a@b.com".to_owned()),
            message: None,
            ..Default::default()
        };

        let violations = payload.validate().unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "message"]);
    }

    #[test]
    fn test_parse_body_rejects_wrong_types() {
        let value = serde_json::json!({ "name": 42 });
        let result: Result<InquiryPayload, _> = parse_body(value);
        let violations = result.unwrap_err();
        assert_eq!(violations[0].field, "body");
    }

    #[test]
    fn test_parse_body_ignores_unknown_fields() {
        // Form clients sometimes send extra keys; they are stripped, not
        // rejected.
        let value = serde_json::json!({
            "name": "A",
            "email": "a@b.com",
            "message": "hi",
            "unexpected": true
        });
        let result: Result<InquiryPayload, _> = parse_body(value);
        assert!(result.is_ok());
    }
}
