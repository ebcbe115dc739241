//! Contact form inquiries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use iron_haven_core::{Email, InquiryId, InquiryStatus};

/// A contact message submitted from the site.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: InquiryId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    /// What the visitor is interested in (storage, service, membership, ...).
    pub interest: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for creating an inquiry.
#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub interest: Option<String>,
    pub message: String,
}
