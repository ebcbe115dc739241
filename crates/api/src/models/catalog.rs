//! Catalog models: storage units, services, and membership tiers.
//!
//! Catalog rows are created by seeding (or future admin tooling) and are
//! immutable thereafter, except for `available_units` which is decremented
//! when a storage booking is accepted.

use serde::Serialize;
use sqlx::FromRow;

use iron_haven_core::{MembershipTierId, ServiceId, StorageUnitId};

/// A rentable bay for storing a motorcycle.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StorageUnit {
    pub id: StorageUnitId,
    pub name: String,
    /// Display size, e.g. "Single bike space".
    pub size: String,
    /// Monthly price in whole dollars.
    pub price: i32,
    /// Ordered list of feature bullet points.
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub popular: bool,
    pub total_units: i32,
    /// Currently bookable count. Never negative; decremented atomically on
    /// booking.
    pub available_units: i32,
}

/// Fields for creating a storage unit (seed/admin only).
#[derive(Debug, Clone)]
pub struct NewStorageUnit {
    pub name: String,
    pub size: String,
    pub price: i32,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub popular: bool,
    pub total_units: i32,
    pub available_units: i32,
}

/// A maintenance service offered by the shop.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    /// Display price, e.g. "From $129" or "Quote".
    pub price: String,
    /// Icon identifier consumed by the client UI.
    pub icon_name: String,
    pub popular: bool,
}

/// Fields for creating a service (seed/admin only).
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price: String,
    pub icon_name: String,
    pub popular: bool,
}

/// A membership tier of the riders' club.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MembershipTier {
    pub id: MembershipTierId,
    pub name: String,
    /// Monthly price in whole dollars; 0 for the free tier.
    pub price: i32,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
    /// Call-to-action label, e.g. "Join Free".
    pub cta_text: String,
}

/// Fields for creating a membership tier (seed/admin only).
#[derive(Debug, Clone)]
pub struct NewMembershipTier {
    pub name: String,
    pub price: i32,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
    pub cta_text: String,
}
