//! Domain models for the API.
//!
//! Each model mirrors one table of the catalog/booking schema and derives
//! both `sqlx::FromRow` (snake_case columns) and `serde::Serialize` with
//! camelCase renaming (the site's wire format). `New*` structs carry the
//! validated fields of an insert; the store assigns ids, statuses, and
//! timestamps.

pub mod booking;
pub mod catalog;
pub mod inquiry;
pub mod user;

pub use booking::{
    MembershipSignup, NewMembershipSignup, NewServiceBooking, NewStorageBooking, ServiceBooking,
    StorageBooking,
};
pub use catalog::{
    MembershipTier, NewMembershipTier, NewService, NewStorageUnit, Service, StorageUnit,
};
pub use inquiry::{Inquiry, NewInquiry};
pub use user::{NewUser, User};
