//! Status values for customer-submitted records.
//!
//! Bookings and signups are written with status `pending`, inquiries with
//! status `new`. No code path in this repository transitions a status after
//! creation; any confirm/cancel workflow lives outside this system.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Status of a storage booking, service booking, or membership signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting staff confirmation (the only state written here).
    #[default]
    Pending,
}

impl BookingStatus {
    /// The stored string form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a contact inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    /// Unread by staff (the only state written here).
    #[default]
    New,
}

impl InquiryStatus {
    /// The stored string form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// SQLx support: statuses are stored as TEXT columns, not Postgres enums.
#[cfg(feature = "postgres")]
mod postgres_impls {
    use super::{BookingStatus, InquiryStatus};

    macro_rules! text_status_impls {
        ($name:ident, { $($repr:literal => $variant:ident),+ $(,)? }) => {
            impl sqlx::Type<sqlx::Postgres> for $name {
                fn type_info() -> sqlx::postgres::PgTypeInfo {
                    <String as sqlx::Type<sqlx::Postgres>>::type_info()
                }

                fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                    <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
                }
            }

            impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
                fn decode(
                    value: sqlx::postgres::PgValueRef<'r>,
                ) -> Result<Self, sqlx::error::BoxDynError> {
                    let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                    match s {
                        $($repr => Ok(Self::$variant),)+
                        other => Err(format!(
                            concat!("unknown ", stringify!($name), " value: {}"),
                            other
                        )
                        .into()),
                    }
                }
            }

            impl sqlx::Encode<'_, sqlx::Postgres> for $name {
                fn encode_by_ref(
                    &self,
                    buf: &mut sqlx::postgres::PgArgumentBuffer,
                ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                    <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
                }
            }
        };
    }

    text_status_impls!(BookingStatus, { "pending" => Pending });
    text_status_impls!(InquiryStatus, { "new" => New });
}
