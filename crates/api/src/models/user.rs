//! User accounts.
//!
//! Scaffolding carried by the schema; no site flow reads or writes users and
//! no route exposes them.

use serde::Serialize;
use sqlx::FromRow;

use iron_haven_core::UserId;

/// A user account.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Fields for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
