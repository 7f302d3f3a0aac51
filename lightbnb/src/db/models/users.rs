//! Database models for users.

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Database representation of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Database request for creating a new user
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreateDBRequest {
    pub name: String,
    pub email: String,
    /// Stored as given; hashing happens before it reaches this layer
    pub password: String,
}

/// Database response for a user
pub type UserDBResponse = User;
