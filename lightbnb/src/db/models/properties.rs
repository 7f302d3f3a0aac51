//! Database models for properties.

use crate::types::{PropertyId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Database representation of a property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// A property row as returned by the listing search, with its averaged review rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<Decimal>,
}

/// Search criteria for property listings.
///
/// Every field is optional and an absent field applies no constraint. Empty text and zero
/// values are treated as absent too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFilter {
    /// Case-sensitive partial match on the city name
    pub city: Option<String>,
    /// Lower bound on the nightly price, in whole currency units
    pub minimum_price_per_night: Option<i64>,
    /// Upper bound on the nightly price, in whole currency units
    pub maximum_price_per_night: Option<i64>,
    pub owner_id: Option<UserId>,
    /// Lower bound on the average review rating
    pub minimum_rating: Option<Decimal>,
}

/// Database request for creating a new property
///
/// The three room/parking counts are optional; when absent (or zero) the column is left out of
/// the insert and takes its table default.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyCreateDBRequest {
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: Option<i32>,
    pub number_of_bathrooms: Option<i32>,
    pub number_of_bedrooms: Option<i32>,
}

pub type PropertyDBResponse = Property;
