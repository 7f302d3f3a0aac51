//! Database models for reservations.

use crate::types::{PropertyId, ReservationId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Database representation of a reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: ReservationId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: PropertyId,
    pub guest_id: UserId,
}

pub type ReservationDBResponse = Reservation;
