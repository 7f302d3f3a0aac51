//! Common type definitions.
//!
//! All entity IDs are `SERIAL` integer keys wrapped in type aliases so signatures say which
//! table they point at:
//!
//! - [`UserId`]: User account identifier (also used for property owners and guests)
//! - [`PropertyId`]: Property listing identifier
//! - [`ReservationId`]: Reservation identifier

// Type aliases for IDs
pub type UserId = i32;
pub type PropertyId = i32;
pub type ReservationId = i32;

/// Row limit applied to list queries when the caller does not provide one.
pub const DEFAULT_LIMIT: i64 = 10;
