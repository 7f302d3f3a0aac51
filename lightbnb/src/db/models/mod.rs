//! Database record models matching table schemas.
//!
//! These structs correspond directly to table rows (they derive `sqlx::FromRow`) or to the
//! inputs the repositories accept for inserts and searches.
//!
//! - [`users`]: Guest and owner accounts
//! - [`properties`]: Listings, listing search criteria and the rating-augmented search row
//! - [`reservations`]: Stays booked by guests

pub mod properties;
pub mod reservations;
pub mod users;
