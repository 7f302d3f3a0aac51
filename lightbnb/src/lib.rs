//! # lightbnb: data-access layer for a vacation-rental application
//!
//! `lightbnb` builds parameterized SQL statements against PostgreSQL and maps the rows into plain
//! records for users, properties and reservations.
//!
//! ## Overview
//!
//! The interesting part is the listing search ([`db::handlers::Properties::search`]): a sparse set
//! of optional criteria (city, price range, owner, minimum rating) and a row limit become a single
//! statement over properties joined with their reviews, grouped per property, filtered on the
//! averaged rating, ordered by price and capped. Statements are assembled by
//! [`db::statement::StatementBuilder`], which keeps clause fragments and bound arguments side by
//! side so the placeholders always line up with the argument list.
//!
//! Every repository runs its statements through a [`db::statement::StatementExecutor`], which is
//! implemented for `sqlx::PgConnection`. Failures come back as [`db::errors::DbError`], so a
//! search that matched nothing (`Ok(vec![])`) is never confused with a store failure.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use lightbnb::db::handlers::Properties;
//! use lightbnb::db::models::properties::PropertyFilter;
//! use lightbnb::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = lightbnb::config::Args::parse();
//!     let config = Config::load(&args)?;
//!     lightbnb::telemetry::init_telemetry()?;
//!
//!     let pool = lightbnb::db::pools::connect(&config).await?;
//!     let mut conn = pool.acquire().await?;
//!
//!     let filter = PropertyFilter {
//!         city: Some("Vancouver".to_string()),
//!         minimum_rating: Some(rust_decimal::Decimal::from(4)),
//!         ..Default::default()
//!     };
//!     let listings = Properties::new(&mut *conn).search(&filter, Some(5)).await?;
//!     println!("{} listings", listings.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod config;
pub mod db;
pub mod telemetry;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use db::errors::DbError;
pub use types::{PropertyId, ReservationId, UserId};

/// Get the lightbnb database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}
