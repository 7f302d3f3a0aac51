//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut` [`StatementExecutor`](crate::db::statement::StatementExecutor)
//! (normally a `PgConnection`), builds its statements with
//! [`StatementBuilder`](crate::db::statement::StatementBuilder) and returns models from
//! [`crate::db::models`].
//!
//! # Available Repositories
//!
//! - [`Users`]: Account lookup by email or id, account creation
//! - [`Properties`]: Filtered listing search and property creation
//! - [`Reservations`]: Reservations per guest
//!
//! # Common Pattern
//!
//! ```ignore
//! use lightbnb::db::handlers::Properties;
//! use lightbnb::db::models::properties::PropertyFilter;
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Properties::new(&mut *conn);
//!
//!     let filter = PropertyFilter {
//!         city: Some("Vancouver".to_string()),
//!         ..Default::default()
//!     };
//!     let listings = repo.search(&filter, Some(5)).await?;
//!     Ok(())
//! }
//! ```

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::Properties;
pub use reservations::Reservations;
pub use users::Users;
