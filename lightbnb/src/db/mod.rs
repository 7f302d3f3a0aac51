//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL, following the
//! Repository pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ Repositories │  (db::handlers - Users, Properties, Reservations)
//! └──────┬───────┘
//!        │  Statement (text + ordered arguments)
//!        ↓
//! ┌──────────────┐
//! │   Executor   │  (db::statement::StatementExecutor)
//! └──────┬───────┘
//!        │
//!        ↓
//! ┌──────────────┐
//! │  PostgreSQL  │  rows mapped into db::models
//! └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations
//! - [`models`]: Database record structures matching table schemas
//! - [`statement`]: Parameterized statement builder and the executor trait
//! - [`errors`]: Database-specific error types
//! - [`pools`]: Connection pool setup
//!
//! # Migrations
//!
//! The schema lives in the `migrations/` directory and is applied with [`crate::migrator`]:
//!
//! ```ignore
//! lightbnb::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
pub mod pools;
pub mod statement;
