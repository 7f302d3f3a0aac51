//! Database repository for reservations.

use crate::{
    db::{
        errors::Result,
        models::reservations::ReservationDBResponse,
        statement::{StatementBuilder, StatementExecutor},
    },
    types::{DEFAULT_LIMIT, UserId},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Reservations<'c, E = PgConnection> {
    db: &'c mut E,
}

impl<'c, E: StatementExecutor> Reservations<'c, E> {
    pub fn new(db: &'c mut E) -> Self {
        Self { db }
    }

    /// List a guest's reservations, at most `limit` rows (10 when `None`)
    #[instrument(skip(self), err)]
    pub async fn list_for_guest(&mut self, guest_id: UserId, limit: Option<i64>) -> Result<Vec<ReservationDBResponse>> {
        let mut query = StatementBuilder::new("SELECT * FROM reservations");
        query.push_filter("guest_id =", guest_id, None);
        query.push("LIMIT").push_bind(limit.unwrap_or(DEFAULT_LIMIT));

        self.db.fetch_all(&query.build()).await
    }
}
