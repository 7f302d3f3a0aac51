//! Database repository for users.

use crate::{
    db::{
        errors::Result,
        models::users::{UserCreateDBRequest, UserDBResponse},
        statement::{StatementBuilder, StatementExecutor},
    },
    types::UserId,
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Users<'c, E = PgConnection> {
    db: &'c mut E,
}

impl<'c, E: StatementExecutor> Users<'c, E> {
    pub fn new(db: &'c mut E) -> Self {
        Self { db }
    }

    #[instrument(skip(self, email), err)]
    pub async fn get_user_by_email(&mut self, email: &str) -> Result<Option<UserDBResponse>> {
        let mut query = StatementBuilder::new("SELECT * FROM users");
        query.push_filter("email =", email, None);

        self.db.fetch_optional(&query.build()).await
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: UserId) -> Result<Option<UserDBResponse>> {
        let mut query = StatementBuilder::new("SELECT * FROM users");
        query.push_filter("id =", id, None);

        self.db.fetch_optional(&query.build()).await
    }

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    pub async fn create(&mut self, request: &UserCreateDBRequest) -> Result<UserDBResponse> {
        let mut query = StatementBuilder::new("INSERT INTO users (name, email, password) VALUES");
        query
            .push_values([request.name.as_str(), request.email.as_str(), request.password.as_str()])
            .push("RETURNING *");

        self.db.fetch_one(&query.build()).await
    }
}
