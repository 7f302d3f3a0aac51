//! Test utilities (available with the `test-utils` feature).

use crate::db::{
    errors::Result,
    statement::{Statement, StatementExecutor},
};
use sqlx::{FromRow, postgres::PgRow};

/// A [`StatementExecutor`] that records every statement it is handed instead of running it.
///
/// Queries succeed with no rows unless the executor was built with [`failing`](Self::failing),
/// in which case each one fails with the given store error attached to the statement.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub statements: Vec<Statement>,
    failure: Option<fn() -> sqlx::Error>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: fn() -> sqlx::Error) -> Self {
        Self {
            statements: Vec::new(),
            failure: Some(failure),
        }
    }

    pub fn last_statement(&self) -> &Statement {
        self.statements.last().expect("no statement was executed")
    }

    fn record(&mut self, statement: &Statement) -> Result<()> {
        self.statements.push(statement.clone());
        match self.failure {
            Some(failure) => Err(statement.error(failure())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl StatementExecutor for RecordingExecutor {
    async fn fetch_all<T>(&mut self, statement: &Statement) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.record(statement)?;
        Ok(Vec::new())
    }

    async fn fetch_optional<T>(&mut self, statement: &Statement) -> Result<Option<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.record(statement)?;
        Ok(None)
    }
}
