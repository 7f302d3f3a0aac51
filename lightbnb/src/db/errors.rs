use thiserror::Error;

/// Unified error type for database operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// The store could not be reached: connection, transport or pool failure
    #[error("Store unavailable while executing `{}`", .statement.as_deref().unwrap_or("<unknown statement>"))]
    StoreUnavailable {
        /// Text of the statement that was being executed (placeholders only, no bound values)
        statement: Option<String>,
        source: sqlx::Error,
    },

    /// The store rejected the statement (syntax, type mismatch in a bound value, ...) or its rows
    /// could not be mapped (missing column, undecodable value)
    #[error("Statement rejected by the store: `{}`", .statement.as_deref().unwrap_or("<unknown statement>"))]
    StatementError {
        statement: Option<String>,
        message: String,
        source: sqlx::Error,
    },

    /// Unique constraint violation
    #[error("Unique constraint violation")]
    UniqueViolation {
        statement: Option<String>,
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Foreign key constraint violation
    #[error("Foreign key constraint violation")]
    ForeignKeyViolation {
        statement: Option<String>,
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Check constraint violation
    #[error("Check constraint violation")]
    CheckViolation {
        statement: Option<String>,
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DbError {
    /// Attach the text of the failing statement, for the variants that report one.
    pub fn with_statement(mut self, sql: &str) -> Self {
        match &mut self {
            DbError::StoreUnavailable { statement, .. }
            | DbError::StatementError { statement, .. }
            | DbError::UniqueViolation { statement, .. }
            | DbError::ForeignKeyViolation { statement, .. }
            | DbError::CheckViolation { statement, .. } => {
                *statement = Some(sql.to_string());
            }
            DbError::NotFound | DbError::Other(_) => {}
        }
        self
    }

    /// The statement text reported by this error, if any
    pub fn statement(&self) -> Option<&str> {
        match self {
            DbError::StoreUnavailable { statement, .. }
            | DbError::StatementError { statement, .. }
            | DbError::UniqueViolation { statement, .. }
            | DbError::ForeignKeyViolation { statement, .. }
            | DbError::CheckViolation { statement, .. } => statement.as_deref(),
            DbError::NotFound | DbError::Other(_) => None,
        }
    }

    /// Whether the failure came from the store being unreachable rather than from the statement
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DbError::StoreUnavailable { .. })
    }
}

/// Convert from sqlx::Error using proper sqlx error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    DbError::UniqueViolation {
                        statement: None,
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        table: db_err.table().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    }
                } else if db_err.is_foreign_key_violation() {
                    DbError::ForeignKeyViolation {
                        statement: None,
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        table: db_err.table().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    }
                } else if db_err.is_check_violation() {
                    DbError::CheckViolation {
                        statement: None,
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        table: db_err.table().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    }
                } else {
                    // Syntax errors, bad casts, undefined columns and the like
                    let message = db_err.message().to_string();
                    DbError::StatementError {
                        statement: None,
                        message,
                        source: err,
                    }
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DbError::StoreUnavailable { statement: None, source: err },
            sqlx::Error::Encode(_)
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. } => {
                let message = err.to_string();
                DbError::StatementError {
                    statement: None,
                    message,
                    source: err,
                }
            }
            // All other sqlx errors are non-recoverable - convert to anyhow with context
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        assert!(matches!(DbError::from(sqlx::Error::RowNotFound), DbError::NotFound));
    }

    #[test]
    fn test_pool_failures_map_to_store_unavailable() {
        assert!(DbError::from(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(DbError::from(sqlx::Error::PoolClosed).is_unavailable());
        assert!(DbError::from(sqlx::Error::WorkerCrashed).is_unavailable());

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        assert!(DbError::from(sqlx::Error::Io(io)).is_unavailable());
    }

    #[test]
    fn test_type_not_found_maps_to_statement_error() {
        let err = DbError::from(sqlx::Error::TypeNotFound {
            type_name: "money_in_cents".to_string(),
        });
        assert!(matches!(err, DbError::StatementError { .. }));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_with_statement_is_reported_in_message() {
        let err = DbError::from(sqlx::Error::PoolTimedOut).with_statement("SELECT * FROM users WHERE email = $1");

        assert_eq!(err.statement(), Some("SELECT * FROM users WHERE email = $1"));
        assert_eq!(
            err.to_string(),
            "Store unavailable while executing `SELECT * FROM users WHERE email = $1`"
        );
    }

    #[test]
    fn test_row_mapping_failures_map_to_statement_error() {
        let sql = "SELECT properties.*, avg(property_reviews.rating) AS average_rating FROM properties";

        let missing = DbError::from(sqlx::Error::ColumnNotFound("average_rating".to_string())).with_statement(sql);
        assert!(matches!(missing, DbError::StatementError { .. }));
        assert_eq!(missing.statement(), Some(sql));
        assert!(missing.to_string().contains(sql));

        let out_of_bounds = DbError::from(sqlx::Error::ColumnIndexOutOfBounds { index: 16, len: 15 }).with_statement(sql);
        assert!(matches!(out_of_bounds, DbError::StatementError { .. }));
        assert_eq!(out_of_bounds.statement(), Some(sql));

        let decode = DbError::from(sqlx::Error::ColumnDecode {
            index: "\"cost_per_night\"".to_string(),
            source: "mismatched types".into(),
        });
        assert!(matches!(decode, DbError::StatementError { .. }));
        assert!(!decode.is_unavailable());
    }

    #[test]
    fn test_constraint_violations_keep_statement() {
        let err = DbError::UniqueViolation {
            statement: None,
            constraint: Some("users_email_key".to_string()),
            table: Some("users".to_string()),
            message: "duplicate key value violates unique constraint".to_string(),
        }
        .with_statement("INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *");

        assert_eq!(
            err.statement(),
            Some("INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *")
        );
    }

    #[test]
    fn test_with_statement_leaves_other_variants_alone() {
        let err = DbError::NotFound.with_statement("SELECT 1");
        assert!(matches!(err, DbError::NotFound));
        assert_eq!(err.statement(), None);
    }

    #[test]
    fn test_unknown_statement_placeholder() {
        let err = DbError::from(sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "Store unavailable while executing `<unknown statement>`");
    }
}
