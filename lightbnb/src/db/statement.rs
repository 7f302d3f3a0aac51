//! Parameterized statements and the executor seam the repositories run them through.
//!
//! A [`Statement`] is a `(text, arguments)` pair whose positional placeholders `$1..$n` line
//! up with its argument list. Statements are assembled by a [`StatementBuilder`], which keeps
//! an ordered list of clause fragments next to the argument list and renders the text once in
//! [`StatementBuilder::build`].
//!
//! Placeholder numbers are never tracked separately: binding a value pushes it onto the
//! argument list first and then takes the list length as its index.
//!
//! ```
//! use lightbnb::db::statement::{SqlArg, StatementBuilder};
//!
//! let mut builder = StatementBuilder::new("SELECT * FROM reservations");
//! builder.push_filter("guest_id =", 3, None);
//! builder.push("LIMIT").push_bind(10_i64);
//! let statement = builder.build();
//!
//! assert_eq!(statement.sql(), "SELECT * FROM reservations WHERE guest_id = $1 LIMIT $2");
//! assert_eq!(statement.args(), &[SqlArg::Int(3), SqlArg::BigInt(10)]);
//! ```

use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgConnection, Postgres};

use crate::db::errors::{DbError, Result};

/// A single bound argument, carrying its own SQL type.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    Text(String),
    Int(i32),
    BigInt(i64),
    Numeric(Decimal),
}

impl From<&str> for SqlArg {
    fn from(value: &str) -> Self {
        SqlArg::Text(value.to_string())
    }
}

impl From<String> for SqlArg {
    fn from(value: String) -> Self {
        SqlArg::Text(value)
    }
}

impl From<i32> for SqlArg {
    fn from(value: i32) -> Self {
        SqlArg::Int(value)
    }
}

impl From<i64> for SqlArg {
    fn from(value: i64) -> Self {
        SqlArg::BigInt(value)
    }
}

impl From<Decimal> for SqlArg {
    fn from(value: Decimal) -> Self {
        SqlArg::Numeric(value)
    }
}

#[derive(Debug, Clone)]
enum Fragment {
    Sql(Cow<'static, str>),
    Placeholder(usize),
    PlaceholderList(Vec<usize>),
}

/// Assembles a [`Statement`] from clause fragments and a parallel argument list.
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    fragments: Vec<Fragment>,
    args: Vec<SqlArg>,
    filtered: bool,
}

impl StatementBuilder {
    /// Start a statement from its base text. The base must be a complete statement on its own,
    /// without a `WHERE` keyword; [`push_filter`](Self::push_filter) supplies that.
    pub fn new(base: impl Into<Cow<'static, str>>) -> Self {
        Self {
            fragments: vec![Fragment::Sql(base.into())],
            args: Vec::new(),
            filtered: false,
        }
    }

    /// Append a raw SQL fragment.
    pub fn push(&mut self, sql: impl Into<Cow<'static, str>>) -> &mut Self {
        self.fragments.push(Fragment::Sql(sql.into()));
        self
    }

    /// Bind a value and append its placeholder.
    pub fn push_bind(&mut self, value: impl Into<SqlArg>) -> &mut Self {
        let index = self.bind(value);
        self.fragments.push(Fragment::Placeholder(index));
        self
    }

    /// Append a boolean filter clause `<lhs> $n [<rhs>]`.
    ///
    /// The first filter clause is introduced with `WHERE`, every later one with `AND`.
    pub fn push_filter(&mut self, lhs: &'static str, value: impl Into<SqlArg>, rhs: Option<&'static str>) -> &mut Self {
        let joiner = if self.filtered { "AND" } else { "WHERE" };
        self.filtered = true;

        self.push(joiner).push(lhs).push_bind(value);
        if let Some(rhs) = rhs {
            self.push(rhs);
        }
        self
    }

    /// Bind every value and append a parenthesised placeholder list, e.g. `($1, $2, $3)`.
    pub fn push_values<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlArg>,
    {
        let indices = values.into_iter().map(|value| self.bind(value)).collect();
        self.fragments.push(Fragment::PlaceholderList(indices));
        self
    }

    /// Render the fragments, joined by single spaces.
    pub fn build(self) -> Statement {
        let mut sql = String::new();
        for fragment in &self.fragments {
            if !sql.is_empty() {
                sql.push(' ');
            }
            match fragment {
                Fragment::Sql(text) => sql.push_str(text),
                Fragment::Placeholder(index) => {
                    sql.push('$');
                    sql.push_str(&index.to_string());
                }
                Fragment::PlaceholderList(indices) => {
                    let list = indices.iter().map(|i| format!("${i}")).collect::<Vec<_>>().join(", ");
                    sql.push('(');
                    sql.push_str(&list);
                    sql.push(')');
                }
            }
        }

        Statement { sql, args: self.args }
    }

    fn bind(&mut self, value: impl Into<SqlArg>) -> usize {
        self.args.push(value.into());
        self.args.len()
    }
}

/// Rendered statement text plus its ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    args: Vec<SqlArg>,
}

impl Statement {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlArg] {
        &self.args
    }

    /// Number of distinct `$n` placeholders in the text
    pub fn placeholder_count(&self) -> usize {
        let mut seen = std::collections::BTreeSet::new();
        let mut chars = self.sql.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '$' {
                continue;
            }
            let mut digits = String::new();
            while let Some(d) = chars.next_if(|d| d.is_ascii_digit()) {
                digits.push(d);
            }
            if let Ok(index) = digits.parse::<usize>() {
                seen.insert(index);
            }
        }
        seen.len()
    }

    /// Build the sqlx query with every argument bound in order.
    pub fn query_as<T>(&self) -> QueryAs<'_, Postgres, T, PgArguments>
    where
        T: for<'r> FromRow<'r, PgRow>,
    {
        let mut query = sqlx::query_as::<Postgres, T>(&self.sql);
        for arg in &self.args {
            query = match arg {
                SqlArg::Text(v) => query.bind(v.as_str()),
                SqlArg::Int(v) => query.bind(*v),
                SqlArg::BigInt(v) => query.bind(*v),
                SqlArg::Numeric(v) => query.bind(*v),
            };
        }
        query
    }

    /// Wrap a store error, naming this statement by its text.
    pub fn error(&self, err: sqlx::Error) -> DbError {
        DbError::from(err).with_statement(&self.sql)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)
    }
}

/// Executes parameterized statements and maps the rows.
///
/// This is the only boundary the repositories cross. Connection handling, pooling and transport
/// belong to the implementation.
#[async_trait::async_trait]
pub trait StatementExecutor: Send {
    /// All rows, in the order the store returns them
    async fn fetch_all<T>(&mut self, statement: &Statement) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    /// The first row, if any
    async fn fetch_optional<T>(&mut self, statement: &Statement) -> Result<Option<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    /// Exactly one row; no row is [`DbError::NotFound`]
    async fn fetch_one<T>(&mut self, statement: &Statement) -> Result<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.fetch_optional(statement).await?.ok_or(DbError::NotFound)
    }
}

/// Bound values may hold credentials, so only the text and the argument count are logged here.
fn log_execution(statement: &Statement) {
    tracing::debug!(sql = %statement.sql(), arg_count = statement.args().len(), "Executing statement");
}

#[async_trait::async_trait]
impl StatementExecutor for PgConnection {
    async fn fetch_all<T>(&mut self, statement: &Statement) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        log_execution(statement);
        statement.query_as::<T>().fetch_all(&mut *self).await.map_err(|e| statement.error(e))
    }

    async fn fetch_optional<T>(&mut self, statement: &Statement) -> Result<Option<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        log_execution(statement);
        statement
            .query_as::<T>()
            .fetch_optional(&mut *self)
            .await
            .map_err(|e| statement.error(e))
    }
}
