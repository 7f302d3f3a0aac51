//! Database repository for properties.
//!
//! The listing search is the one query in this layer assembled at runtime: each optional
//! criterion in [`PropertyFilter`] contributes a clause and a bound argument, and the result is a
//! single parameterized statement over properties joined with their reviews.

use crate::{
    db::{
        errors::Result,
        models::properties::{PropertyCreateDBRequest, PropertyDBResponse, PropertyFilter, PropertyListing},
        statement::{SqlArg, Statement, StatementBuilder, StatementExecutor},
    },
    types::DEFAULT_LIMIT,
};
use sqlx::PgConnection;
use tracing::instrument;

/// Every property column plus the averaged rating of its reviews. Complete without a `WHERE`.
const LISTING_SEARCH_BASE: &str = "SELECT properties.*, avg(property_reviews.rating) AS average_rating \
     FROM properties JOIN property_reviews ON properties.id = property_id";

/// Empty strings and zero numbers are treated the same as a missing value.
fn present<T: Default + PartialEq>(value: &Option<T>) -> Option<&T> {
    value.as_ref().filter(|v| **v != T::default())
}

/// Build the listing search statement.
///
/// Filters are applied in a fixed order (city, minimum price, maximum price, owner), the rating
/// bound goes into a `HAVING` after the grouping, and the limit is always the last argument.
/// Price bounds are given in whole currency units while `cost_per_night` is stored in cents, so
/// the statement scales the bound inside the comparison and the argument stays unscaled.
pub fn search_statement(filter: &PropertyFilter, limit: Option<i64>) -> Statement {
    let mut query = StatementBuilder::new(LISTING_SEARCH_BASE);

    if let Some(city) = present(&filter.city) {
        query.push_filter("city LIKE", format!("%{city}%"), None);
    }

    if let Some(minimum) = present(&filter.minimum_price_per_night) {
        query.push_filter("cost_per_night >=", *minimum, Some("* 100"));
    }

    if let Some(maximum) = present(&filter.maximum_price_per_night) {
        query.push_filter("cost_per_night <=", *maximum, Some("* 100"));
    }

    if let Some(owner_id) = present(&filter.owner_id) {
        query.push_filter("owner_id =", *owner_id, None);
    }

    query.push("GROUP BY properties.id");

    if let Some(rating) = present(&filter.minimum_rating) {
        query.push("HAVING avg(property_reviews.rating) >=").push_bind(*rating);
    }

    query
        .push("ORDER BY cost_per_night LIMIT")
        .push_bind(limit.unwrap_or(DEFAULT_LIMIT));

    query.build()
}

/// Build the insert statement for a new property.
///
/// The eleven required columns always come first; the optional counts follow in a fixed order,
/// each only when present.
pub fn create_statement(request: &PropertyCreateDBRequest) -> Statement {
    let mut columns = vec![
        "title",
        "description",
        "thumbnail_photo_url",
        "cover_photo_url",
        "cost_per_night",
        "street",
        "city",
        "province",
        "post_code",
        "country",
        "owner_id",
    ];
    let mut values: Vec<SqlArg> = vec![
        request.title.as_str().into(),
        request.description.as_str().into(),
        request.thumbnail_photo_url.as_str().into(),
        request.cover_photo_url.as_str().into(),
        request.cost_per_night.into(),
        request.street.as_str().into(),
        request.city.as_str().into(),
        request.province.as_str().into(),
        request.post_code.as_str().into(),
        request.country.as_str().into(),
        request.owner_id.into(),
    ];

    let optional = [
        ("parking_spaces", request.parking_spaces),
        ("number_of_bathrooms", request.number_of_bathrooms),
        ("number_of_bedrooms", request.number_of_bedrooms),
    ];
    for (column, value) in optional {
        if let Some(value) = present(&value) {
            columns.push(column);
            values.push((*value).into());
        }
    }

    let mut query = StatementBuilder::new(format!("INSERT INTO properties ({}) VALUES", columns.join(", ")));
    query.push_values(values).push("RETURNING *");
    query.build()
}

pub struct Properties<'c, E = PgConnection> {
    db: &'c mut E,
}

impl<'c, E: StatementExecutor> Properties<'c, E> {
    pub fn new(db: &'c mut E) -> Self {
        Self { db }
    }

    /// Search listings, cheapest first, capped at `limit` rows (10 when `None`).
    ///
    /// An empty vector means nothing matched; a store failure is an `Err`.
    #[instrument(skip(self, filter), fields(limit = limit.unwrap_or(DEFAULT_LIMIT)), err)]
    pub async fn search(&mut self, filter: &PropertyFilter, limit: Option<i64>) -> Result<Vec<PropertyListing>> {
        let statement = search_statement(filter, limit);
        tracing::debug!(sql = %statement, args = ?statement.args(), "Built property search");

        let listings: Vec<PropertyListing> = self.db.fetch_all(&statement).await?;

        tracing::debug!("Retrieved {} properties", listings.len());
        Ok(listings)
    }

    /// Insert a property and return the stored row
    #[instrument(skip(self, request), fields(owner_id = request.owner_id, title = %request.title), err)]
    pub async fn create(&mut self, request: &PropertyCreateDBRequest) -> Result<PropertyDBResponse> {
        let statement = create_statement(request);
        tracing::debug!(sql = %statement, args = ?statement.args(), "Built property insert");

        self.db.fetch_one(&statement).await
    }
}
