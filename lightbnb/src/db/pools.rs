//! Connection pool setup.
//!
//! The pool is the shared resource every repository call borrows a connection from. Sizing and
//! timeouts come from [`PoolSettings`]; statement logging from [`Config::connect_options`].
//!
//! ```ignore
//! let pool = lightbnb::db::pools::connect(&config).await?;
//! let mut conn = pool.acquire().await?;
//! let listings = Properties::new(&mut *conn).search(&filter, None).await?;
//! ```

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, instrument};

use crate::config::{Config, PoolSettings};

/// Pool options built from the configured settings
pub fn pool_options(settings: &PoolSettings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
}

/// Connect to the configured database, applying the bundled migrations when enabled.
#[instrument(skip_all, err)]
pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let options = config.connect_options()?;
    let pool = pool_options(&config.database.pool).connect_with(options).await?;

    info!(
        max_connections = pool.options().get_max_connections(),
        "Connected to PostgreSQL"
    );

    if config.run_migrations {
        crate::migrator().run(&pool).await?;
        info!("Schema migrations applied");
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pool_options_follow_settings() {
        let settings = PoolSettings {
            max_connections: 3,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 0,
            max_lifetime_secs: 60,
        };
        let options = pool_options(&settings);

        assert_eq!(options.get_max_connections(), 3);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(5));
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), Some(Duration::from_secs(60)));
    }
}
