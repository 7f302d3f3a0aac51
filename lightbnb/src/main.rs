use clap::Parser;
use lightbnb::Config;
use lightbnb::db::handlers::Properties;
use lightbnb::db::models::properties::PropertyFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let args = lightbnb::config::Args::parse();

    // Load configuration
    let config = Config::load(&args)?;

    // If --validate flag is set, exit successfully after config validation
    if args.validate {
        println!("Configuration is valid.");
        return Ok(());
    }

    lightbnb::telemetry::init_telemetry()?;

    tracing::debug!("{:?}", args);

    let pool = lightbnb::db::pools::connect(&config).await?;

    let filter = PropertyFilter::from(&args.search);
    let listings = {
        let mut conn = pool.acquire().await?;
        Properties::new(&mut *conn).search(&filter, args.search.limit).await?
    };

    println!("{}", serde_json::to_string_pretty(&listings)?);

    pool.close().await;
    Ok(())
}
