use croplog_core::Config;
use croplog_db::PgStore;

const LOG_LEVEL: &str = "croplog=info,croplog_indexer=info,croplog_db=info";

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(LOG_LEVEL)).init();

    let config = Config::from_env()?;
    let store = PgStore::connect(&config.database_url)?;
    croplog_indexer::start_indexing(&config, &store).await?;

    log::info!("Stream finished");
    Ok(())
}
