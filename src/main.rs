use color_eyre::eyre::Result;
use dotenv::dotenv;
use academy_api::config::ApiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // No model client is bundled; every request goes to the rule-based extractor
    academy_api::start_server(config, None).await?;

    Ok(())
}
