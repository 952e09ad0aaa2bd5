//! Reads schedule text from the command line (or stdin when no arguments are
//! given) and prints the extracted schedule as JSON.

use std::io::{self, Read};

use academy_extractor::{extract_schedule, is_fallback};
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("Failed to read schedule text from stdin")?;
        buffer
    } else {
        args.join(" ")
    };

    let schedule = extract_schedule(&text);
    if is_fallback(&schedule) {
        warn!("No day was recognized, printing the placeholder schedule");
    } else {
        info!(days = schedule.len(), "Extracted schedule");
    }

    println!("{}", serde_json::to_string_pretty(&schedule)?);

    Ok(())
}
