//! CLI seeding tool for veteran-nexus-api.
//!
//! Performs the destructive reset of the `services` and `blog_posts`
//! collections to the fixed content datasets, and offers a store
//! connectivity check. Always run out-of-band, never by the live API.
//!
//! # Usage
//!
//! ```bash
//! # Reset content collections to the seed datasets (asks for confirmation)
//! cargo run --bin seed -- run
//!
//! # Skip the confirmation prompt
//! cargo run --bin seed -- run --yes
//!
//! # Check store connectivity
//! cargo run --bin seed -- check
//! ```
//!
//! # Environment Variables
//!
//! - `MONGO_URL` (required): MongoDB connection string
//! - `DB_NAME` (required): database holding the collections

use veteran_nexus_api::config;
use veteran_nexus_api::infrastructure::persistence::{
    MongoBlogRepository, MongoServiceRepository,
};
use veteran_nexus_api::seed;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use mongodb::{Client, Database, bson::doc};
use std::sync::Arc;

/// CLI tool for seeding veteran-nexus-api content.
#[derive(Parser)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Reset `services` and `blog_posts` to the fixed seed datasets
    Run {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check document store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let client = Client::with_uri_str(&config.mongo_url)
        .await
        .context("Failed to create MongoDB client")?;
    let db = client.database(&config.db_name);

    match cli.command {
        Commands::Run { yes } => run_seed(&db, yes).await?,
        Commands::Check => check_store(&db).await?,
    }

    Ok(())
}

/// Runs the destructive reset with an interactive confirmation.
async fn run_seed(db: &Database, skip_confirm: bool) -> Result<()> {
    println!("{}", "Seed content collections".bright_blue().bold());
    println!();
    println!(
        "{}",
        "This deletes ALL documents in 'services' and 'blog_posts' and \
         replaces them with the fixed seed datasets."
            .yellow()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Proceed with the destructive reset?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let service_repository = Arc::new(MongoServiceRepository::new(db));
    let blog_repository = Arc::new(MongoBlogRepository::new(db));

    let report = seed::run(service_repository, blog_repository)
        .await
        .map_err(|e| anyhow::anyhow!("Seeding failed: {}", e))?;

    println!();
    println!("{}", "Seeding completed!".green().bold());
    println!(
        "  Services:   {} deleted, {} inserted",
        report.services_deleted.to_string().cyan(),
        report.services_inserted.to_string().cyan()
    );
    println!(
        "  Blog posts: {} deleted, {} inserted",
        report.posts_deleted.to_string().cyan(),
        report.posts_inserted.to_string().cyan()
    );

    Ok(())
}

/// Pings the store and reports collection counts.
async fn check_store(db: &Database) -> Result<()> {
    println!("{}", "Document store check".bright_blue().bold());
    println!();

    db.run_command(doc! { "ping": 1 })
        .await
        .context("Store is unreachable")?;
    println!("{}", "Connection OK".green());

    for name in ["services", "blog_posts", "contacts"] {
        let count = db
            .collection::<mongodb::bson::Document>(name)
            .count_documents(doc! {})
            .await?;
        println!("  {:<11} {} documents", name, count.to_string().cyan());
    }

    Ok(())
}
