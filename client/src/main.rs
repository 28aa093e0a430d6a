//! Islami App client - command-line entry point
//!
//! Thin front end over the library: every subcommand maps to one
//! [`ApiService`] call and prints the result as pretty JSON on stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use islami_client::{ApiClient, ApiService, ClientConfig, VerseQuery};
use serde::Serialize;
use tracing::info;

/// Command-line arguments for islami-client
#[derive(Parser, Debug)]
#[command(name = "islami-client")]
#[command(about = "Command-line client for the Islami App backend")]
#[command(version)]
struct Args {
    /// Override the backend base URL (`API_URL` otherwise)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch Quran verses, falling back to the public API
    Verses {
        /// Surah id, numeral or name (e.g. 2, "Bakara")
        #[arg(long)]
        surah: Option<String>,
        #[arg(long)]
        ayah: Option<u32>,
        /// Translation language; "tr" also fetches the Turkish translation
        #[arg(long, default_value = "tr")]
        language: String,
        /// Free-text search
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        reciter: Option<String>,
    },
    /// Log in and store the token
    Login { username: String, password: String },
    /// Forget the stored token
    Logout,
    /// Show the current user
    Me,
    /// Backend health check
    Health,
    DailyAyah,
    DailyHadith,
    Reciters,
    /// Semantic hadith search
    HadithSearch {
        query: String,
        #[arg(long)]
        top_k: Option<u32>,
    },
    /// List favorited hadiths
    Favorites,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = islami_client::debug::init();
    let args = Args::parse();

    let mut config = ClientConfig::from_env().context("Invalid client configuration")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    let client = ApiClient::from_config(config).context("Failed to build API client")?;
    info!(base_url = %client.config().base_url, "Client ready");

    run(&client, args.command).await
}

async fn run(api: &dyn ApiService, command: Command) -> Result<()> {
    match command {
        Command::Verses {
            surah,
            ayah,
            language,
            query,
            reciter,
        } => {
            let query = VerseQuery {
                surah,
                ayah,
                language: Some(language),
                q: query,
                reciter,
            };
            print_json(&api.get_quran_verses(&query).await)
        }
        Command::Login { username, password } => {
            let response = api.login(&username, &password).await.context("Login failed")?;
            print_json(&response)
        }
        Command::Logout => {
            api.logout().context("Failed to clear stored credentials")?;
            print_json(&serde_json::json!({ "status": "logged_out" }))
        }
        Command::Me => print_json(&api.me().await?),
        Command::Health => print_json(&api.health().await?),
        Command::DailyAyah => print_json(&api.daily_ayah().await?),
        Command::DailyHadith => print_json(&api.daily_hadith().await?),
        Command::Reciters => print_json(&api.reciters().await?),
        Command::HadithSearch { query, top_k } => {
            print_json(&api.hadith_search(&query, top_k).await?)
        }
        Command::Favorites => print_json(&api.get_favorites().await?),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render response")?;
    println!("{rendered}");
    Ok(())
}
