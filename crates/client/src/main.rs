use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use kiglist_client::http::DEFAULT_API_BASE_URL;
use kiglist_client::{AuthSession, FileStorage, HttpClient, KiglistApi};
use kiglist_core::review::{LoginRequest, ReviewAction};
use kiglist_core::types::ResourceKind;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kiglist-admin")]
#[command(about = "Moderate kiglist submissions from the command line")]
#[command(version)]
struct Cli {
    /// Base URL of the kiglist API
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL, global = true)]
    api_base_url: String,

    /// File holding the admin session (defaults to the user data directory)
    #[arg(long, env = "KIGLIST_SESSION_FILE", global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "KIGLIST_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// List submissions awaiting review
    Pending {
        /// kiger, character or maker
        kind: ResourceKind,
    },
    /// Approve or reject a submission
    Review {
        /// kiger, character or maker
        kind: ResourceKind,
        id: String,
        /// approve or reject
        action: ReviewAction,
    },
    /// Run one of the API crawlers
    #[command(subcommand)]
    Crawl(CrawlCommand),
}

#[derive(Subcommand)]
enum CrawlCommand {
    /// Pre-fill a kiger profile from a Twitter account
    User { username: String },
    /// Extract a character and images from a tweet
    Tweet { username: String, tweet_id: String },
    /// Recognize a character from an image URL
    Image { image_url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kiglist_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let session_file = match cli.session_file {
        Some(path) => path,
        None => default_session_file()?,
    };
    let session = AuthSession::new(Arc::new(FileStorage::new(session_file)));
    let api = KiglistApi::new(HttpClient::new(cli.api_base_url));

    match cli.command {
        Command::Login { username, password } => {
            let response = api
                .login(&LoginRequest { username, password })
                .await
                .context("login failed")?;
            session.set_auth(&response.access_token, &response.username)?;
            println!("Logged in as {}", response.username);
        }
        Command::Logout => {
            session.clear_auth()?;
            println!("Logged out");
        }
        Command::Whoami => {
            let state = session.state();
            match state.username {
                Some(username) if state.is_authenticated => println!("{username}"),
                _ => println!("Not logged in"),
            }
        }
        Command::Pending { kind } => {
            let token = require_token(&session)?;
            match kind {
                ResourceKind::Kiger => print_json(&api.pending_kigers(&token).await?)?,
                ResourceKind::Character => print_json(&api.pending_characters(&token).await?)?,
                ResourceKind::Maker => print_json(&api.pending_makers(&token).await?)?,
            }
        }
        Command::Review { kind, id, action } => {
            let token = require_token(&session)?;
            let response = api.review(&token, kind, &id, action).await?;
            print_json(&response)?;
        }
        Command::Crawl(CrawlCommand::User { username }) => {
            print_json(&api.crawl_twitter_user(&username).await?)?;
        }
        Command::Crawl(CrawlCommand::Tweet { username, tweet_id }) => {
            print_json(&api.crawl_twitter_tweet(&username, &tweet_id).await?)?;
        }
        Command::Crawl(CrawlCommand::Image { image_url }) => {
            print_json(&api.crawl_image(&image_url).await?)?;
        }
    }

    Ok(())
}

fn default_session_file() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "kiglist", "kiglist")
        .context("could not determine a data directory; pass --session-file")?;
    Ok(dirs.data_dir().join("session.json"))
}

fn require_token(session: &AuthSession) -> anyhow::Result<String> {
    session
        .get_token()
        .context("not logged in; run `kiglist-admin login` first")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
