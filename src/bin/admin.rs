//! CLI administration tool for chef-pages.
//!
//! Registers chefs, issues and revokes login sessions, and shows site
//! statistics without going through the web pages.
//!
//! # Usage
//!
//! ```bash
//! # Register a chef
//! cargo run --bin admin -- chef create --username alice --display-name "Alice B."
//!
//! # Issue a login token for that chef
//! cargo run --bin admin -- session create --username alice
//!
//! # List and revoke sessions
//! cargo run --bin admin -- session list --username alice
//! cargo run --bin admin -- session revoke 3
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `SESSION_SIGNING_SECRET` (required for `session` commands): must match the server

use chef_pages::application::services::AuthService;
use chef_pages::domain::entities::{Chef, NewChef};
use chef_pages::domain::repositories::ChefRepository;
use chef_pages::error::AppError;
use chef_pages::infrastructure::persistence::{PgChefRepository, PgSessionRepository};
use chef_pages::utils::username::validate_username;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing chef-pages.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage chef accounts
    Chef {
        #[command(subcommand)]
        action: ChefAction,
    },

    /// Manage login sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Chef management subcommands.
#[derive(Subcommand)]
enum ChefAction {
    /// Register a new chef
    Create {
        /// Login name shown in profile URLs
        #[arg(short, long)]
        username: Option<String>,

        /// Optional human-readable name
        #[arg(short, long)]
        display_name: Option<String>,
    },

    /// List all chefs
    List,
}

/// Session management subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Issue a login token for a chef
    Create {
        /// Chef username
        #[arg(short, long)]
        username: String,

        /// Session label (e.g., "laptop", "phone")
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List a chef's sessions
    List {
        /// Chef username
        #[arg(short, long)]
        username: String,
    },

    /// Revoke a session by ID
    Revoke {
        /// Session ID
        id: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Chef { action } => handle_chef_action(action, &pool).await?,
        Commands::Session { action } => handle_session_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches chef management commands.
async fn handle_chef_action(action: ChefAction, pool: &PgPool) -> Result<()> {
    let repo = PgChefRepository::new(Arc::new(pool.clone()));

    match action {
        ChefAction::Create {
            username,
            display_name,
        } => create_chef(&repo, username, display_name).await,
        ChefAction::List => list_chefs(&repo).await,
    }
}

/// Registers a chef, prompting for the username when not given.
async fn create_chef(
    repo: &PgChefRepository,
    username: Option<String>,
    display_name: Option<String>,
) -> Result<()> {
    println!("{}", "👩‍🍳 Register Chef".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    validate_username(&username).map_err(|e| app_error("Invalid username", e))?;

    let chef = repo
        .create(NewChef {
            username,
            display_name: display_name.filter(|d| !d.trim().is_empty()),
        })
        .await
        .map_err(|e| app_error("Failed to create chef", e))?;

    println!("{}", "✅ Chef registered".green().bold());
    println!("  ID:       {}", chef.id.to_string().bright_black());
    println!("  Username: {}", chef.username.cyan());
    println!("  Profile:  /chef/{}", chef.username.bright_white());
    println!();

    Ok(())
}

/// Lists all chefs.
///
/// # Output Format
///
/// ```text
///   ID  Username             Display name         Joined
///   ─────────────────────────────────────────────────────────────────
///   1   alice                Alice B.             2026-01-15 10:30
/// ```
async fn list_chefs(repo: &PgChefRepository) -> Result<()> {
    println!("{}", "📋 Chefs".bright_blue().bold());
    println!();

    let chefs = repo
        .list()
        .await
        .map_err(|e| app_error("Failed to list chefs", e))?;

    if chefs.is_empty() {
        println!("{}", "  No chefs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<20} {:<16}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Display name".bright_white().bold(),
        "Joined".bright_white().bold()
    );
    println!("  {}", "─".repeat(65).bright_black());

    for chef in &chefs {
        println!(
            "  {:<3} {:<20} {:<20} {}",
            chef.id.to_string().bright_black(),
            chef.username.cyan(),
            chef.display_name.as_deref().unwrap_or("-"),
            chef.joined_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", chefs.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches session management commands.
async fn handle_session_action(action: SessionAction, pool: &PgPool) -> Result<()> {
    let secret =
        std::env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;
    let pool = Arc::new(pool.clone());
    let chefs = PgChefRepository::new(pool.clone());
    let auth = AuthService::new(Arc::new(PgSessionRepository::new(pool)), secret);

    match action {
        SessionAction::Create {
            username,
            name,
            yes,
        } => {
            let chef = find_chef(&chefs, &username).await?;
            create_session(&auth, &chef, name, yes).await
        }
        SessionAction::List { username } => {
            let chef = find_chef(&chefs, &username).await?;
            list_sessions(&auth, &chef).await
        }
        SessionAction::Revoke { id } => revoke_session(&auth, id).await,
    }
}

async fn find_chef(repo: &PgChefRepository, username: &str) -> Result<Chef> {
    repo.find_by_username(username)
        .await
        .map_err(|e| app_error("Database error", e))?
        .with_context(|| format!("Chef '{}' not found", username))
}

/// Issues a session and prints the raw token once.
///
/// Only the HMAC of the token is stored, so it cannot be shown again.
async fn create_session(
    auth: &AuthService<PgSessionRepository>,
    chef: &Chef,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Issue Login Session".bright_blue().bold());
    println!();

    let session_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Session name")
            .with_initial_text("browser")
            .interact_text()?,
    };

    println!("  Chef:    {}", chef.username.cyan());
    println!("  Session: {}", session_name.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Issue this session?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let issued = auth
        .issue(chef.id, &session_name)
        .await
        .map_err(|e| app_error("Failed to issue session", e))?;

    println!();
    println!("{}", "✅ Session issued".green().bold());
    println!("  Token: {}", issued.token.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  Save this token now! It cannot be shown again."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Sign in at /login with this token.".bright_white());
    println!();

    Ok(())
}

/// Lists a chef's sessions with status indicators.
async fn list_sessions(auth: &AuthService<PgSessionRepository>, chef: &Chef) -> Result<()> {
    println!(
        "{} {}",
        "📋 Sessions for".bright_blue().bold(),
        chef.username.cyan().bold()
    );
    println!();

    let sessions = auth
        .sessions(chef.id)
        .await
        .map_err(|e| app_error("Failed to list sessions", e))?;

    if sessions.is_empty() {
        println!("{}", "  No sessions found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<18} {:<18} {:<8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for session in &sessions {
        let status = if session.is_revoked() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };
        let last_used = session
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<4} {:<20} {:<18} {:<18} {}",
            session.id.to_string().bright_black(),
            session.name.cyan(),
            session.created_at.format("%Y-%m-%d %H:%M").to_string(),
            last_used,
            status
        );
    }

    println!();

    Ok(())
}

/// Revokes a session after confirmation (default: No).
async fn revoke_session(auth: &AuthService<PgSessionRepository>, id: i64) -> Result<()> {
    println!("{}", "🔒 Revoke Session".bright_blue().bold());
    println!();

    let confirmed = Confirm::new()
        .with_prompt(format!("Revoke session {}?", id))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    auth.revoke(id)
        .await
        .map_err(|e| app_error("Failed to revoke session", e))?;

    println!("{}", "✅ Session revoked".green().bold());
    println!();

    Ok(())
}

/// Displays site statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let chefs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chefs")
        .fetch_one(pool)
        .await?;
    let recipes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
        .fetch_one(pool)
        .await?;
    let likes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipe_likes")
        .fetch_one(pool)
        .await?;
    let favorites: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipe_favorites")
        .fetch_one(pool)
        .await?;
    let sessions: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM chef_sessions WHERE revoked_at IS NULL")
            .fetch_one(pool)
            .await?;

    println!("  Chefs:           {}", chefs.to_string().bright_green().bold());
    println!("  Recipes:         {}", recipes.to_string().bright_green().bold());
    println!("  Likes:           {}", likes.to_string().bright_green().bold());
    println!("  Favorites:       {}", favorites.to_string().bright_green().bold());
    println!("  Active sessions: {}", sessions.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Wraps an [`AppError`] with its details so the cause reaches the operator.
fn app_error(context: &str, e: AppError) -> anyhow::Error {
    anyhow::anyhow!("{}: {} ({})", context, e, e.details())
}
