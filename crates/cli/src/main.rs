//! Tienda CLI - command-line storefront driver.
//!
//! The view-layer stand-in: every workflow of the storefront library is
//! reachable as a subcommand, with local state persisted under the
//! configured data directory so cart and session survive across
//! invocations.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! tienda products list
//! tienda products show 1
//! tienda products categories
//!
//! # Sign in and shop (cart and checkout are auth-gated)
//! tienda auth login -e user@tienda.com -p user123
//! tienda cart add 1 --qty 2
//! tienda cart show
//! tienda checkout
//! tienda orders
//!
//! # Administer the catalog (requires the admin role)
//! tienda auth login -e admin@tienda.com -p admin123
//! tienda admin add --name "Lámpara" --price 24.50 --category hogar
//! tienda admin delete 15
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI talks on stdout and stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tienda_storefront::config::StoreConfig;
use tienda_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "tienda")]
#[command(version, about = "Mi Tienda Online - storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: commands::products::ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Sign in, register, or sign out
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Check out the current cart
    Checkout,
    /// Show the order history
    Orders,
    /// Administer the catalog (admin role required)
    Admin {
        #[command(subcommand)]
        action: commands::admin::AdminAction,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> tienda_storefront::Result<()> {
    let config = StoreConfig::from_env()?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Products { action } => commands::products::run(&state, action).await,
        Commands::Cart { action } => commands::cart::run(&state, action).await,
        Commands::Auth { action } => commands::auth::run(&state, action),
        Commands::Checkout => commands::orders::checkout(&state),
        Commands::Orders => commands::orders::list(&state),
        Commands::Admin { action } => commands::admin::run(&state, action).await,
    }
}
