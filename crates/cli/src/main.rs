//! Shopfront CLI - headless driver for the storefront widget.
//!
//! # Usage
//!
//! ```bash
//! # Render every region of a full page
//! shopfront --catalog products.json render
//!
//! # Render the details page for product 3
//! shopfront --catalog products.yaml render --page details --location "/product-details.html?productId=3"
//!
//! # Add product 3 to the cart, then show the cart page
//! shopfront --catalog products.json click --action addToCart --args 3 --page cart
//!
//! # Show what is saved
//! shopfront --catalog products.json state
//! ```
//!
//! # Commands
//!
//! - `render` - Mount the widget on a page skeleton and print the HTML
//! - `click` - Dispatch one click through an action element, then print the page
//! - `state` - Print the saved state with cart count and total
//!
//! State lives in a JSON file (`--state-file`) under the configured storage
//! key, so consecutive invocations behave like page loads in one browser.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shopfront_widget::dom::layout::PageKind;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Shopfront storefront widget driver")]
struct Cli {
    /// Product catalog (JSON or YAML list of products)
    #[arg(short, long, global = true, default_value = "catalog.json")]
    catalog: PathBuf,

    /// File holding saved state
    #[arg(short, long, global = true, default_value = "shopfront-state.json")]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mount the widget and print the rendered page
    Render {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Click an element carrying an action, then print the re-rendered page
    Click {
        /// Action name (`toggleFavorite`, `addToCart`, `removeFromCart`,
        /// `incrementCount`, `decrementCount`)
        #[arg(short, long)]
        action: String,

        /// JSON argument, e.g. `3` or `{"id": 3}`
        #[arg(long)]
        args: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Print the saved state
    State,
}

#[derive(Args)]
struct PageArgs {
    /// Which page skeleton to render into
    #[arg(short, long, default_value = "full")]
    page: PageKind,

    /// Address of the page, used by the details region
    #[arg(short, long)]
    location: Option<String>,
}

fn main() {
    // Logs go to stderr so rendered HTML on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shopfront_widget=info,shopfront_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let session = commands::Session::open(&cli.catalog, &cli.state_file)?;

    match cli.command {
        Commands::Render { page } => {
            commands::render::run(session, page.page, page.location.as_deref())?;
        }
        Commands::Click { action, args, page } => {
            commands::click::run(
                session,
                &action,
                args.as_deref(),
                page.page,
                page.location.as_deref(),
            )?;
        }
        Commands::State => commands::state::run(&session)?,
    }
    Ok(())
}
