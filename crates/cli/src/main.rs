//! Shopfront CLI - drive the storefront page headlessly.
//!
//! Each invocation is one page session: the cart is rehydrated from the
//! local-storage file, one action runs, and the outcome is logged.
//!
//! # Usage
//!
//! ```bash
//! # Add a product and show the cart
//! shop-cli cart add --id p1 --name "Ankara Dress" --price 12500
//! shop-cli cart show
//!
//! # Check out with a shorter simulated delay
//! shop-cli checkout --delay-ms 500
//!
//! # Send the contact form
//! shop-cli contact --name Ada --phone "0803 123 4567" \
//!     --email ada@example.com --message "Do you ship to Abuja?"
//! ```
//!
//! # Commands
//!
//! - `cart show|add|set-quantity|remove|clear` - Inspect and edit the cart
//! - `checkout` - Run the simulated checkout
//! - `contact` - Validate and send the contact form
//! - `menu toggle` - Toggle the mobile menu and report its state

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shopfront_storefront::config::ShopConfig;
use shopfront_storefront::error::{PageError, report_error};
use shopfront_storefront::telemetry;

mod commands;

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(author, version, about = "Shopfront storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Check out the current cart
    Checkout {
        /// Override the simulated checkout delay (milliseconds)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Cancel the checkout after this many milliseconds
        #[arg(long)]
        cancel_after_ms: Option<u64>,
    },
    /// Validate and send the contact form
    Contact {
        /// Sender name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Phone number (at least 10 digits)
        #[arg(short, long, default_value = "")]
        phone: String,

        /// Email address
        #[arg(short, long, default_value = "")]
        email: String,

        /// Message body
        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Mobile navigation menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// List the cart's lines and total
    Show,
    /// Add a product (increments the quantity if already present)
    Add {
        /// Product identifier
        #[arg(short, long)]
        id: String,

        /// Product name
        #[arg(short, long)]
        name: String,

        /// Unit price in whole currency units
        #[arg(short, long)]
        price: String,

        /// Product image URL
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Set a line's quantity; zero or below removes it
    SetQuantity {
        /// Product identifier
        #[arg(short, long)]
        id: String,

        /// New quantity
        #[arg(short, long, allow_negative_numbers = true)]
        quantity: String,
    },
    /// Remove a line
    Remove {
        /// Product identifier
        #[arg(short, long)]
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum MenuAction {
    /// Toggle the menu open or closed
    Toggle,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let (config, config_error) = match ShopConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (ShopConfig::default(), Some(e)),
    };

    // Keep the guard alive until exit so queued Sentry events are sent
    let sentry_guard = telemetry::init(&config);

    let result = match config_error {
        Some(e) => Err(PageError::from(e)),
        None => run(cli, &config).await,
    };

    if let Err(e) = result {
        report_error(&e);
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &ShopConfig) -> Result<(), PageError> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(config)?,
            CartAction::Add {
                id,
                name,
                price,
                image,
            } => commands::cart::add(config, &id, &name, &price, &image)?,
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(config, &id, &quantity)?;
            }
            CartAction::Remove { id } => commands::cart::remove(config, &id)?,
            CartAction::Clear => commands::cart::clear(config)?,
        },
        Commands::Checkout {
            delay_ms,
            cancel_after_ms,
        } => commands::checkout::run(config, delay_ms, cancel_after_ms).await?,
        Commands::Contact {
            name,
            phone,
            email,
            message,
        } => {
            let form = commands::contact::FormArgs {
                name,
                phone,
                email,
                message,
            };
            commands::contact::send(config, form).await?;
        }
        Commands::Menu { action } => match action {
            MenuAction::Toggle => commands::menu::toggle(config)?,
        },
    }
    Ok(())
}
