//! MediWrap CLI - Cart inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Add two units of a product to the cart
//! mw-cli add --id 101 --name "Paracetamol 500mg" --price 35.00 --qty 2
//!
//! # Change a quantity, drop a line item
//! mw-cli set-qty 101 3
//! mw-cli remove 101
//!
//! # Inspect the cart and the order summary
//! mw-cli list
//! mw-cli summary --coupon NIMMAAROGYA10
//!
//! # Empty the cart
//! mw-cli clear
//! ```
//!
//! The cart slot lives under `MEDIWRAP_CART_DIR` (default `.mediwrap`), so
//! each invocation is one session: open, mutate, persist, exit.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mw-cli")]
#[command(author, version, about = "MediWrap CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the cart (merges quantities for a repeated id)
    Add {
        /// Product id
        #[arg(long)]
        id: i64,

        /// Product display name
        #[arg(long)]
        name: String,

        /// Unit price, e.g. 35.00
        #[arg(long)]
        price: String,

        /// Quantity to add
        #[arg(long, default_value_t = 1)]
        qty: u32,

        /// Image reference
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Remove a line item by product id
    Remove {
        /// Product id
        id: i64,
    },
    /// Set the quantity of a line item
    SetQty {
        /// Product id
        id: i64,

        /// New quantity (must be at least 1)
        qty: u32,
    },
    /// List the cart contents
    List,
    /// Empty the cart and erase the persisted slot
    Clear,
    /// Show the order summary (subtotal, discount, shipping, total)
    Summary {
        /// Coupon code to apply
        #[arg(long)]
        coupon: Option<String>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Add {
            id,
            name,
            price,
            qty,
            image,
        } => commands::add(id, &name, &price, qty, &image)?,
        Commands::Remove { id } => commands::remove(id)?,
        Commands::SetQty { id, qty } => commands::set_qty(id, qty)?,
        Commands::List => commands::list()?,
        Commands::Clear => commands::clear()?,
        Commands::Summary { coupon } => commands::summary(coupon.as_deref())?,
    }

    Ok(())
}
