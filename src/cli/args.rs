use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "income-entry")]
#[command(about = "Income entry form with a live total calculation and submit guard")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill an income entry interactively
    Fill {
        /// Currency code for the entry (e.g. ARS, USD)
        #[arg(short, long)]
        currency: Option<String>,
        /// Write the confirmed entry as JSON to this file
        #[arg(short, long)]
        output: Option<String>,
        /// Print the confirmed entry as JSON to stdout
        #[arg(long)]
        json: bool,
    },
    /// Compute a total from raw field values
    Total {
        /// Product subtotal, as typed
        #[arg(short, long, default_value = "")]
        subtotal: String,
        /// Discount, as typed
        #[arg(short, long, default_value = "")]
        discount: String,
        /// Shipping cost, as typed
        #[arg(long, default_value = "")]
        shipping: String,
    },
    /// Check whether a total would pass the submit guard
    Check {
        /// The total field's current text
        #[arg(short, long)]
        total: String,
    },
}
