//! CLI frontend for the card scouting simulator.

mod commands;
mod logging;
mod renderer;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scout",
    about = "Simulate card scouting against a card catalog",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log scouting steps to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scout cards from a catalog file
    Draw {
        /// Filters: units, sub-units, years, attributes, idol names, or kind=value
        filters: Vec<String>,

        /// Card catalog JSON file (array of cards or a results page)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Box to scout in: regular, honour, coupon
        #[arg(short = 'b', long = "box", default_value = "honour")]
        profile: String,

        /// Number of cards to scout
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Guarantee at least one SR or better
        #[arg(short, long)]
        guaranteed: bool,

        /// RNG seed for a reproducible scout
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory holding full-size card images, looked up by file name
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Rows in a multi-card contact sheet
        #[arg(short, long, default_value = "2")]
        layout: u32,

        /// Scheme for protocol-relative image URLs
        #[arg(long, default_value = "http")]
        scheme: String,

        /// Directory to write the scout image into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Print the scouted cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the rarity rates of each box
    Rates {
        /// Only show this box
        #[arg(short = 'b', long = "box")]
        profile: Option<String>,
    },

    /// Preview which tiers a scout would fetch, without a catalog
    Plan {
        /// Filters, as for `draw`
        filters: Vec<String>,

        /// Box to scout in: regular, honour, coupon
        #[arg(short = 'b', long = "box", default_value = "honour")]
        profile: String,

        /// Number of cards to scout
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Guarantee at least one SR or better
        #[arg(short, long)]
        guaranteed: bool,

        /// RNG seed for a reproducible plan
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Draw {
            filters,
            catalog,
            profile,
            count,
            guaranteed,
            seed,
            images,
            layout,
            scheme,
            out,
            json,
        } => {
            let args = commands::draw::DrawArgs {
                catalog,
                profile,
                count,
                guaranteed,
                seed,
                images,
                layout,
                scheme,
                out,
                json,
                filters,
            };
            commands::draw::run(args).await
        }
        Commands::Rates { profile } => commands::rates::run(profile.as_deref()),
        Commands::Plan {
            filters,
            profile,
            count,
            guaranteed,
            seed,
        } => commands::plan::run(&profile, count, guaranteed, seed, &filters),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
