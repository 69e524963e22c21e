//! CLI entry point for the `rmap` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use routemap::cli::commands;

#[derive(Parser)]
#[command(
    name = "rmap",
    about = "routemap CLI — city/route graph maps in .rmap files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty .rmap file
    Create {
        /// Path to the .rmap file to create
        file: PathBuf,
    },
    /// Display information about an .rmap file
    Info {
        /// Path to the .rmap file
        file: PathBuf,
    },
    /// Add a city to the map
    Add {
        /// Path to the .rmap file
        file: PathBuf,
        /// The city name
        name: String,
    },
    /// Remove a city and all its links
    Remove {
        /// Path to the .rmap file
        file: PathBuf,
        /// The city name
        name: String,
    },
    /// Link two cities
    Link {
        /// Path to the .rmap file
        file: PathBuf,
        /// First city name
        city1: String,
        /// Second city name
        city2: String,
    },
    /// Remove the link between two cities
    Unlink {
        /// Path to the .rmap file
        file: PathBuf,
        /// First city name
        city1: String,
        /// Second city name
        city2: String,
    },
    /// List a city's neighbors
    Neighbors {
        /// Path to the .rmap file
        file: PathBuf,
        /// The city name
        name: String,
    },
    /// Find a route between two cities (depth-first search)
    Route {
        /// Path to the .rmap file
        file: PathBuf,
        /// Source city name
        source: String,
        /// Destination city name
        destination: String,
    },
    /// Detailed statistics about the map
    Stats {
        /// Path to the .rmap file
        file: PathBuf,
    },
    /// Export the map as JSON
    Export {
        /// Path to the .rmap file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Import cities and links from JSON
    Import {
        /// Path to the .rmap file
        file: PathBuf,
        /// Path to the JSON file
        json_file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Create { file } => commands::cmd_create(&file),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Add { file, name } => commands::cmd_add(&file, &name, json),
        Commands::Remove { file, name } => commands::cmd_remove(&file, &name, json),
        Commands::Link { file, city1, city2 } => commands::cmd_link(&file, &city1, &city2, json),
        Commands::Unlink { file, city1, city2 } => {
            commands::cmd_unlink(&file, &city1, &city2, json)
        }
        Commands::Neighbors { file, name } => commands::cmd_neighbors(&file, &name, json),
        Commands::Route {
            file,
            source,
            destination,
        } => commands::cmd_route(&file, &source, &destination, json),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
        Commands::Import { file, json_file } => commands::cmd_import(&file, &json_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            routemap::MapError::Io(_) => 1,
            routemap::MapError::InvalidMagic
            | routemap::MapError::UnsupportedVersion(_)
            | routemap::MapError::Truncated
            | routemap::MapError::Corrupt(_)
            | routemap::MapError::Compression(_)
            | routemap::MapError::Json(_) => 2,
            routemap::MapError::CityNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
