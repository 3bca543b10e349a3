use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "packpal",
    about = "PackPal — collaborative trip packing lists",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Trip snapshot file used by the local commands.
    #[arg(long, global = true, default_value = ".data/trips.json")]
    pub data: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the PackPal HTTP server
    Serve(ServeArgs),
    /// List all trips
    Trips,
    /// Create a new trip
    Create(CreateArgs),
    /// Show a trip's packing list
    Show(ShowArgs),
    /// Add items to a trip's packing list
    Add(AddArgs),
    /// Extract packing-list candidates from assistant text
    Extract(ExtractArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Config file (TOML); flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bind address, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Public base URL for share links.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Keep trips in memory only (ignore the data file).
    #[arg(long)]
    pub ephemeral: bool,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Trip name
    pub name: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Trip ID
    pub trip: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Trip ID
    pub trip: String,

    /// Item texts to merge into the list
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Recorded as the items' origin
    #[arg(long, default_value = "me")]
    pub by: String,
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Read assistant text from this file instead of stdin.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Minimum list lines before the text counts as a list.
    #[arg(long, default_value_t = packpal_extract::DEFAULT_MIN_LIST_LINES)]
    pub min_lines: usize,
}
