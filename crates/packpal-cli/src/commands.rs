use std::io::Read;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use packpal_extract::ListExtractor;
use packpal_server::{PackpalServer, ServerConfig};
use packpal_store::{JsonFileTripStore, TripStore};
use packpal_types::TripId;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(&cli.data, args),
        Command::Trips => cmd_trips(&cli.data),
        Command::Create(args) => cmd_create(&cli.data, args),
        Command::Show(args) => cmd_show(&cli.data, args),
        Command::Add(args) => cmd_add(&cli.data, args),
        Command::Extract(args) => cmd_extract(args),
    }
}

fn open_store(data: &Path) -> anyhow::Result<JsonFileTripStore> {
    JsonFileTripStore::open(data)
        .with_context(|| format!("opening trip store at {}", data.display()))
}

fn parse_trip_id(s: &str) -> anyhow::Result<TripId> {
    s.parse::<TripId>().context("invalid trip ID")
}

fn cmd_serve(data: &Path, args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig {
            data_file: Some(data.to_path_buf()),
            ..ServerConfig::default()
        },
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if args.ephemeral {
        config.data_file = None;
    }

    println!(
        "PackPal server on {} (store: {})",
        config.bind_addr.to_string().bold(),
        match &config.data_file {
            Some(path) => path.display().to_string(),
            None => "in-memory".into(),
        }
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(PackpalServer::new(config).serve())?;
    Ok(())
}

fn cmd_trips(data: &Path) -> anyhow::Result<()> {
    let store = open_store(data)?;
    let trips = store.list_trips()?;
    if trips.is_empty() {
        println!("No trips yet.");
        return Ok(());
    }
    for trip in trips {
        let done = trip.items.iter().filter(|i| i.done).count();
        println!(
            "{}  {} ({}/{} packed)",
            trip.id.short_id().cyan(),
            trip.name.bold(),
            done,
            trip.items.len(),
        );
    }
    Ok(())
}

fn cmd_create(data: &Path, args: CreateArgs) -> anyhow::Result<()> {
    let store = open_store(data)?;
    let trip = store.create_trip(&args.name)?;
    println!("{} Created {}", "✓".green().bold(), trip.name.bold());
    println!("  ID: {}", trip.id.to_string().cyan());
    println!("  Share token: {}", trip.share_token.to_string().yellow());
    Ok(())
}

fn cmd_show(data: &Path, args: ShowArgs) -> anyhow::Result<()> {
    let store = open_store(data)?;
    let id = parse_trip_id(&args.trip)?;
    let trip = store
        .get_trip(&id)?
        .with_context(|| format!("no trip with ID {id}"))?;

    println!("{} ({})", trip.name.bold(), trip.id.short_id().cyan());
    if trip.items.is_empty() {
        println!("  No items yet.");
    }
    for item in &trip.items {
        let check = if item.done { "[x]".green() } else { "[ ]".normal() };
        let by = match &item.added_by {
            Some(by) => format!("  ({by})").dimmed().to_string(),
            None => String::new(),
        };
        println!("  {} {}{}", check, item.text, by);
    }
    Ok(())
}

fn cmd_add(data: &Path, args: AddArgs) -> anyhow::Result<()> {
    let store = open_store(data)?;
    let id = parse_trip_id(&args.trip)?;
    let outcome = store.add_items(&id, &args.items, Some(&args.by))?;

    if outcome.added > 0 {
        let dupes = if outcome.skipped > 0 {
            format!(" ({} duplicates skipped)", outcome.skipped)
        } else {
            String::new()
        };
        println!(
            "{} Saved {} item{}{}",
            "✓".green().bold(),
            outcome.added,
            if outcome.added == 1 { "" } else { "s" },
            dupes,
        );
        for item in &outcome.created {
            println!("  {} {}", "added:".green(), item.text);
        }
    } else {
        println!("Nothing added; all {} already on the list.", outcome.skipped);
    }
    Ok(())
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let candidates = ListExtractor::new(args.min_lines).extract(&text);
    if candidates.is_empty() {
        println!(
            "No packing list found (fewer than {} list lines).",
            args.min_lines
        );
        return Ok(());
    }
    for candidate in candidates {
        println!("{candidate}");
    }
    Ok(())
}
