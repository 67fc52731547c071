// Seat lookup CLI
//
// Purpose: command-line stand-in for the presentation layer.
// Usage: GUEST_DATA=assets/guests.csv cargo run --bin seat_lookup -- "jose"

use std::path::Path;

use anyhow::Context;
use seatfinder::{LoaderConfig, Session, TABLE_TBD};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Cap the printed match list the way the reference UI does
const DISPLAY_LIMIT: usize = 12;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatfinder=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_path =
        std::env::var("GUEST_DATA").unwrap_or_else(|_| "assets/guests.csv".to_string());

    let config = match std::env::var("SEATFINDER_CONFIG") {
        Ok(path) => LoaderConfig::from_json_file(Path::new(&path))?,
        Err(_) => LoaderConfig::default(),
    };

    let query = std::env::args()
        .nth(1)
        .context("usage: seat_lookup <name fragment>")?;

    let mut session = Session::new(config);
    session
        .initialize(&data_path)
        .await
        .with_context(|| format!("could not load guest list from {}", data_path))?;

    let directory = session.directory().context("directory not ready")?;

    let matches = directory.search(&query);
    if matches.is_empty() {
        println!("No matching guests for '{}'.", query);
        return Ok(());
    }

    if matches.len() > 1 {
        println!("{} matching guests:", matches.len());
        for guest in matches.iter().take(DISPLAY_LIMIT) {
            println!("  {} — Table {}", guest.name, guest.table);
        }
        println!();
    }

    let guest = matches[0];
    println!("{}", guest.name);
    if guest.table == TABLE_TBD {
        println!("Table: to be confirmed");
    } else {
        println!("Table: {}", guest.table);
    }

    let tablemates = directory.tablemates(guest);
    if !tablemates.is_empty() {
        let names: Vec<&str> = tablemates.iter().map(|mate| mate.name.as_str()).collect();
        println!("Seated with: {}", names.join(", "));
    }

    println!("Appetizer: {}", guest.appetizer_description);
    println!("Main course: {}", guest.main_course_description);

    Ok(())
}
