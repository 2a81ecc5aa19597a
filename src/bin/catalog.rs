//! CLI browser for the vehicle catalog.
//!
//! Drives the catalog core from the command line: filtered listings, the
//! comparison list, favorites, and the recently-viewed log, each persisted
//! under the configured state directory exactly as a browsing session
//! would be.
//!
//! # Usage
//!
//! ```bash
//! # List everything, newest first
//! cargo run --bin catalog -- list
//!
//! # Filtered and sorted listing from a shareable query string
//! cargo run --bin catalog -- list --query "make=Audi&yearMin=2021&sort=price-asc"
//!
//! # Show one vehicle (records a view)
//! cargo run --bin catalog -- show vw-golf-2021
//!
//! # Manage the comparison list
//! cargo run --bin catalog -- compare add vw-golf-2021
//! cargo run --bin catalog -- compare show
//!
//! # Toggle a favorite
//! cargo run --bin catalog -- favorites toggle vw-golf-2021
//!
//! # Recently viewed and catalog statistics
//! cargo run --bin catalog -- recent
//! cargo run --bin catalog -- stats
//! ```
//!
//! # Environment Variables
//!
//! See [`vehicle_catalog::config`]; all variables are optional.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use vehicle_catalog::config::{self, Config};
use vehicle_catalog::domain::entities::VehicleRecord;
use vehicle_catalog::infrastructure::catalog::VehicleStore;
use vehicle_catalog::infrastructure::persistence::JsonFileStorage;
use vehicle_catalog::query;
use vehicle_catalog::state::AppState;

/// CLI browser for the vehicle catalog.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List vehicles, optionally filtered and sorted
    List {
        /// Filter state as a query string, e.g. "make=Audi&sort=price-asc"
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show one vehicle and record the view
    Show {
        /// Vehicle id
        id: String,
    },

    /// Manage the comparison list (max 3 vehicles)
    Compare {
        #[command(subcommand)]
        action: CompareAction,
    },

    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Show recently viewed vehicles
    Recent,

    /// Show catalog statistics
    Stats,
}

/// Comparison list subcommands.
#[derive(Subcommand)]
enum CompareAction {
    /// Add a vehicle to the comparison list
    Add { id: String },

    /// Remove a vehicle from the comparison list
    Remove { id: String },

    /// Show the comparison list side by side
    Show,

    /// Empty the comparison list
    Clear,
}

/// Favorites subcommands.
#[derive(Subcommand)]
enum FavoritesAction {
    /// Add a vehicle to favorites
    Add { id: String },

    /// Remove a vehicle from favorites
    Remove { id: String },

    /// Toggle a vehicle's favorited state
    Toggle { id: String },

    /// List favorites in insertion order
    List,

    /// Empty the favorites list
    Clear,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let vehicles = VehicleStore::load_json(&config.catalog_path)
        .with_context(|| format!("failed to load catalog from {}", config.catalog_path.display()))?;
    let storage = Arc::new(JsonFileStorage::new(&config.state_dir));
    let mut state = AppState::initialize(&config, vehicles, storage);

    match cli.command {
        Commands::List { query } => cmd_list(&state, &config, query.as_deref()),
        Commands::Show { id } => cmd_show(&mut state, &id),
        Commands::Compare { action } => cmd_compare(&mut state, action),
        Commands::Favorites { action } => cmd_favorites(&mut state, action),
        Commands::Recent => cmd_recent(&state),
        Commands::Stats => cmd_stats(&state),
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cmd_list(state: &AppState<JsonFileStorage>, config: &Config, query: Option<&str>) {
    let (criteria, sort) = query::decode_with(query.unwrap_or(""), &config.bounds);

    if criteria.active_count() > 0 {
        println!(
            "{} active filter group(s), sorted by {}",
            criteria.active_count().to_string().bold(),
            sort.as_str().cyan()
        );
    }

    let listing = state.listing.browse(&criteria, sort);
    if listing.is_empty() {
        println!("{}", "No vehicles match the given filters.".yellow());
        return;
    }

    for vehicle in &listing {
        print_row(vehicle);
    }
    println!("\n{} vehicle(s)", listing.len().to_string().bold());
}

fn cmd_show(state: &mut AppState<JsonFileStorage>, id: &str) {
    let Some(vehicle) = state.vehicles.get(id).cloned() else {
        println!("{} unknown vehicle id '{}'", "error:".red().bold(), id);
        return;
    };

    state.recently_viewed.record_view(&vehicle.id);

    println!(
        "{} {} ({})",
        vehicle.make.bold(),
        vehicle.model.bold(),
        vehicle.year
    );
    println!("  id:           {}", vehicle.id);
    print!("  price:        {}", format!("{:.0}", vehicle.price).green());
    if let Some(drop) = vehicle.discount_amount() {
        print!("  ({} {})", "price drop".magenta(), format!("{drop:.0}"));
    }
    println!();
    println!("  mileage:      {} km", vehicle.mileage);
    println!("  fuel:         {}", vehicle.fuel_type);
    println!("  transmission: {}", vehicle.transmission);
    println!("  power:        {:.0} kW", vehicle.power);
    println!("  color:        {}", vehicle.color);
    println!("  published:    {}", vehicle.published_date);
    println!("  features:     {}", vehicle.features.join(", "));
    println!("\n{}", vehicle.description);
}

fn cmd_compare(state: &mut AppState<JsonFileStorage>, action: CompareAction) {
    match action {
        CompareAction::Add { id } => {
            let Some(vehicle) = state.vehicles.get(&id).cloned() else {
                println!("{} unknown vehicle id '{}'", "error:".red().bold(), id);
                return;
            };
            if state.comparison.add(&vehicle) {
                println!(
                    "{} added ({}/3)",
                    "ok:".green().bold(),
                    state.comparison.len()
                );
            } else if state.comparison.contains(&id) {
                println!("{} '{}' is already in the comparison list", "note:".yellow(), id);
            } else {
                println!(
                    "{} comparison list is full; remove a vehicle first",
                    "note:".yellow()
                );
            }
        }
        CompareAction::Remove { id } => {
            state.comparison.remove(&id);
            println!("{} {} vehicle(s) left", "ok:".green().bold(), state.comparison.len());
        }
        CompareAction::Show => {
            if state.comparison.is_empty() {
                println!("{}", "Comparison list is empty.".yellow());
                return;
            }
            for vehicle in state.comparison.vehicles() {
                print_row(vehicle);
            }
        }
        CompareAction::Clear => {
            state.comparison.clear();
            println!("{} comparison list cleared", "ok:".green().bold());
        }
    }
}

fn cmd_favorites(state: &mut AppState<JsonFileStorage>, action: FavoritesAction) {
    match action {
        FavoritesAction::Add { id } => {
            let Some(vehicle) = state.vehicles.get(&id).cloned() else {
                println!("{} unknown vehicle id '{}'", "error:".red().bold(), id);
                return;
            };
            if state.favorites.add(&vehicle) {
                println!("{} favorited", "ok:".green().bold());
            } else {
                println!("{} '{}' is already favorited", "note:".yellow(), id);
            }
        }
        FavoritesAction::Remove { id } => {
            state.favorites.remove(&id);
            println!("{} {} favorite(s) left", "ok:".green().bold(), state.favorites.len());
        }
        FavoritesAction::Toggle { id } => {
            let Some(vehicle) = state.vehicles.get(&id).cloned() else {
                println!("{} unknown vehicle id '{}'", "error:".red().bold(), id);
                return;
            };
            if state.favorites.toggle(&vehicle) {
                println!("{} now favorited", "ok:".green().bold());
            } else {
                println!("{} no longer favorited", "ok:".green().bold());
            }
        }
        FavoritesAction::List => {
            if state.favorites.is_empty() {
                println!("{}", "No favorites yet.".yellow());
                return;
            }
            for vehicle in state.favorites.vehicles() {
                print_row(vehicle);
            }
        }
        FavoritesAction::Clear => {
            state.favorites.clear();
            println!("{} favorites cleared", "ok:".green().bold());
        }
    }
}

fn cmd_recent(state: &AppState<JsonFileStorage>) {
    let recent = state.recently_viewed.resolve(&state.vehicles, 10);
    if recent.is_empty() {
        println!("{}", "Nothing viewed yet.".yellow());
        return;
    }
    for vehicle in &recent {
        print_row(vehicle);
    }
}

fn cmd_stats(state: &AppState<JsonFileStorage>) {
    let vehicles = state.vehicles.all();
    let discounted = vehicles.iter().filter(|v| v.is_discounted()).count();

    println!("{}", "Catalog statistics".bold());
    println!("  vehicles:   {}", vehicles.len());
    println!("  makes:      {}", state.vehicles.makes().len());
    println!("  featured:   {}", state.vehicles.featured().len());
    println!("  exclusive:  {}", state.vehicles.exclusive().len());
    println!("  discounted: {discounted}");
    println!("  favorites:  {}", state.favorites.len());
    println!("  comparing:  {}", state.comparison.len());
}

fn print_row(vehicle: &VehicleRecord) {
    let mut flags = String::new();
    if vehicle.featured {
        flags.push_str(" [featured]");
    }
    if vehicle.is_exclusive() {
        flags.push_str(" [exclusive]");
    }
    if vehicle.is_discounted() {
        flags.push_str(" [price drop]");
    }

    println!(
        "{:<22} {} {} ({}) - {} - {} km{}",
        vehicle.id.cyan(),
        vehicle.make,
        vehicle.model,
        vehicle.year,
        format!("{:.0}", vehicle.price).green(),
        vehicle.mileage,
        flags.magenta()
    );
}
