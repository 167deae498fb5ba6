//! Workload CLI
//!
//! Command-line front end for placing, assigning and completing orders and
//! administering staff.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workload_core::logging_facility::{init, Profile};
use workload_core_types::RequestContext;

mod app;
mod commands;
mod settings;

use app::App;
use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "workload")]
#[command(about = "Workload Management System - orders, staff and dashboard", long_about = None)]
struct Cli {
    /// Config file name, extension optional
    #[arg(long, global = true, env = "WORKLOAD_CONFIG", default_value = "workload")]
    config: String,

    /// SQLite database file (overrides configuration)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Skip all assistant suggestions
    #[arg(long, global = true)]
    no_assistant: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Place and assign orders
    Order(commands::order::OrderArgs),
    /// Staff login, order list and completion
    Staff(commands::staff::StaffArgs),
    /// Order counts and per-order status
    Dashboard,
    /// Staff administration
    Admin(commands::admin::AdminArgs),
    /// Items and the groups that prepare them
    Catalog,
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load(&cli.config)?;
    if let Some(db) = cli.db {
        settings.database.path = db;
    }

    let profile: Profile = settings.logging.profile.parse()?;
    init(profile);

    let ctx = RequestContext::new();
    let span = tracing::info_span!("request", request_id = %ctx.request_id);
    let _guard = span.enter();

    let app = App::new(&settings, !cli.no_assistant, cli.json);

    match cli.command {
        Commands::Order(args) => commands::order::execute(args, &app),
        Commands::Staff(args) => commands::staff::execute(args, &app),
        Commands::Dashboard => commands::dashboard::execute(&app),
        Commands::Admin(args) => commands::admin::execute(args, &app),
        Commands::Catalog => commands::catalog::execute(&app),
    }
}
