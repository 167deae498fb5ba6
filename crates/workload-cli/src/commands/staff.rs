//! Staff login, order list and completion
//!
//! Every subcommand authenticates first; the resulting session is the only
//! notion of "who is acting" and lives for this invocation only.

use clap::{Args, Subcommand};
use rusqlite::Connection;
use serde_json::json;
use workload_core::errors::{ExError, ExErrorKind};
use workload_core::rules::validation::require_non_empty;
use workload_core::session::Session;
use workload_core_types::Sensitive;
use workload_engine::{complete_order, get_order, get_staff_orders, login};

use super::CliResult;
use crate::app::App;

#[derive(Debug, Args)]
pub struct StaffArgs {
    #[command(subcommand)]
    pub command: StaffCommand,
}

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    /// Check credentials
    Login(Credentials),
    /// List the orders assigned to you
    Orders(Credentials),
    /// Mark one of your orders completed
    Complete(CompleteArgs),
}

#[derive(Debug, Args)]
pub struct Credentials {
    #[arg(long)]
    pub name: String,

    #[arg(long, env = "WORKLOAD_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct CompleteArgs {
    #[command(flatten)]
    pub credentials: Credentials,

    pub order_id: i64,
}

pub fn execute(args: StaffArgs, app: &App) -> CliResult {
    match args.command {
        StaffCommand::Login(credentials) => execute_login(credentials, app),
        StaffCommand::Orders(credentials) => execute_orders(credentials, app),
        StaffCommand::Complete(complete) => execute_complete(complete, app),
    }
}

fn sign_in(
    credentials: Credentials,
    conn: &Connection,
) -> Result<Session, Box<dyn std::error::Error>> {
    require_non_empty("name", &credentials.name)?;
    require_non_empty("password", &credentials.password)?;

    let password = Sensitive::new(credentials.password);
    login(&credentials.name, &password, conn)?.ok_or_else(|| {
        ExError::new(ExErrorKind::Unauthorised)
            .with_op("login")
            .with_message("Invalid credentials")
            .into()
    })
}

fn execute_login(credentials: Credentials, app: &App) -> CliResult {
    let conn = app.connect()?;
    let session = sign_in(credentials, &conn)?;

    app.emit(&session, || println!("Logged in as {}", session.staff_name))
}

fn execute_orders(credentials: Credentials, app: &App) -> CliResult {
    let conn = app.connect()?;
    let session = sign_in(credentials, &conn)?;
    let orders = get_staff_orders(&session.staff_name, &conn)?;

    let pending: Vec<String> = orders
        .iter()
        .filter(|o| o.is_open())
        .flat_map(|o| o.item_list())
        .collect();
    let message = if pending.is_empty() {
        String::new()
    } else {
        app.assistant().summarize_pending(&session.staff_name, &pending)
    };

    app.emit(&json!({ "orders": orders, "message": message }), || {
        if orders.is_empty() {
            println!("No orders assigned to {}", session.staff_name);
        }
        for order in &orders {
            println!(
                "#{:<5} {:<20} {:<30} {}",
                order.id, order.customer_name, order.items, order.status
            );
        }
        if !message.is_empty() {
            println!();
            println!("{}", message);
        }
    })
}

fn execute_complete(args: CompleteArgs, app: &App) -> CliResult {
    let conn = app.connect()?;
    let session = sign_in(args.credentials, &conn)?;

    let order = get_order(args.order_id, &conn)?;
    if !session.owns(&order) {
        return Err(ExError::new(ExErrorKind::Unauthorised)
            .with_op("complete_order")
            .with_entity_id(order.id.to_string())
            .with_message(format!("Order is not assigned to {}", session.staff_name))
            .into());
    }

    complete_order(order.id, &conn)?;

    app.emit(&json!({ "order_id": order.id, "status": "Completed" }), || {
        println!("Order #{} completed", order.id)
    })
}
