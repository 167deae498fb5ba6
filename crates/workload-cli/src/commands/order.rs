//! Order placement and assignment

use std::collections::BTreeMap;

use clap::{Args, Subcommand};
use serde_json::json;
use workload_core::catalog::{available_items, group_for_item, ACTIVE_GROUPS};
use workload_core::rules::validation::validate_order_input;
use workload_engine::{
    assign_order, auto_assign_orders, get_all_staff, get_order, pending_counts, place_order,
};

use super::CliResult;
use crate::app::App;

#[derive(Debug, Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// Place a new order
    Place(PlaceArgs),
    /// Assign an order to a staff member
    Assign(AssignArgs),
    /// Run automatic assignment (currently assigns nothing)
    AutoAssign,
}

#[derive(Debug, Args)]
pub struct PlaceArgs {
    #[arg(long)]
    pub customer: String,

    /// Item to order; repeat for several
    #[arg(long = "item")]
    pub items: Vec<String>,
}

#[derive(Debug, Args)]
pub struct AssignArgs {
    pub order_id: i64,

    /// Staff member to assign; without it the assistant suggests one
    #[arg(long)]
    pub staff: Option<String>,
}

pub fn execute(args: OrderArgs, app: &App) -> CliResult {
    match args.command {
        OrderCommand::Place(place) => execute_place(place, app),
        OrderCommand::Assign(assign) => execute_assign(assign, app),
        OrderCommand::AutoAssign => execute_auto_assign(app),
    }
}

fn execute_place(args: PlaceArgs, app: &App) -> CliResult {
    validate_order_input(&args.customer, &args.items)?;

    let menu = available_items(ACTIVE_GROUPS);
    let unknown = args
        .items
        .iter()
        .find(|i| !menu.iter().any(|m| *m == i.as_str()));
    if let Some(unknown) = unknown {
        return Err(off_menu_message(unknown, &menu).into());
    }

    let conn = app.connect()?;
    let order_id = place_order(&args.customer, &args.items, &conn)?;

    let suggestions = app
        .assistant()
        .suggest_complementary_items(&args.customer, &args.items);

    app.emit(
        &json!({ "order_id": order_id, "suggestions": suggestions }),
        || {
            println!("Order #{} placed for {}", order_id, args.customer);
            if !suggestions.is_empty() {
                println!("You might also like: {}", suggestions.join(", "));
            }
        },
    )
}

/// Explains why `item` cannot be ordered; catalog items outside the
/// active groups name their group
fn off_menu_message(item: &str, menu: &[&str]) -> String {
    match group_for_item(item) {
        Some(group) => format!(
            "'{}' is not on the menu: the {} group is not taking orders (available: {})",
            item,
            group,
            menu.join(", ")
        ),
        None => format!(
            "'{}' is not on the menu (available: {})",
            item,
            menu.join(", ")
        ),
    }
}

fn execute_assign(args: AssignArgs, app: &App) -> CliResult {
    let conn = app.connect()?;

    if let Some(staff) = args.staff {
        assign_order(args.order_id, &staff, &conn)?;
        return app.emit(
            &json!({ "order_id": args.order_id, "assigned_to": staff }),
            || println!("Order #{} assigned to {}", args.order_id, staff),
        );
    }

    if !app.assistant().is_enabled() {
        return Err("--staff is required when the assistant is disabled".into());
    }

    let order = get_order(args.order_id, &conn)?;
    let staff: BTreeMap<String, String> = get_all_staff(&conn)?
        .into_iter()
        .map(|s| (s.name, s.groups))
        .collect();
    let names: Vec<&String> = staff.keys().collect();
    let pending = pending_counts(&names, &conn)?;

    let suggestion = app
        .assistant()
        .suggest_best_assignee(&order.items, &staff, &pending);

    app.emit(
        &json!({ "order_id": order.id, "suggested_assignee": suggestion }),
        || {
            if suggestion.is_empty() {
                println!("No assignee suggestion available");
            } else {
                println!(
                    "Suggested assignee for order #{}: {} (re-run with --staff to assign)",
                    order.id, suggestion
                );
            }
        },
    )
}

fn execute_auto_assign(app: &App) -> CliResult {
    let conn = app.connect()?;
    let assigned = auto_assign_orders(&conn)?;

    app.emit(&json!({ "assigned": assigned }), || {
        println!("{} order(s) assigned automatically", assigned)
    })
}
