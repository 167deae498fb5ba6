//! Staff administration

use clap::{Args, Subcommand};
use serde_json::json;
use workload_core::rules::validation::{require_non_empty, validate_new_staff, validate_staff_edit};
use workload_core_types::Sensitive;
use workload_engine::{add_staff, delete_staff, edit_staff, get_all_staff};

use super::CliResult;
use crate::app::App;

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Add a staff member
    Add(AddArgs),
    /// Replace a staff member's skill groups
    Edit(EditArgs),
    /// Remove a staff member
    Delete(DeleteArgs),
    /// List staff and their skill groups
    List,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, env = "WORKLOAD_NEW_STAFF_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Comma-separated skill groups, e.g. "Veg Pizza,Sandwich"
    #[arg(long)]
    pub groups: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub groups: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(long)]
    pub name: String,
}

pub fn execute(args: AdminArgs, app: &App) -> CliResult {
    match args.command {
        AdminCommand::Add(add) => execute_add(add, app),
        AdminCommand::Edit(edit) => execute_edit(edit, app),
        AdminCommand::Delete(delete) => execute_delete(delete, app),
        AdminCommand::List => execute_list(app),
    }
}

fn execute_add(args: AddArgs, app: &App) -> CliResult {
    validate_new_staff(&args.name, &args.password, &args.groups)?;

    let conn = app.connect()?;
    let password = Sensitive::new(args.password);
    let staff_id = add_staff(&args.name, &password, &args.groups, &conn)?;
    let suggested_groups = app.assistant().suggest_new_groups();

    app.emit(
        &json!({
            "staff_id": staff_id,
            "name": args.name,
            "suggested_groups": suggested_groups,
        }),
        || {
            println!("Staff {} added", args.name);
            if !suggested_groups.is_empty() {
                println!("Groups worth adding later: {}", suggested_groups.join(", "));
            }
        },
    )
}

fn execute_edit(args: EditArgs, app: &App) -> CliResult {
    validate_staff_edit(&args.name, &args.groups)?;

    let conn = app.connect()?;
    let affected = edit_staff(&args.name, &args.groups, &conn)?;

    app.emit(&json!({ "name": args.name, "affected": affected }), || {
        if affected == 0 {
            println!("No staff member named {}", args.name);
        } else {
            println!("Staff {} now handles {}", args.name, args.groups);
        }
    })
}

fn execute_delete(args: DeleteArgs, app: &App) -> CliResult {
    require_non_empty("name", &args.name)?;

    let conn = app.connect()?;
    let affected = delete_staff(&args.name, &conn)?;

    app.emit(&json!({ "name": args.name, "affected": affected }), || {
        if affected == 0 {
            println!("No staff member named {}", args.name);
        } else {
            println!("Staff {} deleted", args.name);
        }
    })
}

fn execute_list(app: &App) -> CliResult {
    let conn = app.connect()?;
    let staff = get_all_staff(&conn)?;

    app.emit(&json!({ "staff": staff }), || {
        if staff.is_empty() {
            println!("No staff members");
        }
        for member in &staff {
            println!("{:<15} {}", member.name, member.groups);
        }
    })
}
