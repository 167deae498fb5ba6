//! Dashboard: every order's status plus aggregate counts

use serde_json::json;
use workload_core::model::DashboardSummary;
use workload_engine::get_dashboard_data;

use super::CliResult;
use crate::app::App;

pub fn execute(app: &App) -> CliResult {
    let conn = app.connect()?;
    let rows = get_dashboard_data(&conn)?;
    let summary = DashboardSummary::from_rows(&rows);
    let insights = app.assistant().summarize_trends(&summary);

    app.emit(
        &json!({ "rows": rows, "summary": summary, "insights": insights }),
        || {
            println!("{}", summary.describe());
            println!();
            for row in &rows {
                println!(
                    "#{:<5} {:<15} {}",
                    row.order_id,
                    row.assigned_to.as_deref().unwrap_or("-"),
                    row.status
                );
            }
            if !summary.completed_by_staff.is_empty() {
                println!();
                println!("Completed by staff:");
                for (name, count) in &summary.completed_by_staff {
                    println!("  {:<15} {}", name, count);
                }
            }
            if !insights.is_empty() {
                println!();
                println!("{}", insights);
            }
        },
    )
}
