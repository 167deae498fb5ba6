//! Item catalog listing

use serde::Serialize;
use workload_core::catalog::{available_items, ACTIVE_GROUPS, PRODUCT_GROUPS};

use super::CliResult;
use crate::app::App;

#[derive(Debug, Serialize)]
struct CatalogEntry {
    item: &'static str,
    group: &'static str,
    available: bool,
}

pub fn execute(app: &App) -> CliResult {
    let menu = available_items(ACTIVE_GROUPS);
    let entries: Vec<CatalogEntry> = PRODUCT_GROUPS
        .iter()
        .map(|&(item, group)| CatalogEntry {
            item,
            group,
            available: menu.contains(&item),
        })
        .collect();

    app.emit(&entries, || {
        for entry in &entries {
            println!(
                "{:<12} {:<12} {}",
                entry.item,
                entry.group,
                if entry.available { "available" } else { "unavailable" }
            );
        }
    })
}
