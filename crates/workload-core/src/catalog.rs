//! Static item catalog
//!
//! Items map to the skill group that prepares them. Only items whose group
//! is currently active can be ordered.

/// Item name to skill group
pub const PRODUCT_GROUPS: &[(&str, &str)] = &[
    ("Veg Pizza", "Veg Pizza"),
    ("NV Pizza", "NV Pizza"),
    ("Sandwich", "Sandwich"),
    ("Burger", "Burger"),
    ("Coke", "Drinks"),
];

/// Groups currently staffed and taking orders
pub const ACTIVE_GROUPS: &[&str] = &["Veg Pizza", "NV Pizza", "Sandwich"];

/// The skill group an item belongs to
pub fn group_for_item(item: &str) -> Option<&'static str> {
    PRODUCT_GROUPS
        .iter()
        .find(|(name, _)| *name == item)
        .map(|(_, group)| *group)
}

/// Items orderable given the active groups, in catalog order
pub fn available_items(active_groups: &[&str]) -> Vec<&'static str> {
    PRODUCT_GROUPS
        .iter()
        .filter(|(_, group)| active_groups.contains(group))
        .map(|(item, _)| *item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_active_groups_hide_burger_and_drinks() {
        assert_eq!(
            available_items(ACTIVE_GROUPS),
            vec!["Veg Pizza", "NV Pizza", "Sandwich"]
        );
    }

    #[test]
    fn test_coke_is_a_drink() {
        assert_eq!(group_for_item("Coke"), Some("Drinks"));
        assert_eq!(group_for_item("Pasta"), None);
    }

    #[test]
    fn test_activating_drinks_exposes_coke() {
        let items = available_items(&["Drinks"]);
        assert_eq!(items, vec!["Coke"]);
    }
}
