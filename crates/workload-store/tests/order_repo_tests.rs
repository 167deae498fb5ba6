// Integration tests for the order repository: inserts, assignee joins,
// status updates and the foreign-key deletion policy.

use rusqlite::Connection;
use workload_core::model::OrderStatus;
use workload_store::{OrderRepo, StaffRepo};

fn setup_db() -> Connection {
    let mut conn = workload_store::db::open_in_memory().unwrap();
    workload_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_new_order_is_wip_and_unassigned() {
    let conn = setup_db();

    let id = OrderRepo::insert_order(&conn, "bob", "Veg Pizza,Coke").unwrap();
    let order = OrderRepo::get_order(&conn, id).unwrap().unwrap();

    assert_eq!(order.customer_name, "bob");
    assert_eq!(order.items, "Veg Pizza,Coke");
    assert_eq!(order.status, OrderStatus::Wip);
    assert_eq!(order.assigned_to, None);
}

#[test]
fn test_list_by_assignee_resolves_name() {
    let conn = setup_db();
    let alice = StaffRepo::insert_staff(&conn, "alice", "h", "Veg Pizza").unwrap();
    let carol = StaffRepo::insert_staff(&conn, "carol", "h", "Burger").unwrap();
    let o1 = OrderRepo::insert_order(&conn, "bob", "Veg Pizza").unwrap();
    let o2 = OrderRepo::insert_order(&conn, "dan", "Burger").unwrap();
    let o3 = OrderRepo::insert_order(&conn, "eve", "Veg Pizza").unwrap();

    OrderRepo::update_order_assignee_by_id(&conn, o1, Some(alice)).unwrap();
    OrderRepo::update_order_assignee_by_id(&conn, o2, Some(carol)).unwrap();
    OrderRepo::update_order_assignee_by_id(&conn, o3, Some(alice)).unwrap();

    let orders = OrderRepo::list_orders_by_assignee(&conn, "alice").unwrap();
    let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![o1, o3]);
    assert!(orders
        .iter()
        .all(|o| o.assigned_to.as_deref() == Some("alice")));

    assert!(OrderRepo::list_orders_by_assignee(&conn, "nobody")
        .unwrap()
        .is_empty());
}

#[test]
fn test_status_update_affects_zero_rows_for_unknown_id() {
    let conn = setup_db();

    let affected =
        OrderRepo::update_order_status_by_id(&conn, 404, OrderStatus::Completed).unwrap();
    assert_eq!(affected, 0);
}

#[test]
fn test_dashboard_rows_project_every_order() {
    let conn = setup_db();
    let alice = StaffRepo::insert_staff(&conn, "alice", "h", "Veg Pizza").unwrap();
    let o1 = OrderRepo::insert_order(&conn, "bob", "Veg Pizza").unwrap();
    OrderRepo::insert_order(&conn, "dan", "Sandwich").unwrap();
    OrderRepo::update_order_assignee_by_id(&conn, o1, Some(alice)).unwrap();
    OrderRepo::update_order_status_by_id(&conn, o1, OrderStatus::Completed).unwrap();

    let rows = OrderRepo::list_dashboard_rows(&conn).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].assigned_to.as_deref(), Some("alice"));
    assert_eq!(rows[0].status, OrderStatus::Completed);
    assert_eq!(rows[1].assigned_to, None);
    assert_eq!(rows[1].status, OrderStatus::Wip);
}

#[test]
fn test_open_order_counts_include_idle_staff() {
    let conn = setup_db();
    let alice = StaffRepo::insert_staff(&conn, "alice", "h", "Veg Pizza").unwrap();
    StaffRepo::insert_staff(&conn, "carol", "h", "Burger").unwrap();
    let o1 = OrderRepo::insert_order(&conn, "bob", "Veg Pizza").unwrap();
    let o2 = OrderRepo::insert_order(&conn, "dan", "Veg Pizza").unwrap();
    OrderRepo::update_order_assignee_by_id(&conn, o1, Some(alice)).unwrap();
    OrderRepo::update_order_assignee_by_id(&conn, o2, Some(alice)).unwrap();
    OrderRepo::update_order_status_by_id(&conn, o2, OrderStatus::Completed).unwrap();

    let counts = OrderRepo::open_order_counts(&conn).unwrap();

    assert_eq!(counts.get("alice"), Some(&1));
    assert_eq!(counts.get("carol"), Some(&0));
    assert_eq!(OrderRepo::count_open_orders_for_staff(&conn, alice).unwrap(), 1);
}

#[test]
fn test_deleting_staff_nulls_assignment() {
    let conn = setup_db();
    let alice = StaffRepo::insert_staff(&conn, "alice", "h", "Veg Pizza").unwrap();
    let o1 = OrderRepo::insert_order(&conn, "bob", "Veg Pizza").unwrap();
    OrderRepo::update_order_assignee_by_id(&conn, o1, Some(alice)).unwrap();
    OrderRepo::update_order_status_by_id(&conn, o1, OrderStatus::Completed).unwrap();

    assert_eq!(StaffRepo::delete_staff_by_name(&conn, "alice").unwrap(), 1);

    let order = OrderRepo::get_order(&conn, o1).unwrap().unwrap();
    assert_eq!(order.assigned_to, None);
    assert_eq!(order.status, OrderStatus::Completed);
}

#[test]
fn test_delete_leaves_staff_holding_wip_order() {
    let conn = setup_db();
    let alice = StaffRepo::insert_staff(&conn, "alice", "h", "Veg Pizza").unwrap();
    let o1 = OrderRepo::insert_order(&conn, "bob", "Veg Pizza").unwrap();
    OrderRepo::update_order_assignee_by_id(&conn, o1, Some(alice)).unwrap();

    assert_eq!(StaffRepo::delete_staff_by_name(&conn, "alice").unwrap(), 0);

    assert!(StaffRepo::find_staff_by_name(&conn, "alice").unwrap().is_some());
    let order = OrderRepo::get_order(&conn, o1).unwrap().unwrap();
    assert_eq!(order.assigned_to.as_deref(), Some("alice"));
}

#[test]
fn test_assigning_unknown_staff_id_is_rejected() {
    let conn = setup_db();
    let o1 = OrderRepo::insert_order(&conn, "bob", "Veg Pizza").unwrap();

    assert!(OrderRepo::update_order_assignee_by_id(&conn, o1, Some(999)).is_err());
}
