//! BDD step definitions for pagination feature

use cucumber::{given, then, when};

use farm_dashboard::format::page_label;
use farm_dashboard::pagination::Pagination;

use crate::world::DashboardWorld;

#[given(expr = "the table is on page {int} with {int} rows")]
fn table_on_page(world: &mut DashboardWorld, page: u64, rows: u64) {
    world.pagination = Pagination::new(page, rows);
}

#[when(expr = "the operator moves {int} pages")]
fn operator_moves(world: &mut DashboardWorld, delta: i64) {
    match world.pagination.change_page(delta) {
        Some(next) => {
            world.pagination = next;
            world.last_move_accepted = Some(true);
        }
        None => world.last_move_accepted = Some(false),
    }
}

#[when(expr = "the operator sets the page size to {int}")]
fn operator_sets_rows(world: &mut DashboardWorld, rows: i64) {
    if let Some(next) = world.pagination.set_rows(rows as f64) {
        world.pagination = next;
    }
}

#[then("the move is rejected")]
fn move_rejected(world: &mut DashboardWorld) {
    assert_eq!(world.last_move_accepted, Some(false));
}

#[then(expr = "the table is on page {int}")]
fn table_is_on_page(world: &mut DashboardWorld, page: u64) {
    assert_eq!(world.pagination.page(), page);
}

#[then(expr = "the table shows {int} rows per page")]
fn table_shows_rows(world: &mut DashboardWorld, rows: u64) {
    assert_eq!(world.pagination.rows(), rows);
}

#[then(expr = "the fetch window starts at {int} with count {int}")]
fn fetch_window(world: &mut DashboardWorld, start: u64, count: u64) {
    let window = world.pagination.window();
    assert_eq!(window.start, start);
    assert_eq!(window.count, count);
}

#[then(expr = "the page counter reads {string}")]
fn page_counter(world: &mut DashboardWorld, expected: String) {
    assert_eq!(page_label(world.pagination.page()), expected);
}
