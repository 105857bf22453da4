//! BDD step definitions for checker reconciliation feature

use cucumber::{given, then, when};

use farm_dashboard::checkers::rebuild;
use farm_dashboard::sanitize::HtmlEscaper;

use crate::world::{parse_checkers, DashboardWorld};

#[given(expr = "the checker list {string}")]
fn checker_list(world: &mut DashboardWorld, checkers: String) {
    world.checker_list = rebuild(&parse_checkers(&checkers), None, &HtmlEscaper);
}

#[given(expr = "the operator selects the checker with delta {int}")]
fn operator_selects(world: &mut DashboardWorld, delta: i64) {
    assert!(
        world.checker_list.select(delta),
        "no checker with delta {} listed",
        delta
    );
}

#[when(expr = "the server returns the checkers {string}")]
fn server_returns(world: &mut DashboardWorld, checkers: String) {
    let previous = world.checker_list.selected_delta();
    world.checker_list = rebuild(&parse_checkers(&checkers), previous, &HtmlEscaper);
}

#[then(expr = "the checker with delta {int} is selected")]
fn checker_selected(world: &mut DashboardWorld, delta: i64) {
    assert_eq!(world.checker_list.selected_delta(), Some(delta));
}

#[then("the placeholder is selected")]
fn placeholder_selected(world: &mut DashboardWorld) {
    assert_eq!(world.checker_list.selected_index(), 0);
    assert_eq!(world.checker_list.selected_delta(), None);
}

#[then(expr = "{int} checkers are listed")]
fn checkers_listed(world: &mut DashboardWorld, count: usize) {
    assert_eq!(world.checker_list.options().len(), count);
}
