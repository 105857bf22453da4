//! BDD step definitions for table rendering feature

use cucumber::{given, then, when};

use farm_dashboard::api::FlagEntry;
use farm_dashboard::sanitize::HtmlEscaper;
use farm_dashboard::table::{render, NO_DATA};

use crate::world::DashboardWorld;

#[given("no flags")]
fn no_flags(world: &mut DashboardWorld) {
    world.flags.clear();
}

#[given(expr = "a flag {string} with status {int} and lifetime {float}")]
fn a_flag(world: &mut DashboardWorld, flag: String, status: i64, lifetime: f64) {
    world.flags.push(FlagEntry {
        status: Some(status),
        exploit: "sploit".to_string(),
        flag,
        timestamp: 1_700_000_000.0,
        submission_timestamp: None,
        lifetime,
        system_message: None,
    });
}

#[when("the table is rendered")]
fn table_rendered(world: &mut DashboardWorld) {
    world.rendered = Some(render(&world.flags, &HtmlEscaper));
}

fn rendered(world: &DashboardWorld) -> &str {
    world.rendered.as_deref().expect("table not rendered")
}

#[then("the output is the no-data placeholder")]
fn output_is_placeholder(world: &mut DashboardWorld) {
    assert_eq!(rendered(world), NO_DATA);
}

#[then(expr = "the output contains {string}")]
fn output_contains(world: &mut DashboardWorld, expected: String) {
    let html = rendered(world);
    assert!(
        html.contains(&expected),
        "Expected output to contain '{}'.\nOutput:\n{}",
        expected,
        html
    );
}

#[then(expr = "the output does not contain {string}")]
fn output_lacks(world: &mut DashboardWorld, unexpected: String) {
    let html = rendered(world);
    assert!(
        !html.contains(&unexpected),
        "Expected output not to contain '{}'.\nOutput:\n{}",
        unexpected,
        html
    );
}
