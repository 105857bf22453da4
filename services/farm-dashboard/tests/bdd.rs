//! BDD test entry point for the farm dashboard

#[path = "bdd/world.rs"]
mod world;

#[path = "bdd/steps/mod.rs"]
mod steps;

use cucumber::World as _;
use world::DashboardWorld;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    DashboardWorld::run("tests/features").await;
}
