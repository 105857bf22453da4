//! BDD step definitions for synchronization feature

use std::sync::Arc;

use cucumber::{given, then, when};
use tokio_util::sync::CancellationToken;

use farm_dashboard::api::FarmApi;
use farm_dashboard::engine::Engine;
use farm_dashboard::io::HttpClient;
use farm_dashboard::pagination::Pagination;
use farm_dashboard::sanitize::HtmlEscaper;
use farm_dashboard::state::new_state_handle;
use farm_dashboard::validate::parse_int;

use crate::world::{DashboardWorld, ScriptedFarm};

fn build_engine(world: &mut DashboardWorld, post_status: u16) {
    let farm = Arc::new(ScriptedFarm::new(post_status));
    let http: Arc<dyn HttpClient> = farm.clone();
    let api = FarmApi::new("http://farm.test", http);
    let state = new_state_handle(Pagination::default(), 10);
    let engine = Engine::new(api, Arc::new(HtmlEscaper), state, CancellationToken::new());
    world.farm = Some(farm);
    world.engine = Some(Arc::new(engine));
}

fn engine(world: &DashboardWorld) -> Arc<Engine> {
    Arc::clone(world.engine.as_ref().expect("engine not built"))
}

fn farm(world: &DashboardWorld) -> Arc<ScriptedFarm> {
    Arc::clone(world.farm.as_ref().expect("farm not built"))
}

#[given("a farm that serves no flags")]
fn farm_serves_no_flags(world: &mut DashboardWorld) {
    build_engine(world, 200);
}

#[given("a farm that rejects checker changes")]
fn farm_rejects_changes(world: &mut DashboardWorld) {
    build_engine(world, 500);
}

#[when("the operator goes to the next page")]
async fn next_page(world: &mut DashboardWorld) {
    engine(world).change_page(1).await;
}

#[when("the operator goes to the previous page")]
async fn previous_page(world: &mut DashboardWorld) {
    engine(world).change_page(-1).await;
}

#[when(expr = "the operator adds checker {string} on port {string} with delta {string}")]
async fn add_checker(world: &mut DashboardWorld, service: String, port: String, delta: String) {
    let _ = engine(world)
        .add_checker(&service, parse_int(&port), parse_int(&delta))
        .await;
}

#[then(expr = "the farm received a request for {string}")]
fn farm_received(world: &mut DashboardWorld, path: String) {
    let requests = farm(world).requests();
    assert!(
        requests.iter().any(|r| r.ends_with(&path)),
        "Expected a request ending in '{}', got {:?}",
        path,
        requests
    );
}

#[then("the farm received no requests")]
fn farm_received_nothing(world: &mut DashboardWorld) {
    let requests = farm(world).requests();
    assert!(requests.is_empty(), "Unexpected requests: {:?}", requests);
}

#[then(expr = "the operator sees {string}")]
async fn operator_sees(world: &mut DashboardWorld, message: String) {
    let engine = engine(world);
    let state = engine.state().read().await;
    assert!(
        state.notices.iter().any(|n| n.message == message),
        "Expected notice '{}', got {:?}",
        message,
        state.notices
    );
}
