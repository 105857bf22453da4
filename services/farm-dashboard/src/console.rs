//! Operator console: serves the rendered dashboard and accepts operator actions

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::engine::Engine;
use crate::format::page_label;
use crate::sanitize::{HtmlEscaper, Sanitizer};
use crate::validate::{is_delta_valid, parse_int};

#[derive(Debug, Deserialize)]
struct RowsForm {
    #[serde(default)]
    rows: String,
}

#[derive(Debug, Deserialize)]
struct SelectForm {
    #[serde(default)]
    delta: String,
}

#[derive(Debug, Deserialize)]
struct AddCheckerForm {
    #[serde(default)]
    service: String,
    #[serde(default)]
    port: String,
    #[serde(default)]
    delta: String,
}

/// Build the console axum router
pub fn build_router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/fragments/flags", get(flags_fragment_handler))
        .route("/fragments/checkers", get(checkers_fragment_handler))
        .route("/page/next", post(next_page_handler))
        .route("/page/prev", post(prev_page_handler))
        .route("/rows", post(rows_handler))
        .route("/checkers/select", post(select_handler))
        .route("/checkers/add", post(add_checker_handler))
        .route("/checkers/remove", post(remove_checker_handler))
        .route("/health", get(health_handler))
        .with_state(engine)
}

async fn index_handler(State(engine): State<Arc<Engine>>) -> impl IntoResponse {
    let state = engine.state().read().await;

    let flags = if state.flags_markup.is_empty() {
        "<p>Waiting for the farm...</p>"
    } else {
        state.flags_markup.as_str()
    };

    let notices: String = state
        .notices
        .iter()
        .rev()
        .map(|n| format!("<li>{}</li>", HtmlEscaper.sanitize(&n.message)))
        .collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Farm Dashboard</title>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem;">
    <h1>Farm Dashboard</h1>
    <section>
        <h2>Flags</h2>
        <div style="display: flex; gap: 0.5rem; align-items: center;">
            <form method="post" action="/page/prev"><button id="prev-page">&lt;</button></form>
            <span id="page-counter">{page}</span>
            <form method="post" action="/page/next"><button id="next-page">&gt;</button></form>
            <form method="post" action="/rows">
                <input id="count" name="rows" type="number" min="10" value="{rows}">
                <button>Set rows</button>
            </form>
        </div>
        <div id="flags">{flags}</div>
    </section>
    <section>
        <h2>Checkers</h2>
        <form method="post" action="/checkers/select">
            <select id="checker-selector" name="delta">{checkers}</select>
            <button>Select</button>
        </form>
        <form method="post" action="/checkers/remove"><button id="remove-checker">Remove selected</button></form>
        <form method="post" action="/checkers/add">
            <input id="service" name="service" placeholder="service">
            <input id="port" name="port" placeholder="port">
            <input id="delta" name="delta" placeholder="delta">
            <button id="add-checker">Add checker</button>
        </form>
    </section>
    <section>
        <h2>Messages</h2>
        <ul id="notices">{notices}</ul>
    </section>
</body>
</html>"#,
        page = page_label(state.pagination.page()),
        rows = state.pagination.rows(),
        flags = flags,
        checkers = state.checkers.to_markup(),
        notices = notices,
    );

    Html(html)
}

async fn flags_fragment_handler(State(engine): State<Arc<Engine>>) -> impl IntoResponse {
    Html(engine.state().read().await.flags_markup.clone())
}

async fn checkers_fragment_handler(State(engine): State<Arc<Engine>>) -> impl IntoResponse {
    Html(engine.state().read().await.checkers.to_markup())
}

async fn next_page_handler(State(engine): State<Arc<Engine>>) -> Redirect {
    engine.change_page(1).await;
    Redirect::to("/")
}

async fn prev_page_handler(State(engine): State<Arc<Engine>>) -> Redirect {
    engine.change_page(-1).await;
    Redirect::to("/")
}

async fn rows_handler(State(engine): State<Arc<Engine>>, Form(form): Form<RowsForm>) -> Redirect {
    engine.set_rows(parse_int(&form.rows)).await;
    Redirect::to("/")
}

async fn select_handler(
    State(engine): State<Arc<Engine>>,
    Form(form): Form<SelectForm>,
) -> Redirect {
    let delta = parse_int(&form.delta);
    if is_delta_valid(delta) && !engine.select_checker(delta as i64).await {
        tracing::debug!("Ignoring selection of unknown checker {}", delta);
    }
    Redirect::to("/")
}

async fn add_checker_handler(
    State(engine): State<Arc<Engine>>,
    Form(form): Form<AddCheckerForm>,
) -> Redirect {
    // failures are already reported to the operator as notices
    let _ = engine
        .add_checker(&form.service, parse_int(&form.port), parse_int(&form.delta))
        .await;
    Redirect::to("/")
}

async fn remove_checker_handler(State(engine): State<Arc<Engine>>) -> Redirect {
    let _ = engine.remove_checker().await;
    Redirect::to("/")
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
