use std::net::SocketAddr;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::{get, post},
    Router,
};
use tracing::{error, info};

use battlecard::{build_comparison, DiscoveryForm, Field};

mod web;

use web::{render_comparison_page, render_error_page, render_form_page, AppState};

/// Reference tables are shipped next to the binary and read at runtime.
const DATA_DIR: &str = "data";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let state = AppState::new(DATA_DIR);
    let app = Router::new()
        .route("/", get(discovery_form))
        .route("/compare", post(compare))
        .with_state(state);

    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    info!("Starting battle-card server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

async fn discovery_form() -> Html<String> {
    Html(render_form_page(&DiscoveryForm::new()))
}

/// Replays the posted pairs through the form controller (repeated
/// `tech_stack` keys carry the multi-select), then either re-renders the
/// form with inline errors or renders the comparison screen.
async fn compare(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Html<String> {
    let mut form = DiscoveryForm::new();
    for (name, value) in fields {
        match Field::from_name(&name) {
            Some(Field::TechStack) => form.toggle_tech(&value, true),
            Some(field) => form.set_field(field, value),
            None => {}
        }
    }

    let Some(profile) = form.submit() else {
        return Html(render_form_page(&form));
    };

    let tables = match state.reference_data().await {
        Ok(tables) => tables,
        Err(err) => {
            error!(%err, "failed to load comparison data");
            return Html(render_error_page("Failed to load comparison data"));
        }
    };

    info!(solution = %profile.current_solution, challenge = %profile.biggest_challenge, "rendering comparison");
    Html(render_comparison_page(&build_comparison(&profile, tables)))
}
