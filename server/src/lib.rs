//! Skill Board Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - handlers: HTTP handlers for the REST API

use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod domain;
pub mod handlers;
pub mod logging;
pub mod repository;
pub mod seed;

use config::Config;
use domain::DomainResult;
use repository::{init_db, SkillRepository};

/// Application state shared across handlers
pub struct AppState {
    pub skills: SkillRepository,
}

impl AppState {
    /// Open the database at `db_path` and build repositories on it
    pub fn open(db_path: &Path) -> DomainResult<Arc<Self>> {
        let db_state = init_db(db_path)?;
        Ok(Arc::new(Self {
            skills: SkillRepository::new(db_state.connection()),
        }))
    }
}

/// Build the router: the skills API, plus the web UI when `static_dir` is set
pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route(
            "/api/v1/skills",
            get(handlers::list_skills).post(handlers::create_skill),
        )
        .route(
            "/api/v1/skills/{id}",
            get(handlers::show_skill)
                .put(handlers::update_skill)
                .patch(handlers::update_skill)
                .delete(handlers::delete_skill),
        )
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "serving web UI");
            api.fallback_service(ServeDir::new(dir))
        }
        None => api,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl-C
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = AppState::open(&config.database)?;
    let app = build_router(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Skill board listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;
    Ok(())
}
