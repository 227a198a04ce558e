//src/main.rs

use axum::{
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

pub(crate) fn build_router(app_state: AppState) -> Router {
    let room_routes = Router::new()
        .route("/", get(handlers::rooms::list_rooms))
        .route("/buildings", get(handlers::rooms::list_buildings))
        .route("/floors", get(handlers::rooms::list_floors));

    let maintenance_routes = Router::new()
        .route("/"
               ,get(handlers::maintenance::list_maintenance)
               .post(handlers::maintenance::create_maintenance)
        )
        .route("/{id}"
               ,get(handlers::maintenance::get_maintenance)
               .patch(handlers::maintenance::update_maintenance)
               .delete(handlers::maintenance::delete_maintenance)
        );

    let visit_routes = Router::new()
        .route("/"
               ,get(handlers::visits::list_visitor_logs)
               .post(handlers::visits::create_visitor_log)
        );

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api/tenants", get(handlers::tenants::list_tenants))
        .nest("/api/rooms", room_routes)
        .nest("/api/maintenance", maintenance_routes)
        .nest("/api/visitor-log", visit_routes)
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let addr = app_state.bind_addr.clone();
    let app = build_router(app_state);

    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    use crate::{config::tests::lazy_pool, services::room_service::tests::StubDirectory};

    fn app() -> Router {
        build_router(AppState::with_directory(
            lazy_pool(),
            "127.0.0.1:0".into(),
            vec![],
            StubDirectory::with(vec![]),
        ))
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_openapi_lists_room_routes() {
        let response = app()
            .oneshot(Request::builder().uri("/api-docs/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(doc["paths"]["/api/rooms"].is_object());
        assert!(doc["paths"]["/api/maintenance/{id}"].is_object());
    }
}
