// src/handlers/rooms.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    config::AppState,
    models::rooms::{BuildingSummary, FilterState, OccupiedRoom, RoomStatus, ViewState},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomQuery {
    /// Prédio selecionado. Sem prédio, a lista volta vazia.
    pub building: Option<String>,
    #[serde(default)]
    pub status: RoomStatus,
    /// Prefixo do número do quarto (ex.: "1")
    #[serde(default)]
    pub floor: String,
    /// Trecho do número do quarto (diferencia maiúsculas)
    #[serde(default)]
    pub search: String,
    /// Mascara nome, e-mail e telefone do inquilino
    #[serde(default)]
    pub anonymize: bool,
}

impl RoomQuery {
    fn view_state(&self) -> ViewState {
        let mut view = ViewState::default();
        // "building=" conta como nenhum prédio selecionado
        if let Some(building) = self.building.as_deref().filter(|b| !b.is_empty()) {
            view.toggle_building(building);
        }
        view.filters = FilterState {
            status: self.status,
            floor: self.floor.clone(),
            search_term: self.search.clone(),
        };
        view
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FloorQuery {
    pub building: String,
}

// GET /api/rooms
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "Rooms",
    params(RoomQuery),
    responses(
        (status = 200, description = "Quartos do prédio após os filtros", body = Vec<OccupiedRoom>),
        (status = 400, description = "Filtro inválido")
    )
)]
pub async fn list_rooms(
    State(app_state): State<AppState>,
    Query(query): Query<RoomQuery>,
) -> impl IntoResponse {
    let mut rooms = app_state
        .room_service
        .list_rooms(&query.view_state())
        .await;

    if query.anonymize {
        for room in rooms.iter_mut() {
            room.tenant = room.tenant.as_ref().map(|t| t.anonymized());
        }
    }

    (StatusCode::OK, Json(rooms))
}

// GET /api/rooms/buildings
#[utoipa::path(
    get,
    path = "/api/rooms/buildings",
    tag = "Rooms",
    responses(
        (status = 200, description = "Total de quartos e disponíveis por prédio", body = Vec<BuildingSummary>)
    )
)]
pub async fn list_buildings(State(app_state): State<AppState>) -> impl IntoResponse {
    let summaries = app_state.room_service.summaries().await;
    (StatusCode::OK, Json(summaries))
}

// GET /api/rooms/floors
#[utoipa::path(
    get,
    path = "/api/rooms/floors",
    tag = "Rooms",
    params(FloorQuery),
    responses(
        (status = 200, description = "Andares disponíveis para o filtro", body = Vec<String>)
    )
)]
pub async fn list_floors(
    State(app_state): State<AppState>,
    Query(query): Query<FloorQuery>,
) -> impl IntoResponse {
    let floors = app_state.room_service.floors(&query.building);
    (StatusCode::OK, Json(floors))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{
        config::{tests::lazy_pool, AppState},
        models::{rooms::BuildingConfig, tenant::TenantRecord},
        services::{occupancy::tests::tenant, room_service::tests::StubDirectory, TenantDirectory},
    };

    fn app(directory: Arc<dyn TenantDirectory>) -> Router {
        let state = AppState::with_directory(
            lazy_pool(),
            "127.0.0.1:0".into(),
            vec![BuildingConfig::new("Lalaine", 28), BuildingConfig::new("Jade", 30)],
            directory,
        );
        crate::build_router(state)
    }

    fn tenants() -> Vec<TenantRecord> {
        vec![tenant("t1", "jade", "205"), tenant("t2", "Lalaine", "101")]
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_rooms_without_building_is_empty() {
        let (status, body) = get_json(app(StubDirectory::with(tenants())), "/api/rooms").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_rented_rooms_of_building() {
        let (status, body) = get_json(
            app(StubDirectory::with(tenants())),
            "/api/rooms?building=Jade&status=rented",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let rooms = body.as_array().unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0]["roomNumber"], "205");
        assert_eq!(rooms[0]["property"], "Jade");
        assert_eq!(rooms[0]["isRented"], true);
        assert_eq!(rooms[0]["tenant"]["id"], "t1");
    }

    #[tokio::test]
    async fn test_floor_and_search_filters() {
        let (_, body) = get_json(
            app(StubDirectory::with(tenants())),
            "/api/rooms?building=Lalaine&floor=1&search=02",
        )
        .await;
        let numbers: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["roomNumber"].as_str().unwrap())
            .collect();
        assert_eq!(numbers, vec!["102"]);
    }

    #[tokio::test]
    async fn test_anonymize_masks_tenant_contact() {
        let (_, body) = get_json(
            app(StubDirectory::with(tenants())),
            "/api/rooms?building=Jade&search=205&anonymize=true",
        )
        .await;
        let tenant = &body[0]["tenant"];
        assert_eq!(tenant["name"], "I*******o t1");
        assert_eq!(tenant["phone"], "091*******7");
        assert_eq!(tenant["property"], "jade");
    }

    #[tokio::test]
    async fn test_directory_failure_shows_all_available() {
        let (status, body) = get_json(
            app(StubDirectory::failing()),
            "/api/rooms?building=Lalaine",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let rooms = body.as_array().unwrap();
        assert_eq!(rooms.len(), 28);
        assert!(rooms.iter().all(|r| r["isRented"] == false && r["tenant"].is_null()));
    }

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        let (status, _) = get_json(
            app(StubDirectory::with(vec![])),
            "/api/rooms?building=Jade&status=occupied",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_building_summaries() {
        let (_, body) = get_json(app(StubDirectory::with(tenants())), "/api/rooms/buildings").await;
        assert_eq!(body[0]["property"], "Lalaine");
        assert_eq!(body[0]["totalRooms"], 28);
        assert_eq!(body[0]["availableRooms"], 27);
        assert_eq!(body[1]["rentedRooms"], 1);
    }

    #[tokio::test]
    async fn test_floor_options() {
        let (_, body) = get_json(
            app(StubDirectory::with(vec![])),
            "/api/rooms/floors?building=Lalaine",
        )
        .await;
        assert_eq!(body, serde_json::json!(["1", "2", "3"]));
    }

    #[test]
    fn test_query_maps_to_view_state() {
        let query = super::RoomQuery {
            building: Some("Jade".into()),
            status: crate::models::rooms::RoomStatus::Rented,
            floor: "2".into(),
            search: "05".into(),
            anonymize: false,
        };
        let view = query.view_state();
        assert_eq!(view.selected_building.as_deref(), Some("Jade"));
        assert_eq!(view.filters.floor, "2");
        assert_eq!(view.filters.search_term, "05");

        let empty = super::RoomQuery { building: Some(String::new()), ..query };
        assert_eq!(empty.view_state().selected_building, None);
    }
}
