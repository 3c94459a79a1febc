//! Planet HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetPlanet, ListPlanets};
use crate::infrastructure::http::dto::PlanetResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::EntityId;
use crate::infrastructure::http::state::AppState;

/// 获取星球列表
pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    let planets = state.list_planets_handler.handle(ListPlanets).await?;

    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

/// 获取星球详情
pub async fn get_planet(
    State(state): State<Arc<AppState>>,
    EntityId(planet_id): EntityId,
) -> Result<Json<PlanetResponse>, ApiError> {
    let planet = state
        .get_planet_handler
        .handle(GetPlanet { planet_id })
        .await?;

    Ok(Json(PlanetResponse::from(planet)))
}
