//! People HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetPerson, ListPeople};
use crate::infrastructure::http::dto::PersonResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::EntityId;
use crate::infrastructure::http::state::AppState;

/// 获取人物列表
pub async fn list_people(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let people = state.list_people_handler.handle(ListPeople).await?;

    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

/// 获取人物详情
pub async fn get_person(
    State(state): State<Arc<AppState>>,
    EntityId(person_id): EntityId,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = state
        .get_person_handler
        .handle(GetPerson { person_id })
        .await?;

    Ok(Json(PersonResponse::from(person)))
}
