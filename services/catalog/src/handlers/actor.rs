use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use serde::Serialize;

use cinema_domain::pagination::PageRequest;

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::actor::{GetActorUseCase, ListActorsUseCase};

// ── GET /actors ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ActorListResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
}

pub async fn get_actors(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<ActorListResponse>>, CatalogServiceError> {
    let page: PageRequest = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| CatalogServiceError::InvalidQuery)?
        .unwrap_or_default();

    let usecase = ListActorsUseCase {
        repo: state.actor_repo(),
    };
    let actors = usecase.execute(page).await?;
    let items = actors
        .into_iter()
        .map(|a| ActorListResponse {
            id: a.id,
            name: a.name,
            image: a.image,
        })
        .collect();
    Ok(Json(items))
}

// ── GET /actors/{id} ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ActorResponse {
    pub id: i32,
    pub name: String,
    pub age: i16,
    pub description: String,
    pub image: String,
}

pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ActorResponse>, CatalogServiceError> {
    let usecase = GetActorUseCase {
        repo: state.actor_repo(),
    };
    let actor = usecase.execute(id).await?;
    Ok(Json(ActorResponse {
        id: actor.id,
        name: actor.name,
        age: actor.age,
        description: actor.description,
        image: actor.image,
    }))
}
