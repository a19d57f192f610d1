use cinema_domain::pagination::PageRequest;

use crate::domain::repository::ActorRepository;
use crate::domain::types::{Actor, ActorSummary};
use crate::error::CatalogServiceError;

// ── ListActors ───────────────────────────────────────────────────────────────

pub struct ListActorsUseCase<R: ActorRepository> {
    pub repo: R,
}

impl<R: ActorRepository> ListActorsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<ActorSummary>, CatalogServiceError> {
        self.repo.list(page.clamped()).await
    }
}

// ── GetActor ─────────────────────────────────────────────────────────────────

pub struct GetActorUseCase<R: ActorRepository> {
    pub repo: R,
}

impl<R: ActorRepository> GetActorUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Actor, CatalogServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ActorNotFound)
    }
}
