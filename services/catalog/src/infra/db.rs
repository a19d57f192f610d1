use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, OnConflict, Query, SelectStatement},
};

use cinema_catalog_schema::{
    actors, categories, genres, movie_actors, movie_directors, movie_genres, movies, ratings,
    reviews,
};
use cinema_domain::pagination::PageRequest;
use cinema_domain::rating::Star;

use crate::domain::repository::{
    ActorRepository, MovieRepository, RatingRepository, ReviewRepository,
};
use crate::domain::types::{
    Actor, ActorSummary, CreditRole, Movie, MovieFilter, MovieSummary, NewReview, Rating,
    RatingStats, RatingUpsert, Review,
};
use crate::error::CatalogServiceError;

// ── Movie repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMovieRepository {
    pub db: DatabaseConnection,
}

impl MovieRepository for DbMovieRepository {
    async fn list_published(
        &self,
        filter: &MovieFilter,
        page: PageRequest,
    ) -> Result<Vec<MovieSummary>, CatalogServiceError> {
        let mut query = movies::Entity::find().filter(movies::Column::Draft.eq(false));
        if !filter.genres.is_empty() {
            query = query.filter(movies::Column::Id.in_subquery(movies_in_genres(&filter.genres)));
        }
        if let Some(year_min) = filter.year_min {
            query = query.filter(movies::Column::Year.gte(year_min));
        }
        if let Some(year_max) = filter.year_max {
            query = query.filter(movies::Column::Year.lte(year_max));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(movies::Column::CategoryId.eq(category_id));
        }

        let models = query
            .order_by_asc(movies::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list published movies")?;
        Ok(models
            .into_iter()
            .map(|m| MovieSummary {
                id: m.id,
                title: m.title,
                tagline: m.tagline,
                category_id: m.category_id,
            })
            .collect())
    }

    async fn rating_stats(
        &self,
        movie_ids: &[i32],
        client_ip: &str,
    ) -> Result<Vec<RatingStats>, CatalogServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct StarAggregate {
            movie_id: i32,
            star_sum: i64,
            star_count: i64,
        }

        let aggregates = ratings::Entity::find()
            .select_only()
            .column(ratings::Column::MovieId)
            .column_as(Expr::col(ratings::Column::Star).sum(), "star_sum")
            .column_as(Expr::col(ratings::Column::Id).count(), "star_count")
            .filter(ratings::Column::MovieId.is_in(movie_ids.iter().copied()))
            .group_by(ratings::Column::MovieId)
            .into_model::<StarAggregate>()
            .all(&self.db)
            .await
            .context("aggregate ratings")?;

        let rated_by_client: Vec<i32> = ratings::Entity::find()
            .select_only()
            .column(ratings::Column::MovieId)
            .filter(ratings::Column::Ip.eq(client_ip))
            .filter(ratings::Column::MovieId.is_in(movie_ids.iter().copied()))
            .into_tuple()
            .all(&self.db)
            .await
            .context("find movies rated by client")?;

        Ok(aggregates
            .into_iter()
            .map(|agg| RatingStats {
                movie_id: agg.movie_id,
                star_count: agg.star_count,
                star_sum: agg.star_sum,
                client_count: i64::from(rated_by_client.contains(&agg.movie_id)),
            })
            .collect())
    }

    async fn find_published(&self, id: i32) -> Result<Option<Movie>, CatalogServiceError> {
        let model = movies::Entity::find_by_id(id)
            .filter(movies::Column::Draft.eq(false))
            .one(&self.db)
            .await
            .context("find published movie")?;
        Ok(model.map(movie_from_model))
    }

    async fn category_name(
        &self,
        category_id: i32,
    ) -> Result<Option<String>, CatalogServiceError> {
        let model = categories::Entity::find_by_id(category_id)
            .one(&self.db)
            .await
            .context("find category")?;
        Ok(model.map(|c| c.name))
    }

    async fn credits(
        &self,
        movie_id: i32,
        role: CreditRole,
    ) -> Result<Vec<ActorSummary>, CatalogServiceError> {
        let people = match role {
            CreditRole::Actor => Query::select()
                .column(movie_actors::Column::ActorId)
                .from(movie_actors::Entity)
                .and_where(movie_actors::Column::MovieId.eq(movie_id))
                .to_owned(),
            CreditRole::Director => Query::select()
                .column(movie_directors::Column::ActorId)
                .from(movie_directors::Entity)
                .and_where(movie_directors::Column::MovieId.eq(movie_id))
                .to_owned(),
        };
        let models = actors::Entity::find()
            .filter(actors::Column::Id.in_subquery(people))
            .order_by_asc(actors::Column::Id)
            .all(&self.db)
            .await
            .with_context(|| format!("list {role:?} credits"))?;
        Ok(models.into_iter().map(actor_summary_from_model).collect())
    }

    async fn genre_names(&self, movie_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        let models = genres::Entity::find()
            .filter(
                genres::Column::Id.in_subquery(
                    Query::select()
                        .column(movie_genres::Column::GenreId)
                        .from(movie_genres::Entity)
                        .and_where(movie_genres::Column::MovieId.eq(movie_id))
                        .to_owned(),
                ),
            )
            .order_by_asc(genres::Column::Id)
            .all(&self.db)
            .await
            .context("list movie genres")?;
        Ok(models.into_iter().map(|g| g.name).collect())
    }
}

/// `SELECT movie_id FROM movie_genres JOIN genres ... WHERE genres.name IN (...)`
fn movies_in_genres(names: &[String]) -> SelectStatement {
    Query::select()
        .column((movie_genres::Entity, movie_genres::Column::MovieId))
        .from(movie_genres::Entity)
        .inner_join(
            genres::Entity,
            Expr::col((genres::Entity, genres::Column::Id))
                .equals((movie_genres::Entity, movie_genres::Column::GenreId)),
        )
        .and_where(Expr::col((genres::Entity, genres::Column::Name)).is_in(names.iter().cloned()))
        .to_owned()
}

fn movie_from_model(model: movies::Model) -> Movie {
    Movie {
        id: model.id,
        title: model.title,
        tagline: model.tagline,
        description: model.description,
        poster: model.poster,
        year: model.year,
        country: model.country,
        world_premiere: model.world_premiere,
        budget: model.budget,
        fees_in_usa: model.fees_in_usa,
        fees_in_world: model.fees_in_world,
        url: model.url,
        category_id: model.category_id,
    }
}

// ── Actor repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActorRepository {
    pub db: DatabaseConnection,
}

impl ActorRepository for DbActorRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<ActorSummary>, CatalogServiceError> {
        let models = actors::Entity::find()
            .order_by_asc(actors::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list actors")?;
        Ok(models.into_iter().map(actor_summary_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Actor>, CatalogServiceError> {
        let model = actors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find actor by id")?;
        Ok(model.map(|a| Actor {
            id: a.id,
            name: a.name,
            age: a.age,
            description: a.description,
            image: a.image,
        }))
    }
}

fn actor_summary_from_model(model: actors::Model) -> ActorSummary {
    ActorSummary {
        id: model.id,
        name: model.name,
        image: model.image,
    }
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn list_by_movie(&self, movie_id: i32) -> Result<Vec<Review>, CatalogServiceError> {
        let models = reviews::Entity::find()
            .filter(reviews::Column::MovieId.eq(movie_id))
            .order_by_asc(reviews::Column::Id)
            .all(&self.db)
            .await
            .context("list reviews by movie")?;
        Ok(models.into_iter().map(review_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, CatalogServiceError> {
        let model = reviews::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find review by id")?;
        Ok(model.map(review_from_model))
    }

    async fn create(&self, review: &NewReview) -> Result<Review, CatalogServiceError> {
        let model = reviews::ActiveModel {
            email: Set(review.email.clone()),
            name: Set(review.name.clone()),
            text: Set(review.text.clone()),
            parent_id: Set(review.parent_id),
            movie_id: Set(review.movie_id),
            created_at: Set(review.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create review")?;
        Ok(review_from_model(model))
    }
}

fn review_from_model(model: reviews::Model) -> Review {
    Review {
        id: model.id,
        email: model.email,
        name: model.name,
        text: model.text,
        parent_id: model.parent_id,
        movie_id: model.movie_id,
        created_at: model.created_at,
    }
}

// ── Rating repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub db: DatabaseConnection,
}

impl RatingRepository for DbRatingRepository {
    async fn upsert(&self, rating: &RatingUpsert) -> Result<Rating, CatalogServiceError> {
        let txn = self.db.begin().await.context("begin rating upsert")?;

        ratings::Entity::insert(ratings::ActiveModel {
            ip: Set(rating.ip.clone()),
            star: Set(rating.star.value()),
            movie_id: Set(rating.movie_id),
            updated_at: Set(rating.updated_at),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([ratings::Column::Ip, ratings::Column::MovieId])
                .update_columns([ratings::Column::Star, ratings::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await
        .context("upsert rating")?;

        // Read back inside the transaction: the conflict path reports no insert id.
        let model = ratings::Entity::find()
            .filter(ratings::Column::Ip.eq(rating.ip.as_str()))
            .filter(ratings::Column::MovieId.eq(rating.movie_id))
            .one(&txn)
            .await
            .context("reload upserted rating")?
            .context("upserted rating missing")?;

        txn.commit().await.context("commit rating upsert")?;
        Ok(rating_from_model(model)?)
    }
}

fn rating_from_model(model: ratings::Model) -> anyhow::Result<Rating> {
    Ok(Rating {
        id: model.id,
        star: Star::new(model.star).context("stored star out of range")?,
        ip: model.ip,
        movie_id: model.movie_id,
        updated_at: model.updated_at,
    })
}
