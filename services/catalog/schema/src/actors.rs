use sea_orm::entity::prelude::*;

/// A person credited on movies, either as actor or as director.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i16,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Relative path of the uploaded portrait.
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_actors::Entity")]
    MovieActors,
    #[sea_orm(has_many = "super::movie_directors::Entity")]
    MovieDirectors,
}

impl Related<super::movie_actors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActors.def()
    }
}

impl Related<super::movie_directors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieDirectors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
