use sea_orm_migration::prelude::*;

/// Junction tables linking movies to genres, cast and directors.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(junction(
                MovieGenres::Table,
                MovieGenres::MovieId,
                MovieGenres::GenreId,
                Genres::Table,
                Genres::Id,
            ))
            .await?;
        manager
            .create_table(junction(
                MovieActors::Table,
                MovieActors::MovieId,
                MovieActors::ActorId,
                Actors::Table,
                Actors::Id,
            ))
            .await?;
        manager
            .create_table(junction(
                MovieDirectors::Table,
                MovieDirectors::MovieId,
                MovieDirectors::ActorId,
                Actors::Table,
                Actors::Id,
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieDirectors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MovieActors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MovieGenres::Table).to_owned())
            .await
    }
}

fn junction<T, M, O, OT, OI>(
    table: T,
    movie_col: M,
    other_col: O,
    other_table: OT,
    other_id: OI,
) -> TableCreateStatement
where
    T: IntoIden + Copy + 'static,
    M: IntoIden + Copy + 'static,
    O: IntoIden + Copy + 'static,
    OT: IntoIden + 'static,
    OI: IntoIden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(movie_col).integer().not_null())
        .col(ColumnDef::new(other_col).integer().not_null())
        .primary_key(Index::create().col(movie_col).col(other_col))
        .foreign_key(
            ForeignKey::create()
                .from(table, movie_col)
                .to(Movies::Table, Movies::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(table, other_col)
                .to(other_table, other_id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(Iden, Clone, Copy)]
enum MovieGenres {
    Table,
    MovieId,
    GenreId,
}

#[derive(Iden, Clone, Copy)]
enum MovieActors {
    Table,
    MovieId,
    ActorId,
}

#[derive(Iden, Clone, Copy)]
enum MovieDirectors {
    Table,
    MovieId,
    ActorId,
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
}

#[derive(Iden)]
enum Genres {
    Table,
    Id,
}

#[derive(Iden)]
enum Actors {
    Table,
    Id,
}
