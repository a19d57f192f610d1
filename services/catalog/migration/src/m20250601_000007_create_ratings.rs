use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ratings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ratings::Ip).string_len(45).not_null())
                    .col(
                        ColumnDef::new(Ratings::Star)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(Ratings::Star).between(1, 5)),
                    )
                    .col(ColumnDef::new(Ratings::MovieId).integer().not_null())
                    .col(
                        ColumnDef::new(Ratings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Ratings::Table, Ratings::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        // Conflict target of the rating upsert.
        manager
            .create_index(
                Index::create()
                    .table(Ratings::Table)
                    .col(Ratings::Ip)
                    .col(Ratings::MovieId)
                    .unique()
                    .name("uq_ratings_ip_movie_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Ratings::Table)
                    .col(Ratings::MovieId)
                    .name("idx_ratings_movie_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Ratings {
    Table,
    Id,
    Ip,
    Star,
    MovieId,
    UpdatedAt,
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
}
