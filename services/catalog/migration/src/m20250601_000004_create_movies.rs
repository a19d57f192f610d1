use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Movies::Tagline)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Movies::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Movies::Poster).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Movies::Year)
                            .integer()
                            .not_null()
                            .default(2019),
                    )
                    .col(ColumnDef::new(Movies::Country).string_len(30).not_null())
                    .col(ColumnDef::new(Movies::WorldPremiere).date().not_null())
                    .col(money(Movies::Budget))
                    .col(money(Movies::FeesInUsa))
                    .col(money(Movies::FeesInWorld))
                    .col(ColumnDef::new(Movies::CategoryId).integer().null())
                    .col(
                        ColumnDef::new(Movies::Url)
                            .string_len(130)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Movies::Draft)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Movies::Table, Movies::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Movies::Table)
                    .col(Movies::Draft)
                    .col(Movies::Year)
                    .name("idx_movies_draft_year")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

/// Non-negative amount in dollars, zero when unknown.
fn money(col: Movies) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .default(0)
        .check(Expr::col(col).gte(0))
        .to_owned()
}

#[derive(Iden, Clone, Copy)]
enum Movies {
    Table,
    Id,
    Title,
    Tagline,
    Description,
    Poster,
    Year,
    Country,
    WorldPremiere,
    Budget,
    FeesInUsa,
    FeesInWorld,
    CategoryId,
    Url,
    Draft,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
}
