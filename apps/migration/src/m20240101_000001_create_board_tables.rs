//! Posts with their comments, tags and likes.
//!
//! Child rows reference their post with `ON DELETE CASCADE`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(id_column(Posts::Id))
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(ColumnDef::new(Posts::Content).text().not_null())
                    .col(ColumnDef::new(Posts::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Posts::UpdatedBy).string().null())
                    .col(timestamp_column(Posts::CreatedAt))
                    .col(timestamp_column(Posts::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_created_by")
                    .table(Posts::Table)
                    .col(Posts::CreatedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(id_column(Comments::Id))
                    .col(ColumnDef::new(Comments::PostId).big_integer().not_null())
                    .col(ColumnDef::new(Comments::Content).text().not_null())
                    .col(ColumnDef::new(Comments::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Comments::UpdatedBy).string().null())
                    .col(timestamp_column(Comments::CreatedAt))
                    .col(timestamp_column(Comments::UpdatedAt))
                    .foreign_key(&mut post_fk(
                        "fk_comments_post",
                        Comments::Table,
                        Comments::PostId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(id_column(Tags::Id))
                    .col(ColumnDef::new(Tags::PostId).big_integer().not_null())
                    .col(ColumnDef::new(Tags::Name).string().not_null())
                    .col(ColumnDef::new(Tags::CreatedBy).string().not_null())
                    .col(timestamp_column(Tags::CreatedAt))
                    .foreign_key(&mut post_fk("fk_tags_post", Tags::Table, Tags::PostId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tags_name")
                    .table(Tags::Table)
                    .col(Tags::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(id_column(Likes::Id))
                    .col(ColumnDef::new(Likes::PostId).big_integer().not_null())
                    .col(ColumnDef::new(Likes::CreatedBy).string().not_null())
                    .col(timestamp_column(Likes::CreatedAt))
                    .foreign_key(&mut post_fk("fk_likes_post", Likes::Table, Likes::PostId))
                    .to_owned(),
            )
            .await?;

        for (name, table, column) in [
            ("idx_comments_post_id", Comments::Table.into_iden(), Comments::PostId.into_iden()),
            ("idx_tags_post_id", Tags::Table.into_iden(), Tags::PostId.into_iden()),
            ("idx_likes_post_id", Likes::Table.into_iden(), Likes::PostId.into_iden()),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

fn id_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn post_fk<T: IntoIden + 'static, C: IntoIden>(name: &str, table: T, column: C) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Posts::Table, Posts::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Content,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    PostId,
    Content,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    PostId,
    Name,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Likes {
    Table,
    Id,
    PostId,
    CreatedBy,
    CreatedAt,
}
