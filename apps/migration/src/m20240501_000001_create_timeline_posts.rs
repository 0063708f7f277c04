use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimelinePosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimelinePosts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TimelinePosts::Name).string().not_null())
                    .col(ColumnDef::new(TimelinePosts::Email).string().not_null())
                    .col(ColumnDef::new(TimelinePosts::Content).text().not_null())
                    .col(
                        ColumnDef::new(TimelinePosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_timeline_posts_created_at")
                    .table(TimelinePosts::Table)
                    .col(TimelinePosts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimelinePosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TimelinePosts {
    Table,
    Id,
    Name,
    Email,
    Content,
    CreatedAt,
}
