use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WellnessEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WellnessEvents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WellnessEvents::UserId).uuid())
                    .col(ColumnDef::new(WellnessEvents::EventType).string().not_null())
                    .col(
                        ColumnDef::new(WellnessEvents::OccurredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WellnessEvents::Source)
                            .string()
                            .not_null()
                            .default("unknown"),
                    )
                    .col(ColumnDef::new(WellnessEvents::Value).double())
                    .col(ColumnDef::new(WellnessEvents::MetadataJson).text())
                    .col(
                        ColumnDef::new(WellnessEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WellnessEvents::Table, WellnessEvents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wellness_events_occurred")
                    .table(WellnessEvents::Table)
                    .col(WellnessEvents::OccurredAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WellnessEvents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WellnessEvents {
    Table,
    Id,
    UserId,
    EventType,
    OccurredAt,
    Source,
    Value,
    MetadataJson,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
