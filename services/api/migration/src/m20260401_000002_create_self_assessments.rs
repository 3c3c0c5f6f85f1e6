use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SelfAssessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SelfAssessments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SelfAssessments::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(SelfAssessments::Mood)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SelfAssessments::Stress)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SelfAssessments::Workload)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SelfAssessments::Notes).string())
                    .col(
                        ColumnDef::new(SelfAssessments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SelfAssessments::Table, SelfAssessments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is always "own records, newest first".
        manager
            .create_index(
                Index::create()
                    .name("idx_self_assessments_user_created")
                    .table(SelfAssessments::Table)
                    .col(SelfAssessments::UserId)
                    .col(SelfAssessments::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SelfAssessments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SelfAssessments {
    Table,
    Id,
    UserId,
    Mood,
    Stress,
    Workload,
    Notes,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
