use sea_orm::entity::prelude::*;

/// Append-only wellness event ingested from arbitrary producers.
///
/// `event_type` and `source` are open vocabulary; `metadata_json` is stored
/// opaque and never interpreted by this service.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wellness_events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub event_type: String,
    pub occurred_at: chrono::DateTime<chrono::Utc>,
    pub source: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub value: Option<f64>,
    pub metadata_json: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
