use sea_orm::entity::prelude::*;

/// User account record: identity, credentials, role, and active flag.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: i16,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::self_assessments::Entity")]
    SelfAssessments,
    #[sea_orm(has_many = "super::wellness_events::Entity")]
    WellnessEvents,
}

impl Related<super::self_assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelfAssessments.def()
    }
}

impl Related<super::wellness_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WellnessEvents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
