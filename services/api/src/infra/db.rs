use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, sea_query::Expr,
};
use uuid::Uuid;

use wellbeat_api_schema::{self_assessments, users, wellness_events};
use wellbeat_domain::level::Level;
use wellbeat_domain::pagination::PageQuery;
use wellbeat_domain::user::UserRole;

use crate::domain::repository::{AssessmentRepository, EventRepository, UserRepository};
use crate::domain::types::{EventFilter, SelfAssessment, User, UserFilter, WellnessEvent};
use crate::error::ApiServiceError;

fn level_from_stored(rank: i16) -> Result<Level, ApiServiceError> {
    Level::from_rank(rank)
        .ok_or_else(|| anyhow::anyhow!("stored level rank out of range: {rank}").into())
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            full_name: Set(user.full_name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_i16()),
            is_active: Set(user.is_active),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<bool, ApiServiceError> {
        let result = users::Entity::update_many()
            .filter(users::Column::Id.eq(id))
            .col_expr(users::Column::IsActive, Expr::value(is_active))
            .exec(&self.db)
            .await
            .context("set user active flag")?;
        Ok(result.rows_affected > 0)
    }

    async fn list(
        &self,
        filter: &UserFilter,
        page: PageQuery,
    ) -> Result<(Vec<User>, i64), ApiServiceError> {
        let mut query = users::Entity::find();
        if let Some(role) = filter.role {
            query = query.filter(users::Column::Role.eq(role.as_i16()));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(users::Column::IsActive.eq(is_active));
        }

        // Count runs against the full filtered set, before skip/take.
        let total = query.clone().count(&self.db).await.context("count users")? as i64;

        let models = query
            .order_by_asc(users::Column::CreatedAt)
            .order_by_asc(users::Column::Id)
            .offset(page.offset() as u64)
            .limit(page.page_size as u64)
            .all(&self.db)
            .await
            .context("list users")?;

        let items = models
            .into_iter()
            .map(user_from_model)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((items, total))
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiServiceError> {
    let role = UserRole::from_i16(model.role)
        .ok_or_else(|| anyhow::anyhow!("stored role out of range: {}", model.role))?;
    Ok(User {
        id: model.id,
        full_name: model.full_name,
        email: model.email,
        password_hash: model.password_hash,
        role,
        is_active: model.is_active,
        created_at: model.created_at,
    })
}

// ── Assessment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAssessmentRepository {
    pub db: DatabaseConnection,
}

impl AssessmentRepository for DbAssessmentRepository {
    async fn create(&self, assessment: &SelfAssessment) -> Result<(), ApiServiceError> {
        self_assessments::ActiveModel {
            id: Set(assessment.id),
            user_id: Set(assessment.user_id),
            mood: Set(assessment.mood.rank()),
            stress: Set(assessment.stress.rank()),
            workload: Set(assessment.workload.rank()),
            notes: Set(assessment.notes.clone()),
            created_at: Set(assessment.created_at),
        }
        .insert(&self.db)
        .await
        .context("create assessment")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SelfAssessment>, ApiServiceError> {
        let model = self_assessments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find assessment by id")?;
        model.map(assessment_from_model).transpose()
    }

    async fn update_levels(&self, assessment: &SelfAssessment) -> Result<(), ApiServiceError> {
        let mut am = self_assessments::ActiveModel {
            id: Set(assessment.id),
            ..Default::default()
        };
        am.mood = Set(assessment.mood.rank());
        am.stress = Set(assessment.stress.rank());
        am.workload = Set(assessment.workload.rank());
        am.notes = Set(assessment.notes.clone());
        am.update(&self.db).await.context("update assessment")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let result = self_assessments::Entity::delete_many()
            .filter(self_assessments::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete assessment")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_by_owner(
        &self,
        user_id: Uuid,
        page: PageQuery,
    ) -> Result<(Vec<SelfAssessment>, i64), ApiServiceError> {
        let query =
            self_assessments::Entity::find().filter(self_assessments::Column::UserId.eq(user_id));

        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count assessments")? as i64;

        // Newest first; id breaks created_at ties so page boundaries stay
        // deterministic under concurrent inserts.
        let models = query
            .order_by_desc(self_assessments::Column::CreatedAt)
            .order_by_desc(self_assessments::Column::Id)
            .offset(page.offset() as u64)
            .limit(page.page_size as u64)
            .all(&self.db)
            .await
            .context("list assessments by owner")?;

        let items = models
            .into_iter()
            .map(assessment_from_model)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((items, total))
    }

    async fn list_created_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SelfAssessment>, ApiServiceError> {
        let models = self_assessments::Entity::find()
            .filter(self_assessments::Column::CreatedAt.gte(cutoff))
            .all(&self.db)
            .await
            .context("list assessments since cutoff")?;
        models.into_iter().map(assessment_from_model).collect()
    }

    async fn list_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<SelfAssessment>, ApiServiceError> {
        let models = self_assessments::Entity::find()
            .filter(self_assessments::Column::CreatedAt.gte(from))
            .filter(self_assessments::Column::CreatedAt.lt(to))
            .all(&self.db)
            .await
            .context("list assessments in range")?;
        models.into_iter().map(assessment_from_model).collect()
    }

    async fn list_recent_for_user(
        &self,
        user_id: Uuid,
        cutoff: DateTime<Utc>,
        limit: Option<u64>,
    ) -> Result<Vec<SelfAssessment>, ApiServiceError> {
        let models = self_assessments::Entity::find()
            .filter(self_assessments::Column::UserId.eq(user_id))
            .filter(self_assessments::Column::CreatedAt.gte(cutoff))
            .order_by_desc(self_assessments::Column::CreatedAt)
            .order_by_desc(self_assessments::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent assessments for user")?;
        models.into_iter().map(assessment_from_model).collect()
    }
}

fn assessment_from_model(model: self_assessments::Model) -> Result<SelfAssessment, ApiServiceError> {
    Ok(SelfAssessment {
        id: model.id,
        user_id: model.user_id,
        mood: level_from_stored(model.mood)?,
        stress: level_from_stored(model.stress)?,
        workload: level_from_stored(model.workload)?,
        notes: model.notes,
        created_at: model.created_at,
    })
}

// ── Event repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEventRepository {
    pub db: DatabaseConnection,
}

impl EventRepository for DbEventRepository {
    async fn create(&self, event: &WellnessEvent) -> Result<(), ApiServiceError> {
        wellness_events::ActiveModel {
            id: Set(event.id),
            user_id: Set(event.user_id),
            event_type: Set(event.event_type.clone()),
            occurred_at: Set(event.occurred_at),
            source: Set(event.source.clone()),
            value: Set(event.value),
            metadata_json: Set(event.metadata_json.clone()),
            created_at: Set(event.created_at),
        }
        .insert(&self.db)
        .await
        .context("create wellness event")?;
        Ok(())
    }

    async fn list(
        &self,
        filter: &EventFilter,
        page: PageQuery,
    ) -> Result<(Vec<WellnessEvent>, i64), ApiServiceError> {
        let mut query = wellness_events::Entity::find();
        if let Some(user_id) = filter.user_id {
            query = query.filter(wellness_events::Column::UserId.eq(user_id));
        }
        if let Some(ref event_type) = filter.event_type {
            query = query.filter(wellness_events::Column::EventType.eq(event_type.as_str()));
        }
        if let Some(ref source) = filter.source {
            query = query.filter(wellness_events::Column::Source.eq(source.as_str()));
        }
        if let Some(from) = filter.occurred_from {
            query = query.filter(wellness_events::Column::OccurredAt.gte(from));
        }
        if let Some(to) = filter.occurred_to {
            query = query.filter(wellness_events::Column::OccurredAt.lte(to));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count wellness events")? as i64;

        let models = query
            .order_by_desc(wellness_events::Column::OccurredAt)
            .order_by_desc(wellness_events::Column::Id)
            .offset(page.offset() as u64)
            .limit(page.page_size as u64)
            .all(&self.db)
            .await
            .context("list wellness events")?;

        let items = models.into_iter().map(event_from_model).collect();
        Ok((items, total))
    }
}

fn event_from_model(model: wellness_events::Model) -> WellnessEvent {
    WellnessEvent {
        id: model.id,
        user_id: model.user_id,
        event_type: model.event_type,
        occurred_at: model.occurred_at,
        source: model.source,
        value: model.value,
        metadata_json: model.metadata_json,
        created_at: model.created_at,
    }
}
