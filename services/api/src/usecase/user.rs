use uuid::Uuid;

use wellbeat_domain::pagination::{PageQuery, PagedResult};

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, UserFilter};
use crate::error::ApiServiceError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(
        &self,
        filter: UserFilter,
        page: PageQuery,
    ) -> Result<PagedResult<User>, ApiServiceError> {
        let page = page.normalized();
        let (items, total) = self.users.list(&filter, page).await?;
        Ok(PagedResult::new(items, page, total))
    }
}

// ── SetUserStatus ────────────────────────────────────────────────────────────

pub struct SetUserStatusUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> SetUserStatusUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, is_active: bool) -> Result<(), ApiServiceError> {
        if !self.users.set_active(user_id, is_active).await? {
            return Err(ApiServiceError::UserNotFound);
        }
        Ok(())
    }
}
