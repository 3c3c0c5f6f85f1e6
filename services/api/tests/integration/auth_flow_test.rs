use wellbeat_api::error::ApiServiceError;
use wellbeat_api::usecase::auth::{
    LoginInput, LoginUseCase, RegisterUserInput, RegisterUserUseCase,
};
use wellbeat_api::usecase::user::SetUserStatusUseCase;
use wellbeat_auth_types::token::ACCESS_TOKEN_EXP;
use wellbeat_domain::user::UserRole;
use wellbeat_testing::auth::test_verifier;

use crate::helpers::InMemoryUsers;

fn register_input(email: &str, role: &str) -> RegisterUserInput {
    RegisterUserInput {
        full_name: "Grace Hopper".to_owned(),
        email: email.to_owned(),
        password: "a-long-passphrase".to_owned(),
        role: role.to_owned(),
    }
}

#[tokio::test]
async fn register_then_login_yields_token_resolving_to_same_identity() {
    let users = InMemoryUsers::default();
    let auth = test_verifier();

    let register = RegisterUserUseCase {
        users: users.clone(),
        auth: auth.clone(),
    };
    register
        .execute(register_input("grace@example.com", "Manager"))
        .await
        .unwrap();

    let login = LoginUseCase {
        users: users.clone(),
        auth: auth.clone(),
    };
    let out = login
        .execute(LoginInput {
            email: "grace@example.com".to_owned(),
            password: "a-long-passphrase".to_owned(),
        })
        .await
        .unwrap();

    use wellbeat_api::domain::repository::UserRepository as _;
    let stored = users
        .find_by_email("grace@example.com")
        .await
        .unwrap()
        .unwrap();

    let info = auth.verify(&out.token).unwrap();
    assert_eq!(info.user_id, stored.id);
    assert_eq!(info.role, UserRole::Manager);
    assert_eq!(info.email, "grace@example.com");
    assert_eq!(info.full_name, "Grace Hopper");
}

#[tokio::test]
async fn issued_token_expires_eight_hours_after_issuance() {
    let users = InMemoryUsers::default();
    let auth = test_verifier();

    let register = RegisterUserUseCase {
        users,
        auth: auth.clone(),
    };
    let out = register
        .execute(register_input("grace@example.com", "Collaborator"))
        .await
        .unwrap();

    let info = auth.verify(&out.token).unwrap();
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let lifetime = info.expires_at - now;
    assert!(
        lifetime > ACCESS_TOKEN_EXP - 60 && lifetime <= ACCESS_TOKEN_EXP,
        "unexpected token lifetime: {lifetime}s"
    );
}

#[tokio::test]
async fn deactivated_user_can_no_longer_log_in() {
    let users = InMemoryUsers::default();
    let auth = test_verifier();

    let register = RegisterUserUseCase {
        users: users.clone(),
        auth: auth.clone(),
    };
    register
        .execute(register_input("grace@example.com", "Collaborator"))
        .await
        .unwrap();

    use wellbeat_api::domain::repository::UserRepository as _;
    let id = users
        .find_by_email("grace@example.com")
        .await
        .unwrap()
        .unwrap()
        .id;

    let status = SetUserStatusUseCase {
        users: users.clone(),
    };
    status.execute(id, false).await.unwrap();

    let login = LoginUseCase { users, auth };
    let result = login
        .execute(LoginInput {
            email: "grace@example.com".to_owned(),
            password: "a-long-passphrase".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn second_registration_with_same_email_conflicts() {
    let users = InMemoryUsers::default();
    let register = RegisterUserUseCase {
        users,
        auth: test_verifier(),
    };
    register
        .execute(register_input("grace@example.com", "Collaborator"))
        .await
        .unwrap();
    let result = register
        .execute(register_input("grace@example.com", "Manager"))
        .await;
    assert!(matches!(result, Err(ApiServiceError::EmailTaken)));
}
