//! Signup Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_app::auth::{NewSignup, Password, Session};

use crate::{auth::errors::into_status_error, extensions::*, state::State};

/// Signup Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<SignupRequest> for NewSignup {
    fn from(request: SignupRequest) -> Self {
        NewSignup {
            name: request.name,
            email: request.email,
            password: Password::new(request.password),
        }
    }
}

/// Session Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionResponse {
    /// Bearer token for subsequent requests
    pub token: String,

    /// Account UUID
    pub user_uuid: Uuid,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Account role
    pub role: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            user_uuid: session.user.uuid.into_uuid(),
            name: session.user.name,
            email: session.user.email,
            role: session.user.role.to_string(),
        }
    }
}

/// Signup Handler
#[endpoint(
    tags("auth"),
    summary = "Register a new account",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SignupRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = state
        .auth
        .signup(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(session.into()))
}

#[cfg(test)]
mod tests {
    use bookstore_app::auth::{AuthServiceError, MockAuthService};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{auth_service, make_session};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        auth_service(auth, Router::with_path("auth/signup").post(handler))
    }

    #[tokio::test]
    async fn test_signup_success_returns_201_and_session() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_signup()
            .once()
            .withf(|signup| signup.email == "reader@example.com" && signup.name == "Reader")
            .return_once(|_| Ok(make_session()));

        auth.expect_login().never();
        auth.expect_authenticate_bearer().never();

        let mut res = TestClient::post("http://example.com/auth/signup")
            .json(&json!({
                "name": "Reader",
                "email": "reader@example.com",
                "password": "correct horse battery staple",
            }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: SessionResponse = res.take_json().await?;

        assert_eq!(body.email, "reader@example.com");
        assert_eq!(body.role, "USER");
        assert!(!body.token.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_returns_409() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_signup()
            .once()
            .return_once(|_| Err(AuthServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/auth/signup")
            .json(&json!({
                "name": "Reader",
                "email": "reader@example.com",
                "password": "pw",
            }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_signup_empty_password_returns_400() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_signup()
            .once()
            .return_once(|_| Err(AuthServiceError::EmptyPassword));

        let res = TestClient::post("http://example.com/auth/signup")
            .json(&json!({
                "name": "Reader",
                "email": "reader@example.com",
                "password": "",
            }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
