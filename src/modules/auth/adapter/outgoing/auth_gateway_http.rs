use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{AuthGateway, AuthGatewayError};
use crate::auth::domain::entities::{Session, SessionUser, UserId};
use crate::config::BackendConfig;

/// GoTrue-compatible auth REST client.
#[derive(Clone)]
pub struct AuthGatewayHttp {
    client: Client,
    backend: BackendConfig,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    expires_at: Option<i64>,
    user: TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

/// The service has used both shapes over time.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .unwrap_or_else(|| "no detail".to_string())
    }
}

impl AuthGatewayHttp {
    pub fn new(client: Client, backend: BackendConfig) -> Self {
        Self { client, backend }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.backend.base_url, path)
    }

    async fn request_token(
        &self,
        grant_type: &str,
        body: serde_json::Value,
        rejected: AuthGatewayError,
    ) -> Result<Session, AuthGatewayError> {
        let response = self
            .client
            .post(self.endpoint(&format!("token?grant_type={}", grant_type)))
            .header("apikey", &self.backend.anon_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Auth service request failed: {}", e);
                AuthGatewayError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            let message = error_message(response).await;
            debug!("Auth service refused {} grant: {}", grant_type, message);
            return Err(rejected);
        }
        if !status.is_success() {
            return Err(AuthGatewayError::Rejected {
                status: status.as_u16(),
                message: error_message(response).await,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthGatewayError::MalformedResponse(e.to_string()))?;

        Ok(into_session(token, Utc::now()))
    }
}

async fn error_message(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str::<ErrorBody>(&text)
        .map(ErrorBody::into_message)
        .unwrap_or(text)
}

fn into_session(token: TokenResponse, now: DateTime<Utc>) -> Session {
    let expires_at = token
        .expires_at
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        .unwrap_or_else(|| now + Duration::seconds(token.expires_in));

    Session {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        expires_at,
        user: SessionUser {
            id: UserId::from(token.user.id),
            email: token.user.email.unwrap_or_default(),
        },
    }
}

#[async_trait]
impl AuthGateway for AuthGatewayHttp {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthGatewayError> {
        self.request_token(
            "password",
            json!({ "email": email, "password": password }),
            AuthGatewayError::InvalidCredentials,
        )
        .await
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthGatewayError> {
        self.request_token(
            "refresh_token",
            json!({ "refresh_token": refresh_token }),
            AuthGatewayError::InvalidRefreshToken,
        )
        .await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthGatewayError> {
        let response = self
            .client
            .post(self.endpoint("logout"))
            .header("apikey", &self.backend.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthGatewayError::Transport(e.to_string()))?;

        let status = response.status();
        // An already revoked token counts as signed out.
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(());
        }

        Err(AuthGatewayError::Rejected {
            status: status.as_u16(),
            message: error_message(response).await,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const USER_ID: &str = "8d0fd2b3-9ca7-4d9e-a95f-9e13c4b6a1f0";

    fn gateway(server: &MockServer) -> AuthGatewayHttp {
        AuthGatewayHttp::new(
            Client::new(),
            BackendConfig {
                base_url: server.uri(),
                anon_key: "anon-key".to_string(),
            },
        )
    }

    fn token_body(expires_at: Option<i64>) -> serde_json::Value {
        json!({
            "access_token": "jwt-access",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": expires_at,
            "refresh_token": "jwt-refresh",
            "user": { "id": USER_ID, "email": "admin@example.com" }
        })
    }

    #[tokio::test]
    async fn test_password_grant_returns_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("apikey", "anon-key"))
            .and(body_json(json!({ "email": "admin@example.com", "password": "pw" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body(Some(1_900_000_000))))
            .expect(1)
            .mount(&server)
            .await;

        let session = gateway(&server)
            .sign_in_with_password("admin@example.com", "pw")
            .await
            .unwrap();

        assert_eq!(session.access_token, "jwt-access");
        assert_eq!(session.refresh_token, "jwt-refresh");
        assert_eq!(session.user.id.to_string(), USER_ID);
        assert_eq!(session.expires_at.timestamp(), 1_900_000_000);
    }

    #[tokio::test]
    async fn test_bad_password_maps_to_invalid_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })))
            .mount(&server)
            .await;

        let result = gateway(&server)
            .sign_in_with_password("admin@example.com", "wrong")
            .await;

        assert_eq!(result.unwrap_err(), AuthGatewayError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_refresh_without_expires_at_uses_expires_in() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(body_json(json!({ "refresh_token": "old-refresh" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body(None)))
            .mount(&server)
            .await;

        let before = Utc::now();
        let session = gateway(&server).refresh_session("old-refresh").await.unwrap();

        assert!(session.expires_at >= before + Duration::seconds(3599));
    }

    #[tokio::test]
    async fn test_revoked_refresh_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": 400,
                "error_code": "refresh_token_not_found",
                "msg": "Invalid Refresh Token: Refresh Token Not Found"
            })))
            .mount(&server)
            .await;

        let result = gateway(&server).refresh_session("gone").await;

        assert_eq!(result.unwrap_err(), AuthGatewayError::InvalidRefreshToken);
    }

    #[tokio::test]
    async fn test_server_error_is_rejected_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let result = gateway(&server)
            .sign_in_with_password("admin@example.com", "pw")
            .await;

        assert_eq!(
            result.unwrap_err(),
            AuthGatewayError::Rejected {
                status: 503,
                message: "upstream down".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
            .mount(&server)
            .await;

        let result = gateway(&server)
            .sign_in_with_password("admin@example.com", "pw")
            .await;

        assert!(matches!(result, Err(AuthGatewayError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_sign_out_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("Authorization", "Bearer jwt-access"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        gateway(&server).sign_out("jwt-access").await.unwrap();
    }

    #[tokio::test]
    async fn test_sign_out_with_revoked_token_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        assert!(gateway(&server).sign_out("stale").await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let gateway = AuthGatewayHttp::new(
            Client::new(),
            BackendConfig {
                base_url: "http://127.0.0.1:1".to_string(),
                anon_key: "anon-key".to_string(),
            },
        );

        let result = gateway.refresh_session("token").await;

        assert!(matches!(result, Err(AuthGatewayError::Transport(_))));
    }
}
