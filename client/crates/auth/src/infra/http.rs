//! HTTP binding of the auth endpoints
//!
//! - `POST /Token {email, password, role}` answers `{token}`
//! - `POST /User {...profile}` creates the account

use platform::client::{ApiClient, ApiResponse, server_message};
use reqwest::Method;
use serde_json::Value;

use crate::domain::entity::{login::LoginCredentials, registration::RegistrationProfile};
use crate::domain::repository::AuthApi;
use crate::error::{AUTHENTICATION_FAILED, AuthError, AuthResult, NO_TOKEN_RECEIVED, REGISTRATION_FAILED};

#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

/// Token from a successful `/Token` response, or the server's explanation
fn extract_token(response: &ApiResponse) -> AuthResult<String> {
    let body: Value = serde_json::from_str(&response.body).unwrap_or(Value::Null);

    match body.get("token").and_then(Value::as_str) {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        _ => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(NO_TOKEN_RECEIVED);
            Err(AuthError::MissingToken(message.to_string()))
        }
    }
}

impl AuthApi for HttpAuthApi {
    async fn request_token(&self, login: &LoginCredentials) -> AuthResult<String> {
        let response = self
            .client
            .send(self.client.request(Method::POST, "/Token").json(login))
            .await?;

        if !response.is_success() {
            return Err(AuthError::Rejected {
                status: response.status.as_u16(),
                message: server_message(&response.body)
                    .unwrap_or_else(|| AUTHENTICATION_FAILED.to_string()),
            });
        }

        extract_token(&response)
    }

    async fn create_user(&self, profile: &RegistrationProfile) -> AuthResult<()> {
        self.client
            .send(self.client.request(Method::POST, "/User").json(profile))
            .await?
            .error_for_status(REGISTRATION_FAILED)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn login() -> LoginCredentials {
        LoginCredentials::new("ann@example.com", ClearTextPassword::new("hotel2024"), "user")
    }

    async fn api(server: &MockServer) -> HttpAuthApi {
        HttpAuthApi::new(ApiClient::new(&server.uri(), None).unwrap())
    }

    #[tokio::test]
    async fn test_request_token_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Token"))
            .and(body_json(json!({
                "email": "ann@example.com",
                "password": "hotel2024",
                "role": "user"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "h.p.s"})))
            .expect(1)
            .mount(&server)
            .await;

        let token = api(&server).await.request_token(&login()).await.unwrap();
        assert_eq!(token, "h.p.s");
    }

    #[tokio::test]
    async fn test_rejection_uses_server_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
            .mount(&server)
            .await;

        let err = api(&server).await.request_token(&login()).await.unwrap_err();
        match err {
            AuthError::Rejected { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejection_without_body_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = api(&server).await.request_token(&login()).await.unwrap_err();
        assert_eq!(err.user_message(), AUTHENTICATION_FAILED);
    }

    #[tokio::test]
    async fn test_success_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Account locked"})))
            .mount(&server)
            .await;

        let err = api(&server).await.request_token(&login()).await.unwrap_err();
        assert!(matches!(&err, AuthError::MissingToken(m) if m == "Account locked"));

        server.reset().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        let err = api(&server).await.request_token(&login()).await.unwrap_err();
        assert_eq!(err.to_string(), NO_TOKEN_RECEIVED);
    }

    #[tokio::test]
    async fn test_create_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/User"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"userID": 3})))
            .expect(1)
            .mount(&server)
            .await;

        let profile = RegistrationProfile::new(
            "Ann",
            "ann@example.com",
            ClearTextPassword::new("hotel2024"),
            "0123456789",
            "user",
        );
        api(&server).await.create_user(&profile).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_user_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/User"))
            .respond_with(ResponseTemplate::new(400).set_body_string("\"Email already exists\""))
            .mount(&server)
            .await;

        let profile = RegistrationProfile::new(
            "Ann",
            "ann@example.com",
            ClearTextPassword::new("hotel2024"),
            "0123456789",
            "user",
        );
        let err = api(&server).await.create_user(&profile).await.unwrap_err();
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[tokio::test]
    async fn test_unreachable_api_is_transport() {
        let client = ApiClient::new("http://127.0.0.1:9", None).unwrap();
        let err = HttpAuthApi::new(client).request_token(&login()).await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)));
    }
}
