use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::auth::dtos::{LoginRequest, LoginResponse, RegisterRequest};
use crate::features::auth::models::Session;
use crate::features::auth::session::SessionStore;

/// Gateway operations for `/auth`.
pub struct AuthApi {
    client: ApiClient,
    sessions: SessionStore,
}

impl AuthApi {
    pub fn new(client: ApiClient, sessions: SessionStore) -> Self {
        Self { client, sessions }
    }

    /// Authenticates and persists the returned token and user to the durable
    /// store, so subsequent requests carry the bearer credential.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session> {
        let response: LoginResponse = self.client.post("/auth/login", request).await?;
        let session = Session {
            user: response.user,
            token: response.token,
        };
        self.sessions.save(&session)?;
        tracing::info!(user = %session.user.email, role = %session.user.role, "Logged in");
        Ok(session)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let _: serde_json::Value = self.client.post("/auth/register", request).await?;
        tracing::info!(email = %request.email, "Registered new account");
        Ok(())
    }
}
