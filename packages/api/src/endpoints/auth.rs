use serde_json::{json, Value};
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, PasswordChange, ProfileUpdate, RegisterData, User};
use crate::transport::{ApiRequest, Transport};

/// `/auth/*` endpoints.
///
/// Login and registration go out without credentials, so a stale stored
/// token never turns a bad password into a refresh attempt.
pub struct AuthApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: KeyValueStore> AuthApi<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = json!({ "email": email, "password": password });
        self.client
            .send_anonymous(ApiRequest::post("/auth/login/", body))
            .await?
            .json()
    }

    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(data)?;
        self.client
            .send_anonymous(ApiRequest::post("/auth/register/", body))
            .await?
            .json()
    }

    /// Blacklist `refresh` on the server.
    pub async fn logout(&self, refresh: &str) -> Result<(), ApiError> {
        let _: Value = self
            .client
            .post_json("/auth/logout/", &json!({ "refresh_token": refresh }))
            .await?;
        Ok(())
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.client.get_json("/auth/me/").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.client.put_json("/auth/profile/", update).await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        let _: Value = self
            .client
            .post_json("/auth/change-password/", change)
            .await?;
        Ok(())
    }
}
