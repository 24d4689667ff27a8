//! # Authenticated API client
//!
//! [`ApiClient`] wraps a [`Transport`] and the [`SessionHandle`]. Every call
//! made through [`ApiClient::send`] carries the persisted access token as a
//! bearer credential. A `401` response triggers one renewal of the access
//! token followed by exactly one resend:
//!
//! 1. the stored refresh token is read; if there is none the `401` is
//!    returned as is;
//! 2. if the refresh token is expired locally the session is expired and
//!    [`ApiError::SessionExpired`] is returned without a network call;
//! 3. otherwise `/auth/token/refresh/` is called anonymously, the new access
//!    token is persisted and the original request is resent with it. The
//!    resend's outcome is returned unchanged, even if it is another `401`.
//!
//! A rejected refresh also expires the session.
//!
//! Renewals are single-flight: concurrent requests that fail together wait
//! on one lock, and the ones that arrive after a successful renewal reuse
//! its token instead of refreshing again.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use store::KeyValueStore;
use tokio::sync::Mutex;

use crate::auth::{token, SessionHandle};
use crate::endpoints::{AuthApi, BillingApi, Collection};
use crate::error::ApiError;
use crate::models::{
    NewUser, Plan, PlanInput, Subscription, SubscriptionInput, Tenant, TenantInput, User,
};
use crate::transport::{ApiRequest, ApiResponse, Transport};

pub const REFRESH_PATH: &str = "/auth/token/refresh/";

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
}

pub struct ApiClient<T, S> {
    transport: Arc<T>,
    session: SessionHandle<S>,
    refresh_lock: Arc<Mutex<()>>,
}

impl<T, S: Clone> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            session: self.session.clone(),
            refresh_lock: self.refresh_lock.clone(),
        }
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, session: SessionHandle<S>) -> Self {
        Self {
            transport: Arc::new(transport),
            session,
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn session(&self) -> &SessionHandle<S> {
        &self.session
    }

    /// Send an authenticated request, renewing the access token once on `401`.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request.bearer = self.session.access_token();
        let response = self.transport.execute(&request).await?;
        if response.status != 401 {
            return response.into_result();
        }

        tracing::debug!(path = %request.path, "access token rejected, renewing");
        let Some(access) = self.renew_access(request.bearer.as_deref()).await? else {
            return response.into_result();
        };
        request.bearer = Some(access);
        self.transport.execute(&request).await?.into_result()
    }

    /// Send a request without credentials and without the renewal path.
    pub async fn send_anonymous(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request.bearer = None;
        self.transport.execute(&request).await?.into_result()
    }

    /// Trade a refresh token for a new access token.
    pub async fn exchange_refresh(&self, refresh: &str) -> Result<String, ApiError> {
        let response = self
            .send_anonymous(ApiRequest::post(REFRESH_PATH, json!({ "refresh": refresh })))
            .await?;
        Ok(response.json::<RefreshResponse>()?.access)
    }

    /// Obtain a usable access token after `stale` was rejected.
    ///
    /// Returns `Ok(None)` when no session is stored, in which case the
    /// rejection stands.
    async fn renew_access(&self, stale: Option<&str>) -> Result<Option<String>, ApiError> {
        let _guard = self.refresh_lock.lock().await;

        let Some(tokens) = self.session.stored_tokens() else {
            return Ok(None);
        };
        if stale != Some(tokens.access.as_str()) {
            // Renewed by another request while this one waited.
            return Ok(Some(tokens.access));
        }
        if token::is_expired(&tokens.refresh) {
            self.session.expire();
            return Err(ApiError::SessionExpired);
        }

        match self.exchange_refresh(&tokens.refresh).await {
            Ok(access) => {
                self.session.access_renewed(&access);
                Ok(Some(access))
            }
            Err(e) => {
                tracing::warn!("Token refresh failed: {e}");
                self.session.expire();
                Err(ApiError::SessionExpired)
            }
        }
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(ApiRequest::get(path)).await?.json()
    }

    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.send(ApiRequest::post(path, body)).await?.json()
    }

    pub async fn put_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.send(ApiRequest::put(path, body)).await?.json()
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::delete(path)).await?;
        Ok(())
    }

    pub fn auth(&self) -> AuthApi<'_, T, S> {
        AuthApi::new(self)
    }

    pub fn tenants(&self) -> Collection<'_, T, S, Tenant, TenantInput> {
        Collection::new(self, "/tenants/")
    }

    pub fn plans(&self) -> Collection<'_, T, S, Plan, PlanInput> {
        Collection::new(self, "/subscriptions/plans/")
    }

    pub fn subscriptions(&self) -> Collection<'_, T, S, Subscription, SubscriptionInput> {
        Collection::new(self, "/subscriptions/")
    }

    pub fn users(&self) -> Collection<'_, T, S, User, NewUser> {
        Collection::new(self, "/users/")
    }

    pub fn billing(&self) -> BillingApi<'_, T, S> {
        BillingApi::new(self)
    }
}
