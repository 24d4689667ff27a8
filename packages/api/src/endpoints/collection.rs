use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Page, Subscription, SubscriptionInput};
use crate::transport::Transport;

/// CRUD over one REST collection: records of type `M`, written as `I`.
///
/// `base` is the collection path with its trailing slash, e.g. `/tenants/`;
/// single records live at `{base}{id}/`.
pub struct Collection<'a, T, S, M, I> {
    client: &'a ApiClient<T, S>,
    base: &'static str,
    _marker: PhantomData<fn(I) -> M>,
}

impl<'a, T, S, M, I> Collection<'a, T, S, M, I>
where
    T: Transport,
    S: KeyValueStore,
    M: DeserializeOwned,
    I: Serialize,
{
    pub fn new(client: &'a ApiClient<T, S>, base: &'static str) -> Self {
        Self {
            client,
            base,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.base
    }

    fn item(&self, id: i64) -> String {
        format!("{}{id}/", self.base)
    }

    pub async fn list(&self) -> Result<Vec<M>, ApiError> {
        let page: Page<M> = self.client.get_json(self.base).await?;
        Ok(page.into_items())
    }

    pub async fn get(&self, id: i64) -> Result<M, ApiError> {
        self.client.get_json(&self.item(id)).await
    }

    pub async fn create(&self, input: &I) -> Result<M, ApiError> {
        self.client.post_json(self.base, input).await
    }

    pub async fn update(&self, id: i64, input: &I) -> Result<M, ApiError> {
        self.client.put_json(&self.item(id), input).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&self.item(id)).await
    }
}

impl<T: Transport, S: KeyValueStore> Collection<'_, T, S, Subscription, SubscriptionInput> {
    /// Subscriptions are cancelled by deleting them.
    pub async fn cancel(&self, id: i64) -> Result<(), ApiError> {
        self.delete(id).await
    }
}
