//! Generic resource client
//!
//! One [`ResourceClient`] serves one backend resource, configured by its
//! [`ResourceDescriptor`]. Reads go through the shared cache with
//! stale-while-revalidate semantics and retried transport; mutations are
//! single-shot and invalidate the resource wholesale on success.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use backoffice_http::{ApiClient, FormPayload};

use crate::cache::{EntryKind, Freshness, ResourceCache};
use crate::descriptor::ResourceDescriptor;
use crate::envelope;
use crate::error::{ResourceError, Result};
use crate::page::Page;
use crate::query::ListQuery;

pub struct ResourceClient<T> {
    api: ApiClient,
    cache: Arc<ResourceCache>,
    descriptor: Arc<ResourceDescriptor>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            cache: self.cache.clone(),
            descriptor: self.descriptor.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T> ResourceClient<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub(crate) fn new(
        api: ApiClient,
        cache: Arc<ResourceCache>,
        descriptor: ResourceDescriptor,
    ) -> Self {
        Self {
            api,
            cache,
            descriptor: Arc::new(descriptor),
            _entity: PhantomData,
        }
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Lists one page.
    ///
    /// Fresh cache entries are served without a request. Stale entries are
    /// served immediately while one background refresh updates them. Misses
    /// fetch inline under the resource's retry policy.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<T>> {
        let generation = self.api.session().generation();
        let key = query.cache_key();
        let lookup = self.cache.lookup(
            self.descriptor.name,
            EntryKind::List,
            &key,
            self.descriptor.policy.stale_after,
            generation,
        );
        match lookup {
            Freshness::Fresh(value) => self.decode_page(value),
            Freshness::Stale(value) => {
                self.spawn_list_refresh(query.clone(), key, generation);
                self.decode_page(value)
            }
            Freshness::Miss => {
                let value = self.fetch_list(query).await?;
                self.cache.store(
                    self.descriptor.name,
                    EntryKind::List,
                    &key,
                    value.clone(),
                    generation,
                );
                self.decode_page(value)
            }
        }
    }

    /// Fetches one entity by id, cached like a list entry.
    ///
    /// An empty or blank id short-circuits to `Ok(None)` with zero network
    /// activity; detail views render their blank state instead of a 404.
    pub async fn detail(&self, id: &str) -> Result<Option<T>> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }

        let generation = self.api.session().generation();
        let lookup = self.cache.lookup(
            self.descriptor.name,
            EntryKind::Detail,
            id,
            self.descriptor.policy.stale_after,
            generation,
        );
        match lookup {
            Freshness::Fresh(value) => self.decode_entity(value).map(Some),
            Freshness::Stale(value) => {
                self.spawn_detail_refresh(id.to_string(), generation);
                self.decode_entity(value).map(Some)
            }
            Freshness::Miss => {
                let value = self.fetch_detail(id).await?;
                self.cache.store(
                    self.descriptor.name,
                    EntryKind::Detail,
                    id,
                    value.clone(),
                    generation,
                );
                self.decode_entity(value).map(Some)
            }
        }
    }

    /// Creates an entity. Single attempt; success invalidates every cached
    /// page and detail of this resource.
    pub async fn create<P: Serialize>(&self, payload: &P) -> Result<T> {
        if !self.descriptor.can_create {
            return Err(ResourceError::unsupported(self.descriptor.name, "create"));
        }
        let response = self
            .api
            .post(self.descriptor.base_path)
            .json(payload)
            .send()
            .await?;
        self.cache.invalidate_resource(self.descriptor.name);
        let body: Value = response.json()?;
        self.decode_entity(envelope::normalize_entity(body))
    }

    /// Updates an entity with the verb the descriptor names (PUT or PATCH).
    pub async fn update<P: Serialize>(&self, id: &str, payload: &P) -> Result<T> {
        self.check_update(id)?;
        let response = self
            .api
            .request(
                self.descriptor.update_method.as_method(),
                self.descriptor.item_path(id),
            )
            .json(payload)
            .send()
            .await?;
        self.cache.invalidate_resource(self.descriptor.name);
        let body: Value = response.json()?;
        self.decode_entity(envelope::normalize_entity(body))
    }

    /// Updates an entity with a multipart form, for image-bearing payloads.
    pub async fn update_multipart(&self, id: &str, form: FormPayload) -> Result<T> {
        self.check_update(id)?;
        let response = self
            .api
            .request(
                self.descriptor.update_method.as_method(),
                self.descriptor.item_path(id),
            )
            .multipart(form)
            .send()
            .await?;
        self.cache.invalidate_resource(self.descriptor.name);
        let body: Value = response.json()?;
        self.decode_entity(envelope::normalize_entity(body))
    }

    /// Deletes an entity.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.descriptor.can_delete {
            return Err(ResourceError::unsupported(self.descriptor.name, "delete"));
        }
        let id = id.trim();
        if id.is_empty() {
            return Err(ResourceError::missing_id(self.descriptor.name, "delete"));
        }
        self.api
            .delete(self.descriptor.item_path(id))
            .send()
            .await?;
        self.cache.invalidate_resource(self.descriptor.name);
        Ok(())
    }

    fn check_update(&self, id: &str) -> Result<()> {
        if !self.descriptor.can_update {
            return Err(ResourceError::unsupported(self.descriptor.name, "update"));
        }
        if id.trim().is_empty() {
            return Err(ResourceError::missing_id(self.descriptor.name, "update"));
        }
        Ok(())
    }

    async fn fetch_list(&self, query: &ListQuery) -> Result<Value> {
        let response = self
            .api
            .get(self.descriptor.base_path)
            .queries(query.to_query_pairs())
            .send_with_retry(&self.descriptor.policy.retry)
            .await?;
        let body: Value = response.json()?;
        let page = envelope::normalize_page(body);
        serde_json::to_value(&page).map_err(|e| ResourceError::decode(self.descriptor.name, e))
    }

    async fn fetch_detail(&self, id: &str) -> Result<Value> {
        let response = self
            .api
            .get(self.descriptor.item_path(id))
            .send_with_retry(&self.descriptor.policy.retry)
            .await?;
        let body: Value = response.json()?;
        Ok(envelope::normalize_entity(body))
    }

    fn spawn_list_refresh(&self, query: ListQuery, key: String, generation: u64) {
        let client = self.clone();
        tokio::spawn(async move {
            match client.fetch_list(&query).await {
                Ok(value) => {
                    client.cache.store(
                        client.descriptor.name,
                        EntryKind::List,
                        &key,
                        value,
                        generation,
                    );
                }
                Err(error) => {
                    debug!(
                        resource = client.descriptor.name,
                        %error,
                        "background refresh failed; keeping the stale entry"
                    );
                    client
                        .cache
                        .end_revalidation(client.descriptor.name, EntryKind::List, &key);
                }
            }
        });
    }

    fn spawn_detail_refresh(&self, id: String, generation: u64) {
        let client = self.clone();
        tokio::spawn(async move {
            match client.fetch_detail(&id).await {
                Ok(value) => {
                    client.cache.store(
                        client.descriptor.name,
                        EntryKind::Detail,
                        &id,
                        value,
                        generation,
                    );
                }
                Err(error) => {
                    debug!(
                        resource = client.descriptor.name,
                        %error,
                        "background refresh failed; keeping the stale entry"
                    );
                    client
                        .cache
                        .end_revalidation(client.descriptor.name, EntryKind::Detail, &id);
                }
            }
        });
    }

    fn decode_page(&self, value: Value) -> Result<Page<T>> {
        serde_json::from_value(value).map_err(|e| ResourceError::decode(self.descriptor.name, e))
    }

    fn decode_entity(&self, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(|e| ResourceError::decode(self.descriptor.name, e))
    }
}
