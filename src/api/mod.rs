//! Remote API access.
//!
//! [`Resource`] describes a record type the API serves and [`Backend`] the five
//! operations every screen needs against it. [`ApiClient`] is the HTTP
//! implementation; tests substitute an in-memory one.

/// `reqwest` implementation of [`Backend`]
pub mod client;
/// Response envelopes and request bodies
pub mod payload;

pub use client::ApiClient;

use crate::{config::ResourceKind, errors::Result};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;

/// A server-owned record type reachable under one collection endpoint.
pub trait Resource: Clone + Send + Sync + DeserializeOwned + 'static {
    /// Body sent on create and update.
    type Payload: Serialize + Send + Sync;

    /// Collection the records live under.
    const KIND: ResourceKind;

    /// Whether a list response carrying a single object instead of an array is
    /// accepted and wrapped into a one-element list.
    const ACCEPTS_SINGLE_OBJECT: bool = false;

    fn id(&self) -> i64;
}

/// CRUD access to the API. Non-success responses on writes are errors.
pub trait Backend: Send + Sync {
    /// `GET /{collection}`
    fn list<R: Resource>(&self) -> impl Future<Output = Result<Vec<R>>> + Send;

    /// `POST /{collection}`
    fn create<R: Resource>(&self, payload: &R::Payload) -> impl Future<Output = Result<()>> + Send;

    /// `PUT /{collection}/{id}`, the body being the payload plus `id`.
    fn update<R: Resource>(
        &self,
        id: i64,
        payload: &R::Payload,
    ) -> impl Future<Output = Result<()>> + Send;

    /// `DELETE /{collection}/{id}`
    fn delete<R: Resource>(&self, id: i64) -> impl Future<Output = Result<()>> + Send;
}

/// A list fetched alongside a screen's own list, e.g. departments for the
/// employee screen. `()` means no related list.
pub trait RelatedList: Default + Send + Sync + Sized {
    fn fetch<B: Backend>(backend: &B) -> impl Future<Output = Result<Self>> + Send;
}

impl RelatedList for () {
    async fn fetch<B: Backend>(_backend: &B) -> Result<Self> {
        Ok(())
    }
}

impl<R: Resource> RelatedList for Vec<R> {
    async fn fetch<B: Backend>(backend: &B) -> Result<Self> {
        backend.list::<R>().await
    }
}
