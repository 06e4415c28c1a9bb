//! Generic REST resource engine.
//!
//! This module defines the [`Resource`] trait family and the
//! [`ResourceHandle`] type that drives every resource's standard
//! operations through one code path.
//!
//! # Design
//!
//! A resource declares its URL segment and list-parameter type once, via
//! [`Resource`]. The capability markers [`Creatable`], [`Updatable`] and
//! [`Deletable`] then gate which write operations its handle exposes: an
//! order cannot be deleted, a notification cannot be created, and those
//! absences are compile errors rather than runtime surprises.
//!
//! Server-side actions that go beyond CRUD (adjusting stock, redeeming a
//! gift card) are inherent methods on the concrete handle type, defined
//! alongside each entity.
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::rest::ListParams;
//!
//! let products = client.products();
//!
//! let page = products.list(&ListParams::default()).await?;
//! let one = products.get("42").await?;
//! let created = products.create(&new_product).await?;
//! let updated = products.update("42", &changes).await?;
//! products.delete("42").await?;
//! ```

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{ApiError, CancelToken, RestClient};
use crate::rest::params::serialize_to_query;
use crate::rest::path::{collection_path, item_path};
use crate::rest::response::Page;

/// A REST resource exposed by the Puxbay API.
///
/// Implementors gain `list` and `get` through [`ResourceHandle`]; the
/// capability markers add the write operations the API actually supports
/// for the resource.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// Singular lowercase name, used in log output (e.g., "product").
    const NAME: &'static str;

    /// URL collection segment (e.g., "products", "purchase-orders").
    const SEGMENT: &'static str;

    /// Parameter type accepted by the listing endpoint.
    type ListParams: Serialize + Send + Sync;
}

/// Marker for resources that support `POST {segment}/`.
pub trait Creatable: Resource {}

/// Marker for resources that support `PATCH {segment}/{id}/`.
pub trait Updatable: Resource {}

/// Marker for resources that support `DELETE {segment}/{id}/`.
pub trait Deletable: Resource {}

/// A borrowed, typed view over one resource's operations.
///
/// Handles are cheap to construct and intended to be created per call
/// chain from the client's accessor methods. Each handle carries its own
/// [`CancelToken`]; use [`with_cancellation`](Self::with_cancellation) to
/// supply a token you control.
///
/// # Example
///
/// ```rust,ignore
/// use puxbay_api::clients::CancelToken;
///
/// let cancel = CancelToken::new();
/// let orders = client.orders().with_cancellation(cancel.clone());
///
/// // From another task: cancel.cancel();
/// let page = orders.list(&OrderListParams::default()).await?;
/// ```
#[derive(Debug)]
pub struct ResourceHandle<'a, T: Resource> {
    pub(crate) rest: &'a RestClient,
    pub(crate) cancel: CancelToken,
    _entity: PhantomData<T>,
}

impl<'a, T: Resource> ResourceHandle<'a, T> {
    /// Creates a handle over the given REST client.
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self {
            rest,
            cancel: CancelToken::new(),
            _entity: PhantomData,
        }
    }

    /// Replaces the handle's cancellation token.
    ///
    /// Tripping the returned token aborts calls made through this handle,
    /// including waits between retry attempts.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Lists resources matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, error statuses and
    /// undecodable response bodies.
    pub async fn list(&self, params: &T::ListParams) -> Result<Page<T>, ApiError> {
        tracing::debug!("listing {}", T::NAME);
        let query = serialize_to_query(params)?;
        let query = if query.is_empty() { None } else { Some(query) };
        self.rest
            .get(&collection_path(T::SEGMENT), query, &self.cancel)
            .await
    }

    /// Fetches a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no resource has the given ID,
    /// and the usual transport and decode errors otherwise.
    pub async fn get(&self, id: &str) -> Result<T, ApiError> {
        tracing::debug!("fetching {} {}", T::NAME, id);
        self.rest
            .get(&item_path(T::SEGMENT, id), None, &self.cancel)
            .await
    }
}

impl<T: Creatable> ResourceHandle<'_, T> {
    /// Creates a new resource from `entity`, returning the stored version
    /// with server-assigned fields populated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the server rejects the payload,
    /// and the usual transport and decode errors otherwise.
    pub async fn create(&self, entity: &T) -> Result<T, ApiError> {
        tracing::debug!("creating {}", T::NAME);
        self.rest
            .post(&collection_path(T::SEGMENT), entity, &self.cancel)
            .await
    }
}

impl<T: Updatable> ResourceHandle<'_, T> {
    /// Applies a partial update to the resource with the given ID.
    ///
    /// Only fields present in the serialized `entity` are changed; the
    /// server leaves the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no resource has the given ID,
    /// [`ApiError::Validation`] if the payload is rejected, and the usual
    /// transport and decode errors otherwise.
    pub async fn update(&self, id: &str, entity: &T) -> Result<T, ApiError> {
        tracing::debug!("updating {} {}", T::NAME, id);
        self.rest
            .patch(&item_path(T::SEGMENT, id), entity, &self.cancel)
            .await
    }
}

impl<T: Deletable> ResourceHandle<'_, T> {
    /// Deletes the resource with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no resource has the given ID,
    /// and the usual transport errors otherwise.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!("deleting {} {}", T::NAME, id);
        self.rest
            .delete(&item_path(T::SEGMENT, id), &self.cancel)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, Config};
    use crate::rest::params::PageParams;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct TestEntity {
        name: String,
    }

    impl Resource for TestEntity {
        const NAME: &'static str = "test entity";
        const SEGMENT: &'static str = "test-entities";
        type ListParams = PageParams;
    }

    impl Creatable for TestEntity {}

    fn test_client() -> RestClient {
        let config = Config::builder()
            .api_key(ApiKey::new("pb_test_key").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_handle_starts_with_untripped_token() {
        let rest = test_client();
        let handle: ResourceHandle<'_, TestEntity> = ResourceHandle::new(&rest);

        assert!(!handle.cancel.is_cancelled());
    }

    #[test]
    fn test_with_cancellation_swaps_token() {
        let rest = test_client();
        let handle: ResourceHandle<'_, TestEntity> = ResourceHandle::new(&rest);

        let token = CancelToken::new();
        token.cancel();

        let handle = handle.with_cancellation(token);
        assert!(handle.cancel.is_cancelled());
    }

    #[test]
    fn test_handle_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceHandle<'_, TestEntity>>();
    }
}
