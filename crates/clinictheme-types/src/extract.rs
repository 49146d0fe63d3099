//! Custom Axum extractors for clinictheme-specific types.
//!
//! Provides a `FromRequestParts` implementation for `TnId` that works with
//! any state implementing [`TnIdResolver`].

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::Error;
use crate::types::TnId;

// TenantTag //
//***********//
/// Tenant reference (slug or numeric id) placed in the request extensions by
/// the tenant resolving middleware.
#[derive(Clone, Debug)]
pub struct TenantTag(pub Box<str>);

impl TenantTag {
	pub fn new(tag: &str) -> TenantTag {
		TenantTag(Box::from(tag))
	}
}

impl<S> FromRequestParts<S> for TenantTag
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<TenantTag>().cloned().ok_or(Error::NotFound)
	}
}

// TnId //
//******//
/// Trait for resolving `TnId` from a tenant tag.
///
/// Implement this on your application state type to enable the
/// `TnId` Axum extractor.
#[async_trait]
pub trait TnIdResolver: Send + Sync {
	async fn resolve_tn_id(&self, tag: &str) -> Result<TnId, Error>;
}

/// Blanket impl for `Arc<T>` so that `App = Arc<AppState>` works
/// when `AppState` implements `TnIdResolver`.
#[async_trait]
impl<T: TnIdResolver> TnIdResolver for Arc<T> {
	async fn resolve_tn_id(&self, tag: &str) -> Result<TnId, Error> {
		(**self).resolve_tn_id(tag).await
	}
}

impl<S> FromRequestParts<S> for TnId
where
	S: TnIdResolver + Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		if let Some(tag) = parts.extensions.get::<TnId>() {
			return Ok(*tag);
		}
		if let Some(tag) = parts.extensions.get::<TenantTag>().cloned() {
			let tn_id = state.resolve_tn_id(&tag.0).await.map_err(|_| Error::NotFound)?;
			parts.extensions.insert(tn_id);
			Ok(tn_id)
		} else {
			Err(Error::NotFound)
		}
	}
}


// vim: ts=4
