//! Custom extractors for clinictheme-specific data

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};

use crate::app::AppState;
use crate::prelude::*;
use crate::token::{AuthCtx, validate_token};

pub use clinictheme_types::extract::{TenantTag, TnIdResolver};

// A tag is a slug or a numeric tenant id. Slugs are looked up first.
#[async_trait]
impl TnIdResolver for AppState {
	async fn resolve_tn_id(&self, tag: &str) -> Result<TnId, Error> {
		match self.tenant_adapter.read_tn_id(tag).await {
			Err(Error::NotFound) => {}
			res => return res,
		}
		let id = tag.parse::<u32>().map_err(|_| Error::NotFound)?;
		let tenant = self.tenant_adapter.read_tenant(TnId(id)).await?;
		Ok(tenant.tn_id)
	}
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
	let auth_header = headers.get(header::AUTHORIZATION).and_then(|h| h.to_str().ok())?;
	auth_header.strip_prefix("Bearer ").map(str::trim)
}

// Auth //
//******//
#[derive(Debug, Clone)]
pub struct Auth(pub AuthCtx);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<Auth>().cloned().ok_or(Error::Unauthorized)
	}
}

// PublicTnId //
//************//
/// Tenant of a public request
///
/// The requested tenant (`X-Tenant`) wins. Without one the tenant of a valid
/// bearer token is used; invalid tokens are ignored and never checked against
/// the requested tenant.
#[derive(Clone, Copy, Debug)]
pub struct PublicTnId(pub TnId);

impl FromRequestParts<App> for PublicTnId {
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &App) -> Result<Self, Self::Rejection> {
		if let Some(tag) = parts.extensions.get::<TenantTag>().cloned() {
			let tn_id = state.resolve_tn_id(&tag.0).await.map_err(|_| Error::NotFound)?;
			return Ok(PublicTnId(tn_id));
		}

		bearer_token(&parts.headers)
			.and_then(|token| validate_token(&state.opts.jwt_secret, token).ok())
			.map(|auth| PublicTnId(auth.tn_id))
			.ok_or(Error::NotFound)
	}
}


// vim: ts=4
