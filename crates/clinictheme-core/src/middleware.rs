//! Custom middlewares
//!
//! `resolve_tenant` runs on every request and records the requested tenant.
//! `require_auth` validates the bearer token and binds the request to a
//! tenant: the requested one when given (it must match the token unless the
//! caller is a super admin), otherwise the token's own tenant.

use axum::{
	body::Body,
	extract::State,
	http::{Request, response::Response},
	middleware::Next,
};

use crate::extract::{Auth, TenantTag, TnIdResolver, bearer_token};
use crate::prelude::*;
use crate::roles;
use crate::token::{AuthCtx, validate_token};

pub const TENANT_HEADER: &str = "X-Tenant";

async fn bind_tenant(state: &App, claims: &AuthCtx, req: &mut Request<Body>) -> ClResult<()> {
	match req.extensions().get::<TenantTag>().cloned() {
		Some(tag) => {
			let tn_id = state.resolve_tn_id(&tag.0).await.map_err(|_| Error::NotFound)?;
			if tn_id != claims.tn_id && !claims.has_role(roles::SADM) {
				warn!("Token of tenant {} used for tenant {}", claims.tn_id, tag.0);
				return Err(Error::PermissionDenied);
			}
			req.extensions_mut().insert(tn_id);
		}
		None => {
			req.extensions_mut().insert(claims.tn_id);
		}
	}
	Ok(())
}

pub async fn resolve_tenant(mut req: Request<Body>, next: Next) -> Response<Body> {
	let tag = req
		.headers()
		.get(TENANT_HEADER)
		.and_then(|h| h.to_str().ok())
		.map(str::trim)
		.filter(|tag| !tag.is_empty())
		.map(TenantTag::new);
	if let Some(tag) = tag {
		req.extensions_mut().insert(tag);
	}

	next.run(req).await
}

pub async fn require_auth(
	State(state): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> ClResult<Response<Body>> {
	let token = bearer_token(req.headers()).ok_or(Error::Unauthorized)?;
	let claims = validate_token(&state.opts.jwt_secret, token)?;

	bind_tenant(&state, &claims, &mut req).await?;
	req.extensions_mut().insert(Auth(claims));

	Ok(next.run(req).await)
}

// vim: ts=4
