//! HS256 access tokens
//!
//! A token identifies a tenant (`sub`) and carries a comma separated role
//! list (`r`).

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use clinictheme_types::types::now;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuthToken<S> {
	pub sub: u32,
	pub exp: i64,
	pub r: Option<S>,
}

/// Context of an authenticated request
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub tn_id: TnId,
	pub roles: Box<[Box<str>]>,
}

impl AuthCtx {
	pub fn has_role(&self, role: &str) -> bool {
		self.roles.iter().any(|r| r.as_ref() == role)
	}
}

pub fn generate_access_token(
	secret: &str,
	tn_id: TnId,
	roles: Option<&str>,
	expire_hours: u64,
) -> ClResult<Box<str>> {
	let lifetime = i64::try_from(expire_hours.saturating_mul(3600)).unwrap_or(i64::MAX);
	let exp = now().0.saturating_add(lifetime);

	let token = encode(
		&Header::new(Algorithm::HS256),
		&AuthToken::<&str> { sub: tn_id.0, exp, r: roles },
		&EncodingKey::from_secret(secret.as_bytes()),
	)
	.map_err(|e| Error::Internal(format!("token encoding failed: {}", e)))?;

	Ok(token.into())
}

pub fn validate_token(secret: &str, token: &str) -> ClResult<AuthCtx> {
	let token_data = decode::<AuthToken<Box<str>>>(
		token,
		&DecodingKey::from_secret(secret.as_bytes()),
		&Validation::new(Algorithm::HS256),
	)
	.map_err(|e| {
		debug!("Invalid token: {}", e);
		Error::Unauthorized
	})?;

	let roles = token_data
		.claims
		.r
		.as_deref()
		.unwrap_or("")
		.split(',')
		.map(str::trim)
		.filter(|r| !r.is_empty())
		.map(Box::from)
		.collect();

	Ok(AuthCtx { tn_id: TnId(token_data.claims.sub), roles })
}


// vim: ts=4
