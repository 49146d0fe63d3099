//! Tenant handlers: stylesheet, customization config, registration and
//! super admin management

use axum::{
	Json,
	extract::{Path, Query, State},
	http::{StatusCode, header},
	response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::customization::TenantCustomization;
use crate::prelude::*;
use crate::roles;
use crate::tenant_adapter::{
	CreateTenantData, ListTenantOptions, Tenant, TenantStatus, TenantType, UpdateTenantData,
};
use crate::token::generate_access_token;
use crate::types::Patch;
use crate::utils::{non_empty_trimmed, slugify};
use clinictheme_core::extract::{Auth, PublicTnId};
use clinictheme_core::token::AuthCtx;
use clinictheme_style::generator::FALLBACK_CSS;

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 254;

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct TenantResponse {
	pub success: bool,
	pub tenant: Tenant,
	pub token: Option<Box<str>>,
	pub message: Option<&'static str>,
}

impl TenantResponse {
	fn new(tenant: Tenant) -> Self {
		Self { success: true, tenant, token: None, message: None }
	}
}

#[derive(Debug, Serialize)]
pub struct TenantListResponse {
	pub success: bool,
	pub tenants: Vec<Tenant>,
	pub count: usize,
}

fn css_response(status: StatusCode, css: String) -> Response {
	(status, [(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response()
}

fn require_role(auth: &AuthCtx, role: &str) -> ClResult<()> {
	if auth.has_role(role) || auth.has_role(roles::SADM) {
		Ok(())
	} else {
		warn!("Tenant {} lacks role {}", auth.tn_id, role);
		Err(Error::PermissionDenied)
	}
}

/// GET /api/tenants/css
pub async fn get_css(State(app): State<App>, PublicTnId(tn_id): PublicTnId) -> Response {
	let source = match app.tenant_adapter.read_style_source(tn_id).await {
		Ok(source) => source,
		Err(Error::NotFound) => return Error::NotFound.into_response(),
		Err(err) => {
			error!("Cannot read style source of tenant {}: {}", tn_id, err);
			return css_response(StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_CSS.to_string());
		}
	};

	let css = app.css.generate(&source);
	let status = if css.is_fallback() { StatusCode::INTERNAL_SERVER_ERROR } else { StatusCode::OK };
	css_response(status, css.into_string())
}

/// GET /api/tenants/config
pub async fn get_config(
	State(app): State<App>,
	Auth(_auth): Auth,
	tn_id: TnId,
) -> ClResult<Json<TenantResponse>> {
	let tenant = app.tenant_adapter.read_tenant(tn_id).await?;
	Ok(Json(TenantResponse::new(tenant)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
	#[serde(default)]
	pub ui_customization: Patch<TenantCustomization>,
	#[serde(default, rename = "customCSS")]
	pub custom_css: Patch<String>,
}

/// PATCH /api/tenants/config
///
/// `uiCustomization` replaces the stored record as a whole, `null` resets it.
pub async fn patch_config(
	State(app): State<App>,
	Auth(auth): Auth,
	tn_id: TnId,
	Json(req): Json<ConfigPatch>,
) -> ClResult<Json<TenantResponse>> {
	require_role(&auth, roles::ADMIN)?;

	if let Some(ui) = req.ui_customization.value() {
		app.validator.validate(ui)?;
	}
	if let Some(css) = req.custom_css.value() {
		app.validator.validate_custom_css(css)?;
	}
	if req.ui_customization.is_null() {
		info!("Tenant {} customization reset to defaults", tn_id);
	}

	let update = UpdateTenantData {
		ui_customization: req.ui_customization,
		custom_css: req.custom_css,
		..Default::default()
	};
	app.tenant_adapter.update_tenant(tn_id, &update).await?;
	info!("Tenant {} customization updated", tn_id);

	let tenant = app.tenant_adapter.read_tenant(tn_id).await?;
	Ok(Json(TenantResponse {
		message: Some("Tenant configuration updated successfully"),
		..TenantResponse::new(tenant)
	}))
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
	pub name: String,
	pub slug: Option<String>,
	#[serde(rename = "type")]
	pub typ: Option<TenantType>,
	pub email: String,
	pub phone: Option<String>,
}

/// POST /api/tenants/register
///
/// Creates a tenant and returns an admin token for it.
pub async fn post_register(
	State(app): State<App>,
	Json(req): Json<RegisterRequest>,
) -> ClResult<(StatusCode, Json<TenantResponse>)> {
	if !app.opts.allow_registration {
		return Err(Error::PermissionDenied);
	}

	let name = non_empty_trimmed(&req.name, MAX_NAME_LEN)
		.ok_or_else(|| Error::ValidationError("name is required".into()))?;
	let email = non_empty_trimmed(&req.email, MAX_EMAIL_LEN)
		.filter(|email| email.contains('@'))
		.ok_or_else(|| Error::ValidationError("a valid email is required".into()))?;
	let slug = slugify(req.slug.as_deref().unwrap_or(name));
	let phone = req.phone.as_deref().and_then(|phone| non_empty_trimmed(phone, 32));

	let tn_id = app
		.tenant_adapter
		.create_tenant(&CreateTenantData {
			slug: &slug,
			name,
			typ: req.typ.unwrap_or(TenantType::Clinic),
			email,
			phone,
		})
		.await?;
	info!("Tenant registered: {} ({})", slug, tn_id);

	let token = generate_access_token(
		&app.opts.jwt_secret,
		tn_id,
		Some(roles::ADMIN),
		app.opts.token_expire,
	)?;
	let tenant = app.tenant_adapter.read_tenant(tn_id).await?;

	Ok((
		StatusCode::CREATED,
		Json(TenantResponse {
			token: Some(token),
			message: Some("Tenant registered successfully"),
			..TenantResponse::new(tenant)
		}),
	))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListTenantsQuery {
	pub status: Option<TenantStatus>,
}

/// GET /api/tenants/all
pub async fn list_tenants(
	State(app): State<App>,
	Auth(auth): Auth,
	Query(query): Query<ListTenantsQuery>,
) -> ClResult<Json<TenantListResponse>> {
	if !auth.has_role(roles::SADM) {
		return Err(Error::PermissionDenied);
	}

	let tenants =
		app.tenant_adapter.list_tenants(&ListTenantOptions { status: query.status }).await?;
	Ok(Json(TenantListResponse { success: true, count: tenants.len(), tenants }))
}

#[derive(Debug, Deserialize)]
pub struct StatusPatch {
	pub status: TenantStatus,
}

/// PATCH /api/tenants/{id}/status
pub async fn patch_tenant_status(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(id): Path<u32>,
	Json(req): Json<StatusPatch>,
) -> ClResult<Json<TenantResponse>> {
	if !auth.has_role(roles::SADM) {
		return Err(Error::PermissionDenied);
	}

	let tn_id = TnId(id);
	let update = UpdateTenantData { status: Patch::Value(req.status), ..Default::default() };
	app.tenant_adapter.update_tenant(tn_id, &update).await?;
	info!("Tenant {} status set to {}", tn_id, req.status.as_str());

	let tenant = app.tenant_adapter.read_tenant(tn_id).await?;
	Ok(Json(TenantResponse::new(tenant)))
}

// vim: ts=4
