use axum::{
	Json, Router, middleware,
	routing::{get, patch, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::app::VERSION;
use crate::prelude::*;
use crate::tenant;
use clinictheme_core::middleware::{require_auth, resolve_tenant};

async fn get_health() -> Json<serde_json::Value> {
	Json(json!({ "status": "ok", "version": VERSION }))
}

pub fn init(app: App) -> Router {
	let protected_router = Router::new()
		.route("/api/tenants/config", get(tenant::get_config).patch(tenant::patch_config))
		.route("/api/tenants/all", get(tenant::list_tenants))
		.route("/api/tenants/{id}/status", patch(tenant::patch_tenant_status))
		.route_layer(middleware::from_fn_with_state(app.clone(), require_auth));

	let public_router = Router::new()
		.route("/api/tenants/css", get(tenant::get_css))
		.route("/api/tenants/register", post(tenant::post_register))
		.route("/api/health", get(get_health));

	Router::new()
		.merge(protected_router)
		.merge(public_router)
		.layer(middleware::from_fn(resolve_tenant))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
