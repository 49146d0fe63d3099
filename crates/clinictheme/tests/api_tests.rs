//! Tenant API tests against the router

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Request, StatusCode};
use axum::body::Body;
use serde_json::json;

use clinictheme::error::{ClResult, Error};
use clinictheme::tenant_adapter::{
	CreateTenantData, ListTenantOptions, Tenant, TenantAdapter, TenantType, UpdateTenantData,
};
use clinictheme::types::TnId;
use clinictheme_style::generator::FALLBACK_CSS;
use common::{TestServer, get_request, json_request};

fn css_request(tenant: Option<&str>, token: &str) -> Request<Body> {
	let mut builder =
		Request::get("/api/tenants/css").header("Authorization", format!("Bearer {}", token));
	if let Some(tenant) = tenant {
		builder = builder.header("X-Tenant", tenant);
	}
	builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
	let server = TestServer::new().await;
	let (status, body) = server.send_json(get_request("/api/health", None)).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register() {
	let server = TestServer::new().await;
	let (status, body) = server
		.send_json(json_request(
			"POST",
			"/api/tenants/register",
			None,
			&json!({ "name": "St. Mary's Hospital", "type": "hospital", "email": "it@stmarys.example" }),
		))
		.await;

	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["success"], true);
	assert_eq!(body["tenant"]["slug"], "st-mary-s-hospital");
	assert_eq!(body["tenant"]["type"], "hospital");
	assert_eq!(body["tenant"]["status"], "active");
	assert_eq!(body["tenant"]["uiCustomization"], json!({}));
	assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_register_validation_and_conflict() {
	let server = TestServer::new().await;
	server.register("City Clinic").await;

	let (status, _) = server
		.send_json(json_request(
			"POST",
			"/api/tenants/register",
			None,
			&json!({ "name": "City Clinic", "email": "other@example.com" }),
		))
		.await;
	assert_eq!(status, StatusCode::CONFLICT);

	let (status, _) = server
		.send_json(json_request(
			"POST",
			"/api/tenants/register",
			None,
			&json!({ "name": "  ", "email": "admin@example.com" }),
		))
		.await;
	assert_eq!(status, StatusCode::BAD_REQUEST);

	let (status, _) = server
		.send_json(json_request(
			"POST",
			"/api/tenants/register",
			None,
			&json!({ "name": "Other Clinic", "email": "not-an-email" }),
		))
		.await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_disabled() {
	let server = TestServer::with_registration(false).await;
	let (status, body) = server
		.send_json(json_request(
			"POST",
			"/api/tenants/register",
			None,
			&json!({ "name": "City Clinic", "email": "admin@example.com" }),
		))
		.await;
	assert_eq!(status, StatusCode::FORBIDDEN);
	assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_css_defaults() {
	let server = TestServer::new().await;
	let tenant = server.register("City Clinic").await;

	let (status, css) = server.css(&tenant.slug).await;
	assert_eq!(status, StatusCode::OK);
	assert!(css.contains("/* Generated CSS for Tenant: City Clinic */"));
	assert!(css.contains("--primary-color: #2563eb"));
	assert!(css.contains("--font-size-base: 1rem"));
	assert!(!css.contains("Custom CSS Overrides"));

	// numeric id addresses the same tenant
	let (status, by_id) = server.css(&tenant.tn_id.to_string()).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(by_id, css);
}

#[tokio::test]
async fn test_css_unknown_tenant() {
	let server = TestServer::new().await;

	let (status, _) = server.css("nowhere").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	let (status, _) = server.css("999").await;
	assert_eq!(status, StatusCode::NOT_FOUND);

	let (status, _, _) = server.send(get_request("/api/tenants/css", None)).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_css_by_token() {
	let server = TestServer::new().await;
	let tenant = server.register("City Clinic").await;

	let (status, content_type, body) =
		server.send(get_request("/api/tenants/css", Some(&tenant.token))).await;
	assert_eq!(status, StatusCode::OK);
	assert!(content_type.is_some_and(|ct| ct.starts_with("text/css")));
	assert!(String::from_utf8(body).unwrap().contains("City Clinic"));
}

#[tokio::test]
async fn test_css_ignores_stale_token() {
	let server = TestServer::new().await;
	let tenant = server.register("City Clinic").await;

	let (status, content_type, body) =
		server.send(css_request(Some(&tenant.slug), "garbage")).await;
	assert_eq!(status, StatusCode::OK);
	assert!(content_type.is_some_and(|ct| ct.starts_with("text/css")));
	assert!(String::from_utf8(body).unwrap().contains("City Clinic"));

	// without a tenant header an invalid token names no tenant
	let (status, _, _) = server.send(css_request(None, "garbage")).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_css_header_wins_over_token() {
	let server = TestServer::new().await;
	let first = server.register("First Clinic").await;
	let second = server.register("Second Clinic").await;

	let (status, _, body) = server.send(css_request(Some(&first.slug), &second.token)).await;
	assert_eq!(status, StatusCode::OK);
	let css = String::from_utf8(body).unwrap();
	assert!(css.contains("First Clinic"));
	assert!(!css.contains("Second Clinic"));
}

#[tokio::test]
async fn test_numeric_slug_resolves_to_its_tenant() {
	let server = TestServer::new().await;
	let first = server.register("First Clinic").await;
	assert_eq!(first.tn_id, TnId(1));

	let other = server
		.app
		.tenant_adapter
		.create_tenant(&CreateTenantData {
			slug: "1",
			name: "Digit Clinic",
			typ: TenantType::Clinic,
			email: "digit@example.com",
			phone: None,
		})
		.await
		.unwrap();
	assert_ne!(other, first.tn_id);

	let (status, css) = server.css("1").await;
	assert_eq!(status, StatusCode::OK);
	assert!(css.contains("Digit Clinic"));

	// ids still work for tags that are not slugs
	let (status, css) = server.css(&other.to_string()).await;
	assert_eq!(status, StatusCode::OK);
	assert!(css.contains("Digit Clinic"));

	// registration never hands out an all-digit slug
	let (status, body) = server
		.send_json(json_request(
			"POST",
			"/api/tenants/register",
			None,
			&json!({ "name": "Ward", "slug": "7", "type": "clinic", "email": "ward@example.com" }),
		))
		.await;
	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["tenant"]["slug"], "tenant-7");
}

/// Serves a single tenant whose stored record cannot be rendered
#[derive(Debug)]
struct BrokenStyleAdapter {
	unreadable: bool,
}

#[async_trait]
impl TenantAdapter for BrokenStyleAdapter {
	async fn create_tenant(&self, _data: &CreateTenantData<'_>) -> ClResult<TnId> {
		Err(Error::DbError)
	}

	async fn read_tenant(&self, _tn_id: TnId) -> ClResult<Tenant> {
		Err(Error::NotFound)
	}

	async fn read_tn_id(&self, slug: &str) -> ClResult<TnId> {
		if slug == "broken" { Ok(TnId(1)) } else { Err(Error::NotFound) }
	}

	async fn read_style_source(&self, _tn_id: TnId) -> ClResult<serde_json::Value> {
		if self.unreadable {
			Err(Error::DbError)
		} else {
			Ok(json!({ "name": "Broken", "uiCustomization": { "colors": { "primary": 7 } } }))
		}
	}

	async fn list_tenants(&self, _opts: &ListTenantOptions) -> ClResult<Vec<Tenant>> {
		Ok(Vec::new())
	}

	async fn update_tenant(&self, _tn_id: TnId, _data: &UpdateTenantData) -> ClResult<()> {
		Err(Error::NotFound)
	}

	async fn delete_tenant(&self, _tn_id: TnId) -> ClResult<()> {
		Err(Error::NotFound)
	}
}

#[tokio::test]
async fn test_css_fallback_on_failure() {
	for unreadable in [false, true] {
		let server = TestServer::with_adapter(Arc::new(BrokenStyleAdapter { unreadable }));

		let req =
			Request::get("/api/tenants/css").header("X-Tenant", "broken").body(Body::empty()).unwrap();
		let (status, content_type, body) = server.send(req).await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert!(content_type.is_some_and(|ct| ct.starts_with("text/css")));
		assert_eq!(String::from_utf8(body).unwrap(), FALLBACK_CSS);

		let (status, _) = server.css("nowhere").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
	}
}

#[tokio::test]
async fn test_config_requires_auth() {
	let server = TestServer::new().await;
	let tenant = server.register("City Clinic").await;

	let (status, body) = server.send_json(get_request("/api/tenants/config", None)).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["success"], false);

	let (status, _) =
		server.send_json(get_request("/api/tenants/config", Some("not-a-token"))).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);

	let (status, body) =
		server.send_json(get_request("/api/tenants/config", Some(&tenant.token))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["tenant"]["name"], "City Clinic");
}

#[tokio::test]
async fn test_patch_config() {
	let server = TestServer::new().await;
	let tenant = server.register("City Clinic").await;

	let (status, body) = server
		.send_json(json_request(
			"PATCH",
			"/api/tenants/config",
			Some(&tenant.token),
			&json!({
				"uiCustomization": {
					"colors": {"primary": "#ff0000"},
					"components": {"buttons": {"rounded": true, "size": "lg"}},
					"layouts": {"dashboard": {"sidebar": "right"}}
				},
				"customCSS": ".banner { display: none; }"
			}),
		))
		.await;
	assert_eq!(status, StatusCode::OK, "{}", body);
	assert_eq!(body["success"], true);
	assert_eq!(body["tenant"]["uiCustomization"]["colors"]["primary"], "#ff0000");
	assert_eq!(body["tenant"]["customCSS"], ".banner { display: none; }");

	let (status, css) = server.css(&tenant.slug).await;
	assert_eq!(status, StatusCode::OK);
	assert!(css.contains("--primary-color: #ff0000"));
	assert!(css.contains("--sidebar-position: right"));
	assert!(css.contains("/* Custom CSS Overrides */\n.banner { display: none; }"));
}

#[tokio::test]
async fn test_patch_config_replaces_and_resets() {
	let server = TestServer::new().await;
	let tenant = server.register("City Clinic").await;

	let patch = |body| json_request("PATCH", "/api/tenants/config", Some(&tenant.token), &body);

	server.send_json(patch(json!({"uiCustomization": {"colors": {"primary": "#ff0000"}}}))).await;
	let (_, body) =
		server.send_json(patch(json!({"uiCustomization": {"spacing": {"md": "2rem"}}}))).await;
	assert_eq!(body["tenant"]["uiCustomization"], json!({"spacing": {"md": "2rem"}}));

	// customCSS alone leaves the record alone
	let (_, body) = server.send_json(patch(json!({"customCSS": ".a {}"}))).await;
	assert_eq!(body["tenant"]["uiCustomization"], json!({"spacing": {"md": "2rem"}}));

	let (status, body) = server.send_json(patch(json!({"uiCustomization": null}))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["tenant"]["uiCustomization"], json!({}));

	let (_, css) = server.css(&tenant.slug).await;
	assert!(css.contains("--primary-color: #2563eb"));
	assert!(css.contains("--spacing-md: 1rem"));
}

#[tokio::test]
async fn test_patch_config_rejects_invalid_values() {
	let server = TestServer::new().await;
	let tenant = server.register("City Clinic").await;

	for ui in [
		json!({"colors": {"primary": "red; } body { display: none"}}),
		json!({"components": {"buttons": {"style": "sparkly"}}}),
		json!({"layouts": {"dashboard": {"sidebar": "center"}}}),
	] {
		let (status, body) = server
			.send_json(json_request(
				"PATCH",
				"/api/tenants/config",
				Some(&tenant.token),
				&json!({ "uiCustomization": ui }),
			))
			.await;
		assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", ui);
		assert_eq!(body["success"], false);
	}

	let (status, _) = server
		.send_json(json_request(
			"PATCH",
			"/api/tenants/config",
			Some(&tenant.token),
			&json!({ "customCSS": "</style><script>alert(1)</script>" }),
		))
		.await;
	assert_eq!(status, StatusCode::BAD_REQUEST);

	let (_, css) = server.css(&tenant.slug).await;
	assert!(css.contains("--primary-color: #2563eb"));
}

#[tokio::test]
async fn test_patch_config_requires_admin() {
	let server = TestServer::new().await;
	let tenant = server.register("City Clinic").await;
	let staff = server.token(tenant.tn_id, Some("staff"));

	let (status, _) = server
		.send_json(json_request(
			"PATCH",
			"/api/tenants/config",
			Some(&staff),
			&json!({"uiCustomization": {"colors": {"primary": "#ff0000"}}}),
		))
		.await;
	assert_eq!(status, StatusCode::FORBIDDEN);

	// reading is fine without the admin role
	let (status, _) = server.send_json(get_request("/api/tenants/config", Some(&staff))).await;
	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_token_bound_to_its_tenant() {
	let server = TestServer::new().await;
	let first = server.register("First Clinic").await;
	let second = server.register("Second Clinic").await;

	let req = Request::get("/api/tenants/config")
		.header("Authorization", format!("Bearer {}", first.token))
		.header("X-Tenant", second.slug.as_str())
		.body(Body::empty())
		.unwrap();
	let (status, _) = server.send_json(req).await;
	assert_eq!(status, StatusCode::FORBIDDEN);

	let req = Request::get("/api/tenants/config")
		.header("Authorization", format!("Bearer {}", server.super_admin_token()))
		.header("X-Tenant", second.slug.as_str())
		.body(Body::empty())
		.unwrap();
	let (status, body) = server.send_json(req).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["tenant"]["name"], "Second Clinic");
}

#[tokio::test]
async fn test_super_admin_routes() {
	let server = TestServer::new().await;
	let first = server.register("First Clinic").await;
	server.register("Second Clinic").await;
	let sadm = server.super_admin_token();

	let (status, _) = server.send_json(get_request("/api/tenants/all", Some(&first.token))).await;
	assert_eq!(status, StatusCode::FORBIDDEN);

	let (status, body) = server.send_json(get_request("/api/tenants/all", Some(&sadm))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["count"], 2);

	let uri = format!("/api/tenants/{}/status", first.tn_id);
	let (status, _) = server
		.send_json(json_request("PATCH", &uri, Some(&first.token), &json!({"status": "suspended"})))
		.await;
	assert_eq!(status, StatusCode::FORBIDDEN);

	let (status, body) = server
		.send_json(json_request("PATCH", &uri, Some(&sadm), &json!({"status": "suspended"})))
		.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["tenant"]["status"], "suspended");

	let (_, body) =
		server.send_json(get_request("/api/tenants/all?status=active", Some(&sadm))).await;
	assert_eq!(body["count"], 1);
	assert_eq!(body["tenants"][0]["name"], "Second Clinic");

	let (status, _) = server
		.send_json(json_request(
			"PATCH",
			&format!("/api/tenants/{}/status", TnId(999)),
			Some(&sadm),
			&json!({"status": "active"}),
		))
		.await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

// vim: ts=4
