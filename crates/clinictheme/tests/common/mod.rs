//! Shared setup for the server integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use clinictheme::roles;
use clinictheme::tenant_adapter::TenantAdapter;
use clinictheme::token::generate_access_token;
use clinictheme::types::TnId;
use clinictheme::{App, AppBuilder};
use clinictheme_tenant_adapter_sqlite::TenantAdapterSqlite;

pub const JWT_SECRET: &str = "test-secret";

pub struct TestServer {
	pub app: App,
	pub router: Router,
	_dir: Option<TempDir>,
}

pub struct Registered {
	pub tn_id: TnId,
	pub slug: String,
	pub token: String,
}

impl TestServer {
	pub async fn new() -> Self {
		Self::with_registration(true).await
	}

	pub async fn with_registration(allow: bool) -> Self {
		let dir = TempDir::new().expect("Failed to create temp directory");
		let adapter = TenantAdapterSqlite::new(dir.path()).await.expect("Failed to create adapter");
		let mut server = Self::build(Arc::new(adapter), allow);
		server._dir = Some(dir);
		server
	}

	/// Server over an arbitrary tenant adapter
	pub fn with_adapter(adapter: Arc<dyn TenantAdapter>) -> Self {
		Self::build(adapter, false)
	}

	fn build(adapter: Arc<dyn TenantAdapter>, allow: bool) -> Self {
		let mut builder = AppBuilder::new();
		builder.jwt_secret(JWT_SECRET).allow_registration(allow).tenant_adapter(adapter);
		let app = builder.build().expect("Failed to build app");
		let router = clinictheme::routes::init(app.clone());

		Self { app, router, _dir: None }
	}

	pub async fn send(&self, req: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
		let res = self.router.clone().oneshot(req).await.expect("request failed");
		let status = res.status();
		let content_type = res
			.headers()
			.get(header::CONTENT_TYPE)
			.and_then(|h| h.to_str().ok())
			.map(str::to_string);
		let body = res.into_body().collect().await.expect("body").to_bytes().to_vec();
		(status, content_type, body)
	}

	pub async fn send_json(&self, req: Request<Body>) -> (StatusCode, Value) {
		let (status, _, body) = self.send(req).await;
		(status, serde_json::from_slice(&body).unwrap_or(Value::Null))
	}

	pub async fn register(&self, name: &str) -> Registered {
		let (status, body) = self
			.send_json(json_request(
				"POST",
				"/api/tenants/register",
				None,
				&json!({ "name": name, "type": "clinic", "email": "admin@example.com" }),
			))
			.await;
		assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

		Registered {
			tn_id: TnId(body["tenant"]["id"].as_u64().expect("tenant id") as u32),
			slug: body["tenant"]["slug"].as_str().expect("slug").to_string(),
			token: body["token"].as_str().expect("token").to_string(),
		}
	}

	pub fn token(&self, tn_id: TnId, roles: Option<&str>) -> String {
		generate_access_token(JWT_SECRET, tn_id, roles, 1).expect("token").to_string()
	}

	pub fn super_admin_token(&self) -> String {
		self.token(TnId(0), Some(roles::SADM))
	}

	pub async fn css(&self, tenant: &str) -> (StatusCode, String) {
		let req = Request::get("/api/tenants/css")
			.header("X-Tenant", tenant)
			.body(Body::empty())
			.expect("request");
		let (status, content_type, body) = self.send(req).await;
		if status.is_success() {
			assert!(content_type.is_some_and(|ct| ct.starts_with("text/css")));
		}
		(status, String::from_utf8(body).expect("utf-8"))
	}
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
	let mut builder = Request::builder()
		.method(method)
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json");
	if let Some(token) = token {
		builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
	}
	builder.body(Body::from(body.to_string())).expect("request")
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
	let mut builder = Request::get(uri);
	if let Some(token) = token {
		builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
	}
	builder.body(Body::empty()).expect("request")
}

// vim: ts=4
