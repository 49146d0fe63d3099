//! `HttpConfigClient` against a running server

use std::sync::{Arc, Mutex};

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tempfile::TempDir;
use tokio::net::TcpListener;

use clinictheme::tenant_adapter::{CreateTenantData, TenantType};
use clinictheme::token::generate_access_token;
use clinictheme::types::TnId;
use clinictheme::{App, AppBuilder, roles};
use clinictheme_client::customizer::ConfigUpdate;
use clinictheme_client::{
	ConfigClient, CustomizerSession, HttpConfigClient, InMemoryStyleRoot, MemoryStorage,
	OperatorPrompt, StylingApplier,
};
use clinictheme_tenant_adapter_sqlite::TenantAdapterSqlite;
use clinictheme_types::error::Error;

const JWT_SECRET: &str = "client-secret";

struct Server {
	app: App,
	base_url: String,
	first: TnId,
	_dir: TempDir,
}

impl Server {
	fn token(&self, tn_id: TnId, roles: Option<&str>) -> String {
		generate_access_token(JWT_SECRET, tn_id, roles, 1).unwrap().to_string()
	}

	fn client(&self, token: &str) -> HttpConfigClient {
		HttpConfigClient::new(&self.base_url, token).unwrap()
	}
}

async fn listen(router: Router) -> String {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move { axum::serve(listener, router).await });
	format!("http://{}", addr)
}

async fn start() -> Server {
	let dir = TempDir::new().unwrap();
	let adapter = TenantAdapterSqlite::new(dir.path()).await.unwrap();

	let mut builder = AppBuilder::new();
	builder.jwt_secret(JWT_SECRET).tenant_adapter(Arc::new(adapter));
	let app = builder.build().unwrap();

	let mut ids = Vec::new();
	for (slug, name) in [("city-clinic", "City Clinic"), ("second-clinic", "Second Clinic")] {
		let tn_id = app
			.tenant_adapter
			.create_tenant(&CreateTenantData {
				slug,
				name,
				typ: TenantType::Clinic,
				email: "admin@example.com",
				phone: None,
			})
			.await
			.unwrap();
		ids.push(tn_id);
	}

	let base_url = listen(clinictheme::routes::init(app.clone())).await;
	Server { app, base_url, first: ids[0], _dir: dir }
}

fn update(value: serde_json::Value) -> ConfigUpdate {
	ConfigUpdate { ui_customization: serde_json::from_value(value).unwrap() }
}

#[tokio::test]
async fn test_fetch_and_update() {
	let server = start().await;
	let client = server.client(&server.token(server.first, Some(roles::ADMIN)));

	let tenant = client.fetch_config().await.unwrap();
	assert_eq!(tenant.name.as_deref(), Some("City Clinic"));
	assert!(tenant.customization().is_empty());

	let updated =
		client.update_config(&update(json!({"colors": {"primary": "#ff0000"}}))).await.unwrap();
	assert_eq!(
		updated.customization().colors.as_ref().and_then(|c| c.primary.as_deref()),
		Some("#ff0000")
	);

	let stored = server.app.tenant_adapter.read_tenant(server.first).await.unwrap();
	assert_eq!(
		stored.ui_customization.colors.as_ref().and_then(|c| c.primary.as_deref()),
		Some("#ff0000")
	);
}

#[tokio::test]
async fn test_explicit_tenant() {
	let server = start().await;
	let sadm = server.token(TnId(0), Some(roles::SADM));

	let tenant = server.client(&sadm).with_tenant("second-clinic").fetch_config().await.unwrap();
	assert_eq!(tenant.name.as_deref(), Some("Second Clinic"));

	let admin = server.token(server.first, Some(roles::ADMIN));
	let res = server.client(&admin).with_tenant("second-clinic").fetch_config().await;
	assert!(matches!(res, Err(Error::PermissionDenied)));

	let res = server.client(&sadm).with_tenant("nowhere").fetch_config().await;
	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_error_statuses() {
	let server = start().await;

	let res = server.client("garbage").fetch_config().await;
	assert!(matches!(res, Err(Error::Unauthorized)));

	let admin = server.token(server.first, Some(roles::ADMIN));
	let res = server
		.client(&admin)
		.update_config(&update(json!({"colors": {"primary": "red; }"}})))
		.await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	// plain-text 404 from a path the server does not serve
	let client = HttpConfigClient::new(&format!("{}/missing", server.base_url), &admin).unwrap();
	assert!(matches!(client.fetch_config().await, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_unsuccessful_ok_response() {
	let router = Router::new().route(
		"/api/tenants/config",
		get(|| async { Json(json!({"success": false, "message": "maintenance"})) }),
	);
	let base_url = listen(router).await;

	let client = HttpConfigClient::new(&base_url, "token").unwrap();
	let res = client.fetch_config().await;
	assert!(matches!(res, Err(Error::NetworkError(ref msg)) if msg.contains("maintenance")));
}

#[derive(Default)]
struct Notes(Mutex<Vec<String>>);

impl OperatorPrompt for Notes {
	fn confirm(&self, _message: &str) -> bool {
		true
	}

	fn notify(&self, message: &str) {
		self.0.lock().unwrap().push(message.to_string());
	}
}

#[tokio::test]
async fn test_session_save_rejected_for_staff() {
	let server = start().await;
	let client = Arc::new(server.client(&server.token(server.first, Some("staff"))));
	let tenant = client.fetch_config().await.unwrap();

	let root = Arc::new(InMemoryStyleRoot::new());
	let applier = Arc::new(StylingApplier::new(root, Arc::new(MemoryStorage::new())));
	let notes = Arc::new(Notes::default());
	let mut session = CustomizerSession::new(tenant, applier, client, notes.clone());
	session.handle_path_change("colors.primary", json!("#ff0000")).unwrap();

	assert!(matches!(session.handle_save().await, Err(Error::PermissionDenied)));
	assert!(session.is_dirty());
	assert_eq!(
		notes.0.lock().unwrap().as_slice(),
		["Failed to save customization. Please try again.".to_string()]
	);

	let stored = server.app.tenant_adapter.read_tenant(server.first).await.unwrap();
	assert!(stored.ui_customization.is_empty());
}

// vim: ts=4
