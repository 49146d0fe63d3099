//! HTTP client for the tenant config endpoints

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::{Client, connect::HttpConnector};
use hyper_util::rt::TokioExecutor;
use serde::Deserialize;

use clinictheme_types::tenant_adapter::TenantStyle;

use crate::customizer::{ConfigClient, ConfigUpdate};
use crate::prelude::*;

pub const TENANT_HEADER: &str = "X-Tenant";

#[derive(Debug, Default, Deserialize)]
struct ConfigResponse {
	#[serde(default)]
	success: bool,
	tenant: Option<TenantStyle>,
	message: Option<String>,
}

pub struct HttpConfigClient {
	base_url: String,
	token: String,
	tenant: Option<String>,
	client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl std::fmt::Debug for HttpConfigClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HttpConfigClient")
			.field("base_url", &self.base_url)
			.field("tenant", &self.tenant)
			.finish_non_exhaustive()
	}
}

impl HttpConfigClient {
	/// `base_url` is the server root, e.g. `https://clinic.example.com`
	pub fn new(base_url: &str, token: &str) -> ClResult<Self> {
		let builder = match HttpsConnectorBuilder::new().with_native_roots() {
			Ok(builder) => builder,
			Err(err) => {
				warn!("No native root certificates ({}), using bundled roots", err);
				HttpsConnectorBuilder::new().with_webpki_roots()
			}
		};
		let connector = builder.https_or_http().enable_http1().build();
		let client = Client::builder(TokioExecutor::new()).build(connector);

		Ok(Self {
			base_url: base_url.trim_end_matches('/').to_string(),
			token: token.to_string(),
			tenant: None,
			client,
		})
	}

	/// Address a tenant explicitly instead of the token's tenant
	pub fn with_tenant(mut self, tenant: &str) -> Self {
		self.tenant = Some(tenant.to_string());
		self
	}

	async fn request(
		&self,
		method: Method,
		path: &str,
		body: Option<Vec<u8>>,
	) -> ClResult<TenantStyle> {
		let mut builder = Request::builder()
			.method(method)
			.uri(format!("{}{}", self.base_url, path))
			.header("Authorization", format!("Bearer {}", self.token))
			.header("Accept", "application/json");
		if let Some(tenant) = &self.tenant {
			builder = builder.header(TENANT_HEADER, tenant.as_str());
		}
		if body.is_some() {
			builder = builder.header("Content-Type", "application/json");
		}
		let request = builder
			.body(Full::new(Bytes::from(body.unwrap_or_default())))
			.map_err(|e| Error::Internal(format!("Request build error: {}", e)))?;

		let response = self
			.client
			.request(request)
			.await
			.map_err(|e| Error::NetworkError(format!("Request failed: {}", e)))?;
		let status = response.status();
		let body = response
			.into_body()
			.collect()
			.await
			.map_err(|e| Error::NetworkError(format!("Response read error: {}", e)))?
			.to_bytes();
		let res: ConfigResponse = match serde_json::from_slice(&body) {
			Ok(res) => res,
			Err(_) if !status.is_success() => ConfigResponse::default(),
			Err(err) => return Err(err.into()),
		};

		match status {
			s if s.is_success() && res.success => res.tenant.ok_or(Error::Parse),
			StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
			StatusCode::FORBIDDEN => Err(Error::PermissionDenied),
			StatusCode::NOT_FOUND => Err(Error::NotFound),
			StatusCode::BAD_REQUEST => {
				Err(Error::ValidationError(res.message.unwrap_or_else(|| "bad request".into())))
			}
			s => Err(Error::NetworkError(format!(
				"HTTP {}: {}",
				s,
				res.message.as_deref().unwrap_or("-")
			))),
		}
	}

	pub async fn fetch_config(&self) -> ClResult<TenantStyle> {
		self.request(Method::GET, "/api/tenants/config", None).await
	}
}

#[async_trait]
impl ConfigClient for HttpConfigClient {
	async fn update_config(&self, update: &ConfigUpdate) -> ClResult<TenantStyle> {
		let body = serde_json::to_vec(update)?;
		self.request(Method::PATCH, "/api/tenants/config", Some(body)).await
	}
}

// vim: ts=4
