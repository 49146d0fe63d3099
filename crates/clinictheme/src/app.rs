//! App builder - constructs and runs the clinictheme server

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;
use crate::tenant_adapter::TenantAdapter;
use clinictheme_style::{CssGenerator, ValueValidator};

pub use clinictheme_core::app::{App, AppBuilderOpts, AppState, VERSION};

pub struct AppBuilder {
	opts: AppBuilderOpts,
	tenant_adapter: Option<Arc<dyn TenantAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// May already be installed by an earlier builder in this process
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:3000".into(),
				jwt_secret: "".into(),
				token_expire: 8,
				allow_registration: true,
			},
			tenant_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	pub fn jwt_secret(&mut self, jwt_secret: impl Into<Box<str>>) -> &mut Self {
		self.opts.jwt_secret = jwt_secret.into();
		self
	}

	/// Access token lifetime in hours
	pub fn token_expire(&mut self, hours: u64) -> &mut Self {
		self.opts.token_expire = hours;
		self
	}

	pub fn allow_registration(&mut self, allow: bool) -> &mut Self {
		self.opts.allow_registration = allow;
		self
	}

	// Adapters
	pub fn tenant_adapter(&mut self, tenant_adapter: Arc<dyn TenantAdapter>) -> &mut Self {
		self.tenant_adapter = Some(tenant_adapter);
		self
	}

	pub fn build(self) -> ClResult<App> {
		let Some(tenant_adapter) = self.tenant_adapter else {
			error!("FATAL: No tenant adapter configured");
			return Err(Error::ConfigError("No tenant adapter configured".into()));
		};
		if self.opts.jwt_secret.trim().is_empty() {
			error!("FATAL: No JWT secret configured");
			return Err(Error::ConfigError("No JWT secret configured".into()));
		}

		Ok(Arc::new(AppState {
			opts: self.opts,
			css: CssGenerator::new()?,
			validator: ValueValidator::new()?,
			tenant_adapter,
		}))
	}

	pub async fn run(self) -> ClResult<()> {
		info!("clinictheme V{}", VERSION);

		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		if !app.opts.allow_registration {
			info!("Tenant registration is disabled");
		}
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
