use std::{env, path, sync::Arc};

use clinictheme::AppBuilder;
use clinictheme::error::ClResult;
use clinictheme_tenant_adapter_sqlite::TenantAdapterSqlite;

pub struct Config {
	pub listen: String,
	pub db_dir: path::PathBuf,
	pub jwt_secret: String,
	pub allow_registration: bool,
}

impl Config {
	fn from_env() -> Self {
		Config {
			listen: env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
			db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string())),
			jwt_secret: env::var("JWT_SECRET").unwrap_or_default(),
			allow_registration: env::var("ALLOW_REGISTRATION")
				.map(|v| !matches!(v.as_str(), "0" | "false" | "no" | "off"))
				.unwrap_or(true),
		}
	}
}

#[tokio::main]
async fn main() -> ClResult<()> {
	let config = Config::from_env();

	let mut builder = AppBuilder::new();
	let tenant_adapter = Arc::new(TenantAdapterSqlite::new(&config.db_dir).await?);
	builder
		.listen(config.listen)
		.jwt_secret(config.jwt_secret)
		.allow_registration(config.allow_registration)
		.tenant_adapter(tenant_adapter);
	builder.run().await
}

// vim: ts=4
