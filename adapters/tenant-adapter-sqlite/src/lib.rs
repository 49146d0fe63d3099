//! SQLite tenant adapter
//!
//! Stores tenants in a single `tenant.db` file inside the configured
//! directory. The customization record is kept as JSON text.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use clinictheme_types::prelude::*;
use clinictheme_types::tenant_adapter::*;

mod schema;
mod tenant;
mod utils;

const DB_FILE: &str = "tenant.db";

#[derive(Debug)]
pub struct TenantAdapterSqlite {
	db: SqlitePool,
}

impl TenantAdapterSqlite {
	pub async fn new(dir: impl AsRef<Path>) -> ClResult<Self> {
		tokio::fs::create_dir_all(dir.as_ref()).await?;

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(dir.as_ref().join(DB_FILE))
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| error!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl TenantAdapter for TenantAdapterSqlite {
	async fn create_tenant(&self, data: &CreateTenantData<'_>) -> ClResult<TnId> {
		tenant::create(&self.db, data).await
	}

	async fn read_tenant(&self, tn_id: TnId) -> ClResult<Tenant> {
		tenant::read(&self.db, tn_id).await
	}

	async fn read_tn_id(&self, slug: &str) -> ClResult<TnId> {
		tenant::read_tn_id(&self.db, slug).await
	}

	async fn read_style_source(&self, tn_id: TnId) -> ClResult<serde_json::Value> {
		tenant::read_style_source(&self.db, tn_id).await
	}

	async fn list_tenants(&self, opts: &ListTenantOptions) -> ClResult<Vec<Tenant>> {
		tenant::list(&self.db, opts).await
	}

	async fn update_tenant(&self, tn_id: TnId, data: &UpdateTenantData) -> ClResult<()> {
		tenant::update(&self.db, tn_id, data).await
	}

	async fn delete_tenant(&self, tn_id: TnId) -> ClResult<()> {
		tenant::delete(&self.db, tn_id).await
	}
}

// vim: ts=4
