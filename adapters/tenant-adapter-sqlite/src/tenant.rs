//! Tenant operations

use serde_json::json;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use clinictheme_types::customization::TenantCustomization;
use clinictheme_types::prelude::*;
use clinictheme_types::tenant_adapter::*;

const TENANT_COLUMNS: &str = "tn_id, slug, name, type, email, phone, status, ui_customization, \
	custom_css, created_at, updated_at";

fn parse_customization(tn_id: TnId, json: &str) -> TenantCustomization {
	serde_json::from_str(json).unwrap_or_else(|err| {
		warn!("Tenant {} has an unreadable customization record: {}", tn_id, err);
		TenantCustomization::default()
	})
}

fn tenant_from_row(row: &SqliteRow) -> Result<Tenant, sqlx::Error> {
	let tn_id = TnId(row.try_get("tn_id")?);
	let typ: String = row.try_get("type")?;
	let status: String = row.try_get("status")?;
	let ui: String = row.try_get("ui_customization")?;

	Ok(Tenant {
		tn_id,
		slug: row.try_get::<String, _>("slug")?.into(),
		name: row.try_get::<String, _>("name")?.into(),
		typ: TenantType::parse(&typ).unwrap_or(TenantType::Clinic),
		email: row.try_get::<String, _>("email")?.into(),
		phone: row.try_get::<Option<String>, _>("phone")?.map(Into::into),
		status: TenantStatus::parse(&status).unwrap_or_default(),
		ui_customization: parse_customization(tn_id, &ui),
		custom_css: row.try_get::<Option<String>, _>("custom_css")?.map(Into::into),
		created_at: Timestamp(row.try_get("created_at")?),
		updated_at: Timestamp(row.try_get("updated_at")?),
	})
}

pub(crate) async fn create(db: &SqlitePool, data: &CreateTenantData<'_>) -> ClResult<TnId> {
	let res = sqlx::query_scalar::<_, u32>(
		"INSERT INTO tenants (slug, name, type, email, phone, status, ui_customization)
		VALUES (?, ?, ?, ?, ?, 'active', '{}') RETURNING tn_id",
	)
	.bind(data.slug)
	.bind(data.name)
	.bind(data.typ.as_str())
	.bind(data.email)
	.bind(data.phone)
	.fetch_one(db)
	.await;

	match res {
		Ok(tn_id) => Ok(TnId(tn_id)),
		Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
			Err(Error::Conflict(format!("slug already taken: {}", data.slug)))
		}
		Err(err) => Err(map_db_err(err)),
	}
}

pub(crate) async fn read(db: &SqlitePool, tn_id: TnId) -> ClResult<Tenant> {
	let row = sqlx::query(&format!("SELECT {} FROM tenants WHERE tn_id = ?", TENANT_COLUMNS))
		.bind(tn_id.0)
		.fetch_one(db)
		.await
		.map_err(map_db_err)?;

	tenant_from_row(&row).map_err(map_db_err)
}

pub(crate) async fn read_tn_id(db: &SqlitePool, slug: &str) -> ClResult<TnId> {
	sqlx::query_scalar::<_, u32>("SELECT tn_id FROM tenants WHERE slug = ?")
		.bind(slug)
		.fetch_one(db)
		.await
		.map(TnId)
		.map_err(map_db_err)
}

/// The stored customization JSON is passed on uninterpreted. Text that is not
/// JSON at all is passed on as a string.
pub(crate) async fn read_style_source(db: &SqlitePool, tn_id: TnId) -> ClResult<serde_json::Value> {
	let row = sqlx::query("SELECT name, ui_customization, custom_css FROM tenants WHERE tn_id = ?")
		.bind(tn_id.0)
		.fetch_one(db)
		.await
		.map_err(map_db_err)?;

	let name: String = row.try_get("name").map_err(map_db_err)?;
	let ui: String = row.try_get("ui_customization").map_err(map_db_err)?;
	let custom_css: Option<String> = row.try_get("custom_css").map_err(map_db_err)?;
	let ui = serde_json::from_str(&ui).unwrap_or(serde_json::Value::String(ui));

	Ok(json!({ "name": name, "uiCustomization": ui, "customCSS": custom_css }))
}

pub(crate) async fn list(db: &SqlitePool, opts: &ListTenantOptions) -> ClResult<Vec<Tenant>> {
	let mut query = sqlx::QueryBuilder::new(format!("SELECT {} FROM tenants", TENANT_COLUMNS));
	if let Some(status) = opts.status {
		query.push(" WHERE status = ").push_bind(status.as_str());
	}
	query.push(" ORDER BY tn_id");

	let rows = query.build().fetch_all(db).await.map_err(map_db_err)?;
	rows.iter().map(|row| tenant_from_row(row).map_err(map_db_err)).collect()
}

pub(crate) async fn update(db: &SqlitePool, tn_id: TnId, data: &UpdateTenantData) -> ClResult<()> {
	let mut query = sqlx::QueryBuilder::new("UPDATE tenants SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "name", &data.name, |v| v.as_str());
	has_updates = push_patch!(query, has_updates, "status", &data.status, |v| v.as_str());
	has_updates = push_patch!(query, has_updates, "custom_css", &data.custom_css, |v| v.as_str());

	// The customization record is never NULL, null resets it
	if !data.ui_customization.is_undefined() {
		let ui = match data.ui_customization.value() {
			Some(ui) => serde_json::to_string(ui)?,
			None => "{}".to_string(),
		};
		if has_updates {
			query.push(", ");
		}
		query.push("ui_customization=").push_bind(ui);
		has_updates = true;
	}

	if !has_updates {
		return Ok(());
	}

	query.push(", updated_at=unixepoch() WHERE tn_id=").push_bind(tn_id.0);

	let res = query.build().execute(db).await.map_err(map_db_err)?;
	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}

	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, tn_id: TnId) -> ClResult<()> {
	let res = sqlx::query("DELETE FROM tenants WHERE tn_id = ?")
		.bind(tn_id.0)
		.execute(db)
		.await
		.map_err(map_db_err)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}

	Ok(())
}

// vim: ts=4
