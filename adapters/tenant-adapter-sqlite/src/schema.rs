//! Database schema initialization

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Tenants
	//*********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS tenants (
		tn_id integer PRIMARY KEY AUTOINCREMENT,
		slug text NOT NULL,
		name text NOT NULL,
		type text NOT NULL DEFAULT 'clinic',
		email text NOT NULL,
		phone text,
		status text NOT NULL DEFAULT 'active',
		ui_customization json NOT NULL DEFAULT '{}',
		custom_css text,
		created_at datetime DEFAULT (unixepoch()),
		updated_at datetime DEFAULT (unixepoch())
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_tenants_slug ON tenants(slug)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
