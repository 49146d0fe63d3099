//! App state type

use std::sync::Arc;

use clinictheme_style::{CssGenerator, ValueValidator};
use clinictheme_types::tenant_adapter::TenantAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub css: CssGenerator,
	pub validator: ValueValidator,

	pub tenant_adapter: Arc<dyn TenantAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub jwt_secret: Box<str>,
	/// Access token lifetime in hours
	pub token_expire: u64,
	/// Public tenant self-registration
	pub allow_registration: bool,
}

// vim: ts=4
